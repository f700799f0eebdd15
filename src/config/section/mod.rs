//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docs.toml`:
//!
//! | Module    | TOML Section      | Purpose                                  |
//! |-----------|-------------------|------------------------------------------|
//! | `project` | `[project]`       | Name, copyright, version, release        |
//! | `source`  | `[source]`        | Suffix, root document, templates, excludes |
//! | `html`    | `[html]`          | Static paths, footer, optional HTML keys |
//! | `theme`   | `[html.theme]`    | Theme selection with typed options       |
//! | `sidebar` | `[html.sidebars]` | Sidebar widgets per page selector        |

mod html;
mod project;
pub mod sidebar;
mod source;
pub mod theme;

pub use html::HtmlConfig;
pub use project::ProjectConfig;
pub use sidebar::{SidebarLayout, SidebarWidget};
pub use source::SourceConfig;
pub use theme::{
    AlabasterOptions, GithubButtonType, ReadTheDocsOptions, ThemeConfig, ThemeKind, ThemePackage,
};

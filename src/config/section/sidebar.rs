//! `[html.sidebars]` layout: page selector → ordered sidebar widgets.
//!
//! # Example
//!
//! ```toml
//! [html.sidebars]
//! "index" = ["about.html", "searchbox.html"]
//! "**" = ["about.html", "navigation.html", "relations.html", "searchbox.html"]
//! ```
//!
//! Resolution: an exact selector match wins, otherwise the first glob
//! selector (in declaration order) matching the page name.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::validate_glob;

use super::HtmlConfig;

/// Ordered mapping of page selector to widgets.
pub type SidebarLayout = IndexMap<String, Vec<SidebarWidget>>;

/// A sidebar widget, identified by its template file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SidebarWidget {
    About,
    Navigation,
    Relations,
    SearchBox,
    LocalToc,
    GlobalToc,
    SourceLink,
    /// Project-provided template found through `source.templates`.
    Custom(String),
}

impl SidebarWidget {
    /// Template file name the engine renders for this widget.
    pub fn template(&self) -> &str {
        match self {
            Self::About => "about.html",
            Self::Navigation => "navigation.html",
            Self::Relations => "relations.html",
            Self::SearchBox => "searchbox.html",
            Self::LocalToc => "localtoc.html",
            Self::GlobalToc => "globaltoc.html",
            Self::SourceLink => "sourcelink.html",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for SidebarWidget {
    fn from(name: String) -> Self {
        match name.as_str() {
            "about.html" => Self::About,
            "navigation.html" => Self::Navigation,
            "relations.html" => Self::Relations,
            "searchbox.html" => Self::SearchBox,
            "localtoc.html" => Self::LocalToc,
            "globaltoc.html" => Self::GlobalToc,
            "sourcelink.html" => Self::SourceLink,
            _ => Self::Custom(name),
        }
    }
}

impl From<SidebarWidget> for String {
    fn from(widget: SidebarWidget) -> Self {
        widget.template().to_owned()
    }
}

impl fmt::Display for SidebarWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

/// Layout applied to every page.
pub fn default_layout() -> SidebarLayout {
    IndexMap::from([(
        "**".to_string(),
        vec![
            SidebarWidget::About,
            SidebarWidget::Navigation,
            SidebarWidget::Relations,
            SidebarWidget::SearchBox,
        ],
    )])
}

/// Resolve the widgets shown next to `page` (a document name like `config/image`).
pub fn resolve<'a>(layout: &'a SidebarLayout, page: &str) -> Option<&'a [SidebarWidget]> {
    if let Some(widgets) = layout.get(page) {
        return Some(widgets.as_slice());
    }
    layout
        .iter()
        .find(|(selector, _)| glob::Pattern::new(selector).is_ok_and(|p| p.matches(page)))
        .map(|(_, widgets)| widgets.as_slice())
}

/// Validate sidebar selectors and widget lists.
///
/// # Checks
/// - every selector is a valid glob
/// - no selector maps to an empty widget list
/// - custom widget names are non-empty
pub fn validate(layout: &SidebarLayout, diag: &mut ConfigDiagnostics) {
    let field = HtmlConfig::FIELDS.sidebars;
    for (selector, widgets) in layout {
        validate_glob(field, selector, diag);

        if widgets.is_empty() {
            diag.error_with_hint(
                field,
                format!("selector '{selector}' lists no widgets"),
                "list at least one widget or remove the selector",
            );
        }

        if widgets
            .iter()
            .any(|w| matches!(w, SidebarWidget::Custom(name) if name.trim().is_empty()))
        {
            diag.error(field, format!("selector '{selector}' has an empty widget name"));
        }
    }
}

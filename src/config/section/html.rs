//! `[html]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [html]
//! static_paths = ["_static"]
//! show_copyright = false
//! help_basename = "dobidoc"
//!
//! [html.theme]
//! name = "alabaster"
//!
//! [html.sidebars]
//! "**" = ["about.html", "navigation.html", "relations.html", "searchbox.html"]
//! ```
//!
//! Optional keys left unset fall back to the rendering engine's defaults.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;
use crate::config::util::validate_path_list;

use super::sidebar::{self, SidebarLayout};
use super::theme::ThemeConfig;

/// HTML output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Directories copied verbatim into the output, in order.
    pub static_paths: Vec<String>,

    /// Show the copyright line in the footer.
    pub show_copyright: bool,

    /// Output basename for the HTML help builder.
    pub help_basename: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    /// `strftime` format of the "last updated" footer line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_fmt: Option<String>,

    /// Suffix of generated pages (e.g., ".html").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_suffix: Option<String>,

    /// Language of the search index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_indices: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_index: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_index: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_sourcelink: Option<bool>,

    /// Show the "Created using <engine>" footer credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_engine_credit: Option<bool>,

    /// Selected theme and its options.
    pub theme: ThemeConfig,

    /// Sidebar widgets per page selector.
    pub sidebars: SidebarLayout,
}

config_fields!(HtmlConfig => HtmlConfigFields, "html" {
    static_paths, show_copyright, help_basename, title, short_title, logo,
    favicon, last_updated_fmt, file_suffix, search_language, domain_indices,
    use_index, split_index, show_sourcelink, show_engine_credit, theme, sidebars
});

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            static_paths: vec!["_static".into()],
            show_copyright: false,
            help_basename: "dobidoc".into(),
            title: None,
            short_title: None,
            logo: None,
            favicon: None,
            last_updated_fmt: None,
            file_suffix: None,
            search_language: None,
            domain_indices: None,
            use_index: None,
            split_index: None,
            show_sourcelink: None,
            show_engine_credit: None,
            theme: ThemeConfig::default(),
            sidebars: sidebar::default_layout(),
        }
    }
}

impl HtmlConfig {
    /// Validate HTML settings.
    ///
    /// # Checks
    /// - `static_paths` entries are non-empty
    /// - `help_basename` is non-empty
    /// - optional strings, when set, are non-empty
    /// - `file_suffix`, when set, starts with `.`
    /// - theme options and sidebar layout
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_path_list(Self::FIELDS.static_paths, &self.static_paths, diag);

        if self.help_basename.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.help_basename,
                "must not be empty",
                "e.g.: \"dobidoc\"",
            );
        }

        for (field, value) in [
            (Self::FIELDS.title, &self.title),
            (Self::FIELDS.short_title, &self.short_title),
            (Self::FIELDS.logo, &self.logo),
            (Self::FIELDS.favicon, &self.favicon),
            (Self::FIELDS.last_updated_fmt, &self.last_updated_fmt),
            (Self::FIELDS.search_language, &self.search_language),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                diag.error_with_hint(
                    field,
                    "must not be empty when set",
                    "remove the field to use the engine default",
                );
            }
        }

        if let Some(suffix) = &self.file_suffix
            && !suffix.starts_with('.')
        {
            diag.error_with_hint(
                Self::FIELDS.file_suffix,
                format!("invalid page suffix '{suffix}'"),
                "e.g.: \".html\"",
            );
        }

        self.theme.validate(diag);
        sidebar::validate(&self.sidebars, diag);
    }
}

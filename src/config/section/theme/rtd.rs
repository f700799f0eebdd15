//! Options of the externally supplied `sphinx_rtd_theme`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Typed `sphinx_rtd_theme` options. Unknown keys are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadTheDocsOptions {
    /// Collapse navigation entries of inactive pages.
    pub collapse_navigation: bool,

    /// Keep the navigation visible while scrolling.
    pub sticky_navigation: bool,

    /// Maximum toctree depth; `-1` means unlimited.
    pub navigation_depth: i32,

    /// Show only page titles in the navigation.
    pub titles_only: bool,

    /// Show the version under the project name.
    pub display_version: bool,

    /// Navigation header background color (`#rgb` or `#rrggbb`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_nav_header_background: Option<String>,
}

config_fields!(ReadTheDocsOptions => ReadTheDocsOptionsFields, "html.theme" {
    collapse_navigation, sticky_navigation, navigation_depth,
    titles_only, display_version, style_nav_header_background
});

impl Default for ReadTheDocsOptions {
    fn default() -> Self {
        Self {
            collapse_navigation: true,
            sticky_navigation: true,
            navigation_depth: 4,
            titles_only: false,
            display_version: true,
            style_nav_header_background: None,
        }
    }
}

impl ReadTheDocsOptions {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.navigation_depth == 0 || self.navigation_depth < -1 {
            diag.error_with_hint(
                Self::FIELDS.navigation_depth,
                format!("invalid depth {}", self.navigation_depth),
                "use a positive depth, or -1 for unlimited",
            );
        }

        if let Some(color) = &self.style_nav_header_background
            && !RE_HEX_COLOR.is_match(color)
        {
            diag.error_with_hint(
                Self::FIELDS.style_nav_header_background,
                format!("invalid color '{color}'"),
                "use a hex color, e.g.: \"#2980b9\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(options: &ReadTheDocsOptions) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        options.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(!check(&ReadTheDocsOptions::default()).has_errors());
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result: Result<ReadTheDocsOptions, _> = toml::from_str("github_user = \"dnephin\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_navigation_depth() {
        for (depth, ok) in [(-1, true), (1, true), (0, false), (-2, false)] {
            let options = ReadTheDocsOptions {
                navigation_depth: depth,
                ..Default::default()
            };
            assert_eq!(!check(&options).has_errors(), ok, "depth {depth}");
        }
    }

    #[test]
    fn test_header_color() {
        let options = ReadTheDocsOptions {
            style_nav_header_background: Some("#2980b9".into()),
            ..Default::default()
        };
        assert!(!check(&options).has_errors());

        let options = ReadTheDocsOptions {
            style_nav_header_background: Some("blue".into()),
            ..Default::default()
        };
        assert!(check(&options).has_error_for(ReadTheDocsOptions::FIELDS.style_nav_header_background));
    }
}

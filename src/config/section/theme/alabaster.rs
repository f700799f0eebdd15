//! Options of the bundled `alabaster` theme.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

/// Typed `alabaster` options. Unknown keys are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlabasterOptions {
    /// Tagline shown under the logo.
    pub description: String,

    /// GitHub account used by the button and banner.
    pub github_user: String,

    /// GitHub repository used by the button and banner.
    pub github_repo: String,

    /// Show the GitHub button in the sidebar.
    pub github_button: bool,

    /// Kind of GitHub button.
    pub github_type: GithubButtonType,

    /// Show the "Fork me on GitHub" banner.
    pub github_banner: bool,

    /// Logo path relative to a static directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Show the project name next to the logo.
    pub logo_name: bool,

    /// Keep the sidebar fixed while scrolling.
    pub fixed_sidebar: bool,

    /// Show the "Powered by" footer line.
    pub show_powered_by: bool,
}

config_fields!(AlabasterOptions => AlabasterOptionsFields, "html.theme" {
    description, github_user, github_repo, github_button, github_type,
    github_banner, logo, logo_name, fixed_sidebar, show_powered_by
});

impl Default for AlabasterOptions {
    fn default() -> Self {
        Self {
            description: "A build automation tool for Docker applications".into(),
            github_user: "dnephin".into(),
            github_repo: "dobi".into(),
            github_button: true,
            github_type: GithubButtonType::Star,
            github_banner: true,
            logo: None,
            logo_name: false,
            fixed_sidebar: false,
            show_powered_by: true,
        }
    }
}

/// GitHub button kinds rendered by alabaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GithubButtonType {
    #[default]
    Watch,
    Star,
    Fork,
    Follow,
}

impl AlabasterOptions {
    /// The button and banner both link to `github_user/github_repo`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && logo.trim().is_empty()
        {
            diag.error(Self::FIELDS.logo, "must not be empty when set");
        }

        if !(self.github_button || self.github_banner) {
            return;
        }
        for (field, value) in [
            (Self::FIELDS.github_user, &self.github_user),
            (Self::FIELDS.github_repo, &self.github_repo),
        ] {
            if value.trim().is_empty() {
                diag.error_with_hint(
                    field,
                    "required when github_button or github_banner is enabled",
                    "set it, or disable github_button and github_banner",
                );
            }
        }
    }
}

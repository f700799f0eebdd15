//! `[project]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [project]
//! name = "dobi"
//! copyright = "2016, Daniel Nephin"
//! author = "Daniel Nephin"
//! version = "0.3-dev"
//! release = "0.3-dev"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

/// Project metadata shown by the rendering engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name.
    pub name: String,

    /// Copyright notice (author and year).
    pub copyright: String,

    /// Author name.
    pub author: String,

    /// Short version (e.g., "0.3").
    pub version: String,

    /// Full release, may carry pre-release qualifiers (e.g., "0.3-dev").
    pub release: String,
}

config_fields!(ProjectConfig => ProjectConfigFields, "project" {
    name, copyright, author, version, release
});

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "dobi".into(),
            copyright: "2016, Daniel Nephin".into(),
            author: "Daniel Nephin".into(),
            version: "0.3-dev".into(),
            release: "0.3-dev".into(),
        }
    }
}

impl ProjectConfig {
    /// Validate project metadata.
    ///
    /// # Checks
    /// - `name`, `version` and `release` are non-empty
    /// - `release` should extend `version` (warning only)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.name, &self.name),
            (Self::FIELDS.version, &self.version),
            (Self::FIELDS.release, &self.release),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        if !self.version.is_empty()
            && !self.release.is_empty()
            && !self.release.starts_with(&self.version)
        {
            diag.warn(
                Self::FIELDS.release,
                format!(
                    "release '{}' does not start with version '{}'",
                    self.release, self.version
                ),
            );
        }
    }
}

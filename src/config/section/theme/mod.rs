//! `[html.theme]` section configuration.
//!
//! The theme is a tagged variant: `name` selects the theme and every other
//! key is an option of that theme only. `name` defaults to `alabaster`.
//! Unknown theme names and unknown options are parse errors.
//!
//! # Example
//!
//! ```toml
//! [html.theme]
//! name = "alabaster"
//! description = "A build automation tool for Docker applications"
//! github_user = "dnephin"
//! github_repo = "dobi"
//! ```
//!
//! ```toml
//! [html.theme]
//! name = "sphinx_rtd_theme"
//! navigation_depth = 3
//! ```

mod alabaster;
mod rtd;

pub use alabaster::{AlabasterOptions, GithubButtonType};
pub use rtd::ReadTheDocsOptions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, ConfigError};

/// Statically known set of supported themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    Alabaster,
    ReadTheDocs,
}

/// Where a theme's templates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePackage {
    /// Self-contained package shipped alongside the engine.
    Bundled,
    /// Separately installed package.
    External,
}

impl ThemeKind {
    pub const ALL: [Self; 2] = [Self::Alabaster, Self::ReadTheDocs];

    /// Name the rendering engine knows the theme by.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alabaster => "alabaster",
            Self::ReadTheDocs => "sphinx_rtd_theme",
        }
    }

    pub const fn package(self) -> ThemePackage {
        match self {
            Self::Alabaster => ThemePackage::Bundled,
            Self::ReadTheDocs => ThemePackage::External,
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.name()).collect()
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alabaster" => Ok(Self::Alabaster),
            "sphinx_rtd_theme" | "rtd" => Ok(Self::ReadTheDocs),
            other => Err(ConfigError::UnsupportedTheme(other.to_owned())),
        }
    }
}

/// Selected theme together with its typed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", try_from = "toml::Table")]
pub enum ThemeConfig {
    #[serde(rename = "alabaster")]
    Alabaster(AlabasterOptions),
    #[serde(rename = "sphinx_rtd_theme", alias = "rtd")]
    ReadTheDocs(ReadTheDocsOptions),
}

/// Deserialization shape of [`ThemeConfig`] once `name` is present.
#[derive(Deserialize)]
#[serde(tag = "name")]
enum TaggedTheme {
    #[serde(rename = "alabaster")]
    Alabaster(AlabasterOptions),
    #[serde(rename = "sphinx_rtd_theme", alias = "rtd")]
    ReadTheDocs(ReadTheDocsOptions),
}

impl TryFrom<toml::Table> for ThemeConfig {
    type Error = toml::de::Error;

    fn try_from(mut table: toml::Table) -> Result<Self, Self::Error> {
        if !table.contains_key("name") {
            table.insert("name".into(), ThemeKind::Alabaster.name().into());
        }

        Ok(match toml::Value::Table(table).try_into()? {
            TaggedTheme::Alabaster(options) => Self::Alabaster(options),
            TaggedTheme::ReadTheDocs(options) => Self::ReadTheDocs(options),
        })
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::Alabaster(AlabasterOptions::default())
    }
}

impl ThemeConfig {
    /// Theme with the default options of `kind`.
    pub fn default_for(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Alabaster => Self::Alabaster(AlabasterOptions::default()),
            ThemeKind::ReadTheDocs => Self::ReadTheDocs(ReadTheDocsOptions::default()),
        }
    }

    pub const fn kind(&self) -> ThemeKind {
        match self {
            Self::Alabaster(_) => ThemeKind::Alabaster,
            Self::ReadTheDocs(_) => ThemeKind::ReadTheDocs,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Alabaster(options) => options.validate(diag),
            Self::ReadTheDocs(options) => options.validate(diag),
        }
    }
}

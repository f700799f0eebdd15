//! Documentation build configuration (`docs.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── html       # [html]
//! │   ├── project    # [project]
//! │   ├── sidebar    # [html.sidebars]
//! │   ├── source     # [source]
//! │   └── theme/     # [html.theme] (alabaster, sphinx_rtd_theme)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── profile        # Named presets
//! └── mod.rs         # BuildConfiguration (this file)
//! ```
//!
//! # Loading
//!
//! Literal defaults → `docs.toml` overlay (if found) → profile → theme
//! override → validation. The result is never mutated afterwards; share it
//! as `Arc<BuildConfiguration>` when more than one consumer needs it.

mod profile;
pub mod section;
pub mod types;
mod util;

pub use profile::Profile;
pub use section::{
    HtmlConfig, ProjectConfig, SidebarWidget, SourceConfig, ThemeConfig, ThemeKind, ThemePackage,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{cli::Cli, debug, log};
use util::find_config_file;

/// Default config file name. The only one allowed to be absent.
pub const CONFIG_FILE: &str = "docs.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration record read by the rendering engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfiguration {
    /// Project metadata
    pub project: ProjectConfig,

    /// Source discovery settings
    pub source: SourceConfig,

    /// HTML output, theme and sidebars
    pub html: HtmlConfig,
}

/// Inputs of [`BuildConfiguration::load`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Config file name or path, searched upward from the working directory.
    ///
    /// Anything other than [`CONFIG_FILE`] must exist.
    pub config: PathBuf,
    pub profile: Profile,
    /// Replace the configured theme with this one (default options).
    pub theme: Option<ThemeKind>,
    /// Treat unknown keys in the config file as errors.
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from(CONFIG_FILE),
            profile: Profile::default(),
            theme: None,
            strict: false,
        }
    }
}

impl LoadOptions {
    /// Config file to read, if one exists.
    pub fn resolve_config_path(&self) -> Option<PathBuf> {
        find_config_file(&self.config)
    }

    /// Directory holding the source documents: the config file's directory,
    /// or the working directory when running on defaults.
    pub fn source_root(&self) -> PathBuf {
        self.resolve_config_path()
            .and_then(|path| path.parent().map(Path::to_path_buf))
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn is_default_config(&self) -> bool {
        self.config == Path::new(CONFIG_FILE)
    }
}

impl From<&Cli> for LoadOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            profile: cli.profile,
            theme: cli.theme,
            strict: cli.strict,
        }
    }
}

impl BuildConfiguration {
    /// The literal defaults. Pure; every call returns an equal value.
    pub fn load_configuration() -> Self {
        Self::default()
    }

    /// Resolve, overlay, and validate the configuration.
    ///
    /// Falls back to the literal defaults only when the default
    /// `docs.toml` is absent; an explicitly named file must exist.
    pub fn load(options: &LoadOptions) -> Result<Self, ConfigError> {
        let mut config = match options.resolve_config_path() {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                Self::from_path(&path, options.strict)?
            }
            None if options.is_default_config() => {
                debug!("config"; "{} not found, using defaults", CONFIG_FILE);
                Self::load_configuration()
            }
            None => {
                return Err(ConfigError::Io(
                    options.config.clone(),
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "config file not found, run `docsconf init` to create one",
                    ),
                ));
            }
        };

        options.profile.apply(&mut config);
        if let Some(kind) = options.theme {
            config = config.with_theme(kind);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path, strict: bool) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if strict {
                return Err(ConfigError::UnknownFields(ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Same configuration with `kind`'s default theme options.
    ///
    /// Every non-theme field is left untouched.
    pub fn with_theme(mut self, kind: ThemeKind) -> Self {
        if self.html.theme.kind() != kind {
            self.html.theme = ThemeConfig::default_for(kind);
        }
        self
    }

    /// Same configuration with `profile` applied.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        profile.apply(&mut self);
        self
    }

    // ========================================================================
    // engine-facing accessors
    // ========================================================================

    /// Name of the active theme.
    pub fn theme_name(&self) -> &'static str {
        self.html.theme.kind().name()
    }

    /// File name of the entry-point document.
    pub fn root_document_file(&self) -> String {
        self.source.root_document_file()
    }

    /// Whether `path` is a source document that is not excluded.
    pub fn is_source_document(&self, path: &Path) -> bool {
        self.source.is_source_document(path) && !self.source.is_excluded(path)
    }

    /// Whether `path` matches an exclude pattern.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.source.is_excluded(path)
    }

    /// Sidebar widgets for `page`, if any selector matches.
    pub fn sidebar_for(&self, page: &str) -> Option<&[SidebarWidget]> {
        section::sidebar::resolve(&self.html.sidebars, page)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, returning all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Collect diagnostics without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.project.validate(&mut diag);
        self.source.validate(&mut diag);
        self.html.validate(&mut diag);
        diag
    }
}

impl FromStr for BuildConfiguration {
    type Err = ConfigError;

    /// Parse configuration from TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = BuildConfiguration::from_str("[project\nname = \"dobi\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_configuration_is_deterministic() {
        assert_eq!(
            BuildConfiguration::load_configuration(),
            BuildConfiguration::load_configuration()
        );
    }

    #[test]
    fn test_load_configuration_defaults() {
        let config = BuildConfiguration::load_configuration();
        assert_eq!(config.project.name, "dobi");
        assert_eq!(config.project.version, "0.3-dev");
        assert_eq!(config.theme_name(), "alabaster");
        assert!(!config.html.show_copyright);
        assert_eq!(config.source.suffix, ".rst");
        assert_eq!(config.project.copyright, "2016, Daniel Nephin");
        assert_eq!(config.root_document_file(), "index.rst");
        assert!(!config.source.root_doc.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_sidebar_layout() {
        let config = BuildConfiguration::load_configuration();
        let widgets = config.sidebar_for("config/image").unwrap();
        let names: Vec<_> = widgets.iter().map(SidebarWidget::template).collect();
        assert_eq!(
            names,
            ["about.html", "navigation.html", "relations.html", "searchbox.html"]
        );
        assert!(config.html.sidebars.values().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_switching_theme_keeps_other_fields() {
        let base = BuildConfiguration::load_configuration();
        let switched = base.clone().with_theme(ThemeKind::ReadTheDocs);

        assert_eq!(switched.theme_name(), "sphinx_rtd_theme");
        assert_eq!(switched.project, base.project);
        assert_eq!(switched.source, base.source);
        assert_eq!(switched.html.static_paths, base.html.static_paths);
        assert_eq!(switched.html.sidebars, base.html.sidebars);
        assert_eq!(switched.html.show_copyright, base.html.show_copyright);
        assert!(switched.validate().is_ok());

        let back = switched.with_theme(ThemeKind::Alabaster);
        assert_eq!(back, base);
    }

    #[test]
    fn test_same_theme_keeps_options() {
        let config = BuildConfiguration::from_str(
            "[html.theme]\nname = \"alabaster\"\ngithub_type = \"fork\"",
        )
        .unwrap();
        let same = config.clone().with_theme(ThemeKind::Alabaster);
        assert_eq!(same, config);
    }

    #[test]
    fn test_partial_overlay_keeps_defaults() {
        let config = BuildConfiguration::from_str(
            r#"
[project]
version = "0.4"
release = "0.4.0-rc1"

[source]
exclude = ["_build/**"]
"#,
        )
        .unwrap();
        assert_eq!(config.project.name, "dobi");
        assert_eq!(config.project.release, "0.4.0-rc1");
        assert_eq!(config.source.suffix, ".rst");
        assert!(config.is_excluded(Path::new("_build/html/index.rst")));
        assert!(!config.is_source_document(Path::new("_build/html/index.rst")));
        assert!(config.is_source_document(Path::new("config/job.rst")));
        assert_eq!(config.theme_name(), "alabaster");
    }

    #[test]
    fn test_validation_names_every_field() {
        let config = BuildConfiguration::from_str(
            r#"
[source]
root_doc = ""
suffix = "rst"

[html.sidebars]
"index" = []
"#,
        )
        .unwrap();
        let diag = config.diagnose();
        assert!(diag.has_error_for(SourceConfig::FIELDS.root_doc));
        assert!(diag.has_error_for(SourceConfig::FIELDS.suffix));
        assert!(diag.has_error_for(HtmlConfig::FIELDS.sidebars));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("source.root_doc"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[project]\nname = \"dobi\"\n[latex]\npaper = \"a4\"";
        let (config, ignored) = BuildConfiguration::parse_with_ignored(content).unwrap();
        assert_eq!(config.project.name, "dobi");
        assert!(ignored.iter().any(|f| f.contains("latex")));
    }

    #[test]
    fn test_no_unknown_fields_in_serialized_defaults() {
        let content = toml::to_string(&BuildConfiguration::load_configuration()).unwrap();
        let (parsed, ignored) = BuildConfiguration::parse_with_ignored(&content).unwrap();
        assert!(ignored.is_empty(), "unexpected fields: {ignored:?}");
        assert_eq!(parsed, BuildConfiguration::load_configuration());
    }

    #[test]
    fn test_from_path_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.toml");
        fs::write(&path, "[project]\nnmae = \"typo\"").unwrap();

        assert!(BuildConfiguration::from_path(&path, false).is_ok());
        assert!(matches!(
            BuildConfiguration::from_path(&path, true),
            Err(ConfigError::UnknownFields(fields)) if fields == ["project.nmae"]
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = BuildConfiguration::from_path(&dir.path().join("docs.toml"), false);
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_load_with_absolute_path_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.toml");
        fs::write(&path, "[project]\nversion = \"0.3\"\nrelease = \"0.3.1\"").unwrap();

        let config = BuildConfiguration::load(&LoadOptions {
            config: path,
            profile: Profile::Titled,
            theme: Some(ThemeKind::ReadTheDocs),
            strict: true,
        })
        .unwrap();
        assert_eq!(config.html.title.as_deref(), Some("dobi v0.3"));
        assert_eq!(config.theme_name(), "sphinx_rtd_theme");
    }

    #[test]
    fn test_load_named_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("typo-docs.toml");

        let result = BuildConfiguration::load(&LoadOptions {
            config: missing.clone(),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(ConfigError::Io(path, err)) if path == missing && err.kind() == io::ErrorKind::NotFound
        ));

        let relative = LoadOptions {
            config: PathBuf::from("no-such-dir/docs.toml"),
            ..Default::default()
        };
        assert!(BuildConfiguration::load(&relative).is_err());
    }

    #[test]
    fn test_source_root_is_config_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.toml");
        fs::write(&path, "").unwrap();

        let options = LoadOptions {
            config: path,
            ..Default::default()
        };
        assert_eq!(options.source_root(), dir.path());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.toml");
        fs::write(&path, "[source]\nroot_doc = \"\"").unwrap();

        let result = BuildConfiguration::load(&LoadOptions {
            config: path,
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::Diagnostics(_))));
    }

    #[test]
    fn test_shared_across_threads() {
        let config = Arc::new(BuildConfiguration::load_configuration());
        std::thread::scope(|s| {
            for _ in 0..4 {
                let config = Arc::clone(&config);
                s.spawn(move || {
                    assert_eq!(config.theme_name(), "alabaster");
                    assert_eq!(config.root_document_file(), "index.rst");
                });
            }
        });
    }
}

//! `[source]` section configuration.
//!
//! Describes how the rendering engine discovers and reads source documents.
//!
//! # Example
//!
//! ```toml
//! [source]
//! suffix = ".rst"
//! root_doc = "index"
//! templates = ["_templates"]
//! exclude = ["_build/**", "drafts/*.rst"]
//! min_engine_version = "1.4.5"
//! highlight_style = "sphinx"
//! include_todos = false
//! extensions = ["alabaster", "sphinx.ext.githubpages"]
//! ```

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::types::config_fields;
use crate::config::util::{validate_glob, validate_path_list};
use crate::config::ConfigDiagnostics;

static RE_ENGINE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)*$").unwrap());

/// Source discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Extension identifying source documents, including the dot.
    pub suffix: String,

    /// Logical name of the entry-point document (without suffix).
    pub root_doc: String,

    /// Template override directories, searched in order (first match wins).
    pub templates: Vec<String>,

    /// Glob patterns excluded from processing.
    pub exclude: BTreeSet<String>,

    /// Minimum rendering engine version required to build the docs.
    pub min_engine_version: String,

    /// Content language; unset leaves the engine default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Syntax highlighting style.
    pub highlight_style: String,

    /// Render `todo` blocks.
    pub include_todos: bool,

    /// Engine extensions, loaded in order.
    pub extensions: Vec<String>,
}

config_fields!(SourceConfig => SourceConfigFields, "source" {
    suffix, root_doc, templates, exclude, min_engine_version,
    language, highlight_style, include_todos, extensions
});

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            suffix: ".rst".into(),
            root_doc: "index".into(),
            templates: vec!["_templates".into()],
            exclude: BTreeSet::new(),
            min_engine_version: "1.4.5".into(),
            language: None,
            highlight_style: "sphinx".into(),
            include_todos: false,
            extensions: vec!["alabaster".into(), "sphinx.ext.githubpages".into()],
        }
    }
}

impl SourceConfig {
    /// File name of the entry-point document (`index.rst`).
    pub fn root_document_file(&self) -> String {
        format!("{}{}", self.root_doc, self.suffix)
    }

    /// Whether `path` is a source document by extension.
    pub fn is_source_document(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.len() > self.suffix.len() && name.ends_with(&self.suffix))
    }

    /// Whether `path` (relative to the source root) matches an exclude pattern.
    ///
    /// Invalid patterns never match; `validate` reports them.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern).is_ok_and(|p| p.matches_path(path))
        })
    }

    /// Validate source settings.
    ///
    /// # Checks
    /// - `root_doc` is non-empty
    /// - `suffix` is a single-dot extension like `.rst`
    /// - `templates` entries are non-empty
    /// - `exclude` entries are valid globs and do not drop the root document
    /// - `min_engine_version` is dotted numeric
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.root_doc.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.root_doc,
                "must not be empty",
                "name the entry-point document, e.g.: \"index\"",
            );
        }

        self.validate_suffix(diag);
        validate_path_list(Self::FIELDS.templates, &self.templates, diag);

        for pattern in &self.exclude {
            validate_glob(Self::FIELDS.exclude, pattern, diag);
        }
        let root_file = self.root_document_file();
        if self.is_excluded(Path::new(&root_file)) {
            diag.error_with_hint(
                Self::FIELDS.exclude,
                format!("excludes the root document '{root_file}'"),
                "narrow the pattern or change source.root_doc",
            );
        }

        if !RE_ENGINE_VERSION.is_match(&self.min_engine_version) {
            diag.error_with_hint(
                Self::FIELDS.min_engine_version,
                format!("invalid version '{}'", self.min_engine_version),
                "use dotted numbers, e.g.: \"1.4.5\"",
            );
        }

        if let Some(language) = &self.language
            && language.trim().is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.language,
                "must not be empty when set",
                "remove the field to use the engine default",
            );
        }
    }

    fn validate_suffix(&self, diag: &mut ConfigDiagnostics) {
        let suffix = &self.suffix;
        let valid = suffix.len() > 1
            && suffix.starts_with('.')
            && suffix.matches('.').count() == 1
            && !suffix.contains(['/', '\\', ' ']);

        if !valid {
            diag.error_with_hint(
                Self::FIELDS.suffix,
                format!("invalid source suffix '{suffix}'"),
                "use a single-dot extension, e.g.: \".rst\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(source: &SourceConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        source.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let source = SourceConfig::default();
        assert_eq!(source.suffix, ".rst");
        assert_eq!(source.root_doc, "index");
        assert_eq!(source.templates, vec!["_templates"]);
        assert!(source.exclude.is_empty());
        assert!(!check(&source).has_errors());
    }

    #[test]
    fn test_root_document_file() {
        assert_eq!(SourceConfig::default().root_document_file(), "index.rst");
    }

    #[test]
    fn test_empty_root_doc_rejected() {
        let source = SourceConfig {
            root_doc: String::new(),
            ..Default::default()
        };
        assert!(check(&source).has_error_for(SourceConfig::FIELDS.root_doc));
    }

    #[test]
    fn test_suffix_validation() {
        for bad in ["", ".", "rst", "..rst", ".tar.gz", "./rst"] {
            let source = SourceConfig {
                suffix: bad.into(),
                ..Default::default()
            };
            assert!(
                check(&source).has_error_for(SourceConfig::FIELDS.suffix),
                "suffix {bad:?} should be rejected"
            );
        }

        let source = SourceConfig {
            suffix: ".md".into(),
            ..Default::default()
        };
        assert!(!check(&source).has_errors());
    }

    #[test]
    fn test_is_source_document() {
        let source = SourceConfig::default();
        assert!(source.is_source_document(Path::new("config/image.rst")));
        assert!(!source.is_source_document(Path::new("config/image.md")));
        assert!(!source.is_source_document(Path::new(".rst")));
    }

    #[test]
    fn test_is_excluded() {
        let source = SourceConfig {
            exclude: ["_build/**".to_string(), "drafts/*.rst".to_string()].into(),
            ..Default::default()
        };
        assert!(source.is_excluded(Path::new("_build/html/index.rst")));
        assert!(source.is_excluded(Path::new("drafts/wip.rst")));
        assert!(!source.is_excluded(Path::new("index.rst")));
    }

    #[test]
    fn test_excluding_root_document_rejected() {
        let source = SourceConfig {
            exclude: ["*.rst".to_string()].into(),
            ..Default::default()
        };
        assert!(check(&source).has_error_for(SourceConfig::FIELDS.exclude));
    }

    #[test]
    fn test_invalid_exclude_and_version() {
        let source = SourceConfig {
            exclude: ["[oops".to_string()].into(),
            min_engine_version: "1.4-beta".into(),
            ..Default::default()
        };
        let diag = check(&source);
        assert!(diag.has_error_for(SourceConfig::FIELDS.exclude));
        assert!(diag.has_error_for(SourceConfig::FIELDS.min_engine_version));
    }

    #[test]
    fn test_template_order_preserved() {
        let parsed: SourceConfig =
            toml::from_str(r#"templates = ["b", "a", "b"]"#).unwrap();
        assert_eq!(parsed.templates, vec!["b", "a", "b"]);
        assert!(!check(&parsed).has_errors());
    }
}

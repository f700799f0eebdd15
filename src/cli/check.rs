//! `check` command: validate and summarize the configuration.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{BuildConfiguration, ThemeKind, ThemePackage};
use crate::{debug, log};

/// Source documents found under a directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocumentScan {
    /// Documents the engine will read, relative to the source root.
    pub documents: Vec<PathBuf>,
    /// Files carrying the source suffix that an exclude pattern drops.
    pub excluded: usize,
}

/// Collect the source documents under `root` as the engine would see them.
pub fn scan_documents(config: &BuildConfiguration, root: &Path) -> Result<DocumentScan> {
    let pattern = format!(
        "{}/**/*{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        glob::Pattern::escape(&config.source.suffix)
    );

    let mut scan = DocumentScan::default();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if config.is_source_document(relative) {
            scan.documents.push(relative.to_path_buf());
        } else if config.is_excluded(relative) {
            scan.excluded += 1;
        }
    }
    scan.documents.sort();
    Ok(scan)
}

/// Hint printed for themes the engine does not ship.
pub fn theme_hint(kind: ThemeKind) -> Option<String> {
    (kind.package() == ThemePackage::External)
        .then(|| format!("theme `{}` must be installed separately", kind.name()))
}

/// Sidebar widgets of the root document, comma separated.
pub fn root_sidebar(config: &BuildConfiguration) -> String {
    config
        .sidebar_for(&config.source.root_doc)
        .map(|widgets| {
            widgets
                .iter()
                .map(|w| w.template())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| "none".into())
}

/// Report a configuration that passed validation during loading.
///
/// `root` is the directory holding the source documents.
pub fn check_config(config: &BuildConfiguration, root: &Path) -> Result<()> {
    if let Some(hint) = theme_hint(config.html.theme.kind()) {
        log!("hint"; "{hint}");
    }

    let scan = scan_documents(config, root)?;
    let root_doc = PathBuf::from(config.root_document_file());
    if !scan.documents.contains(&root_doc) {
        log!("warning"; "root document {} not found in {}", root_doc.display(), root.display());
    }

    debug!("check"; "root document: {}", root_doc.display());
    debug!("check"; "root sidebar: {}", root_sidebar(config));
    debug!("check"; "templates: {}", config.source.templates.join(", "));
    debug!("check"; "static: {}", config.html.static_paths.join(", "));

    log!(
        "check";
        "{} {} ({}): configuration ok, {} documents ({} excluded)",
        config.project.name,
        config.project.release,
        config.theme_name(),
        scan.documents.len(),
        scan.excluded
    );
    Ok(())
}

//! Configuration utility functions.

use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/dobi/docs/source/  ← cwd
/// /home/user/dobi/docs.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from an explicit directory.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Report empty entries of an ordered path list.
///
/// Duplicates are allowed; only blank entries are errors.
pub fn validate_path_list(field: FieldPath, entries: &[String], diag: &mut ConfigDiagnostics) {
    for (idx, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            diag.error_with_hint(
                field,
                format!("[{idx}] path must not be empty"),
                "remove the entry or name a directory",
            );
        }
    }
}

/// Report a glob pattern that does not compile.
pub fn validate_glob(field: FieldPath, pattern: &str, diag: &mut ConfigDiagnostics) {
    if pattern.is_empty() {
        diag.error(field, "glob pattern must not be empty");
        return;
    }
    if let Err(e) = glob::Pattern::new(pattern) {
        diag.error_with_hint(
            field,
            format!("invalid glob pattern '{pattern}': {e}"),
            "use `*`, `**`, `?` or `[...]`, e.g.: \"_build/**\"",
        );
    }
}

// ============================================================================
// tests
// ============================================================================

//! Documentation directory structure creation.
//!
//! Creates the template and static directories named by the configuration.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::BuildConfiguration;

/// Create `root` plus every template and static directory of `config`.
pub fn create_structure(root: &Path, config: &BuildConfiguration) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    let dirs = config
        .source
        .templates
        .iter()
        .chain(&config.html.static_paths);

    for dir in dirs {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docs");

        create_structure(&root, &BuildConfiguration::load_configuration()).unwrap();

        assert!(root.join("_templates").is_dir());
        assert!(root.join("_static").is_dir());
    }

    #[test]
    fn test_create_structure_existing_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("_static")).unwrap();

        create_structure(temp.path(), &BuildConfiguration::load_configuration()).unwrap();
        assert!(temp.path().join("_templates").is_dir());
    }
}

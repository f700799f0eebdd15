//! Documentation directory initialization.
//!
//! # Module Structure
//!
//! - [`structure`]: Template and static directory creation
//! - [`config`]: Configuration file generation

mod config;
mod structure;

use crate::config::{BuildConfiguration, CONFIG_FILE};
use crate::log;
use anyhow::{Result, bail};
use std::path::Path;

/// Initialize a documentation directory at `root`.
///
/// # Steps
/// 1. Create `root` and the configured template/static directories
/// 2. Write docs.toml (never overwrites)
///
/// If `dry_run` is true, only prints the config to stdout
pub fn new_docs(root: &Path, config: &BuildConfiguration, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template(config)?);
        return Ok(());
    }

    if root.join(CONFIG_FILE).exists() {
        bail!("{} already exists in '{}'", CONFIG_FILE, root.display());
    }

    structure::create_structure(root, config)?;
    config::write_config(root, config)?;

    log!("init"; "wrote {}", root.join(CONFIG_FILE).display());
    Ok(())
}

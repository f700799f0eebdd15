//! Configuration file generation.
//!
//! Creates docs.toml for a new documentation directory.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{BuildConfiguration, CONFIG_FILE};

/// Generate docs.toml content with a header comment
pub fn generate_config_template(config: &BuildConfiguration) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "# {} documentation build configuration (docsconf v{})\n",
        config.project.name,
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!(
        "# supported themes: {}\n",
        crate::config::ThemeKind::names().join(", ")
    ));
    out.push_str("# unset html keys fall back to the rendering engine defaults\n\n");

    out.push_str(
        &toml::to_string_pretty(config).context("Failed to serialize configuration")?,
    );

    Ok(out)
}

/// Write docs.toml into `root`, refusing to overwrite an existing one
pub fn write_config(root: &Path, config: &BuildConfiguration) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Edit it directly or remove it first.",
            path.display()
        );
    }

    let content = generate_config_template(config)?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

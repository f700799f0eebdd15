//! `show` command: print the resolved configuration.

use anyhow::{Context, Result};

use super::args::OutputFormat;
use crate::config::BuildConfiguration;

/// Serialize `config` in the requested format.
pub fn render(config: &BuildConfiguration, format: OutputFormat, pretty: bool) -> Result<String> {
    let out = match (format, pretty) {
        (OutputFormat::Toml, false) => toml::to_string(config)?,
        (OutputFormat::Toml, true) => toml::to_string_pretty(config)?,
        (OutputFormat::Json, false) => serde_json::to_string(config)?,
        (OutputFormat::Json, true) => serde_json::to_string_pretty(config)?,
    };
    Ok(out)
}

/// Print the configuration to stdout.
pub fn show_config(config: &BuildConfiguration, format: OutputFormat, pretty: bool) -> Result<()> {
    let out = render(config, format, pretty).context("Failed to serialize configuration")?;
    println!("{}", out.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeKind;

    #[test]
    fn test_render_toml_reparses() {
        let config = BuildConfiguration::load_configuration();
        let out = render(&config, OutputFormat::Toml, true).unwrap();
        assert!(out.contains("[html.theme]"));
        assert_eq!(out.parse::<BuildConfiguration>().unwrap(), config);
    }

    #[test]
    fn test_render_json_fields() {
        let config = BuildConfiguration::load_configuration().with_theme(ThemeKind::ReadTheDocs);
        let out = render(&config, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["project"]["name"], "dobi");
        assert_eq!(value["source"]["suffix"], ".rst");
        assert_eq!(value["html"]["theme"]["name"], "sphinx_rtd_theme");
        assert_eq!(value["html"]["sidebars"]["**"][0], "about.html");
        assert_eq!(value["html"]["show_copyright"], false);
    }
}

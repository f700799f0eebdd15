//! docsconf - documentation build configuration for dobi.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use docsconf::cli::{self, Cli, Commands};
use docsconf::config::{self, BuildConfiguration, LoadOptions};
use docsconf::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_ansi(cli.color != ColorChoice::Never);
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, dry } => {
            let root = dir.clone().unwrap_or_else(|| PathBuf::from("."));
            cli::init::new_docs(&root, &init_config(&cli)?, *dry)
        }
        Commands::Show { format, pretty } => {
            let config = BuildConfiguration::load(&LoadOptions::from(&cli))?;
            cli::show::show_config(&config, *format, *pretty)
        }
        Commands::Check => {
            let options = LoadOptions::from(&cli);
            let config = BuildConfiguration::load(&options)?;
            cli::check::check_config(&config, &options.source_root())
        }
        Commands::Themes => {
            let config = BuildConfiguration::load(&LoadOptions::from(&cli))?;
            cli::themes::list_themes(config.html.theme.kind());
            Ok(())
        }
    }
}

/// Configuration written by `init`: literal defaults, never an existing file.
fn init_config(cli: &Cli) -> Result<BuildConfiguration> {
    let mut config = BuildConfiguration::load_configuration().with_profile(cli.profile);
    if let Some(kind) = cli.theme {
        config = config.with_theme(kind);
    }
    config.validate()?;

    if cli.config != Path::new(config::CONFIG_FILE) {
        debug!("init"; "--config is ignored by init, writing {}", config::CONFIG_FILE);
    }
    Ok(config)
}

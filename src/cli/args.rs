//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{Profile, ThemeKind};

/// Documentation build configuration for dobi
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docs.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Configuration preset applied on top of the config file
    #[arg(short, long, global = true, value_enum, default_value_t = Profile::Standard)]
    pub profile: Profile,

    /// Replace the configured theme (alabaster, sphinx_rtd_theme)
    #[arg(short, long, global = true, value_parser = ThemeKind::from_str)]
    pub theme: Option<ThemeKind>,

    /// Treat unknown config fields as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved configuration for the rendering engine
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,

        /// Pretty-print output
        #[arg(long)]
        pretty: bool,
    },

    /// Validate the configuration and report every problem
    #[command(visible_alias = "c")]
    Check,

    /// Write a docs.toml with the default configuration
    #[command(visible_alias = "i")]
    Init {
        /// Documentation directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the config to stdout instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// List supported themes
    #[command(visible_alias = "t")]
    Themes,
}

/// Serialization format of `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}

//! Command-line arguments
//!
//! Every field is optional so that values from the configuration file can
//! fill the gaps; see `config::Settings::resolve` for the precedence rules.

use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "buildinfo")]
#[command(about = "Print version and build metadata")]
#[command(version)]
pub struct Args {
    /// Program name shown at the start of the build-info line
    #[arg(short = 'p', long = "program", value_name = "NAME")]
    pub program: Option<String>,

    /// Include build properties (revision, tag, build date)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Print only the major.minor version
    #[arg(short = 's', long = "short", conflicts_with_all = ["verbose", "key"])]
    pub short: bool,

    /// Print the value of a single build property
    #[arg(short = 'k', long = "key", value_name = "NAME", conflicts_with = "verbose")]
    pub key: Option<String>,

    /// Output format
    #[arg(short = 'o', long = "output-format", value_name = "FORMAT", value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(short = 'g', long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Command name from the clap metadata
    pub fn command_name() -> String {
        use clap::CommandFactory;
        Self::command().get_name().to_string()
    }

    /// Color override from the command line: `Some(true)` for `--color`,
    /// `Some(false)` for `--no-color`, `None` when neither was given
    pub fn color_override(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

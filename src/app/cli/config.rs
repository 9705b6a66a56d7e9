//! TOML configuration file parsing and loading
//!
//! Handles discovery of the default config file, parsing, value validation,
//! and merging with command-line arguments into the final `Settings`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::args::{Args, OutputFormat};
use crate::app::error::ConfigError;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
const LOG_FORMATS: [&str; 3] = ["text", "ext", "json"];

/// Values accepted in `buildinfo.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub program: Option<String>,
    pub verbose: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub color: Option<bool>,
}

impl FileConfig {
    /// Load the configuration file.
    ///
    /// An explicitly given path must exist. Without one, the default location
    /// is used if present, otherwise an empty configuration is returned.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_file {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        log::debug!("Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&contents, &path)
    }

    /// Parse and validate configuration text; `path` is only used in errors
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_choice("log-level", self.log_level.as_deref(), &LOG_LEVELS)?;
        check_choice("log-format", self.log_format.as_deref(), &LOG_FORMATS)?;
        if matches!(self.program.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn check_choice(key: &str, value: Option<&str>, allowed: &[&str]) -> Result<(), ConfigError> {
    match value {
        Some(v) if !allowed.contains(&v) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{}' is not one of: {}", v, allowed.join(", ")),
        }),
        _ => Ok(()),
    }
}

/// `<config dir>/Buildinfo/buildinfo.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Buildinfo").join("buildinfo.toml"))
}

/// What to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Build-info line, optionally followed by the build properties
    BuildInfo { verbose: bool },
    /// `major.minor` only
    ShortVersion,
    /// Value of one build property
    Property(String),
}

/// Final settings after merging CLI arguments over the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub program: String,
    pub report: Report,
    pub output_format: OutputFormat,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: bool,
}

impl Settings {
    /// CLI flag > config file > default. `default_color` applies when neither
    /// source sets color.
    pub fn resolve(
        args: &Args,
        config: FileConfig,
        default_program: &str,
        default_color: bool,
    ) -> Self {
        let report = if args.short {
            Report::ShortVersion
        } else if let Some(key) = &args.key {
            Report::Property(key.clone())
        } else {
            Report::BuildInfo {
                verbose: args.verbose || config.verbose.unwrap_or(false),
            }
        };

        Self {
            program: args
                .program
                .clone()
                .or(config.program)
                .unwrap_or_else(|| default_program.to_string()),
            report,
            output_format: args
                .output_format
                .or(config.output_format)
                .unwrap_or_default(),
            log_level: args.log_level.clone().or(config.log_level),
            log_format: args.log_format.clone().or(config.log_format),
            log_file: args.log_file.clone(),
            color: args
                .color_override()
                .or(config.color)
                .unwrap_or(default_color),
        }
    }
}

use clap::Parser;
use std::process::ExitCode;

use super::cli::args::Args;
use super::cli::config::{FileConfig, Settings};
use super::error::{AppError, AppResult};
use super::report::render;
use crate::core::error_handling::{fatal_message, log_error_with_context};
use crate::core::logging::init_logging;

/// Initialize application startup
pub fn startup() -> ExitCode {
    let args = Args::parse();
    let command_name = Args::command_name();

    // Logging depends on the config file, so config errors go straight to stderr
    let config = match FileConfig::load(args.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", fatal_message(&e, "Loading configuration"));
            return ExitCode::FAILURE;
        }
    };

    let default_color = colored::control::SHOULD_COLORIZE.should_colorize();
    let settings = Settings::resolve(&args, config, &command_name, default_color);

    colored::control::set_override(settings.color);
    if let Err(e) = start_logging(&settings) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    log::debug!("{}: resolved settings {:?}", command_name, settings);

    match render(&settings) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // The log level may be "off", so the user-facing line bypasses the logger
            eprintln!("Error: {}", fatal_message(&e, "Rendering build information"));
            log_error_with_context(&e, "Rendering build information");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(settings: &Settings) -> AppResult<()> {
    let log_file = settings
        .log_file
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned());
    init_logging(
        settings.log_level.as_deref(),
        settings.log_format.as_deref(),
        log_file.as_deref(),
        settings.color,
    )
    .map_err(|e| AppError::Logging {
        message: e.to_string(),
    })
}

//! Application Error Types

use std::path::PathBuf;

use crate::core::error_handling::ContextualError;

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<String> {
        if self.is_user_actionable() {
            Some(self.to_string())
        } else {
            None
        }
    }
}

/// Top-level errors reported by the CLI
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },

    #[error("Build property '{name}' is not available")]
    PropertyNotFound { name: String },

    #[error("Failed to serialise output")]
    Output {
        #[from]
        #[source]
        source: serde_json::Error,
    },
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Config(e) => e.is_user_actionable(),
            AppError::PropertyNotFound { .. } => true,
            AppError::Logging { .. } => false,
            AppError::Output { .. } => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::PropertyNotFound { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

//! Generic error handling utilities
//!
//! Lets the CLI report any error type the same way: user-actionable errors
//! show their own message, everything else shows the operation that failed
//! with the details at debug level.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`. When it returns `false`, `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// True if the user can fix this (bad flag, bad config value, unknown key)
    fn is_user_actionable(&self) -> bool;

    /// The message to show the user for a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// # Examples
/// ```rust,no_run
/// # use buildinfo::core::error_handling::log_error_with_context;
/// # use buildinfo::app::error::AppError;
/// let err = AppError::PropertyNotFound { name: "rocksdb_build_git_sha".to_string() };
/// log_error_with_context(&err, "Looking up build property");
/// // Logs: "FATAL: Build property 'rocksdb_build_git_sha' is not available"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("FATAL: {}", fatal_message(error, operation_context));
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// The primary line shown to the user for `error`
pub fn fatal_message<E: ContextualError>(error: &E, operation_context: &str) -> String {
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            return user_msg;
        }
    }
    format!("{}: {}", operation_context, error)
}

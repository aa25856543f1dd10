//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject sink paths that cannot name a file
//! - Validate value ranges and log levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LifelogConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::LifelogConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sink.path must not be empty")]
    EmptySinkPath,

    #[error("sink.path '{0}' names a directory")]
    DirectorySinkPath(String),

    #[error("heartbeat.delay_secs must be greater than zero")]
    ZeroHeartbeatDelay,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a configuration, collecting every error.
pub fn validate_config(config: &LifelogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let path = config.sink.path.to_string_lossy();
    if path.is_empty() {
        errors.push(ValidationError::EmptySinkPath);
    } else if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        errors.push(ValidationError::DirectorySinkPath(path.into_owned()));
    }

    if config.heartbeat.delay_secs == 0 {
        errors.push(ValidationError::ZeroHeartbeatDelay);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

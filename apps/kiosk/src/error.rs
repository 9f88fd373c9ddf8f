//! # Kiosk Error Type
//!
//! Unified error type for a kiosk session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk                              │
//! │                                                                         │
//! │  Bad flag / env var ────► ConfigError ──┐                               │
//! │                                         │                               │
//! │  Bad answer / EOF ──────► CoreError ────┼──► KioskError ──► stderr      │
//! │                                         │                   exit code   │
//! │  Terminal write fails ──► io::Error ────┤                               │
//! │                                         │                               │
//! │  JSON receipt fails ────► serde_json ───┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use meal_core::CoreError;
use thiserror::Error;

/// Configuration errors (environment variables and flags).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Unknown option: {0}")]
    UnknownFlag(String),

    #[error("Option {0} requires a value")]
    MissingValue(String),
}

/// Everything that can end a kiosk session early.
#[derive(Debug, Error)]
pub enum KioskError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode receipt: {0}")]
    Json(#[from] serde_json::Error),
}

impl KioskError {
    /// Process exit code for this error.
    ///
    /// ```text
    ///   2  usage / configuration
    ///   65 malformed or missing answers
    ///   1  anything else
    /// ```
    pub fn exit_code(&self) -> u8 {
        match self {
            KioskError::Config(_) => 2,
            KioskError::Core(CoreError::Validation(_) | CoreError::InputExhausted { .. }) => 65,
            _ => 1,
        }
    }
}

/// Convenience type alias for kiosk results.
pub type KioskResult<T> = Result<T, KioskError>;

#[cfg(test)]
mod tests {
    use super::*;
    use meal_core::{Prompt, ValidationError};

    #[test]
    fn test_exit_codes() {
        let err: KioskError = ConfigError::UnknownFlag("--nope".to_string()).into();
        assert_eq!(err.exit_code(), 2);

        let err: KioskError = CoreError::InputExhausted {
            prompt: Prompt::Burger,
        }
        .into();
        assert_eq!(err.exit_code(), 65);

        let err: KioskError = CoreError::from(ValidationError::InvalidNumber {
            field: "drink".to_string(),
            value: "tea".to_string(),
        })
        .into();
        assert_eq!(err.exit_code(), 65);

        let err: KioskError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_core_errors_are_transparent() {
        let err: KioskError = CoreError::Input("broken pipe".to_string()).into();
        assert_eq!(err.to_string(), "Failed to read input: broken pipe");
    }
}

//! # Error Types
//!
//! Domain-specific error types for meal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  meal-core errors (this file)                                          │
//! │  ├── CoreError        - Selection flow failures                        │
//! │  └── ValidationError  - Malformed answers                              │
//! │                                                                         │
//! │  kiosk errors (apps/kiosk)                                             │
//! │  ├── ConfigError      - Bad environment / flags                        │
//! │  └── KioskError       - What the terminal reports                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → KioskError → stderr + exit code   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items, decorators and orders never fail. Only reading answers can.

use thiserror::Error;

use crate::selection::Prompt;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while running the selection flow.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The token source ran out of answers before the flow finished.
    ///
    /// ## When This Occurs
    /// - stdin closed (Ctrl-D) in the middle of ordering
    /// - A scripted session supplied too few tokens
    #[error("No answer available for prompt: {prompt:?}")]
    InputExhausted { prompt: Prompt },

    /// The token source itself failed (e.g. a terminal read error).
    #[error("Failed to read input: {0}")]
    Input(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Out-of-range menu numbers are NOT errors; they select nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A number was expected but the token does not parse as one.
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

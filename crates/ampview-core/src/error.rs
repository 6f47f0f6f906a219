//! Error types for parameter store construction.

use thiserror::Error;

/// Errors raised while declaring parameters.
///
/// These only occur while building a [`ParameterStore`](crate::ParameterStore).
/// Once built, the store never fails: lookups return `Option` and writes clamp.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Two parameters were declared with the same string ID.
    #[error("duplicate parameter id: {0}")]
    DuplicateId(String),

    /// A parameter was declared with an empty string ID.
    #[error("parameter id must not be empty")]
    EmptyId,

    /// The declared range has `min > max`.
    #[error("parameter {id}: invalid range {min}..={max}")]
    InvalidRange {
        /// Offending parameter ID.
        id: String,
        /// Declared minimum.
        min: f64,
        /// Declared maximum.
        max: f64,
    },

    /// The declared default lies outside the declared range.
    #[error("parameter {id}: default {default} outside {min}..={max}")]
    DefaultOutOfRange {
        /// Offending parameter ID.
        id: String,
        /// Declared default.
        default: f64,
        /// Declared minimum.
        min: f64,
        /// Declared maximum.
        max: f64,
    },
}

/// Result type for parameter declaration.
pub type Result<T> = std::result::Result<T, ParameterError>;

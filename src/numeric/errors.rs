// ============================================================================
// Numeric Errors
// Error types for decimal literal parsing and arithmetic
// ============================================================================

use super::recognizer::Rejection;
use std::fmt;

/// Errors that can occur while parsing or combining decimal literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is not a valid decimal literal
    InvalidLiteral(Rejection),
    /// Value does not fit the target fixed-width representation
    Overflow,
    /// Conversion would lose significant fractional digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidLiteral(rejection) => {
                write!(f, "invalid literal: {}", rejection)
            },
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

impl From<Rejection> for NumericError {
    fn from(rejection: Rejection) -> Self {
        NumericError::InvalidLiteral(rejection)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

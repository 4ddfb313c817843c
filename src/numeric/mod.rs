// ============================================================================
// Numeric Module
// Exact decimal arithmetic over text literals
// ============================================================================
//
// This module provides:
// - recognizer: grammar check for signed plain-notation decimal literals
// - DecimalLiteral: sign + digit sequences, never a binary float
// - normalizer: aligns two literals to common digit-group widths
// - summation: digit-wise addition/subtraction with carry and borrow
// - NumericError: error types for parsing and conversion
//
// Design principles:
// - No floating-point operations anywhere
// - Precision bounded only by memory
// - Pure functions; no shared state between calls

mod errors;
mod literal;
mod normalizer;
mod recognizer;
mod summation;

pub use errors::{NumericError, NumericResult};
pub use literal::{DecimalLiteral, Sign};
pub use normalizer::{align, align_text, AlignedPair};
pub use recognizer::{scan, validate, Rejection};
pub use summation::{add, combine, subtract};

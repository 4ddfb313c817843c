// ============================================================================
// Decimal Literal Recognizer
// Single-pass finite-state scanner for signed plain-notation decimals
// ============================================================================
//
// Grammar:  [+-]? DIGIT+ ( '.' DIGIT+ )?
//
// Only ASCII '0'..='9' count as digits. No exponent, no digit grouping,
// no surrounding whitespace.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal separator between the integer and fractional digits.
pub(crate) const SEPARATOR: char = '.';

/// Why a piece of text was rejected by [`scan`].
///
/// Positions are byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// The text has no characters at all
    Empty,
    /// A digit was required (after the optional sign) but not found
    MissingDigit { position: usize },
    /// A character that cannot appear at this point of the literal
    UnexpectedCharacter { position: usize, found: char },
    /// The separator is the last character
    TrailingSeparator,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty input"),
            Rejection::MissingDigit { position } => {
                write!(f, "expected a digit at position {}", position)
            },
            Rejection::UnexpectedCharacter { position, found } => {
                write!(f, "unexpected character '{}' at position {}", found, position)
            },
            Rejection::TrailingSeparator => {
                write!(f, "decimal separator must be followed by a digit")
            },
        }
    }
}

// ============================================================================
// State Machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Nothing consumed yet; an optional sign may follow
    Start,
    /// Inside the integer part; `seen` is false until the first digit
    IntegerDigit { seen: bool },
    /// Inside the fractional part; `seen` is false right after the separator
    FractionDigit { seen: bool },
    Accept,
    Reject(Rejection),
}

/// One transition. Returns the next state and whether `input` was consumed.
///
/// `input` is `None` at end of text, in which case `end` is the text length.
fn step(state: ScanState, input: Option<(usize, char)>, end: usize) -> (ScanState, bool) {
    use ScanState::*;

    match (state, input) {
        (Start, None) => (Reject(Rejection::Empty), false),
        (Start, Some((_, '+' | '-'))) => (IntegerDigit { seen: false }, true),
        // Fall through without consuming
        (Start, Some(_)) => (IntegerDigit { seen: false }, false),

        (IntegerDigit { .. } | FractionDigit { .. }, Some((_, c))) if c.is_ascii_digit() => {
            let next = match state {
                FractionDigit { .. } => FractionDigit { seen: true },
                _ => IntegerDigit { seen: true },
            };
            (next, true)
        },

        (IntegerDigit { seen: false }, Some((position, _))) => {
            (Reject(Rejection::MissingDigit { position }), false)
        },
        (IntegerDigit { seen: false }, None) => {
            (Reject(Rejection::MissingDigit { position: end }), false)
        },
        (IntegerDigit { seen: true }, Some((_, SEPARATOR))) => {
            (FractionDigit { seen: false }, true)
        },
        (IntegerDigit { seen: true }, None) => (Accept, false),

        (FractionDigit { seen: false }, None) => (Reject(Rejection::TrailingSeparator), false),
        (FractionDigit { seen: true }, None) => (Accept, false),

        (IntegerDigit { seen: true } | FractionDigit { .. }, Some((position, found))) => {
            (Reject(Rejection::UnexpectedCharacter { position, found }), false)
        },

        (terminal @ (Accept | Reject(_)), _) => (terminal, false),
    }
}

/// Scan `text` and report why it is not a valid decimal literal, if it isn't.
///
/// The scan is a single left-to-right pass with no backtracking.
pub fn scan(text: &str) -> Result<(), Rejection> {
    let mut chars = text.char_indices().peekable();
    let mut state = ScanState::Start;

    loop {
        let (next, consumed) = step(state, chars.peek().copied(), text.len());
        if consumed {
            chars.next();
        }
        state = next;

        match state {
            ScanState::Accept => return Ok(()),
            ScanState::Reject(rejection) => return Err(rejection),
            _ => {},
        }
    }
}

/// Returns true if `text` is a syntactically valid signed decimal literal.
///
/// Total over all inputs, including the empty string.
#[inline]
pub fn validate(text: &str) -> bool {
    scan(text).is_ok()
}

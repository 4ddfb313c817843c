// ============================================================================
// Line Report Domain Model
// ============================================================================

use crate::numeric::{DecimalLiteral, Rejection};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the checker concluded about one line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineOutcome {
    /// The line is a decimal literal
    Valid {
        /// Line plus the configured addend, when one is configured
        sum: Option<DecimalLiteral>,
    },

    /// The line is not a decimal literal
    Invalid { reason: Rejection },
}

/// Outcome of checking a single line of input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineReport {
    /// 1-based line number within the input
    pub line_number: usize,

    /// The line as read, without its terminator
    pub line: String,

    pub outcome: LineOutcome,
}

impl LineReport {
    pub fn new(line_number: usize, line: impl Into<String>, outcome: LineOutcome) -> Self {
        Self {
            line_number,
            line: line.into(),
            outcome,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, LineOutcome::Valid { .. })
    }

    /// The computed sum, if the line was valid and an addend is configured
    pub fn sum(&self) -> Option<&DecimalLiteral> {
        match &self.outcome {
            LineOutcome::Valid { sum } => sum.as_ref(),
            LineOutcome::Invalid { .. } => None,
        }
    }

    /// Text for the sum line, e.g. `"+1 + -123.456 = -122.456"`
    pub fn sum_line(&self, addend: &DecimalLiteral) -> Option<String> {
        let sum = self.sum()?;
        Some(format!("{} + {} = {}", self.line, addend, sum))
    }
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{} is valid double", self.line)
        } else {
            write!(f, "{} is not valid double", self.line)
        }
    }
}

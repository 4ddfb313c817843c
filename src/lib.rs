//! # Text Decimal
//!
//! Exact decimal addition and subtraction over numeric text.
//!
//! Numbers are never converted to binary floating point. A literal is held
//! as a sign plus integer and fractional digit sequences, so precision and
//! digit count are bounded only by available memory.
//!
//! ## Features
//!
//! - **Recognizer**: single-pass state machine for `[+-]?D+(.D+)?`
//! - **Normalizer**: zero-pads two literals to common digit-group widths
//! - **Summation engine**: digit-wise addition/subtraction with carry and borrow
//! - **Line checker**: validates (and optionally sums) numeric text line by line
//!
//! ## Example
//!
//! ```rust
//! use text_decimal::prelude::*;
//!
//! assert!(validate("-0001.005"));
//! assert!(!validate("-5."));
//!
//! assert_eq!(add("1.5", "2.25").unwrap(), "+3.75");
//! assert_eq!(add("9", "1").unwrap(), "+10");
//! assert_eq!(add("5", "-3").unwrap(), "+2");
//!
//! let total: DecimalLiteral = ["0.1", "0.2", "-0.3"]
//!     .iter()
//!     .map(|s| s.parse::<DecimalLiteral>().unwrap())
//!     .sum();
//! assert!(total.is_zero());
//! ```

pub mod checker;
pub mod domain;
pub mod interfaces;
pub mod numeric;

pub use numeric::{add, validate};

// Re-exports for convenience
pub mod prelude {
    pub use crate::checker::{create_from_config, CheckSummary, LineChecker};
    pub use crate::domain::{CheckerConfig, LineOutcome, LineReport, DEFAULT_ADDEND};
    pub use crate::interfaces::{
        CollectingReportHandler, LoggingReportHandler, NoOpReportHandler, ReportHandler,
    };
    pub use crate::numeric::{
        add, align, align_text, combine, scan, subtract, validate, AlignedPair, DecimalLiteral,
        NumericError, NumericResult, Rejection, Sign,
    };
}

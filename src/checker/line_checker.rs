// ============================================================================
// Line Checker
// Validates (and optionally sums) decimal literals read line by line
// ============================================================================

use crate::domain::{LineOutcome, LineReport};
use crate::interfaces::ReportHandler;
use crate::numeric::DecimalLiteral;
use std::io::{self, BufRead};
use std::sync::Arc;

/// `line` without its trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Totals over one input stream
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckSummary {
    /// Lines that are decimal literals
    pub valid: usize,

    /// Lines that are not
    pub invalid: usize,

    /// Exact sum of every valid line (without the addend)
    pub total: DecimalLiteral,
}

impl CheckSummary {
    /// Number of lines checked
    #[inline]
    pub fn lines(&self) -> usize {
        self.valid + self.invalid
    }
}

/// Runs the recognizer (and the adder, when an addend is set) over lines of text
pub struct LineChecker {
    /// Added to every valid line when present
    addend: Option<DecimalLiteral>,

    /// Report trimmed sums instead of zero-padded ones
    trim_results: bool,

    /// Receives every report as it is produced
    report_handler: Arc<dyn ReportHandler>,
}

impl LineChecker {
    /// Create a new line checker
    pub fn new(
        addend: Option<DecimalLiteral>,
        trim_results: bool,
        report_handler: Arc<dyn ReportHandler>,
    ) -> Self {
        Self {
            addend,
            trim_results,
            report_handler,
        }
    }

    /// Builder method: Replace the report handler
    pub fn with_report_handler(mut self, report_handler: Arc<dyn ReportHandler>) -> Self {
        self.report_handler = report_handler;
        self
    }

    #[inline]
    pub fn addend(&self) -> Option<&DecimalLiteral> {
        self.addend.as_ref()
    }

    /// Check a single line. Does not notify the report handler.
    pub fn check_line(&self, line_number: usize, line: &str) -> LineReport {
        self.evaluate(line_number, line).0
    }

    /// Check every line of `reader`, notifying the report handler per line.
    ///
    /// Lines that are not valid UTF-8 are reported as invalid literals
    /// (undecodable bytes become U+FFFD) and checking continues.
    ///
    /// # Errors
    /// Propagates I/O errors from `reader`; lines before the failure have
    /// already been reported.
    pub fn check_reader<R: BufRead>(&self, mut reader: R) -> io::Result<CheckSummary> {
        let mut summary = CheckSummary::default();
        let mut buffer = Vec::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(strip_line_ending(&buffer));
            let (report, value) = self.evaluate(line_number, &line);

            match value {
                Some(value) => {
                    summary.valid += 1;
                    summary.total += &value;
                },
                None => summary.invalid += 1,
            }

            self.report_handler.on_report(&report);
        }

        tracing::debug!(
            valid = summary.valid,
            invalid = summary.invalid,
            total = %summary.total,
            "finished checking input"
        );

        Ok(summary)
    }

    fn evaluate(&self, line_number: usize, line: &str) -> (LineReport, Option<DecimalLiteral>) {
        match DecimalLiteral::parse_literal(line) {
            Ok(value) => {
                let sum = self.addend.as_ref().map(|addend| {
                    let sum = &value + addend;
                    if self.trim_results {
                        sum.trimmed()
                    } else {
                        sum
                    }
                });
                tracing::trace!(line_number, line, "valid literal");

                (
                    LineReport::new(line_number, line, LineOutcome::Valid { sum }),
                    Some(value),
                )
            },
            Err(reason) => {
                tracing::trace!(line_number, line, %reason, "invalid literal");

                (
                    LineReport::new(line_number, line, LineOutcome::Invalid { reason }),
                    None,
                )
            },
        }
    }
}

// ============================================================================
// Domain Models Module
// Contains checker configuration and per-line results
// ============================================================================

pub mod config;
pub mod report;

pub use config::{CheckerConfig, DEFAULT_ADDEND};
pub use report::{LineOutcome, LineReport};

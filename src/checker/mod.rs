// ============================================================================
// Checker Module
// Line-by-line validation and summation of decimal text
// ============================================================================

pub mod factory;
mod line_checker;

pub use factory::create_from_config;
pub use line_checker::{CheckSummary, LineChecker};

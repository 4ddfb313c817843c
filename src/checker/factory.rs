// ============================================================================
// Line Checker Factory
// Creates line checkers from configuration
// ============================================================================

use crate::checker::LineChecker;
use crate::domain::CheckerConfig;
use crate::interfaces::ReportHandler;
use std::sync::Arc;

/// Creates a line checker from configuration
///
/// # Arguments
/// * `config` - Checker configuration
/// * `report_handler` - Receives one report per checked line
///
/// # Returns
/// * `Result<LineChecker, String>` - Configured checker or error
///
/// # Example
/// ```
/// use text_decimal::prelude::*;
/// use std::sync::Arc;
///
/// let config = CheckerConfig::with_default_addend();
/// let checker = create_from_config(config, Arc::new(NoOpReportHandler)).unwrap();
/// let report = checker.check_line(1, "1");
/// assert_eq!(report.sum().unwrap().to_string(), "-122.456");
/// ```
pub fn create_from_config(
    config: CheckerConfig,
    report_handler: Arc<dyn ReportHandler>,
) -> Result<LineChecker, String> {
    // Validate configuration first
    config.validate()?;

    let addend = config.parsed_addend()?;
    tracing::debug!(
        addend = ?addend.as_ref().map(|a| a.to_string()),
        trim_results = config.trim_results,
        "created line checker"
    );

    Ok(LineChecker::new(addend, config.trim_results, report_handler))
}

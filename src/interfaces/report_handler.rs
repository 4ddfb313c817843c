// ============================================================================
// Report Handler Interface
// Defines the contract for consuming per-line check results
// ============================================================================

use crate::domain::LineReport;
use parking_lot::Mutex;

/// Report handler trait for processing line checker output
/// Implementations can handle printing, logging, collection, etc.
pub trait ReportHandler: Send + Sync {
    /// Handle one line report
    fn on_report(&self, report: &LineReport);

    /// Batch report handler (optional optimization)
    fn on_reports(&self, reports: &[LineReport]) {
        for report in reports {
            self.on_report(report);
        }
    }
}

/// No-op report handler for testing
pub struct NoOpReportHandler;

impl ReportHandler for NoOpReportHandler {
    fn on_report(&self, _report: &LineReport) {
        // Do nothing
    }
}

/// Logging report handler
pub struct LoggingReportHandler;

impl ReportHandler for LoggingReportHandler {
    fn on_report(&self, report: &LineReport) {
        match report.sum() {
            Some(sum) => tracing::info!(
                line_number = report.line_number,
                valid = report.is_valid(),
                %sum,
                "{}",
                report
            ),
            None => tracing::info!(
                line_number = report.line_number,
                valid = report.is_valid(),
                "{}",
                report
            ),
        }
    }
}

/// Collects every report it sees, in arrival order
#[derive(Default)]
pub struct CollectingReportHandler {
    reports: Mutex<Vec<LineReport>>,
}

impl CollectingReportHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything collected so far
    pub fn reports(&self) -> Vec<LineReport> {
        self.reports.lock().clone()
    }

    /// Take everything collected so far, leaving the handler empty
    pub fn drain(&self) -> Vec<LineReport> {
        std::mem::take(&mut *self.reports.lock())
    }
}

impl ReportHandler for CollectingReportHandler {
    fn on_report(&self, report: &LineReport) {
        self.reports.lock().push(report.clone());
    }
}

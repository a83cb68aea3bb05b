use crate::domain::model::NumberReport;
use crate::domain::verification::SuiteReport;
use crate::utils::error::Result;

/// Turns machine output into a printable document.
pub trait ReportRenderer {
    fn render_reports(&self, reports: &[NumberReport]) -> Result<String>;
    fn render_suite(&self, suite: &SuiteReport) -> Result<String>;
}

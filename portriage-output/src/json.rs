use crate::traits::{OutputError, ReportFormatter};
use portriage_types::HostAssessment;

/// Formats a report as pretty-printed JSON.
///
/// The wire schema is fixed by the assessment types themselves:
/// `[{"ip", "type", "vulns": [{"port", "service", "risk", "info",
/// "remediation"}]}]`, hosts in scan discovery order.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &[HostAssessment]) -> Result<String, OutputError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| OutputError::FormatError(format!("JSON serialization error: {e}")))
    }
}

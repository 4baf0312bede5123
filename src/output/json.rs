//! JSON output of a report.

use crate::models::SubnetReport;

/// Pretty printed JSON for a report.
pub fn report_to_json(report: &SubnetReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

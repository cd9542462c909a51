use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use mapcfg_model::{ValidationIssue, ValidationReport};

const REPORT_SCHEMA: &str = "mapcfg.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Versioned JSON rendering of a validation report.
#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub suggestion_count: usize,
    pub issues: &'a [ValidationIssue],
}

impl<'a> ReportPayload<'a> {
    fn new(report: &'a ValidationReport) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            valid: report.is_valid(),
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            suggestion_count: report.suggestion_count(),
            issues: &report.issues,
        }
    }
}

/// Write the JSON report payload to `path`, creating parent directories.
pub fn write_report_json(path: &Path, report: &ValidationReport) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = ReportPayload::new(report);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcfg_model::{IssueCode, ValidationIssue};

    #[test]
    fn payload_carries_schema_and_counts() {
        let report = ValidationReport {
            issues: vec![ValidationIssue::error(
                IssueCode::MissingRequired,
                "title",
                "missing required parameter: title",
            )],
        };
        let payload = ReportPayload::new(&report);
        let json = serde_json::to_value(&payload).expect("serialize payload");

        assert_eq!(json["schema"], "mapcfg.validation-report");
        assert_eq!(json["schema_version"], 1);
        assert_eq!(json["valid"], false);
        assert_eq!(json["error_count"], 1);
        assert_eq!(json["issues"][0]["code"], "missing_required");
    }
}

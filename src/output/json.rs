use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::field::FieldName;
use crate::scanner::{FileOutcome, ScanReport};
use crate::tag::{Finding, FindingMessage, TagFormat};

use super::{OutputFormatter, display_path};

#[derive(Default)]
pub struct JsonFormatter {
    root: Option<PathBuf>,
}

impl JsonFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show paths relative to `root`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: Vec<FileResult<'a>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    unknown_field_names: BTreeMap<String, Vec<&'a str>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    not_processed: usize,
    findings: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Passed,
    Failed,
    UnsupportedExtension,
    NotReadable,
    NoTag,
    TagNotConverted,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<TagFormat>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    source_formats: Vec<TagFormat>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    findings: Vec<FindingResult<'a>>,
}

#[derive(Serialize)]
struct FindingResult<'a> {
    field: FieldName,
    message: String,
    detail: &'a FindingMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual_value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_value: Option<&'a str>,
    #[serde(skip_serializing_if = "<[usize]>::is_empty")]
    position_markers: &'a [usize],
}

impl JsonFormatter {
    fn convert_outcome<'a>(&self, outcome: &'a FileOutcome) -> FileResult<'a> {
        let mut result = FileResult {
            path: display_path(outcome.path(), self.root.as_deref()),
            status: Status::Passed,
            error: None,
            format: None,
            source_formats: Vec::new(),
            findings: Vec::new(),
        };
        match outcome {
            FileOutcome::UnsupportedExtension(_) => result.status = Status::UnsupportedExtension,
            FileOutcome::NotReadable { error, .. } => {
                result.status = Status::NotReadable;
                result.error = Some(error);
            }
            FileOutcome::NoTag(_) => result.status = Status::NoTag,
            FileOutcome::TagNotConverted { format, .. } => {
                result.status = Status::TagNotConverted;
                result.format = Some(*format);
            }
            FileOutcome::ChecksFailed(tag) | FileOutcome::ChecksPassed(tag) => {
                if tag.has_findings() {
                    result.status = Status::Failed;
                }
                result.source_formats = tag.source_formats().iter().copied().collect();
                result.findings = tag
                    .findings()
                    .iter()
                    .flat_map(|(field, findings)| {
                        findings.iter().map(|finding| convert_finding(*field, finding))
                    })
                    .collect();
            }
        }
        result
    }
}

fn convert_finding(field: FieldName, finding: &Finding) -> FindingResult<'_> {
    FindingResult {
        field,
        message: finding.message().to_string(),
        detail: finding.message(),
        actual_value: finding.actual_value(),
        expected_value: finding.expected_value(),
        position_markers: finding.position_markers(),
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: report.outcomes.len(),
                passed: report.passed_count(),
                failed: report.failed_count(),
                not_processed: report.unprocessed_count(),
                findings: report.finding_count(),
            },
            files: report
                .outcomes
                .iter()
                .map(|outcome| self.convert_outcome(outcome))
                .collect(),
            unknown_field_names: report
                .unknown_field_names
                .iter()
                .map(|(format, names)| {
                    (
                        format.as_str().to_string(),
                        names.iter().map(String::as_str).collect(),
                    )
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

use std::fmt::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::field::FieldName;
use crate::scanner::{FileOutcome, ScanReport};
use crate::tag::{Finding, GenericTag};

use super::{OutputFormatter, display_path};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

const VALUE_INDENT: &str = "     ";
const ACTUAL_LABEL: &str = "actual:   ";
const EXPECTED_LABEL: &str = "expected: ";

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    root: Option<PathBuf>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
            root: None,
        }
    }

    /// Show paths relative to `root`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn path(&self, path: &std::path::Path) -> String {
        display_path(path, self.root.as_deref())
    }

    fn format_failed(&self, tag: &GenericTag, output: &mut String) {
        let status = self.colorize("FAILED", ansi::RED);
        writeln!(output, "✗ {status}: {}", self.path(tag.backing_path())).ok();
        for (field, findings) in tag.findings() {
            for finding in findings {
                self.format_finding(*field, finding, output);
            }
        }
    }

    fn format_finding(&self, field: FieldName, finding: &Finding, output: &mut String) {
        writeln!(output, "   {field}: {}", finding.message()).ok();

        if let Some(actual) = finding.actual_value() {
            writeln!(output, "{VALUE_INDENT}{ACTUAL_LABEL}\"{}\"", printable(actual)).ok();
            let markers = finding.position_markers();
            if !markers.is_empty() {
                let pad = " ".repeat(VALUE_INDENT.len() + ACTUAL_LABEL.len() + 1);
                let carets = self.colorize(&caret_line(markers), ansi::RED);
                writeln!(output, "{pad}{carets}").ok();
            }
        }
        if let Some(expected) = finding.expected_value() {
            let expected = self.colorize(&format!("\"{}\"", printable(expected)), ansi::GREEN);
            writeln!(output, "{VALUE_INDENT}{EXPECTED_LABEL}{expected}").ok();
        }
    }

    fn format_unprocessed(&self, outcome: &FileOutcome, output: &mut String) {
        let reason = match outcome {
            FileOutcome::UnsupportedExtension(_) => "unsupported extension".to_string(),
            FileOutcome::NotReadable { error, .. } => format!("not readable: {error}"),
            FileOutcome::NoTag(_) => "no tag".to_string(),
            FileOutcome::TagNotConverted { format, .. } => format!("{format} tag not converted"),
            FileOutcome::ChecksFailed(_) | FileOutcome::ChecksPassed(_) => return,
        };
        let status = self.colorize("SKIPPED", ansi::YELLOW);
        writeln!(output, "⚠ {status}: {} ({reason})", self.path(outcome.path())).ok();
    }

    fn format_summary(&self, report: &ScanReport) -> String {
        let passed = self.colorize(&report.passed_count().to_string(), ansi::GREEN);
        let failed = self.colorize(&report.failed_count().to_string(), ansi::RED);
        let mut summary = format!(
            "Summary: {} files, {passed} passed, {failed} failed",
            report.outcomes.len()
        );
        let findings = report.finding_count();
        if findings > 0 {
            write!(summary, " ({findings} findings)").ok();
        }
        let unprocessed = report.unprocessed_count();
        if unprocessed > 0 {
            let unprocessed = self.colorize(&unprocessed.to_string(), ansi::YELLOW);
            write!(summary, ", {unprocessed} not processed").ok();
        }
        summary
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        for outcome in &report.outcomes {
            if let FileOutcome::ChecksFailed(tag) = outcome {
                self.format_failed(tag, &mut output);
                output.push('\n');
            }
        }

        for outcome in report.outcomes.iter().filter(|o| !o.is_checked()) {
            self.format_unprocessed(outcome, &mut output);
        }

        if self.verbose >= 1 {
            for outcome in &report.outcomes {
                if let FileOutcome::ChecksPassed(tag) = outcome {
                    let status = self.colorize("PASSED", ansi::GREEN);
                    writeln!(output, "✓ {status}: {}", self.path(tag.backing_path())).ok();
                }
            }
            for (format, names) in &report.unknown_field_names {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                let label = self.colorize(&format!("Unknown {format} fields"), ansi::CYAN);
                writeln!(output, "{label}: {}", names.join(", ")).ok();
            }
        }

        writeln!(output, "{}", self.format_summary(report)).ok();
        Ok(output)
    }
}

/// `^` under every marked character, nothing after the last one.
fn caret_line(markers: &[usize]) -> String {
    let Some(&last) = markers.last() else {
        return String::new();
    };
    (0..=last)
        .map(|i| if markers.binary_search(&i).is_ok() { '^' } else { ' ' })
        .collect()
}

/// Control characters would break caret alignment; show them as `·`.
fn printable(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { '·' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

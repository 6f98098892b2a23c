use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::TagGuardError;
use crate::tag::{GenericTag, RawTag, TagFormat};

/// Receives one outcome per visited file, never for directories.
///
/// Calls happen synchronously on the walking thread, in depth-first,
/// sorted-sibling order.
pub trait ScanObserver {
    fn unsupported_extension(&mut self, path: &Path);

    fn not_readable(&mut self, path: &Path, error: &TagGuardError);

    fn no_tag(&mut self, path: &Path);

    fn tag_not_converted(&mut self, path: &Path, raw: &RawTag);

    /// `tag` has at least one finding.
    fn checks_failed(&mut self, tag: GenericTag);

    fn checks_passed(&mut self, tag: GenericTag);

    /// Raw names a converter could not map, reported before the check outcome.
    fn unknown_field_names(&mut self, _format: TagFormat, _names: &BTreeSet<String>) {}
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    UnsupportedExtension(PathBuf),
    NotReadable { path: PathBuf, error: String },
    NoTag(PathBuf),
    TagNotConverted { path: PathBuf, format: TagFormat },
    ChecksFailed(GenericTag),
    ChecksPassed(GenericTag),
}

impl FileOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::UnsupportedExtension(path) | Self::NoTag(path) => path,
            Self::NotReadable { path, .. } | Self::TagNotConverted { path, .. } => path,
            Self::ChecksFailed(tag) | Self::ChecksPassed(tag) => tag.backing_path(),
        }
    }

    /// Whether the file made it through conversion and validation.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::ChecksFailed(_) | Self::ChecksPassed(_))
    }
}

/// Collects every outcome of a scan, in visiting order.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub outcomes: Vec<FileOutcome>,
    /// Unmapped raw field names seen per format.
    pub unknown_field_names: BTreeMap<TagFormat, BTreeSet<String>>,
}

impl ScanReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::ChecksPassed(_)))
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::ChecksFailed(_)))
    }

    /// Files that were visited but never reached the validators.
    #[must_use]
    pub fn unprocessed_count(&self) -> usize {
        self.count(|o| !o.is_checked())
    }

    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::ChecksFailed(tag) => tag.finding_count(),
                _ => 0,
            })
            .sum()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

impl ScanObserver for ScanReport {
    fn unsupported_extension(&mut self, path: &Path) {
        self.outcomes
            .push(FileOutcome::UnsupportedExtension(path.to_path_buf()));
    }

    fn not_readable(&mut self, path: &Path, error: &TagGuardError) {
        self.outcomes.push(FileOutcome::NotReadable {
            path: path.to_path_buf(),
            error: error.to_string(),
        });
    }

    fn no_tag(&mut self, path: &Path) {
        self.outcomes.push(FileOutcome::NoTag(path.to_path_buf()));
    }

    fn tag_not_converted(&mut self, path: &Path, raw: &RawTag) {
        self.outcomes.push(FileOutcome::TagNotConverted {
            path: path.to_path_buf(),
            format: raw.format,
        });
    }

    fn checks_failed(&mut self, tag: GenericTag) {
        self.outcomes.push(FileOutcome::ChecksFailed(tag));
    }

    fn checks_passed(&mut self, tag: GenericTag) {
        self.outcomes.push(FileOutcome::ChecksPassed(tag));
    }

    fn unknown_field_names(&mut self, format: TagFormat, names: &BTreeSet<String>) {
        self.unknown_field_names
            .entry(format)
            .or_default()
            .extend(names.iter().cloned());
    }
}

mod finding;
mod format;

pub use finding::{Finding, FindingMessage};
pub use format::{RawField, RawTag, TagFormat};

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::field::FieldName;

/// Distinct values of one field, each mapped to the raw field identifiers that produced it.
pub type FieldValues = IndexMap<String, IndexSet<String>>;

/// One audio file's normalized metadata.
///
/// Created empty per file, populated once by a converter, then only appended
/// to by validators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericTag {
    backing_path: PathBuf,
    has_artwork: bool,
    source_formats: BTreeSet<TagFormat>,
    fields: BTreeMap<FieldName, FieldValues>,
    findings: BTreeMap<FieldName, Vec<Finding>>,
}

impl GenericTag {
    #[must_use]
    pub fn new(backing_path: impl Into<PathBuf>) -> Self {
        Self {
            backing_path: backing_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn backing_path(&self) -> &Path {
        &self.backing_path
    }

    #[must_use]
    pub const fn has_artwork(&self) -> bool {
        self.has_artwork
    }

    pub const fn set_has_artwork(&mut self, has_artwork: bool) {
        self.has_artwork = has_artwork;
    }

    #[must_use]
    pub const fn source_formats(&self) -> &BTreeSet<TagFormat> {
        &self.source_formats
    }

    pub fn add_source_format(&mut self, format: TagFormat) {
        self.source_formats.insert(format);
    }

    /// Record `value` for `field`, remembering which raw field produced it.
    ///
    /// Virtual fields only carry findings; values for them are dropped.
    pub fn add_value(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
        raw_name: impl Into<String>,
    ) {
        if field.is_virtual() {
            return;
        }
        self.fields
            .entry(field)
            .or_default()
            .entry(value.into())
            .or_default()
            .insert(raw_name.into());
    }

    /// Values of `field`, or `None` when the field is absent or has no values.
    #[must_use]
    pub fn values(&self, field: FieldName) -> Option<&FieldValues> {
        self.fields.get(&field).filter(|values| !values.is_empty())
    }

    /// Value strings of `field` in insertion order.
    pub fn value_strings(&self, field: FieldName) -> impl Iterator<Item = &str> {
        self.values(field)
            .into_iter()
            .flat_map(|values| values.keys().map(String::as_str))
    }

    #[must_use]
    pub fn has_values(&self, field: FieldName) -> bool {
        self.values(field).is_some()
    }

    /// Fields that carry at least one value, in stable field order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FieldValues)> {
        self.fields
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(name, values)| (*name, values))
    }

    /// Drop every value of `field` but keep the (now empty) entry.
    pub fn clear_values(&mut self, field: FieldName) {
        if let Some(values) = self.fields.get_mut(&field) {
            values.clear();
        }
    }

    /// Append a finding. An identical finding already recorded for the same
    /// field is not added again; returns whether the finding was added.
    pub fn add_finding(&mut self, field: FieldName, finding: Finding) -> bool {
        let entries = self.findings.entry(field).or_default();
        if entries.contains(&finding) {
            return false;
        }
        entries.push(finding);
        true
    }

    #[must_use]
    pub const fn findings(&self) -> &BTreeMap<FieldName, Vec<Finding>> {
        &self.findings
    }

    #[must_use]
    pub fn findings_for(&self, field: FieldName) -> &[Finding] {
        self.findings.get(&field).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn has_findings(&self) -> bool {
        self.findings.values().any(|f| !f.is_empty())
    }

    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.findings.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

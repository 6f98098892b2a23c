use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scanner::{FilterScope, RegexFilter, ScanConfig};
use crate::validator::ValidatorKind;

/// Contents of `.tag-guard.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanSettings,

    #[serde(default)]
    pub validators: ValidatorSettings,
}

/// `[scan]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSettings {
    /// Descend into subdirectories of the scan root.
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// Regex over file names; files that do not match are skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    #[serde(default)]
    pub filter_scope: FilterScope,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            recursive: true,
            filter: None,
            filter_scope: FilterScope::default(),
        }
    }
}

/// `[validators]`: which validators run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidatorSettings {
    #[serde(default = "default_true")]
    pub basic: bool,

    #[serde(default = "default_true")]
    pub filename: bool,

    #[serde(default = "default_true")]
    pub truncation: bool,

    #[serde(default = "default_true")]
    pub unwanted_characters: bool,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            basic: true,
            filename: true,
            truncation: true,
            unwanted_characters: true,
        }
    }
}

impl ValidatorSettings {
    #[must_use]
    pub const fn is_enabled(&self, kind: ValidatorKind) -> bool {
        match kind {
            ValidatorKind::Basic => self.basic,
            ValidatorKind::Filename => self.filename,
            ValidatorKind::LegacyTruncation => self.truncation,
            ValidatorKind::UnwantedCharacters => self.unwanted_characters,
        }
    }

    pub const fn set_enabled(&mut self, kind: ValidatorKind, enabled: bool) {
        match kind {
            ValidatorKind::Basic => self.basic = enabled,
            ValidatorKind::Filename => self.filename = enabled,
            ValidatorKind::LegacyTruncation => self.truncation = enabled,
            ValidatorKind::UnwantedCharacters => self.unwanted_characters = enabled,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> BTreeSet<ValidatorKind> {
        ValidatorKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }
}

impl Config {
    /// Build the scan configuration for `root`.
    ///
    /// # Errors
    /// Returns an error if the filter is not a valid regex.
    pub fn scan_config(&self, root: impl Into<PathBuf>) -> Result<ScanConfig> {
        let mut config = ScanConfig::new(root).recursive(self.scan.recursive);
        if let Some(pattern) = &self.scan.filter {
            config = config.filter(RegexFilter::new(pattern)?, self.scan.filter_scope);
        }
        config.enabled_validators = self.validators.enabled();
        Ok(config)
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::filter::{FileFilter, RegexFilter};
use crate::validator::ValidatorKind;

/// Directories whose children the file name filter applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterScope {
    /// Only the scan root's direct children.
    RootOnly,
    #[default]
    EveryDirectory,
}

impl FilterScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RootOnly => "root-only",
            Self::EveryDirectory => "every-directory",
        }
    }
}

impl std::str::FromStr for FilterScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "root-only" | "root" => Ok(Self::RootOnly),
            "every-directory" | "every" | "all" => Ok(Self::EveryDirectory),
            _ => Err(format!("Unknown filter scope: {s}")),
        }
    }
}

/// Everything a scan needs from its host.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub recursive: bool,
    pub filter: Option<RegexFilter>,
    pub filter_scope: FilterScope,
    pub enabled_validators: BTreeSet<ValidatorKind>,
}

impl ScanConfig {
    /// Recursive scan of `root` with every validator enabled and no filter.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
            filter: None,
            filter_scope: FilterScope::default(),
            enabled_validators: ValidatorKind::ALL.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: RegexFilter, scope: FilterScope) -> Self {
        self.filter = Some(filter);
        self.filter_scope = scope;
        self
    }

    #[must_use]
    pub fn disable(mut self, kind: ValidatorKind) -> Self {
        self.enabled_validators.remove(&kind);
        self
    }

    #[must_use]
    pub fn is_enabled(&self, kind: ValidatorKind) -> bool {
        self.enabled_validators.contains(&kind)
    }

    /// Whether a file found at `depth` below the root passes the filter.
    ///
    /// The root itself (depth 0) is never filtered.
    #[must_use]
    pub fn accepts_file(&self, path: &Path, depth: usize) -> bool {
        let Some(filter) = &self.filter else {
            return true;
        };
        let applies = match self.filter_scope {
            FilterScope::RootOnly => depth == 1,
            FilterScope::EveryDirectory => depth >= 1,
        };
        !applies || filter.should_include(path)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;

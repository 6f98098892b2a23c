use std::path::Path;

use regex::Regex;

use crate::error::{Result, TagGuardError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose name (not the full path) matches a regex.
#[derive(Debug, Clone)]
pub struct RegexFilter {
    pattern: Regex,
}

impl RegexFilter {
    /// Compile a file name filter.
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| TagGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl FileFilter for RegexFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.pattern.is_match(&name.to_string_lossy()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

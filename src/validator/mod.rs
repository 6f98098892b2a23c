mod basic;
mod charset;
mod filename;
mod markers;
mod truncation;

pub use basic::{BasicValidator, MIN_YEAR};
pub use charset::UnwantedCharacterValidator;
pub use filename::{FilenameValidator, digit_count, disc_number_width, expected_file_stem};
pub use truncation::{LEGACY_FIELD_LENGTH, LegacyTruncationValidator};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tag::GenericTag;

/// Identifies a validator in configuration and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidatorKind {
    Basic,
    Filename,
    LegacyTruncation,
    UnwantedCharacters,
}

impl ValidatorKind {
    pub const ALL: [Self; 4] = [
        Self::Basic,
        Self::Filename,
        Self::LegacyTruncation,
        Self::UnwantedCharacters,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Filename => "filename",
            Self::LegacyTruncation => "legacy-truncation",
            Self::UnwantedCharacters => "unwanted-characters",
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidatorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "basic" => Ok(Self::Basic),
            "filename" | "path" => Ok(Self::Filename),
            "legacy-truncation" | "truncation" => Ok(Self::LegacyTruncation),
            "unwanted-characters" | "charset" => Ok(Self::UnwantedCharacters),
            _ => Err(format!("Unknown validator: {s}")),
        }
    }
}

/// A check over one [`GenericTag`] that may append findings.
///
/// Validators only read field values and append findings; they never call
/// each other and never touch the fields.
pub trait Validator {
    fn kind(&self) -> ValidatorKind;

    fn validate(&self, tag: &mut GenericTag);
}

/// Validators in the order the scanner runs them.
#[must_use]
pub fn default_validators() -> Vec<Box<dyn Validator>> {
    vec![
        Box::new(BasicValidator::new()),
        Box::new(FilenameValidator),
        Box::new(LegacyTruncationValidator),
        Box::new(UnwantedCharacterValidator),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

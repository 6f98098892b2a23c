use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::field::FieldName;

/// Catalog of finding descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FindingMessage {
    ArtworkPresent,
    MissingPrimaryFields {
        /// Missing names in stable field order.
        fields: Vec<FieldName>,
    },
    EmptyValue,
    SurroundingWhitespace,
    RepeatedWhitespace,
    DiscNumberFormat,
    DiscNumberExceedsTotal {
        total: u64,
    },
    /// Both parts are well formed but too large to compare against a bound.
    DiscNumberTooLarge,
    NotANumber,
    YearFormat,
    YearOutOfRange {
        min: i32,
        max: i32,
    },
    AlbumDirectoryMismatch,
    ArtistDirectoryMismatch,
    AlbumDirectoryUndetermined,
    ArtistDirectoryUndetermined,
    FilenameUndetermined,
    FilenameMismatch,
    PossiblyTruncated {
        length: usize,
    },
    UnwantedCharacters,
}

impl fmt::Display for FindingMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtworkPresent => f.write_str("Embedded artwork is present"),
            Self::MissingPrimaryFields { fields } => {
                let names: Vec<&str> = fields.iter().map(|n| n.as_str()).collect();
                write!(f, "Missing primary fields: {}", names.join(", "))
            }
            Self::EmptyValue => f.write_str("Value is empty"),
            Self::SurroundingWhitespace => f.write_str("Value has leading or trailing whitespace"),
            Self::RepeatedWhitespace => f.write_str("Value contains consecutive whitespace"),
            Self::DiscNumberFormat => {
                f.write_str("Disc number is not in the form <current>/<total>")
            }
            Self::DiscNumberExceedsTotal { total } => {
                write!(f, "Disc number is greater than the disc total ({total})")
            }
            Self::DiscNumberTooLarge => {
                f.write_str("Disc number is greater than the disc total")
            }
            Self::NotANumber => f.write_str("Value is not a number"),
            Self::YearFormat => f.write_str("Year is not a four-digit number"),
            Self::YearOutOfRange { min, max } => {
                write!(f, "Year is outside the range {min}-{max}")
            }
            Self::AlbumDirectoryMismatch => {
                f.write_str("Album directory name does not match the album title")
            }
            Self::ArtistDirectoryMismatch => {
                f.write_str("Artist directory name does not match the artist")
            }
            Self::AlbumDirectoryUndetermined => {
                f.write_str("Cannot determine expected album directory: no album title")
            }
            Self::ArtistDirectoryUndetermined => {
                f.write_str("Cannot determine expected artist directory: no artist")
            }
            Self::FilenameUndetermined => f.write_str(
                "Cannot determine expected filename: disc number, track number or title missing",
            ),
            Self::FilenameMismatch => f.write_str("Filename does not match the tag"),
            Self::PossiblyTruncated { length } => {
                write!(f, "Value is exactly {length} characters long and may be truncated")
            }
            Self::UnwantedCharacters => {
                f.write_str("Value contains characters outside printable ASCII")
            }
        }
    }
}

/// One validation result.
///
/// Position markers are zero-based character offsets into `actual_value`,
/// kept ascending and free of repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    message: FindingMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual_value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    position_markers: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_value: Option<String>,
}

impl Finding {
    #[must_use]
    pub const fn new(message: FindingMessage) -> Self {
        Self {
            message,
            actual_value: None,
            position_markers: Vec::new(),
            expected_value: None,
        }
    }

    #[must_use]
    pub fn with_value(message: FindingMessage, actual_value: impl Into<String>) -> Self {
        Self {
            actual_value: Some(actual_value.into()),
            ..Self::new(message)
        }
    }

    /// Attach position markers. Offsets past the end of the actual value are dropped.
    #[must_use]
    pub fn markers(mut self, offsets: impl IntoIterator<Item = usize>) -> Self {
        let len = self
            .actual_value
            .as_deref()
            .map_or(0, |v| v.chars().count());
        let unique: BTreeSet<usize> = offsets.into_iter().filter(|&o| o < len).collect();
        self.position_markers = unique.into_iter().collect();
        self
    }

    #[must_use]
    pub fn expected(mut self, expected_value: impl Into<String>) -> Self {
        self.expected_value = Some(expected_value.into());
        self
    }

    #[must_use]
    pub const fn message(&self) -> &FindingMessage {
        &self.message
    }

    #[must_use]
    pub fn actual_value(&self) -> Option<&str> {
        self.actual_value.as_deref()
    }

    #[must_use]
    pub fn position_markers(&self) -> &[usize] {
        &self.position_markers
    }

    #[must_use]
    pub fn expected_value(&self) -> Option<&str> {
        self.expected_value.as_deref()
    }
}

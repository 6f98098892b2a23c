use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// On-disk tag encodings a raw tag can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagFormat {
    Id3v1,
    Id3v22,
    Id3v23,
    Id3v24,
    VorbisComment,
    Ape,
    Mp4,
    RiffInfo,
    AiffText,
}

impl TagFormat {
    /// Formats that store text in fixed 30-character slots.
    pub const LEGACY_FIXED_LENGTH: [Self; 1] = [Self::Id3v1];

    #[must_use]
    pub fn is_legacy_fixed_length(self) -> bool {
        Self::LEGACY_FIXED_LENGTH.contains(&self)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id3v1 => "ID3v1",
            Self::Id3v22 => "ID3v2.2",
            Self::Id3v23 => "ID3v2.3",
            Self::Id3v24 => "ID3v2.4",
            Self::VorbisComment => "Vorbis Comment",
            Self::Ape => "APE",
            Self::Mp4 => "MP4",
            Self::RiffInfo => "RIFF INFO",
            Self::AiffText => "AIFF Text",
        }
    }
}

impl fmt::Display for TagFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One key/value pair exactly as it was read from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub name: String,
    pub value: String,
}

impl RawField {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A format-tagged raw tag as produced by a [`TagReader`](crate::reader::TagReader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    /// Encoding of `fields`; selects the converter.
    pub format: TagFormat,
    pub fields: Vec<RawField>,
    /// Every tag encoding present in the file, `format` included.
    pub source_formats: BTreeSet<TagFormat>,
    pub has_artwork: bool,
}

impl RawTag {
    #[must_use]
    pub fn new(format: TagFormat) -> Self {
        Self {
            format,
            fields: Vec::new(),
            source_formats: BTreeSet::from([format]),
            has_artwork: false,
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(RawField::new(name, value));
        self
    }

    #[must_use]
    pub fn with_source_format(mut self, format: TagFormat) -> Self {
        self.source_formats.insert(format);
        self
    }

    #[must_use]
    pub const fn with_artwork(mut self, has_artwork: bool) -> Self {
        self.has_artwork = has_artwork;
        self
    }
}

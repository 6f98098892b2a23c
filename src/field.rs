//! Closed vocabulary of logical tag fields.
//!
//! Every converter maps raw tag keys onto these names, and every validator
//! reports its findings against one of them. The declaration order of
//! [`FieldName`] is the stable sort order used wherever field names are listed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a field participates in validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Required to be present and subject to full value validation.
    Primary,
    /// Value-validated like a primary field, but not required.
    PseudoPrimary,
    /// Anything a converter did not map.
    Other,
    /// Not a real field; only used to attach whole-tag findings.
    Virtual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldName {
    AlbumArtist,
    AlbumDiscNumber,
    AlbumGenre,
    AlbumTitle,
    AlbumTotalTracks,
    AlbumYear,
    TrackArtist,
    TrackNumber,
    TrackTitle,
    Composer,
    Other,
    Artwork,
    File,
}

impl FieldName {
    /// All primary fields, in stable order.
    pub const PRIMARY: [Self; 9] = [
        Self::AlbumArtist,
        Self::AlbumDiscNumber,
        Self::AlbumGenre,
        Self::AlbumTitle,
        Self::AlbumTotalTracks,
        Self::AlbumYear,
        Self::TrackArtist,
        Self::TrackNumber,
        Self::TrackTitle,
    ];

    pub const ALL: [Self; 13] = [
        Self::AlbumArtist,
        Self::AlbumDiscNumber,
        Self::AlbumGenre,
        Self::AlbumTitle,
        Self::AlbumTotalTracks,
        Self::AlbumYear,
        Self::TrackArtist,
        Self::TrackNumber,
        Self::TrackTitle,
        Self::Composer,
        Self::Other,
        Self::Artwork,
        Self::File,
    ];

    #[must_use]
    pub const fn class(self) -> FieldClass {
        match self {
            Self::AlbumArtist
            | Self::AlbumDiscNumber
            | Self::AlbumGenre
            | Self::AlbumTitle
            | Self::AlbumTotalTracks
            | Self::AlbumYear
            | Self::TrackArtist
            | Self::TrackNumber
            | Self::TrackTitle => FieldClass::Primary,
            Self::Composer => FieldClass::PseudoPrimary,
            Self::Other => FieldClass::Other,
            Self::Artwork | Self::File => FieldClass::Virtual,
        }
    }

    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self.class(), FieldClass::Primary)
    }

    #[must_use]
    pub const fn is_primary_or_pseudo_primary(self) -> bool {
        matches!(self.class(), FieldClass::Primary | FieldClass::PseudoPrimary)
    }

    /// `ARTWORK` and `FILE` never hold values.
    #[must_use]
    pub const fn is_virtual(self) -> bool {
        matches!(self.class(), FieldClass::Virtual)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlbumArtist => "ALBUM_ARTIST",
            Self::AlbumDiscNumber => "ALBUM_DISC_NUMBER",
            Self::AlbumGenre => "ALBUM_GENRE",
            Self::AlbumTitle => "ALBUM_TITLE",
            Self::AlbumTotalTracks => "ALBUM_TOTAL_TRACKS",
            Self::AlbumYear => "ALBUM_YEAR",
            Self::TrackArtist => "TRACK_ARTIST",
            Self::TrackNumber => "TRACK_NUMBER",
            Self::TrackTitle => "TRACK_TITLE",
            Self::Composer => "COMPOSER",
            Self::Other => "OTHER",
            Self::Artwork => "ARTWORK",
            Self::File => "FILE",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;

//! Raw tag → [`GenericTag`] conversion.
//!
//! Each converter owns a fixed key table for the raw formats it declares.
//! The scanner tries converters in registration order and keeps the first
//! success.

mod genre;
mod id3v2;
mod merge;
mod vorbis;

pub use genre::{genre_name, id3_genre_name};
pub use id3v2::{Id3v2Converter, decode_structured};
pub use merge::{DiscNumberMerge, DiscPart};
pub use vorbis::VorbisCommentConverter;

use std::collections::BTreeSet;

use thiserror::Error;

use crate::field::FieldName;
use crate::tag::{GenericTag, RawTag, TagFormat};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("{converter} converter does not support {format} tags")]
    UnsupportedFormat {
        converter: &'static str,
        format: TagFormat,
    },
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Raw field names the converter had no mapping for; their values went to `OTHER`.
    pub unknown_field_names: BTreeSet<String>,
}

pub trait TagConverter {
    fn name(&self) -> &'static str;

    fn supported_formats(&self) -> &'static [TagFormat];

    fn supports(&self, format: TagFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    /// Populate `tag` from `raw`.
    ///
    /// # Errors
    /// Returns an error if `raw` is not in a supported format; `tag` is left untouched.
    fn convert(&self, tag: &mut GenericTag, raw: &RawTag) -> Result<Conversion, ConvertError>;
}

/// Converters in the order the scanner tries them.
#[must_use]
pub fn default_converters() -> Vec<Box<dyn TagConverter>> {
    vec![Box::new(VorbisCommentConverter), Box::new(Id3v2Converter)]
}

/// Where a raw field's value goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Field(FieldName),
    Genre,
    /// `number[/total]`, split into track number and total tracks.
    TrackNumber,
    Disc(DiscPart),
}

/// Accumulates one conversion pass into a tag.
struct Populator<'a> {
    tag: &'a mut GenericTag,
    disc: DiscNumberMerge,
    unknown: BTreeSet<String>,
    id3_genres: bool,
}

impl<'a> Populator<'a> {
    fn new(tag: &'a mut GenericTag, id3_genres: bool) -> Self {
        Self {
            tag,
            disc: DiscNumberMerge::default(),
            unknown: BTreeSet::new(),
            id3_genres,
        }
    }

    fn apply(&mut self, target: Option<Target>, raw_name: &str, value: &str) {
        match target {
            Some(Target::Field(field)) => self.tag.add_value(field, value, raw_name),
            Some(Target::Genre) => {
                let genre = genre::resolve(value, self.id3_genres);
                self.tag.add_value(FieldName::AlbumGenre, genre, raw_name);
            }
            Some(Target::TrackNumber) => self.apply_track_number(raw_name, value),
            Some(Target::Disc(part)) => {
                self.disc = std::mem::take(&mut self.disc).merge(raw_name, part, value);
            }
            None => {
                self.tag.add_value(FieldName::Other, value, raw_name);
                self.unknown.insert(raw_name.to_string());
            }
        }
    }

    fn apply_track_number(&mut self, raw_name: &str, value: &str) {
        match value.split_once('/') {
            Some((number, total)) if is_digits(number) && is_digits(total) => {
                self.tag.add_value(FieldName::TrackNumber, number, raw_name);
                self.tag
                    .add_value(FieldName::AlbumTotalTracks, total, raw_name);
            }
            _ => self.tag.add_value(FieldName::TrackNumber, value, raw_name),
        }
    }

    fn finish(self) -> Conversion {
        self.disc.finish(self.tag);
        Conversion {
            unknown_field_names: self.unknown,
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

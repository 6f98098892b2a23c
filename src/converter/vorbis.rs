use tracing::trace;

use super::{Conversion, ConvertError, DiscPart, Populator, TagConverter, Target};
use crate::field::FieldName;
use crate::tag::{GenericTag, RawTag, TagFormat};

/// Converts Vorbis comments (FLAC, Ogg Vorbis, Opus).
#[derive(Debug, Clone, Copy, Default)]
pub struct VorbisCommentConverter;

const SUPPORTED: [TagFormat; 1] = [TagFormat::VorbisComment];

/// Vorbis comment keys are case-insensitive; `key` must already be upper-cased.
fn target(key: &str) -> Option<Target> {
    let field = match key {
        "DISCNUMBER" => return Some(Target::Disc(DiscPart::Number)),
        "DISCTOTAL" | "TOTALDISCS" => return Some(Target::Disc(DiscPart::Total)),
        "GENRE" => return Some(Target::Genre),
        "ALBUMARTIST" => FieldName::AlbumArtist,
        "ALBUM" => FieldName::AlbumTitle,
        "TRACKTOTAL" | "TOTALTRACKS" => FieldName::AlbumTotalTracks,
        "DATE" => FieldName::AlbumYear,
        "ARTIST" => FieldName::TrackArtist,
        "TRACKNUMBER" => FieldName::TrackNumber,
        "TITLE" => FieldName::TrackTitle,
        "COMPOSER" => FieldName::Composer,
        _ => return None,
    };
    Some(Target::Field(field))
}

impl TagConverter for VorbisCommentConverter {
    fn name(&self) -> &'static str {
        "vorbis-comment"
    }

    fn supported_formats(&self) -> &'static [TagFormat] {
        &SUPPORTED
    }

    fn convert(&self, tag: &mut GenericTag, raw: &RawTag) -> Result<Conversion, ConvertError> {
        if !self.supports(raw.format) {
            return Err(ConvertError::UnsupportedFormat {
                converter: self.name(),
                format: raw.format,
            });
        }

        let mut populator = Populator::new(tag, false);
        for field in &raw.fields {
            let key = field.name.to_ascii_uppercase();
            let target = target(&key);
            trace!(key = %key, ?target, "mapping vorbis comment");
            populator.apply(target, &key, &field.value);
        }
        Ok(populator.finish())
    }
}

#[cfg(test)]
#[path = "vorbis_tests.rs"]
mod tests;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::{Conversion, ConvertError, DiscPart, Populator, TagConverter, Target};
use crate::field::FieldName;
use crate::tag::{GenericTag, RawTag, TagFormat};

/// Head of one `name="value";` segment.
static SEGMENT_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\w+=""#).expect("valid segment head regex"));

const SEGMENT_END: &str = "\";";

/// Separator placed between the values of a structured frame.
const SEGMENT_SEPARATOR: &str = " - ";

/// Decode `name="value";name="value";...` into the values joined by `" - "`.
///
/// Values may themselves contain `";`. Each value ends at the first `";`
/// after which the rest of the input still decodes, so `Text="a";b";`
/// yields `a";b`. Returns `None` unless the whole input is a sequence of
/// segments.
#[must_use]
pub fn decode_structured(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let mut values = Vec::new();
    let mut dead_ends = HashSet::new();
    if !decode_segments(raw, 0, &mut values, &mut dead_ends) {
        return None;
    }
    Some(values.join(SEGMENT_SEPARATOR))
}

/// Decode `raw[start..]`, remembering offsets known not to decode.
fn decode_segments<'a>(
    raw: &'a str,
    start: usize,
    values: &mut Vec<&'a str>,
    dead_ends: &mut HashSet<usize>,
) -> bool {
    if start == raw.len() {
        return true;
    }
    if dead_ends.contains(&start) {
        return false;
    }
    if let Some(head) = SEGMENT_HEAD.find(&raw[start..]) {
        let body_start = start + head.end();
        for (offset, _) in raw[body_start..].match_indices(SEGMENT_END) {
            let value_end = body_start + offset;
            values.push(&raw[body_start..value_end]);
            if decode_segments(raw, value_end + SEGMENT_END.len(), values, dead_ends) {
                return true;
            }
            values.pop();
        }
    }
    dead_ends.insert(start);
    false
}

/// Converts ID3v2.2, ID3v2.3 and ID3v2.4 frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3v2Converter;

const SUPPORTED: [TagFormat; 3] = [TagFormat::Id3v22, TagFormat::Id3v23, TagFormat::Id3v24];

fn target(version: TagFormat, frame_id: &str) -> Option<Target> {
    let field = match frame_id {
        "TIT2" | "TT2" => FieldName::TrackTitle,
        "TPE1" | "TP1" => FieldName::TrackArtist,
        "TALB" | "TAL" => FieldName::AlbumTitle,
        "TCOM" | "TCM" => FieldName::Composer,
        "TRCK" | "TRK" => return Some(Target::TrackNumber),
        "TPOS" | "TPA" => return Some(Target::Disc(DiscPart::Number)),
        "TCON" | "TCO" => return Some(Target::Genre),
        _ => return versioned_target(version, frame_id).map(Target::Field),
    };
    Some(Target::Field(field))
}

/// Album artist and year moved to different frames in ID3v2.4.
fn versioned_target(version: TagFormat, frame_id: &str) -> Option<FieldName> {
    match (version, frame_id) {
        (TagFormat::Id3v24, "TPE2") | (TagFormat::Id3v22 | TagFormat::Id3v23, "TOPE" | "TOA") => {
            Some(FieldName::AlbumArtist)
        }
        (TagFormat::Id3v24, "TDRC") | (TagFormat::Id3v22 | TagFormat::Id3v23, "TYER" | "TYE") => {
            Some(FieldName::AlbumYear)
        }
        _ => None,
    }
}

impl TagConverter for Id3v2Converter {
    fn name(&self) -> &'static str {
        "id3v2"
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

        let mut populator = Populator::new(tag, true);
        for field in &raw.fields {
            let value = decode_structured(&field.value).unwrap_or_else(|| {
                debug!(
                    frame = %field.name,
                    value = %field.value,
                    "frame value is not in structured form, using it as-is"
                );
                field.value.clone()
            });
            let target = target(raw.format, &field.name);
            trace!(frame = %field.name, ?target, "mapping id3v2 frame");
            populator.apply(target, &field.name, &value);
        }
        Ok(populator.finish())
    }
}

#[cfg(test)]
#[path = "id3v2_tests.rs"]
mod tests;

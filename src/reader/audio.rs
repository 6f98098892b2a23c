use std::collections::BTreeSet;
use std::path::Path;

use id3::{Content, Frame, Version};
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};
use tracing::debug;

use super::TagReader;
use crate::error::Result;
use crate::tag::{RawField, RawTag, TagFormat};

/// Extensions handled by [`LoftyTagReader`], lower-case.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["flac", "ogg", "oga", "opus", "mp3"];

/// Reads FLAC, Ogg and MP3 files.
///
/// ID3v2 frames are read through the `id3` crate, which keeps the tag's
/// sub-version and raw frame ids. Everything else goes through `lofty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn supports_extension(&self, extension: &str) -> bool {
        SUPPORTED_EXTENSIONS
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    fn read(&self, path: &Path) -> Result<Option<RawTag>> {
        let tagged_file = Probe::open(path)?.guess_file_type()?.read()?;
        let tags = tagged_file.tags();
        if tags.is_empty() {
            return Ok(None);
        }

        let has_artwork = tags.iter().any(|tag| !tag.pictures().is_empty());
        let has_id3v2 = tags.iter().any(|tag| tag.tag_type() == TagType::Id3v2);

        let id3v2 = if has_id3v2 { read_id3v2(path)? } else { None };
        let id3v2_format = id3v2.as_ref().map(|raw| raw.format);
        let source_formats: BTreeSet<TagFormat> = tags
            .iter()
            .filter_map(|tag| tag_format(tag.tag_type(), id3v2_format))
            .collect();

        let raw = match id3v2 {
            Some(raw) => raw,
            None => {
                let tag = tags
                    .iter()
                    .find(|tag| tag.tag_type() == TagType::VorbisComments)
                    .or_else(|| tags.iter().find(|tag| tag.tag_type() != TagType::Id3v2));
                let Some(tag) = tag else {
                    return Ok(None);
                };
                let Some(format) = tag_format(tag.tag_type(), None) else {
                    debug!(path = %path.display(), tag_type = ?tag.tag_type(), "unmapped tag type");
                    return Ok(None);
                };
                lofty_raw_tag(tag, format)
            }
        };

        let has_artwork = has_artwork || raw.has_artwork;
        let raw = source_formats
            .into_iter()
            .fold(raw, RawTag::with_source_format)
            .with_artwork(has_artwork);
        Ok(Some(raw))
    }
}

fn tag_format(tag_type: TagType, id3v2: Option<TagFormat>) -> Option<TagFormat> {
    match tag_type {
        TagType::Id3v1 => Some(TagFormat::Id3v1),
        TagType::Id3v2 => Some(id3v2.unwrap_or(TagFormat::Id3v24)),
        TagType::VorbisComments => Some(TagFormat::VorbisComment),
        TagType::Ape => Some(TagFormat::Ape),
        TagType::Mp4Ilst => Some(TagFormat::Mp4),
        TagType::RiffInfo => Some(TagFormat::RiffInfo),
        TagType::AiffText => Some(TagFormat::AiffText),
        _ => None,
    }
}

/// Items of a lofty tag under the key names native to its format.
fn lofty_raw_tag(tag: &Tag, format: TagFormat) -> RawTag {
    let tag_type = tag.tag_type();
    let mut raw = RawTag::new(format);
    raw.fields.extend(tag.items().filter_map(|item| {
        let name = item.key().map_key(tag_type, true)?;
        let value = item.value().text()?;
        Some(RawField::new(name.to_uppercase(), value))
    }));
    raw
}

/// Read the ID3v2 tag of `path`, keeping frame ids as raw names.
///
/// # Errors
/// Returns an error if the tag exists but cannot be parsed.
pub(super) fn read_id3v2(path: &Path) -> Result<Option<RawTag>> {
    let tag = match id3::Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, id3::ErrorKind::NoTag) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let format = match tag.version() {
        Version::Id3v22 => TagFormat::Id3v22,
        Version::Id3v23 => TagFormat::Id3v23,
        Version::Id3v24 => TagFormat::Id3v24,
    };
    let has_artwork = tag.pictures().next().is_some();

    let mut raw = RawTag::new(format).with_artwork(has_artwork);
    raw.fields.extend(tag.frames().flat_map(frame_fields));
    Ok(Some(raw))
}

/// Render one frame in the `name="value";` structured text form.
///
/// Multi-value text frames become one raw field per value.
pub(super) fn frame_fields(frame: &Frame) -> Vec<RawField> {
    let id = frame.id();
    match frame.content() {
        Content::Text(text) => text
            .split('\0')
            .map(|value| RawField::new(id, segment("Text", value)))
            .collect(),
        Content::Link(url) => vec![RawField::new(id, segment("Url", url))],
        Content::ExtendedText(ext) => vec![RawField::new(
            id,
            segment("Description", &ext.description) + &segment("Text", &ext.value),
        )],
        Content::Comment(comment) => vec![RawField::new(
            id,
            segment("Description", &comment.description) + &segment("Text", &comment.text),
        )],
        Content::ExtendedLink(link) => vec![RawField::new(
            id,
            segment("Description", &link.description) + &segment("Url", &link.link),
        )],
        Content::Lyrics(lyrics) => vec![RawField::new(
            id,
            segment("Description", &lyrics.description) + &segment("Text", &lyrics.text),
        )],
        _ => Vec::new(),
    }
}

fn segment(name: &str, value: &str) -> String {
    format!("{name}=\"{value}\";")
}

#[cfg(test)]
#[path = "audio_tests.rs"]
mod tests;

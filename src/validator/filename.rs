use std::path::Path;

use super::{Validator, ValidatorKind};
use crate::field::FieldName;
use crate::tag::{Finding, FindingMessage, GenericTag};

/// Compares the file's location with `<artist>/<album>/<prefix> - <title>.<ext>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenameValidator;

impl Validator for FilenameValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Filename
    }

    fn validate(&self, tag: &mut GenericTag) {
        let path = tag.backing_path().to_path_buf();
        let album_dir = path.parent();
        let artist_dir = album_dir.and_then(Path::parent);

        check_directory(
            tag,
            FieldName::AlbumTitle,
            album_dir,
            FindingMessage::AlbumDirectoryMismatch,
            FindingMessage::AlbumDirectoryUndetermined,
        );

        let artist_field = if tag.has_values(FieldName::AlbumArtist) {
            FieldName::AlbumArtist
        } else {
            FieldName::TrackArtist
        };
        check_directory(
            tag,
            artist_field,
            artist_dir,
            FindingMessage::ArtistDirectoryMismatch,
            FindingMessage::ArtistDirectoryUndetermined,
        );

        check_file_name(tag, &path);
    }
}

fn check_directory(
    tag: &mut GenericTag,
    field: FieldName,
    dir: Option<&Path>,
    mismatch: FindingMessage,
    undetermined: FindingMessage,
) {
    let Some(expected) = joined_escaped(tag, field) else {
        tag.add_finding(FieldName::File, Finding::new(undetermined));
        return;
    };
    let actual = dir.map(file_name).unwrap_or_default();
    if actual != expected {
        tag.add_finding(field, Finding::with_value(mismatch, actual).expected(expected));
    }
}

fn check_file_name(tag: &mut GenericTag, path: &Path) {
    let Some(expected_stem) = expected_file_stem(tag) else {
        tag.add_finding(
            FieldName::File,
            Finding::new(FindingMessage::FilenameUndetermined),
        );
        return;
    };

    let actual_stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if actual_stem == expected_stem {
        return;
    }

    let expected = match path.extension() {
        Some(ext) => format!("{expected_stem}.{}", ext.to_string_lossy()),
        None => expected_stem,
    };
    tag.add_finding(
        FieldName::File,
        Finding::with_value(FindingMessage::FilenameMismatch, file_name(path)).expected(expected),
    );
}

/// Expected file name without extension, or `None` when disc number, disc
/// total, track number or title cannot be determined.
#[must_use]
pub fn expected_file_stem(tag: &GenericTag) -> Option<String> {
    let (disc, total) = tag
        .value_strings(FieldName::AlbumDiscNumber)
        .next()
        .and_then(parse_disc_number)?;
    let track = tag
        .value_strings(FieldName::TrackNumber)
        .next()
        .and_then(parse_number)?;
    let title = joined_escaped(tag, FieldName::TrackTitle)?;

    let width = disc_number_width(total);
    let stem = if width == 0 {
        format!("{track:02} - {title}")
    } else {
        format!("{disc:0width$}{track:02} - {title}")
    };
    Some(escape(&stem))
}

/// Zero-padded width of the disc prefix; `0` means no prefix.
#[must_use]
pub const fn disc_number_width(total: u64) -> usize {
    match total {
        0..=1 => 0,
        2..=99 => 2,
        _ => digit_count(total),
    }
}

/// Number of decimal digits in `n`.
#[must_use]
pub const fn digit_count(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn parse_disc_number(value: &str) -> Option<(u64, u64)> {
    let (current, total) = value.split_once('/')?;
    Some((parse_number(current)?, parse_number(total)?))
}

fn parse_number(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Path components must not gain extra levels from a `/` inside a value.
fn escape(value: &str) -> String {
    value.replace('/', "-")
}

fn joined_escaped(tag: &GenericTag, field: FieldName) -> Option<String> {
    if !tag.has_values(field) {
        return None;
    }
    Some(escape(&tag.value_strings(field).collect::<String>()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "filename_tests.rs"]
mod tests;

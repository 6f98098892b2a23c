use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use super::markers::{char_range, fold_whitespace, matched_offsets};
use super::{Validator, ValidatorKind};
use crate::field::FieldName;
use crate::tag::{Finding, FindingMessage, GenericTag};

/// Earliest plausible release year.
pub const MIN_YEAR: i32 = 1500;

static LEADING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+").expect("valid leading whitespace regex"));
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+$").expect("valid trailing whitespace regex"));
static REPEATED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid repeated whitespace regex"));
static DISC_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\s*/\s*([0-9]+)$").expect("valid disc number regex")
});
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year regex"));

/// Artwork presence, missing primary fields, and per-value checks
/// (emptiness, whitespace, disc/track/year formats).
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicValidator {
    current_year: Option<i32>,
}

impl BasicValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self { current_year: None }
    }

    /// Pin the upper bound of the year range instead of reading the clock.
    #[must_use]
    pub const fn with_current_year(year: i32) -> Self {
        Self {
            current_year: Some(year),
        }
    }

    fn current_year(&self) -> i32 {
        self.current_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

impl Validator for BasicValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Basic
    }

    fn validate(&self, tag: &mut GenericTag) {
        if tag.has_artwork() {
            tag.add_finding(
                FieldName::Artwork,
                Finding::new(FindingMessage::ArtworkPresent),
            );
        }

        let missing: Vec<FieldName> = FieldName::PRIMARY
            .into_iter()
            .filter(|field| !tag.has_values(*field))
            .collect();
        if !missing.is_empty() {
            tag.add_finding(
                FieldName::File,
                Finding::new(FindingMessage::MissingPrimaryFields { fields: missing }),
            );
        }

        let current_year = self.current_year();
        let findings: Vec<(FieldName, Finding)> = tag
            .fields()
            .filter(|(field, _)| field.is_primary_or_pseudo_primary())
            .flat_map(|(field, values)| {
                values.keys().flat_map(move |value| {
                    check_value(field, value, current_year)
                        .into_iter()
                        .map(move |finding| (field, finding))
                })
            })
            .collect();

        for (field, finding) in findings {
            tag.add_finding(field, finding);
        }
    }
}

/// All value-level findings for one value of `field`.
#[must_use]
pub fn check_value(field: FieldName, value: &str, current_year: i32) -> Vec<Finding> {
    if value.is_empty() {
        return vec![Finding::with_value(FindingMessage::EmptyValue, value)];
    }

    let mut findings = Vec::new();
    let folded = fold_whitespace(value);
    let trimmed = folded.trim();

    if let Some(finding) = check_surrounding_whitespace(value, &folded, trimmed) {
        findings.push(finding);
    }
    if let Some(finding) = check_repeated_whitespace(value, &folded, trimmed) {
        findings.push(finding);
    }

    match field {
        FieldName::AlbumDiscNumber => findings.extend(check_disc_number(value, trimmed)),
        FieldName::TrackNumber | FieldName::AlbumTotalTracks => {
            findings.extend(check_number(value, trimmed));
        }
        FieldName::AlbumYear => findings.extend(check_year(value, trimmed, current_year)),
        _ => {}
    }
    findings
}

fn check_surrounding_whitespace(value: &str, folded: &str, trimmed: &str) -> Option<Finding> {
    if folded.len() == trimmed.len() {
        return None;
    }
    let markers = LEADING_WHITESPACE
        .find(folded)
        .into_iter()
        .chain(TRAILING_WHITESPACE.find(folded))
        .flat_map(|m| char_range(folded, m.range()));
    Some(
        Finding::with_value(FindingMessage::SurroundingWhitespace, value)
            .markers(markers)
            .expected(trimmed),
    )
}

/// Runs are searched in the trimmed value; markers are shifted back onto `value`.
fn check_repeated_whitespace(value: &str, folded: &str, trimmed: &str) -> Option<Finding> {
    let offsets = matched_offsets(&REPEATED_WHITESPACE, trimmed);
    if offsets.is_empty() {
        return None;
    }
    let leading = folded.chars().take_while(|c| *c == ' ').count();
    let collapsed = REPEATED_WHITESPACE.replace_all(trimmed, " ");
    Some(
        Finding::with_value(FindingMessage::RepeatedWhitespace, value)
            .markers(offsets.into_iter().map(|o| o + leading))
            .expected(collapsed),
    )
}

fn check_disc_number(value: &str, trimmed: &str) -> Option<Finding> {
    let Some(caps) = DISC_NUMBER.captures(trimmed) else {
        return Some(Finding::with_value(FindingMessage::DiscNumberFormat, value));
    };
    let (current, total) = (caps.get(1)?.as_str(), caps.get(2)?.as_str());
    if compare_digits(current, total) != Ordering::Greater {
        return None;
    }

    let slash = value.chars().position(|c| c == '/').unwrap_or(0);
    let message = total.parse::<u64>().map_or(FindingMessage::DiscNumberTooLarge, |total| {
        FindingMessage::DiscNumberExceedsTotal { total }
    });
    Some(Finding::with_value(message, value).markers(0..slash))
}

/// Numeric order of two ASCII digit strings of any length.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn check_number(value: &str, trimmed: &str) -> Option<Finding> {
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(Finding::with_value(FindingMessage::NotANumber, value))
}

fn check_year(value: &str, trimmed: &str, current_year: i32) -> Option<Finding> {
    if !YEAR.is_match(trimmed) {
        return Some(Finding::with_value(FindingMessage::YearFormat, value));
    }
    let year = trimmed.parse::<i32>().ok()?;
    if (MIN_YEAR..=current_year).contains(&year) {
        return None;
    }
    Some(Finding::with_value(
        FindingMessage::YearOutOfRange {
            min: MIN_YEAR,
            max: current_year,
        },
        value,
    ))
}

#[cfg(test)]
#[path = "basic_tests.rs"]
mod tests;

use super::{Validator, ValidatorKind};
use crate::field::FieldName;
use crate::tag::{Finding, FindingMessage, GenericTag};

/// Text slot width of the legacy fixed-length formats.
pub const LEGACY_FIELD_LENGTH: usize = 30;

const CHECKED_FIELDS: [FieldName; 4] = [
    FieldName::AlbumTitle,
    FieldName::AlbumArtist,
    FieldName::TrackArtist,
    FieldName::TrackTitle,
];

/// Flags values that fill a legacy fixed-length slot exactly.
///
/// A full slot only suggests truncation, so the finding carries a single
/// marker on the last character and no suggested value.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyTruncationValidator;

impl Validator for LegacyTruncationValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::LegacyTruncation
    }

    fn validate(&self, tag: &mut GenericTag) {
        if !tag
            .source_formats()
            .iter()
            .any(|format| format.is_legacy_fixed_length())
        {
            return;
        }

        let findings: Vec<(FieldName, Finding)> = CHECKED_FIELDS
            .into_iter()
            .flat_map(|field| {
                tag.value_strings(field)
                    .filter(|value| value.chars().count() == LEGACY_FIELD_LENGTH)
                    .map(|value| {
                        let finding = Finding::with_value(
                            FindingMessage::PossiblyTruncated {
                                length: LEGACY_FIELD_LENGTH,
                            },
                            value,
                        )
                        .markers([LEGACY_FIELD_LENGTH - 1]);
                        (field, finding)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        for (field, finding) in findings {
            tag.add_finding(field, finding);
        }
    }
}

#[cfg(test)]
#[path = "truncation_tests.rs"]
mod tests;

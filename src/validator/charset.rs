use std::sync::LazyLock;

use regex::Regex;

use super::markers::matched_offsets;
use super::{Validator, ValidatorKind};
use crate::field::FieldName;
use crate::tag::{Finding, FindingMessage, GenericTag};

static UNWANTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x20-\x7E]+").expect("valid unwanted character regex"));

/// Marks every character outside printable ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwantedCharacterValidator;

impl Validator for UnwantedCharacterValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::UnwantedCharacters
    }

    fn validate(&self, tag: &mut GenericTag) {
        let findings: Vec<(FieldName, Finding)> = tag
            .fields()
            .filter(|(field, _)| field.is_primary_or_pseudo_primary())
            .flat_map(|(field, values)| {
                values.keys().filter_map(move |value| {
                    let offsets = matched_offsets(&UNWANTED, value);
                    (!offsets.is_empty()).then(|| {
                        let finding =
                            Finding::with_value(FindingMessage::UnwantedCharacters, value.as_str())
                                .markers(offsets);
                        (field, finding)
                    })
                })
            })
            .collect();

        for (field, finding) in findings {
            tag.add_finding(field, finding);
        }
    }
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod tests;

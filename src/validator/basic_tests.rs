use super::*;

const YEAR_NOW: i32 = 2026;

fn complete_tag() -> GenericTag {
    let mut tag = GenericTag::new("Band/Album/01 - Song.flac");
    tag.add_value(FieldName::AlbumArtist, "Band", "ALBUMARTIST");
    tag.add_value(FieldName::AlbumDiscNumber, "1/1", "DISCNUMBER");
    tag.add_value(FieldName::AlbumGenre, "Rock", "GENRE");
    tag.add_value(FieldName::AlbumTitle, "Album", "ALBUM");
    tag.add_value(FieldName::AlbumTotalTracks, "10", "TRACKTOTAL");
    tag.add_value(FieldName::AlbumYear, "1999", "DATE");
    tag.add_value(FieldName::TrackArtist, "Band", "ARTIST");
    tag.add_value(FieldName::TrackNumber, "1", "TRACKNUMBER");
    tag.add_value(FieldName::TrackTitle, "Song", "TITLE");
    tag
}

fn validate(tag: &mut GenericTag) {
    BasicValidator::with_current_year(YEAR_NOW).validate(tag);
}

fn messages(findings: &[Finding]) -> Vec<&FindingMessage> {
    findings.iter().map(Finding::message).collect()
}

#[test]
fn complete_tag_passes() {
    let mut tag = complete_tag();
    validate(&mut tag);
    assert!(!tag.has_findings(), "{:?}", tag.findings());
}

#[test]
fn artwork_is_reported() {
    let mut tag = complete_tag();
    tag.set_has_artwork(true);
    validate(&mut tag);
    assert_eq!(
        messages(tag.findings_for(FieldName::Artwork)),
        vec![&FindingMessage::ArtworkPresent]
    );
}

#[test]
fn missing_primary_fields_are_listed_in_order() {
    let mut tag = GenericTag::new("x.flac");
    tag.add_value(FieldName::TrackTitle, "Song", "TITLE");
    tag.add_value(FieldName::AlbumArtist, "Band", "ALBUMARTIST");
    validate(&mut tag);

    let findings = tag.findings_for(FieldName::File);
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].message(),
        &FindingMessage::MissingPrimaryFields {
            fields: vec![
                FieldName::AlbumDiscNumber,
                FieldName::AlbumGenre,
                FieldName::AlbumTitle,
                FieldName::AlbumTotalTracks,
                FieldName::AlbumYear,
                FieldName::TrackArtist,
                FieldName::TrackNumber,
            ],
        }
    );
}

#[test]
fn cleared_field_counts_as_missing() {
    let mut tag = complete_tag();
    tag.clear_values(FieldName::AlbumGenre);
    validate(&mut tag);
    assert_eq!(
        tag.findings_for(FieldName::File)[0].message(),
        &FindingMessage::MissingPrimaryFields {
            fields: vec![FieldName::AlbumGenre]
        }
    );
    assert!(tag.findings_for(FieldName::AlbumGenre).is_empty());
}

#[test]
fn empty_value_has_no_markers() {
    let findings = check_value(FieldName::TrackTitle, "", YEAR_NOW);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message(), &FindingMessage::EmptyValue);
    assert!(findings[0].position_markers().is_empty());
}

#[test]
fn surrounding_whitespace_markers_cover_both_runs() {
    // (value, leading k, trailing m)
    let cases = [
        (" a", 1, 0),
        ("a ", 0, 1),
        ("  ab   ", 2, 3),
        ("\tSong\u{00A0}", 1, 1),
        ("\u{3000}x y\n\n", 1, 2),
    ];
    for (value, k, m) in cases {
        let findings = check_value(FieldName::TrackTitle, value, YEAR_NOW);
        let finding = findings
            .iter()
            .find(|f| f.message() == &FindingMessage::SurroundingWhitespace)
            .unwrap_or_else(|| panic!("no whitespace finding for {value:?}"));
        let len = value.chars().count();
        let expected: Vec<usize> = (0..k).chain(len - m..len).collect();
        assert_eq!(finding.position_markers(), expected.as_slice(), "{value:?}");
        assert_eq!(finding.actual_value(), Some(value));
    }
}

#[test]
fn surrounding_whitespace_suggests_trimmed_value() {
    let findings = check_value(FieldName::AlbumTitle, "  Album\t", YEAR_NOW);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].expected_value(), Some("Album"));
}

#[test]
fn whitespace_only_value_is_fully_marked() {
    let findings = check_value(FieldName::AlbumTitle, "   ", YEAR_NOW);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].position_markers(), &[0, 1, 2]);
    assert_eq!(findings[0].expected_value(), Some(""));
}

#[test]
fn repeated_whitespace_runs_are_marked_and_collapsed() {
    let findings = check_value(FieldName::TrackTitle, "a  b\t\tc d", YEAR_NOW);
    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    assert_eq!(finding.message(), &FindingMessage::RepeatedWhitespace);
    assert_eq!(finding.position_markers(), &[1, 2, 4, 5]);
    assert_eq!(finding.expected_value(), Some("a b c d"));
}

#[test]
fn repeated_whitespace_markers_point_into_original_value() {
    let findings = check_value(FieldName::TrackTitle, "  a  b", YEAR_NOW);
    let messages = messages(&findings);
    assert_eq!(
        messages,
        vec![
            &FindingMessage::SurroundingWhitespace,
            &FindingMessage::RepeatedWhitespace
        ]
    );
    assert_eq!(findings[0].position_markers(), &[0, 1]);
    assert_eq!(findings[1].position_markers(), &[3, 4]);
    assert_eq!(findings[1].expected_value(), Some("a b"));
}

#[test]
fn disc_number_greater_than_total() {
    let findings = check_value(FieldName::AlbumDiscNumber, "5/3", YEAR_NOW);
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].message(),
        &FindingMessage::DiscNumberExceedsTotal { total: 3 }
    );
    assert_eq!(findings[0].position_markers(), &[0]);
}

#[test]
fn disc_number_markers_cover_everything_before_slash() {
    let findings = check_value(FieldName::AlbumDiscNumber, "12 / 3", YEAR_NOW);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].position_markers(), &[0, 1, 2]);
}

#[test]
fn disc_number_within_total_passes() {
    assert!(check_value(FieldName::AlbumDiscNumber, "3/5", YEAR_NOW).is_empty());
    assert!(check_value(FieldName::AlbumDiscNumber, "5/5", YEAR_NOW).is_empty());
    assert!(check_value(FieldName::AlbumDiscNumber, "1 / 2", YEAR_NOW).is_empty());
}

#[test]
fn disc_number_format_is_checked() {
    for value in ["abc", "1", "1/", "/2", "1/2/3", "١/٢"] {
        let findings = check_value(FieldName::AlbumDiscNumber, value, YEAR_NOW);
        assert!(
            findings
                .iter()
                .any(|f| f.message() == &FindingMessage::DiscNumberFormat),
            "{value:?}"
        );
    }
}

#[test]
fn oversized_disc_numbers_are_well_formed() {
    let findings = check_value(FieldName::AlbumDiscNumber, "99999999999999999999/1", YEAR_NOW);
    assert_eq!(
        messages(&findings),
        vec![&FindingMessage::DiscNumberExceedsTotal { total: 1 }]
    );
    assert_eq!(findings[0].position_markers(), (0..20).collect::<Vec<_>>().as_slice());

    assert!(check_value(FieldName::AlbumDiscNumber, "1/99999999999999999999", YEAR_NOW).is_empty());
    assert!(check_value(FieldName::AlbumDiscNumber, "007/7", YEAR_NOW).is_empty());

    let findings = check_value(
        FieldName::AlbumDiscNumber,
        "99999999999999999999/88888888888888888888",
        YEAR_NOW,
    );
    assert_eq!(messages(&findings), vec![&FindingMessage::DiscNumberTooLarge]);
}

#[test]
fn track_numbers_must_be_digits() {
    assert!(check_value(FieldName::TrackNumber, "07", YEAR_NOW).is_empty());
    assert!(check_value(FieldName::AlbumTotalTracks, "12", YEAR_NOW).is_empty());
    for value in ["7a", "3/12", "-1", "seven"] {
        let findings = check_value(FieldName::TrackNumber, value, YEAR_NOW);
        assert_eq!(messages(&findings), vec![&FindingMessage::NotANumber], "{value:?}");
    }
}

#[test]
fn track_number_ignores_surrounding_whitespace_for_format() {
    let findings = check_value(FieldName::TrackNumber, " 7 ", YEAR_NOW);
    assert_eq!(messages(&findings), vec![&FindingMessage::SurroundingWhitespace]);
}

#[test]
fn year_bounds_are_inclusive() {
    assert!(check_value(FieldName::AlbumYear, "1500", YEAR_NOW).is_empty());
    assert!(check_value(FieldName::AlbumYear, &YEAR_NOW.to_string(), YEAR_NOW).is_empty());
}

#[test]
fn year_out_of_range() {
    let out_of_range = FindingMessage::YearOutOfRange {
        min: MIN_YEAR,
        max: YEAR_NOW,
    };
    for value in ["1499".to_string(), (YEAR_NOW + 1).to_string()] {
        let findings = check_value(FieldName::AlbumYear, &value, YEAR_NOW);
        assert_eq!(messages(&findings), vec![&out_of_range], "{value}");
    }
}

#[test]
fn year_needs_four_digits() {
    for value in ["13", "20135", "2013-05-01", "MMXV"] {
        let findings = check_value(FieldName::AlbumYear, value, YEAR_NOW);
        assert_eq!(messages(&findings), vec![&FindingMessage::YearFormat], "{value}");
    }
}

#[test]
fn pseudo_primary_values_are_checked() {
    let mut tag = complete_tag();
    tag.add_value(FieldName::Composer, " Writer", "COMPOSER");
    validate(&mut tag);
    assert_eq!(
        messages(tag.findings_for(FieldName::Composer)),
        vec![&FindingMessage::SurroundingWhitespace]
    );
}

#[test]
fn other_values_are_not_checked() {
    let mut tag = complete_tag();
    tag.add_value(FieldName::Other, "  messy  ", "COMMENT");
    validate(&mut tag);
    assert!(!tag.has_findings());
}

#[test]
fn every_distinct_value_is_checked() {
    let mut tag = complete_tag();
    tag.add_value(FieldName::TrackArtist, "", "ARTIST");
    tag.add_value(FieldName::TrackArtist, "Two  Names", "ARTIST");
    validate(&mut tag);
    assert_eq!(
        messages(tag.findings_for(FieldName::TrackArtist)),
        vec![&FindingMessage::EmptyValue, &FindingMessage::RepeatedWhitespace]
    );
}

#[test]
fn findings_accumulate_across_steps() {
    let mut tag = GenericTag::new("x.flac");
    tag.set_has_artwork(true);
    tag.add_value(FieldName::AlbumYear, " 13", "DATE");
    validate(&mut tag);

    assert_eq!(tag.findings_for(FieldName::Artwork).len(), 1);
    assert_eq!(tag.findings_for(FieldName::File).len(), 1);
    assert_eq!(
        messages(tag.findings_for(FieldName::AlbumYear)),
        vec![&FindingMessage::SurroundingWhitespace, &FindingMessage::YearFormat]
    );
}

#[test]
fn validating_twice_does_not_duplicate() {
    let mut tag = complete_tag();
    tag.set_has_artwork(true);
    tag.add_value(FieldName::TrackTitle, "Bad  Title", "TITLE");
    validate(&mut tag);
    let first = tag.clone();
    validate(&mut tag);
    assert_eq!(tag, first);
}

#[test]
fn default_year_comes_from_clock() {
    let mut tag = complete_tag();
    BasicValidator::new().validate(&mut tag);
    assert!(!tag.has_findings());
}

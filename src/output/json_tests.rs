use serde_json::Value;

use super::*;
use crate::tag::GenericTag;

fn report() -> ScanReport {
    let mut failed = GenericTag::new("/music/Band/Album/02 - Song.flac");
    failed.add_source_format(TagFormat::VorbisComment);
    failed.add_finding(
        FieldName::AlbumDiscNumber,
        Finding::with_value(FindingMessage::DiscNumberExceedsTotal { total: 3 }, "5/3")
            .markers([0]),
    );

    let mut report = ScanReport::new();
    report
        .outcomes
        .push(FileOutcome::ChecksPassed(GenericTag::new("/music/a.flac")));
    report.outcomes.push(FileOutcome::ChecksFailed(failed));
    report.outcomes.push(FileOutcome::NotReadable {
        path: "/music/bad.mp3".into(),
        error: "truncated".to_string(),
    });
    report.outcomes.push(FileOutcome::TagNotConverted {
        path: "/music/x.ogg".into(),
        format: TagFormat::Ape,
    });
    report
}

fn parse(report: &ScanReport) -> Value {
    let output = JsonFormatter::new().with_root("/music").format(report).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn summary_counts() {
    let json = parse(&report());
    assert_eq!(json["summary"]["total_files"], 4);
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["summary"]["not_processed"], 2);
    assert_eq!(json["summary"]["findings"], 1);
}

#[test]
fn failed_file_carries_findings() {
    let json = parse(&report());
    let file = &json["files"][1];
    assert_eq!(file["path"], "Band/Album/02 - Song.flac");
    assert_eq!(file["status"], "failed");
    assert_eq!(file["source_formats"][0], "vorbis-comment");

    let finding = &file["findings"][0];
    assert_eq!(finding["field"], "ALBUM_DISC_NUMBER");
    assert_eq!(finding["detail"]["type"], "disc_number_exceeds_total");
    assert_eq!(finding["detail"]["total"], 3);
    assert_eq!(finding["actual_value"], "5/3");
    assert_eq!(finding["position_markers"], serde_json::json!([0]));
    assert!(finding.get("expected_value").is_none());
    assert!(finding["message"].as_str().unwrap().contains('3'));
}

#[test]
fn passed_file_has_no_findings_key() {
    let json = parse(&report());
    let file = &json["files"][0];
    assert_eq!(file["status"], "passed");
    assert!(file.get("findings").is_none());
}

#[test]
fn unprocessed_files_have_reason() {
    let json = parse(&report());
    assert_eq!(json["files"][2]["status"], "not_readable");
    assert_eq!(json["files"][2]["error"], "truncated");
    assert_eq!(json["files"][3]["status"], "tag_not_converted");
    assert_eq!(json["files"][3]["format"], "ape");
}

#[test]
fn unknown_field_names_are_grouped_by_format() {
    let mut report = report();
    report
        .unknown_field_names
        .insert(TagFormat::Id3v24, ["TXXX".to_string()].into());
    let json = parse(&report);
    assert_eq!(json["unknown_field_names"]["ID3v2.4"][0], "TXXX");
}

#[test]
fn unknown_field_names_omitted_when_empty() {
    let json = parse(&report());
    assert!(json.get("unknown_field_names").is_none());
}

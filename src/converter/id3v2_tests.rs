use super::*;

fn convert(raw: &RawTag) -> (GenericTag, Conversion) {
    let mut tag = GenericTag::new("Artist/Album/01 - Title.mp3");
    let conversion = Id3v2Converter.convert(&mut tag, raw).unwrap();
    (tag, conversion)
}

fn values(tag: &GenericTag, field: FieldName) -> Vec<&str> {
    tag.value_strings(field).collect()
}

#[test]
fn decode_single_segment() {
    assert_eq!(decode_structured(r#"Text="Song";"#).as_deref(), Some("Song"));
}

#[test]
fn decode_joins_segments() {
    assert_eq!(
        decode_structured(r#"Description="live";Text="Recorded in Paris";"#).as_deref(),
        Some("live - Recorded in Paris")
    );
}

#[test]
fn decode_keeps_inner_quotes_and_slashes() {
    assert_eq!(
        decode_structured(r#"Text="AC/DC say "hi"";"#).as_deref(),
        Some(r#"AC/DC say "hi""#)
    );
}

#[test]
fn decode_rejects_plain_text() {
    assert_eq!(decode_structured("Song"), None);
    assert_eq!(decode_structured(""), None);
}

#[test]
fn decode_rejects_partial_match() {
    assert_eq!(decode_structured(r#"Text="Song"; trailing"#), None);
    assert_eq!(decode_structured(r#"leading Text="Song";"#), None);
}

#[test]
fn decode_value_containing_segment_terminator() {
    assert_eq!(
        decode_structured(r#"Text="Say "Hi";Bye";"#).as_deref(),
        Some(r#"Say "Hi";Bye"#)
    );
    assert_eq!(
        decode_structured(r#"Description="a";b";Text="c";"#).as_deref(),
        Some(r#"a";b - c"#)
    );
}

#[test]
fn decode_many_terminators_without_full_match() {
    let raw = r#"Text="x";"#.repeat(40) + "tail";
    assert_eq!(decode_structured(&raw), None);
}

#[test]
fn title_with_segment_terminator_is_stored_verbatim() {
    let raw = RawTag::new(TagFormat::Id3v24).with_field("TIT2", r#"Text="Say "Hi";Bye";"#);
    let (tag, _) = convert(&raw);
    assert_eq!(values(&tag, FieldName::TrackTitle), vec![r#"Say "Hi";Bye"#]);
}

#[test]
fn maps_common_frames() {
    let raw = RawTag::new(TagFormat::Id3v24)
        .with_field("TIT2", r#"Text="Song";"#)
        .with_field("TPE1", r#"Text="Band";"#)
        .with_field("TALB", r#"Text="Album";"#)
        .with_field("TCOM", r#"Text="Writer";"#);
    let (tag, conversion) = convert(&raw);

    assert_eq!(values(&tag, FieldName::TrackTitle), vec!["Song"]);
    assert_eq!(values(&tag, FieldName::TrackArtist), vec!["Band"]);
    assert_eq!(values(&tag, FieldName::AlbumTitle), vec!["Album"]);
    assert_eq!(values(&tag, FieldName::Composer), vec!["Writer"]);
    assert!(conversion.unknown_field_names.is_empty());
}

#[test]
fn plain_value_is_used_as_is() {
    let raw = RawTag::new(TagFormat::Id3v23).with_field("TIT2", "Plain Song");
    let (tag, _) = convert(&raw);
    assert_eq!(values(&tag, FieldName::TrackTitle), vec!["Plain Song"]);
}

#[test]
fn v24_uses_tpe2_and_tdrc() {
    let raw = RawTag::new(TagFormat::Id3v24)
        .with_field("TPE2", "Album Artist")
        .with_field("TDRC", "2001")
        .with_field("TOPE", "Original")
        .with_field("TYER", "1999");
    let (tag, conversion) = convert(&raw);

    assert_eq!(values(&tag, FieldName::AlbumArtist), vec!["Album Artist"]);
    assert_eq!(values(&tag, FieldName::AlbumYear), vec!["2001"]);
    assert_eq!(values(&tag, FieldName::Other), vec!["Original", "1999"]);
    assert!(conversion.unknown_field_names.contains("TOPE"));
    assert!(conversion.unknown_field_names.contains("TYER"));
}

#[test]
fn v23_uses_tope_and_tyer() {
    let raw = RawTag::new(TagFormat::Id3v23)
        .with_field("TPE2", "Band Name")
        .with_field("TDRC", "2001")
        .with_field("TOPE", "Album Artist")
        .with_field("TYER", "1999");
    let (tag, conversion) = convert(&raw);

    assert_eq!(values(&tag, FieldName::AlbumArtist), vec!["Album Artist"]);
    assert_eq!(values(&tag, FieldName::AlbumYear), vec!["1999"]);
    assert!(conversion.unknown_field_names.contains("TPE2"));
    assert!(conversion.unknown_field_names.contains("TDRC"));
}

#[test]
fn v22_three_letter_ids_are_mapped() {
    let raw = RawTag::new(TagFormat::Id3v22)
        .with_field("TT2", "Song")
        .with_field("TP1", "Band")
        .with_field("TYE", "1987");
    let (tag, _) = convert(&raw);
    assert_eq!(values(&tag, FieldName::TrackTitle), vec!["Song"]);
    assert_eq!(values(&tag, FieldName::TrackArtist), vec!["Band"]);
    assert_eq!(values(&tag, FieldName::AlbumYear), vec!["1987"]);
}

#[test]
fn track_number_with_total_is_split() {
    let raw = RawTag::new(TagFormat::Id3v24).with_field("TRCK", r#"Text="5/12";"#);
    let (tag, _) = convert(&raw);
    assert_eq!(values(&tag, FieldName::TrackNumber), vec!["5"]);
    assert_eq!(values(&tag, FieldName::AlbumTotalTracks), vec!["12"]);
}

#[test]
fn bare_track_number_is_kept() {
    let raw = RawTag::new(TagFormat::Id3v24).with_field("TRCK", "7");
    let (tag, _) = convert(&raw);
    assert_eq!(values(&tag, FieldName::TrackNumber), vec!["7"]);
    assert!(!tag.has_values(FieldName::AlbumTotalTracks));
}

#[test]
fn malformed_track_number_is_stored_unsplit() {
    let raw = RawTag::new(TagFormat::Id3v24).with_field("TRCK", "5 of 12");
    let (tag, _) = convert(&raw);
    assert_eq!(values(&tag, FieldName::TrackNumber), vec!["5 of 12"]);
    assert!(!tag.has_values(FieldName::AlbumTotalTracks));
}

#[test]
fn disc_frames_merge() {
    let raw = RawTag::new(TagFormat::Id3v23)
        .with_field("TPOS", "1/2")
        .with_field("TPOS", "1");
    let (tag, _) = convert(&raw);
    assert_eq!(values(&tag, FieldName::AlbumDiscNumber), vec!["1/2"]);
}

#[test]
fn genre_forms_are_resolved() {
    let raw = RawTag::new(TagFormat::Id3v23)
        .with_field("TCON", "(17)")
        .with_field("TCON", r#"Text="32";"#)
        .with_field("TCON", "Shoegaze");
    let (tag, _) = convert(&raw);
    assert_eq!(
        values(&tag, FieldName::AlbumGenre),
        vec!["Rock", "Classical", "Shoegaze"]
    );
}

#[test]
fn structured_comment_goes_to_other() {
    let raw = RawTag::new(TagFormat::Id3v24)
        .with_field("COMM", r#"Description="";Text="Nice";"#);
    let (tag, conversion) = convert(&raw);
    assert_eq!(values(&tag, FieldName::Other), vec![" - Nice"]);
    assert!(conversion.unknown_field_names.contains("COMM"));
}

#[test]
fn rejects_vorbis_comments() {
    let mut tag = GenericTag::new("a.flac");
    let raw = RawTag::new(TagFormat::VorbisComment);
    assert!(Id3v2Converter.convert(&mut tag, &raw).is_err());
}

use captionparser::{
    extract_local_caption_entries, read_local_caption_document, CaptionRecord,
};

#[test]
fn test_read_local_captions() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/sample.vtt");
    let captions = extract_local_caption_entries(path);

    assert!(
        captions.is_ok(),
        "Failed to read captions: {:?}",
        captions.err()
    );
    let captions = captions.unwrap();

    assert_eq!(captions.len(), 3);
    let first = &captions[0];
    assert_eq!(first.start, "00:00:01.000");
    assert_eq!(first.end, "00:00:04.000");
    assert_eq!(first.text, "Never drink liquid nitrogen.");
    assert_eq!(
        captions[2].text,
        "Multi-line captions are joined with spaces."
    );
}

#[test]
fn test_mixed_fixture_skips_non_cue_blocks() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/mixed.vtt");
    let captions = extract_local_caption_entries(path).unwrap();

    // NOTE block, identifier-prefixed block and timing-only block are all
    // dropped without error
    assert_eq!(captions.len(), 2);
    assert_eq!(captions[0].text, "First real cue");
    assert_eq!(captions[1].text, "Second real cue");
}

#[test]
fn test_document_output_is_idempotent() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/sample.vtt");
    let first = serde_json::to_string(&read_local_caption_document(path)).unwrap();
    let second = serde_json::to_string(&read_local_caption_document(path)).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with(r#"{"captions":["#));
}

#[test]
fn test_missing_file_document() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/missing.vtt");
    let document = read_local_caption_document(path);

    assert_eq!(document.captions.len(), 1);
    assert!(matches!(
        &document.captions[0],
        CaptionRecord::Error { .. }
    ));
}

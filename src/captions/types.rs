use serde::Serialize;

/// One caption cue extracted from a WEBVTT file
#[derive(Serialize, Debug)]
pub struct CaptionEntry {
    pub start: String,
    pub end: String,
    pub text: String,
}

/// One record in the output document: either a parsed cue or the failure
/// that prevented any cues from being read
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum CaptionRecord {
    Entry(CaptionEntry),
    Error { error: String },
}

/// Top-level document written to standard output
///
/// The `captions` sequence holds either zero or more cue entries, or exactly
/// one error record when the input file could not be read.
#[derive(Serialize, Debug)]
pub struct CaptionDocument {
    pub captions: Vec<CaptionRecord>,
}

use super::parser::parse_caption_blocks;
use super::types::{CaptionDocument, CaptionEntry, CaptionRecord};
use crate::errors::{CaptionError, CaptionParserResult};
use log::info;
use std::fs;
use std::path::Path;

/// Extract caption entries from a local WEBVTT file
pub fn extract_local_caption_entries<P: AsRef<Path>>(
    path: P,
) -> CaptionParserResult<Vec<CaptionEntry>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|err| {
        CaptionError::new(format!("invalid UTF-8 in {}: {}", path.display(), err))
    })?;

    let entries = parse_caption_blocks(&content);
    info!("Extracted {} caption entries", entries.len());
    Ok(entries)
}

/// Build the output document for a local WEBVTT file
///
/// Read failures are converted into a document holding a single error
/// record, so this never fails and the caller always has something to
/// serialize.
pub fn read_local_caption_document<P: AsRef<Path>>(path: P) -> CaptionDocument {
    match extract_local_caption_entries(path) {
        Ok(entries) => CaptionDocument {
            captions: entries.into_iter().map(CaptionRecord::Entry).collect(),
        },
        Err(err) => CaptionDocument {
            captions: vec![CaptionRecord::Error {
                error: err.to_string(),
            }],
        },
    }
}

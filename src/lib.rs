pub mod captions;
pub use captions::{
    extract_local_caption_entries, parse_caption_blocks, read_local_caption_document,
    CaptionDocument, CaptionEntry, CaptionRecord,
};

pub mod errors;
pub use errors::{CaptionError, CaptionParserError, CaptionParserResult};

/// Extract caption entries from a local WEBVTT file
pub fn extract_captions<P: AsRef<std::path::Path>>(
    path: P,
) -> CaptionParserResult<Vec<CaptionEntry>> {
    captions::extract_local_caption_entries(path)
}

use super::types::CaptionEntry;
use log::debug;

/// Parse WEBVTT content into caption entries
///
/// The first blank-line separated block is the WEBVTT signature/header and
/// is always discarded. Remaining blocks must carry a timing line of the
/// form `start --> end` followed by at least one text line; blocks that
/// don't are dropped without error.
pub fn parse_caption_blocks(content: &str) -> Vec<CaptionEntry> {
    let blocks = split_blocks(content.trim());
    debug!("Split content into {} blocks", blocks.len());

    let mut entries = Vec::new();

    // Skip the header block
    for block in blocks.iter().skip(1) {
        if block.len() < 2 {
            debug!("Skipping block with {} line(s)", block.len());
            continue;
        }

        let timing_line = block[0];
        if let Some((start, end)) = timing_line.split_once(" --> ") {
            let text = block[1..].join(" ");
            entries.push(CaptionEntry {
                start: start.trim().to_string(),
                end: end.trim().to_string(),
                text: text.trim().to_string(),
            });
        } else {
            debug!("Skipping block without timing separator: {:?}", timing_line);
        }
    }

    entries
}

/// Split content into blocks separated by one or more blank lines
///
/// A line that is empty or whitespace-only acts as a separator; separators
/// never appear inside a block and never produce empty blocks.
fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

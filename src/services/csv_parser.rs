//! CSV line segmentation
//!
//! Pure splitting of raw file content into numbered [`Line`]s. No
//! validation happens here; decoding failures are the caller's concern.

use crate::types::Line;

/// Split raw content into lines, handling `\r\n` and `\n` uniformly.
/// Line numbers are 1-based; line 1 is the header.
pub fn split_lines(content: &str) -> Vec<Line> {
    content
        .split('\n')
        .enumerate()
        .map(|(idx, segment)| Line {
            number: idx + 1,
            text: segment.strip_suffix('\r').unwrap_or(segment).to_string(),
        })
        .collect()
}

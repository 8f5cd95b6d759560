//! Chunker: splits resume text into overlapping, boundary-aware segments.
//!
//! All sizes are measured in characters, not bytes. Windows end on the
//! strongest nearby boundary marker so chunks rarely cut a sentence in half.

use std::ops::Range;

use tracing::info;

/// Boundary markers in priority order. The first marker type found in the
/// back half of a window wins, even if a weaker marker sits closer to its end.
pub const BOUNDARY_MARKERS: [&str; 6] = ["\n\n", "\n", ". ", "! ", "? ", "; "];

/// Chunk size and overlap (both in characters) chosen from total text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPolicy {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl ChunkPolicy {
    /// Three-tier sizing: short resumes get small chunks, long ones larger chunks.
    pub const fn for_length(char_count: usize) -> Self {
        match char_count {
            0..=1_999 => Self {
                chunk_size: 500,
                overlap: 100,
            },
            2_000..=10_000 => Self {
                chunk_size: 1_000,
                overlap: 200,
            },
            _ => Self {
                chunk_size: 1_200,
                overlap: 250,
            },
        }
    }
}

/// Splits `text` into trimmed, non-empty chunks in text order.
///
/// Whitespace-only input yields no chunks.
pub fn chunk_text(text: &str) -> Vec<String> {
    let text = text.trim();
    let chunks: Vec<String> = chunk_spans(text)
        .into_iter()
        .map(|span| text[span].trim())
        .filter(|chunk| !chunk.is_empty())
        .map(String::from)
        .collect();

    if !chunks.is_empty() {
        let total: usize = chunks.iter().map(|c| c.chars().count()).sum();
        info!(
            "Split resume into {} chunks (avg size: {} chars)",
            chunks.len(),
            total / chunks.len()
        );
    }

    chunks
}

/// Byte ranges of every window over `text`, before trimming.
///
/// Consecutive ranges overlap by at most the policy overlap and always advance.
fn chunk_spans(text: &str) -> Vec<Range<usize>> {
    // Byte offset of every char, plus a sentinel for the end of the text.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = offsets.len() - 1;
    if char_count == 0 {
        return Vec::new();
    }

    let policy = ChunkPolicy::for_length(char_count);
    let mut spans = Vec::new();
    let mut start = 0usize;

    while start < char_count {
        let naive_end = start + policy.chunk_size;
        if naive_end >= char_count {
            spans.push(offsets[start]..text.len());
            break;
        }

        let end = find_boundary(text, &offsets, start, naive_end, policy.chunk_size);
        spans.push(offsets[start]..offsets[end]);

        let next = end.saturating_sub(policy.overlap);
        start = if next > start { next } else { end };
    }

    spans
}

/// Returns the char index where the window `[start, naive_end)` should end.
fn find_boundary(
    text: &str,
    offsets: &[usize],
    start: usize,
    naive_end: usize,
    chunk_size: usize,
) -> usize {
    let window_start = offsets[start];
    let window = &text[window_start..offsets[naive_end]];
    let earliest = start + chunk_size / 2;

    for marker in BOUNDARY_MARKERS {
        // Only the last occurrence matters: earlier ones sit even closer to `start`.
        if let Some(pos) = window.rfind(marker) {
            let marker_start = char_index(offsets, window_start + pos);
            if marker_start >= earliest {
                return marker_start + marker.len();
            }
        }
    }

    naive_end
}

/// Maps a byte offset that sits on a char boundary back to its char index.
fn char_index(offsets: &[usize], byte: usize) -> usize {
    offsets.partition_point(|&offset| offset < byte)
}

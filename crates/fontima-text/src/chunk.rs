//! Character Chunker
//!
//! The API limits how many characters one `text=` filter may carry, so the
//! inventory is split into size-bounded, order-preserving chunks. Each chunk
//! carries the minimal set of code-point ranges covering its characters.

use std::num::NonZeroUsize;

use crate::range::UnicodeRange;

/// One slice of the inventory plus the ranges that cover it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharChunk {
    chars: Vec<char>,
    ranges: Vec<UnicodeRange>,
}

impl CharChunk {
    pub fn new(chars: Vec<char>) -> Self {
        let ranges = UnicodeRange::covering(chars.iter().copied());
        Self { chars, ranges }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Characters as sent in the `text=` filter.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn ranges(&self) -> &[UnicodeRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Split `chars` into chunks of at most `max` characters, in input order.
pub fn chunk_chars(chars: &[char], max: NonZeroUsize) -> Vec<CharChunk> {
    let chunks: Vec<CharChunk> = chars
        .chunks(max.get())
        .map(|slice| CharChunk::new(slice.to_vec()))
        .collect();

    tracing::debug!(
        "Chunked {} characters into {} chunks of at most {}",
        chars.len(),
        chunks.len(),
        max
    );
    chunks
}

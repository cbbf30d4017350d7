//! Stylesheet Reassembly
//!
//! Per-chunk responses are folded together in fetch order. The API may serve
//! byte-identical blocks for different chunks; only the first copy is kept.

use indexmap::IndexSet;

use crate::block::{FontFaceBlock, parse_blocks};

/// Statistics for block deduplication
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReassemblyStats {
    /// Total blocks encountered
    pub total: u64,
    /// Unique blocks kept
    pub unique: u64,
    /// Duplicates dropped
    pub deduplicated: u64,
    /// Bytes the dropped duplicates would have added
    pub bytes_saved: u64,
}

/// Accumulates chunk CSS, keeping unique blocks in first-seen order.
#[derive(Debug, Default)]
pub struct Reassembler {
    blocks: IndexSet<String>,
    stats: ReassemblyStats,
}

impl Reassembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one chunk's CSS in. Chunks must be pushed in fetch order.
    pub fn push_chunk(&mut self, css: &str) {
        for block in parse_blocks(css) {
            self.push_block(block);
        }
    }

    pub fn push_block(&mut self, block: FontFaceBlock) {
        self.stats.total += 1;
        let len = block.text.len() as u64;

        if self.blocks.insert(block.text) {
            self.stats.unique += 1;
        } else {
            self.stats.deduplicated += 1;
            self.stats.bytes_saved += len;
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn stats(&self) -> ReassemblyStats {
        self.stats
    }

    /// The reassembled stylesheet.
    pub fn finish(self) -> String {
        tracing::debug!(
            "Reassembled {} blocks ({} duplicates, {} bytes saved)",
            self.stats.unique,
            self.stats.deduplicated,
            self.stats.bytes_saved
        );
        self.blocks.into_iter().collect()
    }
}

/// Concatenate chunk CSS in order and drop duplicate blocks.
pub fn reassemble<I, S>(chunks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut reassembler = Reassembler::new();
    for chunk in chunks {
        reassembler.push_chunk(chunk.as_ref());
    }
    reassembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(weight: u32) -> String {
        format!("@font-face {{\n  font-weight: {weight};\n}}\n")
    }

    #[test]
    fn test_first_seen_order() {
        let (x, y, z) = (block(100), block(200), block(300));
        let out = reassemble([format!("{x}{y}"), format!("{y}{z}")]);
        assert_eq!(out, format!("{x}{y}{z}"));
    }

    #[test]
    fn test_stats() {
        let mut reassembler = Reassembler::new();
        reassembler.push_chunk(&block(400));
        reassembler.push_chunk(&block(400));
        reassembler.push_chunk(&block(700));

        let stats = reassembler.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.unique, 2);
        assert_eq!(stats.deduplicated, 1);
        assert_eq!(stats.bytes_saved, block(400).len() as u64);
        assert_eq!(reassembler.len(), 2);
    }

    #[test]
    fn test_comment_is_part_of_identity() {
        let plain = block(400);
        let commented = format!("/* latin */\n{plain}");
        let out = reassemble([plain.clone(), commented.clone()]);
        assert_eq!(out, format!("{plain}{commented}"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(reassemble(Vec::<String>::new()), "");
    }
}

//! Character inventory: the characters a document actually renders.

use std::num::NonZeroUsize;

use indexmap::IndexSet;

use crate::chunk::{CharChunk, chunk_chars};

/// Ordered set of characters. First occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct CharInventory {
    atoms: IndexSet<char>,
}

// `IndexSet` equality ignores order; chunking does not.
impl PartialEq for CharInventory {
    fn eq(&self, other: &Self) -> bool {
        self.atoms.iter().eq(other.atoms.iter())
    }
}

impl Eq for CharInventory {}

impl CharInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any text, dropping repeated characters.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Add a character; returns `false` if it was already present.
    pub fn push(&mut self, c: char) -> bool {
        self.atoms.insert(c)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &IndexSet<char> {
        &self.atoms
    }

    /// Partition into chunks of at most `max_chunk_size` characters.
    pub fn chunks(&self, max_chunk_size: NonZeroUsize) -> Vec<CharChunk> {
        let atoms: Vec<char> = self.atoms.iter().copied().collect();
        chunk_chars(&atoms, max_chunk_size)
    }
}

impl FromIterator<char> for CharInventory {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for c in iter {
            inventory.push(c);
        }
        inventory
    }
}

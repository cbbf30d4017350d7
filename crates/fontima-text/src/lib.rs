//! Fontima Text
//!
//! Everything the optimizer knows about characters and font styles:
//! - Character inventories (what a document actually renders)
//! - Size-bounded chunking with per-chunk unicode ranges
//! - Molecule (page) bookkeeping for partial-failure feedback
//! - Variable font axis tags and their CSS mapping

pub mod chunk;
pub mod inventory;
pub mod molecule;
pub mod range;
pub mod variable;

pub use chunk::{CharChunk, chunk_chars};
pub use inventory::CharInventory;
pub use molecule::{ATOMS_PER_MOLECULE, Bit, molecule_bitmap, molecule_count};
pub use range::{UnicodeRange, format_ranges};
pub use variable::{AxisTag, AxisValue, CssProperty, CustomAxis, RegisteredAxis};

/// Text error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("Unknown axis tag: {0}")]
    UnknownAxisTag(String),

    #[error("Invalid value {value:?} for axis {tag}")]
    InvalidAxisValue { tag: String, value: String },
}

pub type Result<T> = std::result::Result<T, TextError>;

//! Fontima CSS
//!
//! Handling of the stylesheets served by the Google Fonts CSS API.
//!
//! The API answers with a very regular grammar:
//!
//! ```text
//! (/* comment */\n)?<selector> {\n(  <property>: <value>;\n)+}\n
//! ```
//!
//! Everything here works on that grammar through [`parse_blocks`], so the
//! rest of the pipeline never scans raw CSS text itself.

mod block;
mod inject;
mod reassemble;

pub use block::{Declaration, FontFaceBlock, parse_blocks, source_urls};
pub use inject::inject_unicode_range;
pub use reassemble::{Reassembler, ReassemblyStats, reassemble};

//! Fontima Engine
//!
//! Optimizes Google Fonts stylesheets for the characters a document actually
//! renders.
//!
//! # Pipeline
//! - Validate the stylesheet reference and split it into family values
//! - Chunk the character inventory
//! - Fetch one filtered stylesheet per chunk and style, in order
//! - Inject `unicode-range`, reassemble, drop duplicate blocks
//! - Compare CSS and WOFF2 weights with the unoptimized original
//!
//! # Example
//! ```rust,ignore
//! use fontima_engine::{Config, Optimizer};
//! use fontima_text::CharInventory;
//!
//! let optimizer = Optimizer::with_config(Config::default())?;
//! let chars = CharInventory::from_text("Hello, World!");
//! let fonts = smol::block_on(optimizer.optimize(
//!     "https://fonts.googleapis.com/css2?family=Roboto&display=swap",
//!     &chars,
//! ))?;
//! ```

mod config;
mod error;
mod optimizer;
mod reference;
mod results;
mod retriever;
mod style;
mod weight;

pub use config::{Config, DEFAULT_CHUNK_SIZE};
pub use error::{FamilyError, FetchError, OptimizeError, ReferenceError};
pub use optimizer::Optimizer;
pub use reference::{CSS_API, FamilyStyle, FamilyValue, FontReference};
pub use results::{OptimizedFont, OptimizedFontResults};
pub use retriever::CssRetriever;
pub use style::{ChunkedCssProperties, CssProperties, OptimizedFontStyle};
pub use weight::{FilesWeight, WeightReport, css_weight, total_resource_weight};

// Re-export sub-crates for advanced usage
pub use fontima_css as css;
pub use fontima_net as net;
pub use fontima_text as text;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

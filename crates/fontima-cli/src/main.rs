//! Fontima - Main Entry Point
//!
//! Optimizes a Google Fonts stylesheet for a piece of text and prints the
//! per-family results as JSON. Logs go to stderr.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use fontima_engine::net::ClientConfig;
use fontima_engine::text::CharInventory;
use fontima_engine::{Config, DEFAULT_CHUNK_SIZE, FontReference, OptimizedFont, Optimizer};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "fontima", version, about = "Optimize Google Fonts stylesheets for the text you render")]
#[command(group(ArgGroup::new("inventory").required(true).args(["text", "text_file"])))]
struct Cli {
    /// Stylesheet URL, or an embed code containing one
    reference: String,

    /// Characters to optimize for
    #[arg(long)]
    text: Option<String>,

    /// Read the characters to optimize for from a file
    #[arg(long, value_name = "PATH")]
    text_file: Option<PathBuf>,

    /// Characters per filtered request
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: NonZeroUsize,

    /// User agent sent to the API (decides the served font format)
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Write the optimized stylesheets to this file
    #[arg(long, value_name = "PATH")]
    css_out: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut client = ClientConfig::default();
        if let Some(ua) = &self.user_agent {
            client.user_agent = ua.clone();
        }
        if let Some(secs) = self.timeout {
            client.request_timeout = Duration::from_secs(secs);
        }
        Config::default().with_chunk_size(self.chunk_size).with_client(client)
    }

    fn inventory(&self) -> Result<CharInventory> {
        let text = match (&self.text, &self.text_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            (None, None) => String::new(),
        };
        Ok(CharInventory::from_text(&text))
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("Starting Fontima v{}", fontima_engine::VERSION);

    let reference = FontReference::find_in(&cli.reference)?;
    let chars = cli.inventory()?;
    let optimizer = Optimizer::with_config(cli.config()).context("failed to set up the HTTP client")?;

    let fonts = smol::block_on(optimizer.optimize_reference(&reference, &chars))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&fonts)?
    } else {
        serde_json::to_string(&fonts)?
    };
    println!("{json}");

    if let Some(path) = &cli.css_out {
        std::fs::write(path, optimized_css(&fonts)).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("Wrote optimized CSS to {}", path.display());
    }

    Ok(())
}

/// Optimized stylesheets of the families that succeeded, in family order.
fn optimized_css(fonts: &[OptimizedFont]) -> String {
    fonts
        .iter()
        .filter_map(|font| font.results.as_ref())
        .map(|results| results.optimized_css.as_str())
        .collect()
}

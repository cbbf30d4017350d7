//! Optimization pipeline
//!
//! Reference -> family values -> styles -> chunk fetches -> reassembly ->
//! weights. Every fetch is awaited before the next one starts: first-seen
//! deduplication is defined by fetch order.

use fontima_css::{Reassembler, inject_unicode_range, parse_blocks, source_urls};
use fontima_net::{HttpClient, NetError, Transport};
use fontima_text::{CharChunk, CharInventory, format_ranges, molecule_bitmap};

use crate::config::Config;
use crate::error::{FamilyError, OptimizeError};
use crate::reference::{FamilyValue, FontReference};
use crate::results::{OptimizedFont, OptimizedFontResults};
use crate::retriever::CssRetriever;
use crate::style::{CssProperties, OptimizedFontStyle};
use crate::weight::{FilesWeight, WeightReport, css_weight, total_resource_weight};

/// Runs optimizations against a [`Transport`].
#[derive(Debug)]
pub struct Optimizer<T> {
    transport: T,
    config: Config,
}

impl Optimizer<HttpClient> {
    /// Optimizer talking to the real API.
    pub fn with_config(config: Config) -> Result<Self, NetError> {
        let transport = HttpClient::with_config(config.client.clone())?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> Optimizer<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate `reference` and optimize every family in it for `chars`.
    pub async fn optimize(&self, reference: &str, chars: &CharInventory) -> Result<Vec<OptimizedFont>, OptimizeError> {
        let reference = FontReference::validate(reference)?;
        self.optimize_reference(&reference, chars).await
    }

    /// Optimize every family of an already validated reference.
    ///
    /// A failing family gets an error entry; the others are unaffected.
    pub async fn optimize_reference(
        &self,
        reference: &FontReference,
        chars: &CharInventory,
    ) -> Result<Vec<OptimizedFont>, OptimizeError> {
        if chars.is_empty() {
            return Err(OptimizeError::EmptyInventory);
        }

        let chunks = chars.chunks(self.config.chunk_size);
        let families = reference.family_values();
        tracing::info!(
            "Optimizing {} families for {} characters ({} chunks)",
            families.len(),
            chars.len(),
            chunks.len()
        );

        let mut fonts = Vec::with_capacity(families.len());
        for (id, value) in families.iter().enumerate() {
            let outcome = self.optimize_chunks(value, chars.len(), &chunks).await;
            fonts.push(OptimizedFont::from_outcome(id, value.family_name(), outcome));
        }
        Ok(fonts)
    }

    /// Optimize a single family for its own inventory.
    pub async fn optimize_family(
        &self,
        value: &FamilyValue,
        chars: &CharInventory,
    ) -> Result<OptimizedFontResults, FamilyError> {
        if chars.is_empty() {
            return Err(FamilyError::NothingToOptimize);
        }
        let chunks = chars.chunks(self.config.chunk_size);
        self.optimize_chunks(value, chars.len(), &chunks).await
    }

    async fn optimize_chunks(
        &self,
        value: &FamilyValue,
        total_atoms: usize,
        chunks: &[CharChunk],
    ) -> Result<OptimizedFontResults, FamilyError> {
        let family = value.family_name();
        let outcome = self.run_family(value, total_atoms, chunks).await;

        match &outcome {
            Ok(results) => {
                let weight = results.weight_report;
                tracing::info!(
                    "{}: {} styles, saved {} CSS bytes and {} WOFF2 bytes",
                    family,
                    results.styles.len(),
                    weight.css.difference,
                    weight.woff2.difference
                );
                if weight.css.is_regression() || weight.woff2.is_regression() {
                    tracing::warn!("{}: optimized files are larger than the originals", family);
                }
            }
            Err(err) => match std::error::Error::source(err) {
                Some(source) => tracing::warn!("{}: {} ({})", family, err, source),
                None => tracing::warn!("{}: {}", family, err),
            },
        }
        outcome
    }

    async fn run_family(
        &self,
        value: &FamilyValue,
        total_atoms: usize,
        chunks: &[CharChunk],
    ) -> Result<OptimizedFontResults, FamilyError> {
        let retriever = CssRetriever::new(&self.transport);
        let styles = value.styles()?;
        let unicode_ranges: Vec<String> = chunks.iter().map(|c| format_ranges(c.ranges())).collect();

        let mut family_css = Reassembler::new();
        let mut optimized_styles = Vec::with_capacity(styles.len());
        let mut optimized_atoms = 0;

        for style in &styles {
            let reference = style.value.reference();
            let mut style_css = Reassembler::new();
            optimized_atoms = 0;

            for (index, chunk) in chunks.iter().enumerate() {
                tracing::debug!("{}: chunk {}/{} ({} chars)", style.value, index + 1, chunks.len(), chunk.len());
                let css = retriever
                    .fetch_chunk_css(&reference, &chunk.text())
                    .await
                    .map_err(FamilyError::from_css_fetch)?;

                let css = inject_unicode_range(&css, chunk.ranges());
                style_css.push_chunk(&css);
                family_css.push_chunk(&css);
                optimized_atoms += chunk.len();
            }

            let properties = CssProperties::from_axes(&style.axes)?.with_unicode_ranges(unicode_ranges.clone());
            optimized_styles.push(OptimizedFontStyle::new(properties, &style_css.finish()));
        }

        let optimized_css = family_css.finish();
        let weight_report = self.weigh(&retriever, value, &optimized_css).await?;

        Ok(OptimizedFontResults {
            char_molecules_bitmap: molecule_bitmap(total_atoms, optimized_atoms),
            weight_report,
            optimized_css,
            styles: optimized_styles,
        })
    }

    async fn weigh(
        &self,
        retriever: &CssRetriever<'_, T>,
        value: &FamilyValue,
        optimized_css: &str,
    ) -> Result<FilesWeight, FamilyError> {
        let original_css = retriever
            .fetch_css(&value.reference())
            .await
            .map_err(FamilyError::from_css_fetch)?;

        let original_urls = source_urls(&parse_blocks(&original_css));
        let optimized_urls = source_urls(&parse_blocks(optimized_css));

        let default_woff2 = total_resource_weight(retriever, &original_urls)
            .await
            .map_err(FamilyError::from_weight_fetch)?;
        let optimized_woff2 = total_resource_weight(retriever, &optimized_urls)
            .await
            .map_err(FamilyError::from_weight_fetch)?;

        Ok(FilesWeight {
            css: WeightReport::new(css_weight(&original_css), css_weight(optimized_css)),
            woff2: WeightReport::new(default_woff2, optimized_woff2),
        })
    }
}

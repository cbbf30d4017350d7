//! Weight Accountant
//!
//! Before/after byte sizes of the stylesheet and of the font files it
//! references.

use fontima_net::Transport;
use serde::Serialize;

use crate::error::FetchError;
use crate::retriever::CssRetriever;

/// Sizes in bytes. `difference` is `default - optimized` and may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeightReport {
    pub default: u64,
    pub optimized: u64,
    pub difference: i64,
}

impl WeightReport {
    pub fn new(default: u64, optimized: u64) -> Self {
        Self {
            default,
            optimized,
            difference: default as i64 - optimized as i64,
        }
    }

    /// The optimized side came out larger than the original.
    pub fn is_regression(&self) -> bool {
        self.difference < 0
    }
}

/// CSS and WOFF2 weights of one family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilesWeight {
    pub css: WeightReport,
    pub woff2: WeightReport,
}

/// UTF-8 size of a stylesheet.
pub fn css_weight(css: &str) -> u64 {
    css.len() as u64
}

/// Sum of the declared sizes of `urls`, fetched one after another.
///
/// The first failure aborts the sum; no partial total is returned.
pub async fn total_resource_weight<T: Transport>(
    retriever: &CssRetriever<'_, T>,
    urls: &[String],
) -> Result<u64, FetchError> {
    let mut total = 0;
    for url in urls {
        total += retriever.fetch_resource_byte_size(url).await?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_savings() {
        let report = WeightReport::new(1000, 400);
        assert_eq!(
            report,
            WeightReport {
                default: 1000,
                optimized: 400,
                difference: 600
            }
        );
        assert!(!report.is_regression());
    }

    #[test]
    fn test_report_negative_difference_kept() {
        let report = WeightReport::new(400, 1000);
        assert_eq!(report.difference, -600);
        assert!(report.is_regression());
    }

    #[test]
    fn test_css_weight_counts_bytes() {
        assert_eq!(css_weight(""), 0);
        assert_eq!(css_weight("abc"), 3);
        assert_eq!(css_weight("é"), 2);
    }
}

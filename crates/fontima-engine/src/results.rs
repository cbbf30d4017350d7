//! Result types handed back to the caller.

use fontima_text::Bit;
use serde::Serialize;

use crate::error::FamilyError;
use crate::style::OptimizedFontStyle;
use crate::weight::FilesWeight;

/// Everything produced for one successfully optimized family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedFontResults {
    /// `1` for every molecule whose atoms were all optimized.
    pub char_molecules_bitmap: Vec<Bit>,
    pub weight_report: FilesWeight,
    pub optimized_css: String,
    pub styles: Vec<OptimizedFontStyle>,
}

/// One entry per requested family, in request order.
///
/// Exactly one of `error_message` and `results` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedFont {
    pub id: usize,
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<OptimizedFontResults>,
}

impl OptimizedFont {
    pub fn from_outcome(id: usize, family: String, outcome: Result<OptimizedFontResults, FamilyError>) -> Self {
        let (error_message, results) = match outcome {
            Ok(results) => (None, Some(results)),
            Err(err) => (Some(err.to_string()), None),
        };
        Self {
            id,
            family,
            error_message,
            results,
        }
    }

    pub fn is_optimized(&self) -> bool {
        self.results.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_entry() {
        let font = OptimizedFont::from_outcome(1, "Roboto".into(), Err(FamilyError::SubsetDeclined));
        assert!(!font.is_optimized());
        assert_eq!(
            font.error_message.as_deref(),
            Some("this font couldn't be optimized by Google Fonts")
        );
    }
}

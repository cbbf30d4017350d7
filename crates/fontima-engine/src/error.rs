//! Error types
//!
//! Run-level failures abort everything; family-level failures only replace
//! that family's results with an error message.

use fontima_net::NetError;

/// The input is not a Google Fonts stylesheet reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid Google Fonts reference: {0}")]
pub struct ReferenceError(pub String);

/// Outcome classes of a single remote fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Google Fonts declined to subset this font")]
    SubsetDeclined,

    #[error(transparent)]
    Transport(#[from] NetError),
}

/// Why one family could not be optimized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FamilyError {
    #[error("invalid family value: {0}")]
    InvalidFamily(String),

    #[error("nothing to optimize")]
    NothingToOptimize,

    #[error("this font couldn't be optimized by Google Fonts")]
    SubsetDeclined,

    #[error("failed to fetch CSS files")]
    CssTransport(#[source] NetError),

    #[error("failed to fetch WOFF2 files")]
    WeightTransport(#[source] NetError),
}

impl FamilyError {
    pub(crate) fn from_css_fetch(err: FetchError) -> Self {
        match err {
            FetchError::SubsetDeclined => FamilyError::SubsetDeclined,
            FetchError::Transport(e) => FamilyError::CssTransport(e),
        }
    }

    pub(crate) fn from_weight_fetch(err: FetchError) -> Self {
        match err {
            FetchError::SubsetDeclined => FamilyError::SubsetDeclined,
            FetchError::Transport(e) => FamilyError::WeightTransport(e),
        }
    }
}

impl From<fontima_text::TextError> for FamilyError {
    fn from(err: fontima_text::TextError) -> Self {
        FamilyError::InvalidFamily(err.to_string())
    }
}

/// Failures that stop the whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimizeError {
    #[error(transparent)]
    InvalidReference(#[from] ReferenceError),

    #[error("nothing to optimize: the character inventory is empty")]
    EmptyInventory,
}

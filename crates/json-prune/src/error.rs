use thiserror::Error;

/// Errors raised while turning an input into a tree, or a tree into text.
///
/// The pruning engines themselves never fail: missing fields, type
/// mismatches and empty path sets are handled by silently doing less.
#[derive(Error, Debug)]
pub enum PruneError {
    /// A value could not be written as JSON text.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Input text is not valid JSON.
    #[error("parse failed: {0}")]
    Parse(#[source] serde_json::Error),
}

impl PruneError {
    /// True for [`PruneError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, PruneError::Parse(_))
    }

    /// True for [`PruneError::Serialization`].
    pub fn is_serialization(&self) -> bool {
        matches!(self, PruneError::Serialization(_))
    }
}

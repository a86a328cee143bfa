//! Error types for trace generation.

use morimizu_types::ParseEnumError;

/// Failure modes of the trace generator and its input validation.
///
/// Generation either completes fully or fails before any snapshot is
/// produced, so there is no partial-trace variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// The input sequence or a request parameter was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The algorithm key does not name a supported algorithm.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl From<ParseEnumError> for TraceError {
    fn from(err: ParseEnumError) -> Self {
        if err.kind == "algorithm" {
            Self::UnsupportedAlgorithm(err.value)
        } else {
            Self::InvalidInput(err.to_string())
        }
    }
}

use thiserror::Error;

// Error type for word graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Error when a Hamming comparison is requested for words of different
    /// lengths. All words in one graph share a single length, so hitting
    /// this indicates a caller bug rather than bad input.
    #[error("word length mismatch: {left:?} vs {right:?}")]
    LengthMismatch { left: String, right: String },
}

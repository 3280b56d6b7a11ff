use thiserror::Error;

// Error type for ladder search operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Error when a query word was never included in the graph. Distinct
    /// from an unreachable word, which exists but has no ladder to it.
    #[error("no such word in graph: {0:?}")]
    NodeNotFound(String),

    /// Error when the graph contains no words to search over.
    #[error("word graph is empty, cannot search")]
    EmptyGraph,
}

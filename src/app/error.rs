use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Graph error: {0}")]
    Graph(#[from] crate::graph::GraphError),
    #[error("Search error: {0}")]
    Search(#[from] crate::search::SearchError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("Usage error: {0}")]
    Usage(String),
}

impl AppError {
    /// Returns whether the error is a command-line usage error, which maps
    /// to exit code 2 rather than 1.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::Usage(_))
    }
}

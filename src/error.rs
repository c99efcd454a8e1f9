use thiserror::Error;

/// Lectio error types
#[derive(Error, Debug)]
pub enum LectioError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Locale error: {0}")]
    Locale(String),

    #[error("Plan file error: {0}")]
    Plan(String),

    #[error("Unknown book: {0}")]
    UnknownBook(String),

    #[error("No book follows '{0}' in the catalog")]
    EndOfCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Lectio operations
pub type Result<T> = std::result::Result<T, LectioError>;

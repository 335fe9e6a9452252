use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Vocabulary must contain at least one word")]
    EmptyVocabulary,
    #[error("Failed to read or write dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid request line: {0}")]
    Json(#[from] serde_json::Error),
}

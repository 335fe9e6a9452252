use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Results file not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("No successful results to analyze")]
    EmptyResultSet,
    #[error("Failed to read or write results: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart rendering is not available in this build")]
    Unavailable,
    #[error("Nothing to plot")]
    NoData,
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to prepare chart output: {0}")]
    Io(#[from] std::io::Error),
}

mod analysis_config;
mod analysis_error;
mod loader;
mod matrix;
mod record;
mod report;
mod scatter;
mod summary;

pub use analysis_config::AnalysisConfig;
pub use analysis_error::AnalysisError;
pub use loader::{
    HEADER_MARKER, SUCCESS_STATUS, find_header, load_records,
    load_records_from_path, load_records_from_str,
};
pub use matrix::ThroughputMatrix;
pub use record::BenchmarkRecord;
pub use report::render_summary;
pub use scatter::{ScatterPoint, scatter_points};
pub use summary::{GroupStat, Summary, ValueRange, summarize};

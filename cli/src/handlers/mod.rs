mod analyze;
mod generate;

pub use analyze::{AnalysisOutcome, handle_analyze, run_analysis};
pub use generate::{handle_generate, write_requests};

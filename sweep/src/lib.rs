pub mod chart;
pub mod dataset;
pub mod results;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

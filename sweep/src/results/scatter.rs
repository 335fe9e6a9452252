use crate::results::BenchmarkRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    /// ISL + OSL
    pub total_length: u64,
    pub throughput: f64,
}

pub fn scatter_points(records: &[BenchmarkRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|record| ScatterPoint {
            total_length: record.total_length(),
            throughput: record.throughput,
        })
        .collect()
}

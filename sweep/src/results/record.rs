/// One successful row of a benchmark sweep log.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub isl: u64,
    pub osl: u64,
    pub requests: u64,
    /// Tokens per second.
    pub throughput: f64,
    /// Milliseconds.
    pub latency: f64,
}

impl BenchmarkRecord {
    pub fn total_length(&self) -> u64 {
        self.isl + self.osl
    }
}

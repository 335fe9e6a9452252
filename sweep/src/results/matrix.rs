use std::io::Write;

use crate::results::{AnalysisError, BenchmarkRecord};

/// Dense ISL × OSL throughput grid.
///
/// Rows follow `isl_axis`, columns follow `osl_axis`, both ascending and
/// distinct. Pairs absent from the input hold `0.0`; when several records
/// share a pair, the last one in input order wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputMatrix {
    isl_axis: Vec<u64>,
    osl_axis: Vec<u64>,
    cells: Vec<f64>,
}

fn sorted_axis(values: impl Iterator<Item = u64>) -> Vec<u64> {
    let mut axis = values.collect::<Vec<u64>>();
    axis.sort_unstable();
    axis.dedup();
    axis
}

impl ThroughputMatrix {
    pub fn build(records: &[BenchmarkRecord]) -> Self {
        let isl_axis = sorted_axis(records.iter().map(|record| record.isl));
        let osl_axis = sorted_axis(records.iter().map(|record| record.osl));
        let mut cells = vec![0.0; isl_axis.len() * osl_axis.len()];

        for record in records {
            let (Ok(row), Ok(column)) = (
                isl_axis.binary_search(&record.isl),
                osl_axis.binary_search(&record.osl),
            ) else {
                continue;
            };
            cells[row * osl_axis.len() + column] = record.throughput;
        }

        Self {
            isl_axis,
            osl_axis,
            cells,
        }
    }

    pub fn isl_axis(&self) -> &[u64] {
        &self.isl_axis
    }

    pub fn osl_axis(&self) -> &[u64] {
        &self.osl_axis
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.isl_axis.len(), self.osl_axis.len())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at grid position, `None` outside the grid.
    pub fn value(
        &self,
        row: usize,
        column: usize,
    ) -> Option<f64> {
        if row >= self.isl_axis.len() || column >= self.osl_axis.len() {
            return None;
        }
        self.cells.get(row * self.osl_axis.len() + column).copied()
    }

    /// Cell for an `(isl, osl)` pair, `None` if either value is off-axis.
    pub fn get(
        &self,
        isl: u64,
        osl: u64,
    ) -> Option<f64> {
        let row = self.isl_axis.binary_search(&isl).ok()?;
        let column = self.osl_axis.binary_search(&osl).ok()?;
        self.value(row, column)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.osl_axis.len().max(1))
    }

    pub fn max_value(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Writes `ISL,<osl...>` followed by one row per ISL value.
    pub fn write_csv<W: Write>(
        &self,
        writer: W,
    ) -> Result<(), AnalysisError> {
        let mut writer = csv::Writer::from_writer(writer);

        let header = std::iter::once("ISL".to_string())
            .chain(self.osl_axis.iter().map(|osl| osl.to_string()));
        writer.write_record(header)?;

        for (isl, row) in self.isl_axis.iter().zip(self.rows()) {
            let record = std::iter::once(isl.to_string())
                .chain(row.iter().map(|value| value.to_string()));
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        isl: u64,
        osl: u64,
        throughput: f64,
    ) -> BenchmarkRecord {
        BenchmarkRecord {
            isl,
            osl,
            requests: 1,
            throughput,
            latency: 1.0,
        }
    }

    #[test]
    fn test_empty_input_builds_empty_matrix() {
        let matrix = ThroughputMatrix::build(&[]);
        assert!(matrix.is_empty());
        assert_eq!(matrix.shape(), (0, 0));
        assert_eq!(matrix.rows().count(), 0);
        assert_eq!(matrix.max_value(), 0.0);
    }

    #[test]
    fn test_value_outside_grid() {
        let matrix = ThroughputMatrix::build(&[
            record(128, 64, 1.0),
            record(128, 128, 2.0),
            record(256, 64, 3.0),
            record(256, 128, 4.0),
        ]);

        assert_eq!(matrix.value(0, 1), Some(2.0));
        assert_eq!(matrix.value(1, 0), Some(3.0));
        assert_eq!(matrix.value(0, 2), None);
        assert_eq!(matrix.value(2, 0), None);
        assert_eq!(ThroughputMatrix::build(&[]).value(0, 0), None);
    }

    #[test]
    fn test_write_csv() {
        let matrix = ThroughputMatrix::build(&[
            record(256, 64, 30.5),
            record(128, 128, 20.0),
        ]);

        let mut buffer = Vec::new();
        matrix.write_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(csv, "ISL,64,128\n128,0,20\n256,30.5,0\n");
    }
}

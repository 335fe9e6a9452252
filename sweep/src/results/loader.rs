use std::{fs, io, path::Path};

use csv::{ReaderBuilder, StringRecord};

use crate::results::{AnalysisError, BenchmarkRecord};

/// Prefix of the header row; everything above it is banner text.
pub const HEADER_MARKER: &str = "ISL,OSL";
pub const SUCCESS_STATUS: &str = "SUCCESS";

const ISL_COLUMN: &str = "ISL";
const OSL_COLUMN: &str = "OSL";
const REQUESTS_COLUMN: &str = "Requests";
const STATUS_COLUMN: &str = "Status";
const THROUGHPUT_COLUMN: &str = "Throughput(tokens/sec)";
const LATENCY_COLUMN: &str = "Latency(ms)";

struct ColumnIndex {
    isl: usize,
    osl: usize,
    requests: usize,
    status: usize,
    throughput: usize,
    latency: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Option<Self> {
        let position =
            |name: &str| headers.iter().position(|header| header == name);

        Some(Self {
            isl: position(ISL_COLUMN)?,
            osl: position(OSL_COLUMN)?,
            requests: position(REQUESTS_COLUMN)?,
            status: position(STATUS_COLUMN)?,
            throughput: position(THROUGHPUT_COLUMN)?,
            latency: position(LATENCY_COLUMN)?,
        })
    }

    fn parse(
        &self,
        row: &StringRecord,
    ) -> Option<BenchmarkRecord> {
        if row.get(self.status)? != SUCCESS_STATUS {
            return None;
        }

        Some(BenchmarkRecord {
            isl: parse_count(row, self.isl)?,
            osl: parse_count(row, self.osl)?,
            requests: parse_count(row, self.requests)?,
            throughput: parse_metric(row, self.throughput)?,
            latency: parse_metric(row, self.latency)?,
        })
    }
}

fn parse_count(
    row: &StringRecord,
    index: usize,
) -> Option<u64> {
    row.get(index)?.trim().parse().ok()
}

fn parse_metric(
    row: &StringRecord,
    index: usize,
) -> Option<f64> {
    let value: f64 = row.get(index)?.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Index of the first line starting with [`HEADER_MARKER`].
pub fn find_header<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines.iter().position(|line| line.as_ref().starts_with(HEADER_MARKER))
}

/// Extracts the successful rows of a sweep log, in source order.
///
/// A log without a header yields no records. Rows whose status is not
/// `SUCCESS`, or whose numeric fields do not parse, are skipped.
pub fn load_records<S: AsRef<str>>(lines: &[S]) -> Vec<BenchmarkRecord> {
    let Some(header_index) = find_header(lines) else {
        log::debug!("No \"{}\" header found in results log", HEADER_MARKER);
        return Vec::new();
    };
    log::debug!("Results header found at line {}", header_index + 1);

    let table = lines[header_index..]
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(table.as_bytes());
    let columns = match reader.headers() {
        Ok(headers) => ColumnIndex::from_headers(headers),
        Err(_) => None,
    };
    let Some(columns) = columns else {
        log::debug!("Results header is missing required columns");
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        match row.ok().and_then(|row| columns.parse(&row)) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    log::debug!(
        "Loaded {} successful rows, skipped {} rows",
        records.len(),
        skipped
    );

    records
}

pub fn load_records_from_str(text: &str) -> Vec<BenchmarkRecord> {
    load_records(&text.lines().collect::<Vec<&str>>())
}

pub fn load_records_from_path(
    path: &Path,
) -> Result<Vec<BenchmarkRecord>, AnalysisError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(AnalysisError::MissingInput(path.to_path_buf()));
        },
        Err(error) => return Err(error.into()),
    };
    log::info!("Reading results from {}", path.display());

    // Undecodable bytes become U+FFFD; rows containing them fail coercion.
    Ok(load_records_from_str(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_header_skips_banner() {
        let lines = [
            "TensorRT-LLM sweep",
            "date: 2024-01-01",
            "ISL,OSL,Requests,Status,Throughput(tokens/sec),Latency(ms)",
            "128,128,10,SUCCESS,100.0,10.0",
        ];
        assert_eq!(find_header(&lines), Some(2));
    }

    #[test]
    fn test_find_header_requires_line_prefix() {
        let lines = [" ISL,OSL,Requests", "# ISL,OSL", "isl,osl"];
        assert_eq!(find_header(&lines), None);
    }

    #[test]
    fn test_parse_metric_rejects_non_finite() {
        let row = StringRecord::from(vec!["NaN", "inf", "-1.5", " 2.5 "]);
        assert_eq!(parse_metric(&row, 0), None);
        assert_eq!(parse_metric(&row, 1), None);
        assert_eq!(parse_metric(&row, 2), None);
        assert_eq!(parse_metric(&row, 3), Some(2.5));
        assert_eq!(parse_metric(&row, 4), None);
    }

    #[test]
    fn test_header_without_required_columns_yields_nothing() {
        let text = "ISL,OSL,Status\n128,128,SUCCESS\n";
        assert!(load_records_from_str(text).is_empty());
    }

    #[test]
    fn test_status_must_match_exactly() {
        let text = "ISL,OSL,Requests,Status,Throughput(tokens/sec),Latency(ms)\n\
                    128,128,10,success,100.0,10.0\n\
                    128,256,10, SUCCESS,100.0,10.0\n\
                    256,256,10,SUCCESS,200.0,20.0\n";
        let records = load_records_from_str(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].isl, 256);
    }
}

use std::collections::BTreeMap;

use crate::results::{AnalysisError, BenchmarkRecord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |range, value| {
            Some(match range {
                None => ValueRange {
                    min: value,
                    max: value,
                },
                Some(ValueRange {
                    min,
                    max,
                }) => ValueRange {
                    min: min.min(value),
                    max: max.max(value),
                },
            })
        })
    }
}

/// Mean throughput of all records sharing one ISL or OSL value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStat {
    pub mean_throughput: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub throughput_range: ValueRange,
    pub latency_range: ValueRange,
    pub mean_throughput: f64,
    pub mean_latency: f64,
    /// First record with the highest throughput.
    pub best_throughput: BenchmarkRecord,
    /// First record with the lowest latency.
    pub lowest_latency: BenchmarkRecord,
    pub by_isl: BTreeMap<u64, GroupStat>,
    pub by_osl: BTreeMap<u64, GroupStat>,
}

fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }

    Some(data.iter().sum::<f64>() / data.len() as f64)
}

fn group_by<F>(
    records: &[BenchmarkRecord],
    key: F,
) -> BTreeMap<u64, GroupStat>
where
    F: Fn(&BenchmarkRecord) -> u64,
{
    let mut groups: BTreeMap<u64, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record.throughput);
    }

    groups
        .into_iter()
        .filter_map(|(key, throughputs)| {
            let stat = GroupStat {
                mean_throughput: mean(&throughputs)?,
                count: throughputs.len(),
            };
            Some((key, stat))
        })
        .collect()
}

/// Aggregates a non-empty record set.
///
/// Returns [`AnalysisError::EmptyResultSet`] for an empty slice; callers are
/// expected to short-circuit before that point.
pub fn summarize(
    records: &[BenchmarkRecord],
) -> Result<Summary, AnalysisError> {
    let throughputs =
        records.iter().map(|record| record.throughput).collect::<Vec<f64>>();
    let latencies =
        records.iter().map(|record| record.latency).collect::<Vec<f64>>();

    let mean_throughput =
        mean(&throughputs).ok_or(AnalysisError::EmptyResultSet)?;
    let mean_latency = mean(&latencies).ok_or(AnalysisError::EmptyResultSet)?;
    let throughput_range = ValueRange::of(throughputs.iter().copied())
        .ok_or(AnalysisError::EmptyResultSet)?;
    let latency_range = ValueRange::of(latencies.iter().copied())
        .ok_or(AnalysisError::EmptyResultSet)?;

    // Strict comparisons keep the earliest record on ties.
    let best_throughput = records
        .iter()
        .reduce(|best, record| {
            if record.throughput > best.throughput {
                record
            } else {
                best
            }
        })
        .ok_or(AnalysisError::EmptyResultSet)?;
    let lowest_latency = records
        .iter()
        .reduce(|best, record| {
            if record.latency < best.latency {
                record
            } else {
                best
            }
        })
        .ok_or(AnalysisError::EmptyResultSet)?;

    Ok(Summary {
        count: records.len(),
        throughput_range,
        latency_range,
        mean_throughput,
        mean_latency,
        best_throughput: best_throughput.clone(),
        lowest_latency: lowest_latency.clone(),
        by_isl: group_by(records, |record| record.isl),
        by_osl: group_by(records, |record| record.osl),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }

    #[test]
    fn test_value_range() {
        let range = ValueRange::of([3.0, -1.0, 7.5].into_iter()).unwrap();
        assert_eq!(range.min, -1.0);
        assert_eq!(range.max, 7.5);
        assert!(ValueRange::of(std::iter::empty()).is_none());
    }
}

use std::{collections::BTreeMap, fmt::Write};

use comfy_table::{
    CellAlignment, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS,
    presets::UTF8_FULL,
};

use crate::results::{GroupStat, Summary};

fn group_table(
    key_name: &str,
    groups: &BTreeMap<u64, GroupStat>,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![key_name, "Throughput, t/s", "Runs"]);
    for (key, stat) in groups {
        table.add_row(vec![
            key.to_string(),
            format!("{:.1}", stat.mean_throughput),
            stat.count.to_string(),
        ]);
    }
    for index in 0..3 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Human-readable report of a [`Summary`].
pub fn render_summary(summary: &Summary) -> String {
    let mut report = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(&mut report, summary);
    report
}

fn write_summary(
    report: &mut String,
    summary: &Summary,
) -> std::fmt::Result {
    writeln!(report, "=== Benchmark Analysis ===")?;
    writeln!(report)?;
    writeln!(report, "Total Successful Configurations: {}", summary.count)?;
    writeln!(
        report,
        "Throughput Range: {:.1} - {:.1} tokens/sec",
        summary.throughput_range.min, summary.throughput_range.max
    )?;
    writeln!(
        report,
        "Latency Range: {:.1} - {:.1} ms",
        summary.latency_range.min, summary.latency_range.max
    )?;
    writeln!(
        report,
        "Average Throughput: {:.1} tokens/sec",
        summary.mean_throughput
    )?;
    writeln!(report, "Average Latency: {:.1} ms", summary.mean_latency)?;
    writeln!(report)?;

    let best = &summary.best_throughput;
    let fastest = &summary.lowest_latency;
    writeln!(report, "Best Performing Configurations:")?;
    writeln!(report, "Highest Throughput: {:.1} tokens/sec", best.throughput)?;
    writeln!(report, "  - ISL: {}, OSL: {}", best.isl, best.osl)?;
    writeln!(report, "Lowest Latency: {:.1} ms", fastest.latency)?;
    writeln!(report, "  - ISL: {}, OSL: {}", fastest.isl, fastest.osl)?;
    writeln!(report)?;

    writeln!(report, "Average Throughput by Input Sequence Length:")?;
    writeln!(report, "{}", group_table("ISL", &summary.by_isl))?;
    writeln!(report)?;
    writeln!(report, "Average Throughput by Output Sequence Length:")?;
    writeln!(report, "{}", group_table("OSL", &summary.by_osl))?;
    Ok(())
}

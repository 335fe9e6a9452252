use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use console::style;
use sweep::{
    chart::{ChartError, ChartRenderer},
    results::{
        AnalysisConfig, BenchmarkRecord, ThroughputMatrix,
        load_records_from_path, render_summary, scatter_points, summarize,
    },
};

#[derive(Debug, Clone, Default)]
pub struct AnalysisOutcome {
    pub records: usize,
    pub charts: Vec<PathBuf>,
}

fn render_charts(
    renderer: &ChartRenderer,
    matrix: &ThroughputMatrix,
    records: &[BenchmarkRecord],
) -> Result<Vec<PathBuf>, ChartError> {
    let heatmap = renderer.render_heatmap(matrix)?;
    let scatter = renderer.render_scatter(&scatter_points(records))?;
    Ok(vec![heatmap, scatter])
}

pub fn run_analysis<W: Write>(
    config: &AnalysisConfig,
    output: &mut W,
) -> Result<AnalysisOutcome, Box<dyn std::error::Error>> {
    let records = load_records_from_path(&config.results_file)?;
    if records.is_empty() {
        writeln!(
            output,
            "No successful results found in {}",
            config.results_file.display()
        )?;
        return Ok(AnalysisOutcome::default());
    }

    let summary = summarize(&records)?;
    write!(output, "{}", render_summary(&summary))?;

    let matrix = ThroughputMatrix::build(&records);
    if let Some(matrix_csv) = &config.matrix_csv {
        matrix.write_csv(BufWriter::new(File::create(matrix_csv)?))?;
        writeln!(output)?;
        writeln!(output, "Throughput matrix saved to {}", matrix_csv.display())?;
    }

    let mut charts = Vec::new();
    if config.charts {
        writeln!(output)?;
        writeln!(output, "=== Creating Visualizations ===")?;
        let renderer = ChartRenderer::new(config.output_dir.clone());
        match render_charts(&renderer, &matrix, &records) {
            Ok(paths) => {
                for path in &paths {
                    writeln!(output, "Saved {}", path.display())?;
                }
                charts = paths;
            },
            Err(error) => {
                log::warn!("Chart rendering failed: {}", error);
                writeln!(
                    output,
                    "{} {}. Skipping visualizations.",
                    style("⚠").yellow(),
                    error
                )?;
            },
        }
    }

    Ok(AnalysisOutcome {
        records: records.len(),
        charts,
    })
}

pub fn handle_analyze(
    config: AnalysisConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut output = stdout.lock();
    run_analysis(&config, &mut output)?;
    output.flush()?;
    Ok(())
}

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub results_file: PathBuf,
    pub output_dir: PathBuf,
    pub charts: bool,
    pub matrix_csv: Option<PathBuf>,
}

impl AnalysisConfig {
    pub fn new(results_file: PathBuf) -> Self {
        Self {
            results_file,
            ..Self::default()
        }
    }

    pub fn output_dir(
        mut self,
        output_dir: PathBuf,
    ) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn charts(
        mut self,
        charts: bool,
    ) -> Self {
        self.charts = charts;
        self
    }

    pub fn matrix_csv(
        mut self,
        matrix_csv: Option<PathBuf>,
    ) -> Self {
        self.matrix_csv = matrix_csv;
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            results_file: PathBuf::from("results/summary_results.log"),
            output_dir: PathBuf::from("."),
            charts: true,
            matrix_csv: None,
        }
    }
}

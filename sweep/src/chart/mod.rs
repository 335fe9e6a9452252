mod chart_error;
#[cfg(feature = "charts")]
mod heatmap;
#[cfg(feature = "charts")]
mod scatter;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use chart_error::ChartError;

use crate::results::{ScatterPoint, ThroughputMatrix};

pub const HEATMAP_FILE_NAME: &str = "throughput_heatmap.png";
pub const SCATTER_FILE_NAME: &str = "throughput_vs_length.png";

/// Renders PNG charts into an output directory.
///
/// Without the `charts` feature every render call returns
/// [`ChartError::Unavailable`].
pub struct ChartRenderer {
    output_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn is_available() -> bool {
        cfg!(feature = "charts")
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn render_heatmap(
        &self,
        matrix: &ThroughputMatrix,
    ) -> Result<PathBuf, ChartError> {
        if !Self::is_available() {
            return Err(ChartError::Unavailable);
        }
        if matrix.is_empty() {
            return Err(ChartError::NoData);
        }

        let path = self.prepare(HEATMAP_FILE_NAME)?;
        #[cfg(feature = "charts")]
        heatmap::draw(&path, matrix)?;
        log::info!("Saved throughput heatmap to {}", path.display());
        Ok(path)
    }

    pub fn render_scatter(
        &self,
        points: &[ScatterPoint],
    ) -> Result<PathBuf, ChartError> {
        if !Self::is_available() {
            return Err(ChartError::Unavailable);
        }
        if points.is_empty() {
            return Err(ChartError::NoData);
        }

        let path = self.prepare(SCATTER_FILE_NAME)?;
        #[cfg(feature = "charts")]
        scatter::draw(&path, points)?;
        log::info!("Saved throughput scatter plot to {}", path.display());
        Ok(path)
    }

    fn prepare(
        &self,
        file_name: &str,
    ) -> Result<PathBuf, ChartError> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(self.output_dir.join(file_name))
    }
}

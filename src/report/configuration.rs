use std::path::PathBuf;

/// Everything the quadrature study needs. Built once and passed down explicitly.
#[derive(Debug, Clone)]
pub struct ReportConfiguration {
    /// Step sizes, in report order
    pub step_sizes: Vec<f64>,
    /// Radius of both the arc and the disk sector
    pub radius: f64,
    /// Reference value the deviations are measured against
    pub truth_value: f64,
    /// Samples of the exact arc drawn under each discrete path
    pub exact_arc_samples: usize,
    /// Where the SVG figures land
    pub plot_directory: PathBuf,
}

impl Default for ReportConfiguration {
    fn default() -> Self {
        ReportConfiguration {
            step_sizes: vec![0.1, 0.01, 0.001],
            radius: 2.0,
            truth_value: 1.25929,
            exact_arc_samples: 100,
            plot_directory: PathBuf::from("plots"),
        }
    }
}

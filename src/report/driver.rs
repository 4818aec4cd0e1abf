use tracing::debug;

use crate::{
    geometry::curve_point_generator::generate_curve_points,
    integration::{
        midpoint_region_integration_engine::integrate_double,
        trapezoid_line_integration::integrate_curve_trapezoidal,
    },
    prelude::ErrorsQuadrature,
    report::{
        configuration::ReportConfiguration,
        timing::{timed, IntegrationResult},
    },
};

// Results of both integrators for one step size
#[derive(Debug, Clone, Copy)]
pub struct StudyRow {
    pub step_size: f64,
    pub double: IntegrationResult,
    pub curvilinear: IntegrationResult,
}

// One row per configured step size, in configuration order
#[derive(Debug, Clone, Default)]
pub struct StudyResults {
    pub rows: Vec<StudyRow>,
}

// Path generation and the line integral are timed together, the region integral on its own
pub fn run_quadrature_study(
    config: &ReportConfiguration,
) -> Result<StudyResults, ErrorsQuadrature> {
    let mut rows = Vec::with_capacity(config.step_sizes.len());
    for &delta in config.step_sizes.iter() {
        let (curve, elapsed) = timed(|| {
            generate_curve_points(delta, config.radius)
                .map(|points| (points.len(), integrate_curve_trapezoidal(&points)))
        });
        let (point_count, curve_value) = curve?;
        let curvilinear = IntegrationResult::from_timed((curve_value, elapsed));
        debug!(
            delta,
            point_count,
            value = curvilinear.value,
            seconds = curvilinear.elapsed_seconds(),
            "curvilinear integral"
        );

        let (double, elapsed) = timed(|| integrate_double(delta, config.radius));
        let double = IntegrationResult::from_timed((double?, elapsed));
        debug!(
            delta,
            value = double.value,
            seconds = double.elapsed_seconds(),
            "double integral"
        );

        rows.push(StudyRow {
            step_size: delta,
            double,
            curvilinear,
        });
    }
    Ok(StudyResults { rows })
}

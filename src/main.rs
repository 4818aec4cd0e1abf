use lib_quadrature::{
    prelude::ErrorsQuadrature,
    report::{
        configuration::ReportConfiguration,
        driver::run_quadrature_study,
        plots::save_figures,
        tables::{render_curvilinear_table, render_double_table},
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ErrorsQuadrature> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ReportConfiguration::default();
    info!(step_sizes = ?config.step_sizes, radius = config.radius, "running quadrature study");
    let results = run_quadrature_study(&config)?;

    print!("{}", render_double_table(&results.rows, config.truth_value));
    print!("{}", render_curvilinear_table(&results.rows, config.truth_value));

    let written = save_figures(&config)?;
    for path in written.iter() {
        info!(path = %path.display(), "figure written");
    }
    Ok(())
}

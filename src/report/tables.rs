use crate::report::{driver::StudyRow, timing::IntegrationResult};

const HEADER: &str = "delta | Integral sum | Time (s) | Deviation";
const SEPARATOR: &str = "------ | ------------------ | --------- |-----------";

pub fn format_row(step_size: f64, result: &IntegrationResult, truth_value: f64) -> String {
    format!(
        "{:<5} | {:12.6} | {:9.6} | {:12.6}",
        step_size,
        result.value,
        result.elapsed_seconds(),
        result.deviation(truth_value)
    )
}

// Renders one titled table, one line per row, `select` picks the integrator column
pub fn render_table<S>(title: &str, rows: &[StudyRow], truth_value: f64, select: S) -> String
where
    S: Fn(&StudyRow) -> &IntegrationResult,
{
    let mut out = format!("\n{title}\n{HEADER}\n{SEPARATOR}\n");
    for row in rows {
        out.push_str(&format_row(row.step_size, select(row), truth_value));
        out.push('\n');
    }
    out
}

pub fn render_double_table(rows: &[StudyRow], truth_value: f64) -> String {
    render_table("Results for the double integral:", rows, truth_value, |r| &r.double)
}

pub fn render_curvilinear_table(rows: &[StudyRow], truth_value: f64) -> String {
    render_table("Results for the curvilinear integral:", rows, truth_value, |r| {
        &r.curvilinear
    })
}

use std::path::PathBuf;

use svg::{
    node::element::{path::Data, Circle, Group, Path, Rectangle},
    Document,
};

use crate::{
    geometry::curve_point_generator::{exact_arc_points, generate_curve_points},
    integration::midpoint_region_integration_engine::MidpointRegionIntegrationEngine,
    prelude::{ErrorsQuadrature, Point2D, VR1D},
    report::configuration::ReportConfiguration,
};

const PANEL_SIZE: f64 = 400.0;
const MARGIN: f64 = 20.0;

// Maps a square world window onto a square panel, y up, one scale for both axes
struct PanelFrame {
    min_x: f64,
    max_y: f64,
    scale: f64,
}

impl PanelFrame {
    fn new(min: f64, max: f64) -> Self {
        PanelFrame {
            min_x: min,
            max_y: max,
            scale: (PANEL_SIZE - 2.0 * MARGIN) / (max - min),
        }
    }
    fn map(&self, x: f64, y: f64) -> (f32, f32) {
        (
            (MARGIN + (x - self.min_x) * self.scale) as f32,
            (MARGIN + (self.max_y - y) * self.scale) as f32,
        )
    }
}

fn polyline_data(points: &[Point2D], frame: &PanelFrame) -> Data {
    let mut data = Data::new();
    for (n, p) in points.iter().enumerate() {
        let xy = frame.map(p.x, p.y);
        data = if n == 0 { data.move_to(xy) } else { data.line_to(xy) };
    }
    data
}

fn panel_background() -> Rectangle {
    Rectangle::new()
        .set("width", PANEL_SIZE)
        .set("height", PANEL_SIZE)
        .set("fill", "white")
}

// Exact arc (dashed) under the generated path (with markers), one panel per step size
pub fn arc_comparison_figure(config: &ReportConfiguration) -> Result<Document, ErrorsQuadrature> {
    let extent = 1.1 * config.radius;
    let frame = PanelFrame::new(-extent, extent);
    let exact = exact_arc_points(config.radius, config.exact_arc_samples);
    let width = PANEL_SIZE * config.step_sizes.len() as f64;
    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, PANEL_SIZE))
        .set("width", width)
        .set("height", PANEL_SIZE);
    for (n, &delta) in config.step_sizes.iter().enumerate() {
        let points = generate_curve_points(delta, config.radius)?;
        let mut panel = Group::new()
            .set("class", "panel")
            .set("id", format!("arc_delta_{delta}"))
            .set("transform", format!("translate({},0)", n as f64 * PANEL_SIZE))
            .add(panel_background())
            .add(
                Path::new()
                    .set("fill", "none")
                    .set("stroke", "black")
                    .set("stroke-dasharray", "6 4")
                    .set("d", polyline_data(&exact, &frame)),
            )
            .add(
                Path::new()
                    .set("fill", "none")
                    .set("stroke", "steelblue")
                    .set("stroke-width", 1)
                    .set("d", polyline_data(&points, &frame)),
            );
        for p in points.iter() {
            let (cx, cy) = frame.map(p.x, p.y);
            panel = panel.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", 1.5)
                    .set("fill", "steelblue"),
            );
        }
        document = document.add(panel);
    }
    Ok(document)
}

fn grid_lines_data(coordinates: VR1D, frame: &PanelFrame) -> Data {
    let (low, high) = match (coordinates.first(), coordinates.last()) {
        (Some(&low), Some(&high)) => (low, high),
        _ => return Data::new(),
    };
    let mut data = Data::new();
    for &c in coordinates.iter() {
        data = data
            .move_to(frame.map(c, low))
            .line_to(frame.map(c, high))
            .move_to(frame.map(low, c))
            .line_to(frame.map(high, c));
    }
    data
}

// The cell grid the region integral runs over for one step size
pub fn grid_figure(step_size: f64, radius: f64) -> Result<Document, ErrorsQuadrature> {
    let engine = MidpointRegionIntegrationEngine::new(step_size, -radius, radius, false)?;
    let coordinates = engine.grid_coordinates()?;
    let high = coordinates.last().copied().unwrap_or(radius);
    let frame = PanelFrame::new(-radius, high.max(radius));
    let grid = Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 0.5)
        .set("d", grid_lines_data(coordinates.view(), &frame));
    Ok(Document::new()
        .set("viewBox", (0.0, 0.0, PANEL_SIZE, PANEL_SIZE))
        .set("width", PANEL_SIZE)
        .set("height", PANEL_SIZE)
        .add(panel_background())
        .add(grid))
}

// Writes every figure into the plot directory and returns the written paths
pub fn save_figures(config: &ReportConfiguration) -> Result<Vec<PathBuf>, ErrorsQuadrature> {
    std::fs::create_dir_all(&config.plot_directory)?;
    let mut written = Vec::with_capacity(config.step_sizes.len() + 1);

    let path = config.plot_directory.join("arc_comparison.svg");
    svg::save(&path, &arc_comparison_figure(config)?)?;
    written.push(path);

    for &delta in config.step_sizes.iter() {
        let path = config.plot_directory.join(format!("grid_delta_{delta}.svg"));
        svg::save(&path, &grid_figure(delta, config.radius)?)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_arc_figure_has_one_panel_per_step() {
        let config = ReportConfiguration {
            step_sizes: vec![0.5, 0.1, 0.05],
            ..ReportConfiguration::default()
        };
        let dut = arc_comparison_figure(&config).unwrap().to_string();
        assert_eq!(dut.matches("class=\"panel\"").count(), 3);
        assert!(dut.contains("arc_delta_0.05"));
        assert!(dut.contains("stroke-dasharray"));
    }

    #[test]
    fn test_grid_figure_draws_every_coordinate() {
        let dut = grid_figure(0.5, 2.0).unwrap().to_string();
        // 9 coordinates, two strokes each
        assert_eq!(dut.matches('M').count(), 18);
    }

    #[test]
    fn test_frame_keeps_aspect() {
        let frame = PanelFrame::new(-2.0, 2.0);
        let (x0, y0) = frame.map(-2.0, 2.0);
        let (x1, y1) = frame.map(2.0, -2.0);
        assert_eq!((x0, y0), (MARGIN as f32, MARGIN as f32));
        assert!((x1 - x0 - (y1 - y0)).abs() < 1E-4);
    }

    #[test]
    fn test_invalid_step_has_no_figure() {
        assert!(grid_figure(0.0, 2.0).is_err());
        let config = ReportConfiguration {
            step_sizes: vec![10.0],
            ..ReportConfiguration::default()
        };
        assert!(arc_comparison_figure(&config).is_err());
    }
}

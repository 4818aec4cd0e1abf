use std::f64::consts::PI;

use crate::prelude::{ErrorsQuadrature, Point2D, PointSequence};

pub const ARC_START_ANGLE: f64 = PI / 4.0;
pub const ARC_END_ANGLE: f64 = 5.0 * PI / 4.0;

/// The angle subtending a chord of length `segment_length` on a circle of radius `radius`
pub fn calc_angle_step(segment_length: f64, radius: f64) -> f64 {
    2.0 * (segment_length / (2.0 * radius)).asin()
}

/// Samples the closed path made of the arc of radius `radius` from pi/4 to 5pi/4
/// (counterclockwise) followed by the straight chord back to the arc start.
///
/// Arc samples are `segment_length` apart along chords, with a final sample forced onto
/// 5pi/4, so the last arc step may be short. The chord uses as many steps as there are
/// arc samples and includes both endpoints.
///
/// The arc end is emitted twice: once as the last arc sample and again as the first
/// chord sample. Downstream results depend on the exact point layout, so the duplicate
/// stays, though it looks like an accident of concatenation rather than intent.
/// It contributes a zero-length segment to any line integral.
pub fn generate_curve_points(
    segment_length: f64,
    radius: f64,
) -> Result<PointSequence, ErrorsQuadrature> {
    let angle_step = calc_angle_step(segment_length, radius);
    // NaN when segment_length > 2r, and a zero step would never leave the loop
    if !(angle_step.is_finite() && angle_step > 0.0) {
        return Err(ErrorsQuadrature::InvalidInputRange(
            "Segment length must lie in (0, 2 * radius]",
        ));
    }

    let mut arc_points = PointSequence::new();
    let mut angle = ARC_START_ANGLE;
    while angle < ARC_END_ANGLE {
        arc_points.push(Point2D::on_circle(radius, angle));
        angle += angle_step;
    }
    arc_points.push(Point2D::on_circle(radius, ARC_END_ANGLE));

    let start = arc_points[arc_points.len() - 1];
    let end = arc_points[0];
    let steps_line = arc_points.len();
    let line_points = (0..=steps_line).map(|i| {
        let alpha = i as f64 / steps_line as f64;
        Point2D::new(
            start.x + alpha * (end.x - start.x),
            start.y + alpha * (end.y - start.y),
        )
    });

    arc_points.extend(line_points);
    Ok(arc_points)
}

/// Evenly spaced samples of the exact arc, endpoints included. Reference for plots.
pub fn exact_arc_points(radius: f64, number_of_points: usize) -> PointSequence {
    match number_of_points {
        0 => PointSequence::new(),
        1 => vec![Point2D::on_circle(radius, ARC_START_ANGLE)],
        n => {
            let d_angle = (ARC_END_ANGLE - ARC_START_ANGLE) / (n - 1) as f64;
            (0..n)
                .map(|i| Point2D::on_circle(radius, ARC_START_ANGLE + i as f64 * d_angle))
                .collect()
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::*;

    // Arc samples inside a generated sequence, which holds 2 * arc + 1 points
    fn arc_length_of(points: &[Point2D]) -> usize {
        points.len().saturating_sub(1) / 2
    }

    #[test]
    fn test_arc_length_helper_on_empty() {
        assert_eq!(arc_length_of(&[]), 0);
        assert_eq!(arc_length_of(&[Point2D::new(0.0, 0.0)]), 0);
    }

    #[test]
    fn test_arc_endpoints() {
        let radius = 2.0;
        let dut = generate_curve_points(0.1, radius).unwrap();
        assert!(!dut.is_empty());
        let first = dut[0];
        assert_abs_diff_eq!(first.x, radius * ARC_START_ANGLE.cos(), epsilon = 1E-9);
        assert_abs_diff_eq!(first.y, radius * ARC_START_ANGLE.sin(), epsilon = 1E-9);
        let arc_end = dut[arc_length_of(&dut) - 1];
        assert_abs_diff_eq!(arc_end.x, radius * ARC_END_ANGLE.cos(), epsilon = 1E-9);
        assert_abs_diff_eq!(arc_end.y, radius * ARC_END_ANGLE.sin(), epsilon = 1E-9);
    }

    #[test]
    fn test_layout_and_junction_duplicate() {
        let dut = generate_curve_points(0.1, 2.0).unwrap();
        let arc_len = arc_length_of(&dut);
        assert_eq!(arc_len, 64);
        assert_eq!(dut.len(), 2 * arc_len + 1);
        assert_eq!(dut[arc_len - 1], dut[arc_len]);
        // The chord closes the path on the arc start
        let last = dut[dut.len() - 1];
        assert_abs_diff_eq!(last.x, dut[0].x, epsilon = 1E-12);
        assert_abs_diff_eq!(last.y, dut[0].y, epsilon = 1E-12);
    }

    #[test]
    fn test_arc_samples_are_one_segment_apart() {
        let dut = generate_curve_points(0.01, 2.0).unwrap();
        let arc_len = arc_length_of(&dut);
        for w in dut[..arc_len - 1].windows(2) {
            let d = ((w[1].x - w[0].x).powi(2) + (w[1].y - w[0].y).powi(2)).sqrt();
            assert_abs_diff_eq!(d, 0.01, epsilon = 1E-9);
        }
    }

    #[test]
    fn test_segment_near_diameter() {
        let dut = generate_curve_points(3.99, 2.0).unwrap();
        let arc_len = arc_length_of(&dut);
        assert!(arc_len >= 2);
        assert_eq!(dut.len(), 2 * arc_len + 1);
        let dut = generate_curve_points(4.0, 2.0).unwrap();
        assert_eq!(arc_length_of(&dut), 2);
    }

    #[test]
    fn test_invalid_segment_lengths() {
        assert!(generate_curve_points(4.5, 2.0).is_err());
        assert!(generate_curve_points(0.0, 2.0).is_err());
        assert!(generate_curve_points(-0.1, 2.0).is_err());
    }

    #[test]
    fn test_exact_arc_points() {
        let dut = exact_arc_points(2.0, 100);
        assert_eq!(dut.len(), 100);
        assert_abs_diff_eq!(dut[99].x, 2.0 * ARC_END_ANGLE.cos(), epsilon = 1E-12);
        for p in dut.iter() {
            assert_abs_diff_eq!(p.x.hypot(p.y), 2.0, epsilon = 1E-12);
        }
    }
}

use crate::{integration::integrands::vector_field, prelude::Point2D};

// Integrates F . dr along the polyline through `points` with the trapezoidal rule
// Each segment contributes the average of F at its endpoints dotted with the segment
// Fewer than two points gives an empty sum of 0
pub fn trapezoid_line_integral<F>(points: &[Point2D], field: F) -> f64
where
    F: Fn(Point2D) -> (f64, f64),
{
    points
        .windows(2)
        .map(|w| {
            let (p1, p2) = (w[0], w[1]);
            let (fx1, fy1) = field(p1);
            let (fx2, fy2) = field(p2);
            0.5 * ((fx1 + fx2) * (p2.x - p1.x) + (fy1 + fy2) * (p2.y - p1.y))
        })
        .sum()
}

// The line integral of the fixed field (x + y, 2xy)
pub fn integrate_curve_trapezoidal(points: &[Point2D]) -> f64 {
    trapezoid_line_integral(points, vector_field)
}

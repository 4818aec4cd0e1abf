use std::f64::consts::PI;

use crate::prelude::Point2D;

/// The fixed vector field F(x,y) = (x + y, 2xy) integrated along the curve.
pub fn vector_field(p: Point2D) -> (f64, f64) {
    (p.x + p.y, 2.0 * p.x * p.y)
}

/// The fixed scalar integrand 2y - 1 integrated over the disk sector.
/// It is the curl of `vector_field`, so both integrals share one exact value.
pub fn sector_integrand(_x: f64, y: f64) -> f64 {
    2.0 * y - 1.0
}

/// Membership in the sector {x <= y, x^2 + y^2 <= r^2}
pub fn in_disk_sector(x: f64, y: f64, radius: f64) -> bool {
    x <= y && x * x + y * y <= radius * radius
}

/// Closed form of the sector integral of 2y - 1.
/// The sector is the half disk above the line y = x, area pi r^2 / 2,
/// and its first moment in y is (2/3) r^3 / sqrt(2).
pub fn analytic_sector_integral(radius: f64) -> f64 {
    2.0 * std::f64::consts::SQRT_2 / 3.0 * radius.powi(3) - PI * radius * radius / 2.0
}

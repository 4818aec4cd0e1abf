use ndarray::Array1;

use crate::prelude::{ErrorsQuadrature, R1D};

// Helper for computing equally spaced grid coordinates covering [a, b]
// Values are a, a+dx, a+2dx, ... while < b+dx, so b itself is included up to rounding.
// The count is ceil((b + dx - a) / dx), the same boundary behavior as an arange.
pub fn calculate_grid_coordinates(a: f64, b: f64, dx: f64) -> Result<R1D, ErrorsQuadrature> {
    if !(dx.is_finite() && dx > 0.0) {
        return Err(ErrorsQuadrature::InvalidInputRange(
            "Grid step must be finite and positive",
        ));
    }
    if !(a.is_finite() && b.is_finite()) || b < a {
        return Err(ErrorsQuadrature::InvalidInputRange(
            "Grid bounds must be finite and ordered",
        ));
    }
    Ok(Array1::range(a, b + dx, dx))
}

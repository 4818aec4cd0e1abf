use crate::prelude::ErrorsQuadrature;

// A trait that defines a 2D integration routine over a square domain clipped to a region
pub trait CanIntegrate2D {
    // Sets the lower bound of both the x and y domain
    fn set_lower_bound(&mut self, x: f64) -> Result<(), ErrorsQuadrature>;
    // Sets the upper bound of both the x and y domain
    fn set_upper_bound(&mut self, x: f64) -> Result<(), ErrorsQuadrature>;
    // Integrates f(x,y)dxdy over the points of the domain where region(x,y) holds
    fn integrate<F, R>(&self, f: F, region: R) -> Result<f64, ErrorsQuadrature>
    where
        F: Fn(f64, f64) -> f64,
        R: Fn(f64, f64) -> bool;
}

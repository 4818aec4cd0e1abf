use crate::{
    integration::{
        calculate_grid_coordinates::calculate_grid_coordinates,
        can_integrate::CanIntegrate2D,
        integrands::{in_disk_sector, sector_integrand},
    },
    prelude::{ErrorsQuadrature, R1D},
};

// A struct that integrates a 2D real function f(x,y) over a region using the midpoint rule
// The square [lower, upper]^2 is cut into cells of side step_size and each cell counts
// with its full area when its center lies in the region. There is no partial-cell correction.
pub struct MidpointRegionIntegrationEngine {
    step_size: f64,      // The side of a grid cell
    lower_bound: f64,    // The lower bound of x and y
    upper_bound: f64,    // The upper bound of x and y
    cache: Option<R1D>, // Cache grid coordinates for speed on repeated calls
}

impl MidpointRegionIntegrationEngine {
    // Construct from bounds and step size
    // The boolean flag is if you want to cache the grid coordinates (true) or recompute them each call (false)
    pub fn new(
        step_size: f64,
        lower_bound: f64,
        upper_bound: f64,
        cache_grid: bool,
    ) -> Result<Self, ErrorsQuadrature> {
        let cache = if cache_grid {
            Some(calculate_grid_coordinates(lower_bound, upper_bound, step_size)?)
        } else {
            None
        };
        Ok(MidpointRegionIntegrationEngine {
            step_size,
            lower_bound,
            upper_bound,
            cache,
        })
    }
    // Dynamically sets the step size.  Will update cache if configured.
    pub fn set_step_size(&mut self, x: f64) -> Result<(), ErrorsQuadrature> {
        self.step_size = x;
        self.refresh_cache()
    }
    // The coordinates shared by both axes of the grid
    pub fn grid_coordinates(&self) -> Result<R1D, ErrorsQuadrature> {
        match &self.cache {
            Some(x) => Ok(x.clone()),
            None => calculate_grid_coordinates(self.lower_bound, self.upper_bound, self.step_size),
        }
    }
    fn refresh_cache(&mut self) -> Result<(), ErrorsQuadrature> {
        if self.cache.is_some() {
            self.cache = Some(calculate_grid_coordinates(
                self.lower_bound,
                self.upper_bound,
                self.step_size,
            )?);
        }
        Ok(())
    }
}

impl CanIntegrate2D for MidpointRegionIntegrationEngine {
    fn integrate<F, R>(&self, f: F, region: R) -> Result<f64, ErrorsQuadrature>
    where
        F: Fn(f64, f64) -> f64,
        R: Fn(f64, f64) -> bool,
    {
        // Get cached coordinates or compute from scratch
        let computed;
        let grid = match &self.cache {
            Some(x) => x,
            None => {
                computed = calculate_grid_coordinates(
                    self.lower_bound,
                    self.upper_bound,
                    self.step_size,
                )?;
                &computed
            }
        };
        if grid.len() < 2 {
            return Err(ErrorsQuadrature::InvalidInputRange(
                "Must have at least two grid coordinates for integration",
            ));
        }
        let cell_area = self.step_size.powi(2);
        let centers: Vec<f64> = grid.windows(2).into_iter().map(|w| 0.5 * (w[0] + w[1])).collect();
        let mut integral_sum = 0.0;
        for &x_center in centers.iter() {
            for &y_center in centers.iter() {
                if region(x_center, y_center) {
                    integral_sum += f(x_center, y_center) * cell_area;
                }
            }
        }
        Ok(integral_sum)
    }

    // Dynamically sets the lower bound.  Will update cache if configured.
    fn set_lower_bound(&mut self, x: f64) -> Result<(), ErrorsQuadrature> {
        self.lower_bound = x;
        self.refresh_cache()
    }
    // Dynamically sets the upper bound.  Will update cache if configured.
    fn set_upper_bound(&mut self, x: f64) -> Result<(), ErrorsQuadrature> {
        self.upper_bound = x;
        self.refresh_cache()
    }
}

// Midpoint estimate of the integral of 2y - 1 over {x <= y, x^2 + y^2 <= r^2}
// on the grid [-r, r]^2 with cells of side step_size
pub fn integrate_double(step_size: f64, radius: f64) -> Result<f64, ErrorsQuadrature> {
    let dut = MidpointRegionIntegrationEngine::new(step_size, -radius, radius, false)?;
    dut.integrate(sector_integrand, |x, y| in_disk_sector(x, y, radius))
}

pub mod prelude;
pub mod geometry{
    pub mod curve_point_generator;
}
pub mod integration{
    pub mod calculate_grid_coordinates;
    pub mod can_integrate;
    pub mod integrands;
    pub mod midpoint_region_integration_engine;
    pub mod trapezoid_line_integration;
}
pub mod report{
    pub mod configuration;
    pub mod driver;
    pub mod plots;
    pub mod tables;
    pub mod timing;
}

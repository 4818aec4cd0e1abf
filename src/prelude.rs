use ndarray::prelude::*;
use thiserror::Error;

pub type R1D = Array1<f64>;
pub type VR1D<'a> = ArrayView1<'a, f64>;

// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }
    // Point on a circle of radius r centered at the origin
    pub fn on_circle(radius: f64, angle: f64) -> Self {
        Point2D::new(radius * angle.cos(), radius * angle.sin())
    }
}

// Insertion order is the path direction
pub type PointSequence = Vec<Point2D>;

#[derive(Debug, Error)]
pub enum ErrorsQuadrature {
    #[error("invalid input range: {0}")]
    InvalidInputRange(&'static str),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

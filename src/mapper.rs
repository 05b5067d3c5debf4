//! Affine mapping from math coordinates into pixel coordinates.

use crate::geom::{PixelPoint, Point};

/// Maps math-space values into pixel space under an origin and per-axis
/// scale.
///
/// The origin is the pixel position of math (0, 0); scales are pixels per
/// math unit and must be positive. The Y mapping subtracts because pixel
/// rows grow downward while math Y grows upward. No bounds checking is
/// performed: values outside the surface map linearly and are left to the
/// surface to clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    origin: PixelPoint,
    scale_x: f64,
    scale_y: f64,
}

impl Mapper {
    /// Create a mapper for the given origin and pixels-per-unit scales.
    pub fn new(origin: PixelPoint, scale_x: f64, scale_y: f64) -> Self {
        Self {
            origin,
            scale_x,
            scale_y,
        }
    }

    /// Access the pixel origin.
    pub fn origin(&self) -> PixelPoint {
        self.origin
    }

    /// Map a math X value to a pixel column.
    pub fn pixel_x(&self, x: f64) -> f32 {
        (self.origin.x as f64 + x * self.scale_x) as f32
    }

    /// Map a math Y value to a pixel row.
    pub fn pixel_y(&self, y: f64) -> f32 {
        (self.origin.y as f64 - y * self.scale_y) as f32
    }

    /// Map a math point into pixel space.
    pub fn map(&self, point: Point) -> PixelPoint {
        PixelPoint::new(self.pixel_x(point.x), self.pixel_y(point.y))
    }
}

//! Geometric primitives shared by the plotting routines.
//!
//! Math-space values are `f64`; pixel-space values are `f32`, converted at
//! the surface boundary.

/// A point in mathematical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in math coordinates.
    pub x: f64,
    /// Y value in math coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new math-space point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in pixel space.
///
/// Pixel rows grow downward, so larger `y` is lower on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    /// X value in pixels.
    pub x: f32,
    /// Y value in pixels.
    pub y: f32,
}

impl PixelPoint {
    /// Create a new pixel-space point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

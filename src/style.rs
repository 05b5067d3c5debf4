//! Stroke colors.

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Medium gray, the default axis color.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);
    /// Pure blue, the default function-curve color.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Pure red, the default arc color.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Purple, the default parametric-curve color.
    pub const PURPLE: Self = Self::new(0.5, 0.0, 0.5, 1.0);
}

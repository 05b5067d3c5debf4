//! GPUI-backed drawing surface.
//!
//! Adapts the [`Surface`] pen model to GPUI painting: path operations are
//! buffered and each stroke is painted through a `PathBuilder`. Intended to
//! be used inside a paint callback where the plot's window bounds are known.

use gpui::{Bounds, PathBuilder, Pixels, Window, point, px};

use crate::geom::PixelPoint;
use crate::style::Color;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy)]
enum PathOp {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
}

/// A [`Surface`] that paints into a GPUI window.
///
/// Surface (0, 0) is the top-left corner of `bounds`; pen coordinates are
/// offset by the bounds origin when painted. Strokes with fewer than two
/// path operations paint nothing, and path build failures are ignored.
pub struct GpuiSurface<'a> {
    window: &'a mut Window,
    bounds: Bounds<Pixels>,
    stroke_color: Color,
    line_width: f32,
    path: Vec<PathOp>,
}

impl<'a> GpuiSurface<'a> {
    /// Create a surface covering `bounds` in the given window.
    pub fn new(window: &'a mut Window, bounds: Bounds<Pixels>) -> Self {
        Self {
            window,
            bounds,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            path: Vec::new(),
        }
    }

    fn to_window(&self, p: PixelPoint) -> gpui::Point<Pixels> {
        point(
            self.bounds.origin.x + px(p.x),
            self.bounds.origin.y + px(p.y),
        )
    }
}

impl Surface for GpuiSurface<'_> {
    fn width(&self) -> f32 {
        f32::from(self.bounds.size.width)
    }

    fn height(&self) -> f32 {
        f32::from(self.bounds.size.height)
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: PixelPoint) {
        self.path.push(PathOp::MoveTo(point));
    }

    fn line_to(&mut self, point: PixelPoint) {
        self.path.push(PathOp::LineTo(point));
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        let mut builder = PathBuilder::stroke(px(self.line_width.max(0.5)));
        for op in &self.path {
            match op {
                PathOp::MoveTo(p) => builder.move_to(self.to_window(*p)),
                PathOp::LineTo(p) => builder.line_to(self.to_window(*p)),
            }
        }
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(self.stroke_color));
        }
    }
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

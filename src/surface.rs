//! The drawing-surface seam between plotting routines and render backends.
//!
//! A surface is a canvas-style raster target with persistent pen state: a
//! current stroke color, a current line width, and a current path. Draw
//! routines mutate that state directly and do not restore it afterward, so
//! callers that care about style isolation must reset it between calls.

use crate::geom::PixelPoint;
use crate::style::Color;

/// A 2D raster target with canvas-style pen state.
///
/// `begin_path` discards the current path; `stroke` emits it with the
/// current color and width without clearing it, so a path may be stroked
/// more than once.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> f32;

    /// Surface height in pixels.
    fn height(&self) -> f32;

    /// Set the pen stroke color.
    fn set_stroke_color(&mut self, color: Color);

    /// Set the pen line width in pixels.
    fn set_line_width(&mut self, width: f32);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Move the pen without drawing.
    fn move_to(&mut self, point: PixelPoint);

    /// Extend the current path with a straight segment.
    fn line_to(&mut self, point: PixelPoint);

    /// Emit the current path with the current stroke color and width.
    fn stroke(&mut self);
}

/// A single recorded pen operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Stroke color changed.
    StrokeColor(Color),
    /// Line width changed.
    LineWidth(f32),
    /// A new path was started.
    BeginPath,
    /// Pen moved without drawing.
    MoveTo(PixelPoint),
    /// Path extended with a segment.
    LineTo(PixelPoint),
    /// The current path was stroked.
    Stroke,
}

/// An in-memory surface that records every pen operation.
///
/// Useful for testing draw routines and render backends without a window.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Create a recording surface with the given pixel dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Access all recorded operations in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of stroke operations recorded.
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke))
            .count()
    }

    /// Reconstruct the point sequence emitted by each stroke.
    ///
    /// Each entry is the path as it stood when stroked; a single-point path
    /// produces no visible segment but is still reported.
    pub fn polylines(&self) -> Vec<Vec<PixelPoint>> {
        let mut out = Vec::new();
        let mut current = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::BeginPath => current.clear(),
                DrawOp::MoveTo(point) | DrawOp::LineTo(point) => current.push(*point),
                DrawOp::Stroke => out.push(current.clone()),
                DrawOp::StrokeColor(_) | DrawOp::LineWidth(_) => {}
            }
        }
        out
    }

    /// The stroke color in effect for the stroke at `index`, if any was set.
    pub fn stroke_color_at(&self, index: usize) -> Option<Color> {
        let mut color = None;
        let mut seen = 0;
        for op in &self.ops {
            match op {
                DrawOp::StrokeColor(value) => color = Some(*value),
                DrawOp::Stroke => {
                    if seen == index {
                        return color;
                    }
                    seen += 1;
                }
                _ => {}
            }
        }
        None
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, point: PixelPoint) {
        self.ops.push(DrawOp::MoveTo(point));
    }

    fn line_to(&mut self, point: PixelPoint) {
        self.ops.push(DrawOp::LineTo(point));
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }
}

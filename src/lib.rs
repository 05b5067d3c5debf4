//! gpui_funcplot draws mathematical functions onto canvas-style surfaces.
//!
//! The crate provides trapezoidal-rule integration, an affine math-to-pixel
//! coordinate mapper, and stateless draw routines for axes, function curves,
//! parametric curves, and line segments. Routines target the [`Surface`]
//! trait; [`GpuiSurface`] paints into a GPUI window and
//! [`RecordingSurface`] captures pen operations for tests.

#![forbid(unsafe_code)]

pub mod geom;
pub mod gpui_backend;
pub mod integrate;
pub mod mapper;
pub mod plot;
pub mod style;
pub mod surface;

pub use geom::{PixelPoint, Point};
pub use gpui_backend::GpuiSurface;
pub use integrate::{DEFAULT_SUBDIVISIONS, integrate, trapezoid};
pub use mapper::Mapper;
pub use plot::{
    ArcOptions, FunctionOptions, LineOptions, ParametricOptions, draw_arc, draw_axes,
    draw_function, draw_line, draw_parametric,
};
pub use style::Color;
pub use surface::{DrawOp, RecordingSurface, Surface};

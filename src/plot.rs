//! Draw routines for axes, function curves, parametric curves, and lines.
//!
//! Every routine is a stateless transformation from math input to pen
//! operations on a [`Surface`]. Options structs default each recognized
//! option independently; unset options fall back to the documented values,
//! several of which derive from the surface dimensions at call time.

use crate::geom::{PixelPoint, Point};
use crate::mapper::Mapper;
use crate::style::Color;
use crate::surface::Surface;

/// Number of samples after the first for an inclusive-endpoint sweep.
///
/// The sweep visits `start + i * step` for `i in 0..=count`. When the span
/// is not an exact multiple of the step the final sample lands slightly past
/// `end`; that overshoot is accepted tolerance. A reversed range clamps to a
/// single sample.
fn sample_count(start: f64, end: f64, step: f64) -> usize {
    ((end - start) / step).ceil().max(0.0) as usize
}

fn sweep_polyline<S, F>(surface: &mut S, mapper: &Mapper, sample: F, start: f64, step: f64, count: usize)
where
    S: Surface,
    F: Fn(f64) -> Point,
{
    surface.begin_path();
    for i in 0..=count {
        let at = start + i as f64 * step;
        let point = mapper.map(sample(at));
        if i == 0 {
            surface.move_to(point);
        } else {
            surface.line_to(point);
        }
    }
    surface.stroke();
}

fn surface_center<S: Surface>(surface: &S) -> PixelPoint {
    PixelPoint::new(surface.width() * 0.5, surface.height() * 0.5)
}

/// Draw a horizontal and a vertical axis through the given pixel origin.
///
/// The horizontal line spans the full surface width at row `origin.y`; the
/// vertical line spans the full height at column `origin.x`. Strokes in
/// gray at width 1, leaving that pen state behind.
pub fn draw_axes<S: Surface>(surface: &mut S, origin: PixelPoint) {
    let width = surface.width();
    let height = surface.height();

    surface.set_stroke_color(Color::GRAY);
    surface.set_line_width(1.0);

    surface.begin_path();
    surface.move_to(PixelPoint::new(0.0, origin.y));
    surface.line_to(PixelPoint::new(width, origin.y));
    surface.stroke();

    surface.begin_path();
    surface.move_to(PixelPoint::new(origin.x, 0.0));
    surface.line_to(PixelPoint::new(origin.x, height));
    surface.stroke();
}

/// Options for [`draw_function`].
///
/// Each option defaults independently when unset: origin to the surface
/// center; scales so that 20 math units span the surface width and height;
/// color to blue; line width to 2; step to one pixel per sample
/// (`1 / scale_x`); and the X range so the sampled interval exactly covers
/// the visible pixel columns under the resolved origin and scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionOptions {
    origin: Option<PixelPoint>,
    scale_x: Option<f64>,
    scale_y: Option<f64>,
    color: Option<Color>,
    line_width: Option<f32>,
    step: Option<f64>,
    x_min: Option<f64>,
    x_max: Option<f64>,
}

impl FunctionOptions {
    /// Create options with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel origin of math (0, 0).
    pub fn with_origin(mut self, origin: PixelPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the X scale in pixels per math unit.
    pub fn with_scale_x(mut self, scale_x: f64) -> Self {
        self.scale_x = Some(scale_x);
        self
    }

    /// Set the Y scale in pixels per math unit.
    pub fn with_scale_y(mut self, scale_y: f64) -> Self {
        self.scale_y = Some(scale_y);
        self
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the line width in pixels.
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Set the sampling step in math units.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Set the lower sampling bound in math units.
    pub fn with_x_min(mut self, x_min: f64) -> Self {
        self.x_min = Some(x_min);
        self
    }

    /// Set the upper sampling bound in math units.
    pub fn with_x_max(mut self, x_max: f64) -> Self {
        self.x_max = Some(x_max);
        self
    }
}

/// Plot `f` across the visible X range as one stroked polyline.
///
/// Samples from the resolved `x_min` to `x_max` inclusive at the resolved
/// step, mapping each `(x, f(x))` into pixel space. Non-finite values from
/// `f` propagate into the path; a zero step does not terminate. Both are
/// caller responsibility.
pub fn draw_function<S, F>(surface: &mut S, f: F, options: FunctionOptions)
where
    S: Surface,
    F: Fn(f64) -> f64,
{
    let width = surface.width() as f64;
    let origin = options.origin.unwrap_or_else(|| surface_center(surface));
    let scale_x = options.scale_x.unwrap_or(width / 20.0);
    let scale_y = options.scale_y.unwrap_or(surface.height() as f64 / 20.0);
    let step = options.step.unwrap_or(1.0 / scale_x);
    let x_min = options.x_min.unwrap_or(-(origin.x as f64) / scale_x);
    let x_max = options.x_max.unwrap_or((width - origin.x as f64) / scale_x);
    let mapper = Mapper::new(origin, scale_x, scale_y);

    surface.set_stroke_color(options.color.unwrap_or(Color::BLUE));
    surface.set_line_width(options.line_width.unwrap_or(2.0));
    let count = sample_count(x_min, x_max, step);
    sweep_polyline(surface, &mapper, |x| Point::new(x, f(x)), x_min, step, count);
}

/// Options for [`draw_arc`].
///
/// Defaults: origin at the surface center, scales 420/40, color red, line
/// width 2, step `1 / scale_x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcOptions {
    origin: Option<PixelPoint>,
    scale_x: Option<f64>,
    scale_y: Option<f64>,
    color: Option<Color>,
    line_width: Option<f32>,
    step: Option<f64>,
}

impl ArcOptions {
    /// Create options with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel origin of math (0, 0).
    pub fn with_origin(mut self, origin: PixelPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the X scale in pixels per math unit.
    pub fn with_scale_x(mut self, scale_x: f64) -> Self {
        self.scale_x = Some(scale_x);
        self
    }

    /// Set the Y scale in pixels per math unit.
    pub fn with_scale_y(mut self, scale_y: f64) -> Self {
        self.scale_y = Some(scale_y);
        self
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the line width in pixels.
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Set the sampling step in math units.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

/// Plot `f` over the explicit interval `[x_start, x_end]` as one polyline.
///
/// Same sampling algorithm as [`draw_function`], but the math bounds are
/// required parameters rather than derived from the surface, and the
/// defaults differ (420/40 scale, red). Kept as its own entry point because
/// callers depend on either routine's distinct default behavior.
pub fn draw_arc<S, F>(surface: &mut S, f: F, x_start: f64, x_end: f64, options: ArcOptions)
where
    S: Surface,
    F: Fn(f64) -> f64,
{
    let origin = options.origin.unwrap_or_else(|| surface_center(surface));
    let scale_x = options.scale_x.unwrap_or(420.0);
    let scale_y = options.scale_y.unwrap_or(40.0);
    let step = options.step.unwrap_or(1.0 / scale_x);
    let mapper = Mapper::new(origin, scale_x, scale_y);

    surface.set_stroke_color(options.color.unwrap_or(Color::RED));
    surface.set_line_width(options.line_width.unwrap_or(2.0));
    let count = sample_count(x_start, x_end, step);
    sweep_polyline(surface, &mapper, |x| Point::new(x, f(x)), x_start, step, count);
}

/// Options for [`draw_parametric`].
///
/// Defaults: origin at the surface center, scales 40/40, color purple, line
/// width 2, parameter range 0..=10, step 0.01.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParametricOptions {
    origin: Option<PixelPoint>,
    scale_x: Option<f64>,
    scale_y: Option<f64>,
    color: Option<Color>,
    line_width: Option<f32>,
    t_start: Option<f64>,
    t_end: Option<f64>,
    step: Option<f64>,
}

impl ParametricOptions {
    /// Create options with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel origin of math (0, 0).
    pub fn with_origin(mut self, origin: PixelPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the X scale in pixels per math unit.
    pub fn with_scale_x(mut self, scale_x: f64) -> Self {
        self.scale_x = Some(scale_x);
        self
    }

    /// Set the Y scale in pixels per math unit.
    pub fn with_scale_y(mut self, scale_y: f64) -> Self {
        self.scale_y = Some(scale_y);
        self
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the line width in pixels.
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Set the parameter start value.
    pub fn with_t_start(mut self, t_start: f64) -> Self {
        self.t_start = Some(t_start);
        self
    }

    /// Set the parameter end value.
    pub fn with_t_end(mut self, t_end: f64) -> Self {
        self.t_end = Some(t_end);
        self
    }

    /// Set the parameter step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

/// Plot the parametric curve `(x_fn(t), y_fn(t))` as one polyline.
///
/// Sweeps the parameter from the resolved `t_start` to `t_end` inclusive.
/// An empty parameter span records a single point and no visible segment.
pub fn draw_parametric<S, X, Y>(surface: &mut S, x_fn: X, y_fn: Y, options: ParametricOptions)
where
    S: Surface,
    X: Fn(f64) -> f64,
    Y: Fn(f64) -> f64,
{
    let origin = options.origin.unwrap_or_else(|| surface_center(surface));
    let scale_x = options.scale_x.unwrap_or(40.0);
    let scale_y = options.scale_y.unwrap_or(40.0);
    let t_start = options.t_start.unwrap_or(0.0);
    let t_end = options.t_end.unwrap_or(10.0);
    let step = options.step.unwrap_or(0.01);
    let mapper = Mapper::new(origin, scale_x, scale_y);

    surface.set_stroke_color(options.color.unwrap_or(Color::PURPLE));
    surface.set_line_width(options.line_width.unwrap_or(2.0));
    let count = sample_count(t_start, t_end, step);
    sweep_polyline(
        surface,
        &mapper,
        |t| Point::new(x_fn(t), y_fn(t)),
        t_start,
        step,
        count,
    );
}

/// Options for [`draw_line`].
///
/// Defaults: origin at the surface center, scales 40/40, color black, line
/// width 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineOptions {
    origin: Option<PixelPoint>,
    scale_x: Option<f64>,
    scale_y: Option<f64>,
    color: Option<Color>,
    line_width: Option<f32>,
}

impl LineOptions {
    /// Create options with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel origin of math (0, 0).
    pub fn with_origin(mut self, origin: PixelPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the X scale in pixels per math unit.
    pub fn with_scale_x(mut self, scale_x: f64) -> Self {
        self.scale_x = Some(scale_x);
        self
    }

    /// Set the Y scale in pixels per math unit.
    pub fn with_scale_y(mut self, scale_y: f64) -> Self {
        self.scale_y = Some(scale_y);
        self
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the line width in pixels.
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = Some(line_width);
        self
    }
}

/// Stroke a single straight segment between two math points.
pub fn draw_line<S: Surface>(surface: &mut S, p1: Point, p2: Point, options: LineOptions) {
    let origin = options.origin.unwrap_or_else(|| surface_center(surface));
    let scale_x = options.scale_x.unwrap_or(40.0);
    let scale_y = options.scale_y.unwrap_or(40.0);
    let mapper = Mapper::new(origin, scale_x, scale_y);

    surface.set_stroke_color(options.color.unwrap_or(Color::BLACK));
    surface.set_line_width(options.line_width.unwrap_or(2.0));
    surface.begin_path();
    surface.move_to(mapper.map(p1));
    surface.line_to(mapper.map(p2));
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn axes_issue_exactly_two_strokes() {
        for (width, height) in [(100.0, 100.0), (640.0, 480.0), (1.0, 1.0)] {
            let mut surface = RecordingSurface::new(width, height);
            draw_axes(&mut surface, PixelPoint::new(width * 0.5, height * 0.5));
            assert_eq!(surface.stroke_count(), 2);
        }
    }

    #[test]
    fn axes_span_full_surface() {
        let mut surface = RecordingSurface::new(200.0, 100.0);
        draw_axes(&mut surface, PixelPoint::new(80.0, 30.0));
        let polylines = surface.polylines();
        assert_eq!(
            polylines[0],
            vec![PixelPoint::new(0.0, 30.0), PixelPoint::new(200.0, 30.0)]
        );
        assert_eq!(
            polylines[1],
            vec![PixelPoint::new(80.0, 0.0), PixelPoint::new(80.0, 100.0)]
        );
    }

    #[test]
    fn function_samples_inclusive_range() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        let options = FunctionOptions::new()
            .with_origin(PixelPoint::new(0.0, 100.0))
            .with_scale_x(1.0)
            .with_scale_y(1.0)
            .with_step(1.0)
            .with_x_min(0.0)
            .with_x_max(2.0);
        draw_function(&mut surface, |x| x, options);

        let polylines = surface.polylines();
        assert_eq!(polylines.len(), 1);
        assert_eq!(
            polylines[0],
            vec![
                PixelPoint::new(0.0, 100.0),
                PixelPoint::new(1.0, 99.0),
                PixelPoint::new(2.0, 98.0),
            ]
        );
    }

    #[test]
    fn function_default_range_covers_visible_columns() {
        let mut surface = RecordingSurface::new(200.0, 100.0);
        draw_function(&mut surface, |_| 0.0, FunctionOptions::new());

        // origin (100, 50), scale_x 10: x sweeps -10..=10, one pixel per
        // sample, so the polyline spans columns 0..=200.
        let polylines = surface.polylines();
        let points = &polylines[0];
        assert_eq!(points.len(), 201);
        assert!((points[0].x - 0.0).abs() < 1e-3);
        assert!((points.last().unwrap().x - 200.0).abs() < 1e-3);
        assert!(points.iter().all(|p| (p.y - 50.0).abs() < 1e-3));
    }

    #[test]
    fn function_defaults_to_blue() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        draw_function(&mut surface, |x| x, FunctionOptions::new());
        assert_eq!(surface.stroke_color_at(0), Some(Color::BLUE));
    }

    #[test]
    fn arc_uses_explicit_bounds() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let options = ArcOptions::new()
            .with_origin(PixelPoint::new(0.0, 50.0))
            .with_scale_x(420.0)
            .with_step(0.5);
        draw_arc(&mut surface, |_| 0.0, 0.0, 1.0, options);

        let polylines = surface.polylines();
        let xs: Vec<f32> = polylines[0].iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 210.0, 420.0]);
        assert_eq!(surface.stroke_color_at(0), Some(Color::RED));
    }

    #[test]
    fn arc_overshoots_when_span_is_not_a_step_multiple() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let options = ArcOptions::new()
            .with_origin(PixelPoint::new(0.0, 50.0))
            .with_scale_x(1.0)
            .with_step(1.0);
        draw_arc(&mut surface, |_| 0.0, 0.0, 2.5, options);

        // ceil(2.5 / 1) = 3 samples after the first; the last lands at 3.0.
        let polylines = surface.polylines();
        assert_eq!(polylines[0].len(), 4);
        assert!((polylines[0][3].x - 3.0).abs() < 1e-6);
    }

    #[test]
    fn parametric_empty_span_records_single_point() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let options = ParametricOptions::new().with_t_start(0.0).with_t_end(0.0);
        draw_parametric(&mut surface, |t| t.cos(), |t| t.sin(), options);

        let polylines = surface.polylines();
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].len(), 1);
    }

    #[test]
    fn parametric_circle_stays_on_radius() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        let options = ParametricOptions::new()
            .with_t_end(std::f64::consts::TAU)
            .with_step(0.1);
        draw_parametric(&mut surface, |t| t.cos(), |t| t.sin(), options);

        // Default origin (100, 100), scale 40: every sample sits 40px out.
        let polylines = surface.polylines();
        for point in &polylines[0] {
            let dx = point.x - 100.0;
            let dy = point.y - 100.0;
            let radius = (dx * dx + dy * dy).sqrt();
            assert!((radius - 40.0).abs() < 1e-3);
        }
    }

    #[test]
    fn line_maps_endpoints() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        let options = LineOptions::new().with_origin(PixelPoint::new(100.0, 100.0));
        draw_line(&mut surface, Point::new(0.0, 0.0), Point::new(1.0, 1.0), options);

        let polylines = surface.polylines();
        assert_eq!(
            polylines[0],
            vec![PixelPoint::new(100.0, 100.0), PixelPoint::new(140.0, 60.0)]
        );
        assert_eq!(surface.stroke_color_at(0), Some(Color::BLACK));
    }

    #[test]
    fn sample_count_reversed_range_clamps() {
        assert_eq!(sample_count(1.0, 0.0, 0.5), 0);
        assert_eq!(sample_count(0.0, 2.0, 1.0), 2);
        assert_eq!(sample_count(0.0, 2.5, 1.0), 3);
    }
}

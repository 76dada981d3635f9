// src/render/mod.rs
// The render-surface port.
//
// Shapes and overlays draw against the RenderSurface capability trait
// instead of a concrete backend. NannouSurface is the windowed
// implementation; RecordingSurface is a headless backend that captures
// the exact call stream for inspection.

pub mod nannou_surface;
pub mod recording;

pub use nannou_surface::NannouSurface;
pub use recording::{RecordingSurface, SurfaceOp};

use crate::models::{Point, StrokeStyle};

/// Horizontal anchoring of a text label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAlign {
    Start,
    End,
}

/// Drawing capabilities required of the host surface.
///
/// Path construction follows canvas conventions: begin_path starts a fresh
/// path and resets the stroke style, move_to opens a new subpath, the curve
/// and arc calls extend the current subpath, and stroke renders every
/// accumulated subpath. Coordinates are canvas space (top-left origin,
/// y down); arc angles grow clockwise in that space.
pub trait RenderSurface {
    fn begin_path(&mut self, style: &StrokeStyle);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn quadratic_to(&mut self, control: Point, end: Point);
    fn cubic_to(&mut self, control1: Point, control2: Point, end: Point);
    fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    );
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        center: Point,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    );
    fn stroke(&mut self);
    fn clear(&mut self);
    fn text(&mut self, text: &str, anchor: Point, align: TextAlign);
}

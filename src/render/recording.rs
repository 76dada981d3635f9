// src/render/recording.rs
// Headless RenderSurface that records every call it receives.
//
// Useful for inspecting exactly what a shape or sequencer frame would
// draw without opening a window; the test suites drive playback through
// this backend.

use crate::models::{Point, StrokeStyle};
use crate::render::{RenderSurface, TextAlign};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    BeginPath {
        style: StrokeStyle,
    },
    MoveTo(Point),
    LineTo(Point),
    QuadraticTo {
        control: Point,
        end: Point,
    },
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    },
    Ellipse {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    },
    Stroke,
    Clear,
    Text {
        text: String,
        anchor: Point,
        align: TextAlign,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stroked paths recorded so far.
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn begin_path(&mut self, style: &StrokeStyle) {
        self.ops.push(SurfaceOp::BeginPath {
            style: style.clone(),
        });
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(SurfaceOp::LineTo(point));
    }

    fn quadratic_to(&mut self, control: Point, end: Point) {
        self.ops.push(SurfaceOp::QuadraticTo { control, end });
    }

    fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.ops.push(SurfaceOp::CubicTo {
            control1,
            control2,
            end,
        });
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        self.ops.push(SurfaceOp::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn ellipse(
        &mut self,
        center: Point,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        self.ops.push(SurfaceOp::Ellipse {
            center,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn text(&mut self, text: &str, anchor: Point, align: TextAlign) {
        self.ops.push(SurfaceOp::Text {
            text: text.to_string(),
            anchor,
            align,
        });
    }
}

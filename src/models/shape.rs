// src/models/shape.rs
// Shape primitives and the per-shape progress interpolation math.
//
// A Shape is one entry in a playback sequence: shared timing and stroke
// style plus a ShapeKind carrying the variant-specific geometry. Shapes
// are built once at scene-assembly time and never mutated afterwards.

use nannou::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("angle {angle} is out of range: arc angles must lie within [0, 2\u{3c0}]")]
    AngleOutOfRange { angle: f32 },
}

/// A 2D point in canvas coordinates (top-left origin, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Timing envelope of one shape: an active draw duration bracketed by
/// optional hold times. All values are seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f32,
    pub wait_before: f32,
    pub wait_after: f32,
}

impl Timing {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            wait_before: 0.0,
            wait_after: 0.0,
        }
    }

    /// Full time budget of the shape including both waits.
    pub fn total(&self) -> f32 {
        self.duration + self.wait_before + self.wait_after
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb<f32>,
    pub weight: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: rgb(0.0, 0.0, 0.0),
            weight: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineParams {
    pub start: Point,
    pub end: Point,
}

impl LineParams {
    /// Interpolated endpoint at completion fraction `t`. The drawn segment
    /// always runs from the fixed start point to this point.
    pub fn point_at(&self, t: f32) -> Point {
        Point::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticCurveParams {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadraticCurveParams {
    pub fn sub_control_point(&self, t: f32) -> Point {
        Point::new(
            self.start.x + (self.control.x - self.start.x) * t,
            self.start.y + (self.control.y - self.start.y) * t,
        )
    }

    pub fn sub_end_point(&self, t: f32) -> Point {
        let u = 1.0 - t;
        Point::new(
            u * u * self.start.x + 2.0 * u * t * self.control.x + t * t * self.end.x,
            u * u * self.start.y + 2.0 * u * t * self.control.y + t * t * self.end.y,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CubicCurveParams {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicCurveParams {
    pub fn sub_control_point1(&self, t: f32) -> Point {
        Point::new(
            self.start.x + (self.control1.x - self.start.x) * t,
            self.start.y + (self.control1.y - self.start.y) * t,
        )
    }

    pub fn sub_control_point2(&self, t: f32) -> Point {
        let u = 1.0 - t;
        Point::new(
            u * u * self.start.x + 2.0 * u * t * self.control1.x + t * t * self.control2.x,
            u * u * self.start.y + 2.0 * u * t * self.control1.y + t * t * self.control2.y,
        )
    }

    pub fn sub_end_point(&self, t: f32) -> Point {
        let u = 1.0 - t;
        Point::new(
            u * u * u * self.start.x
                + 3.0 * t * u * u * self.control1.x
                + 3.0 * t * t * u * self.control2.x
                + t * t * t * self.end.x,
            u * u * u * self.start.y
                + 3.0 * t * u * u * self.control1.y
                + 3.0 * t * t * u * self.control2.y
                + t * t * t * self.end.y,
        )
    }
}

/// Direction-aware angular span between two arc angles in [0, 2pi].
///
/// Clockwise sweeps increase the angle; when the start angle is past the
/// end angle the arc wraps through zero. Counterclockwise is the mirror
/// case with decreasing angles.
pub fn arc_span(start_angle: f32, end_angle: f32, counterclockwise: bool) -> f32 {
    if counterclockwise {
        if start_angle > end_angle {
            start_angle - end_angle
        } else {
            2.0 * PI - (end_angle - start_angle)
        }
    } else if start_angle > end_angle {
        2.0 * PI - (start_angle - end_angle)
    } else {
        end_angle - start_angle
    }
}

fn check_angle(angle: f32) -> Result<f32, GeometryError> {
    if !(0.0..=2.0 * PI).contains(&angle) {
        return Err(GeometryError::AngleOutOfRange { angle });
    }
    Ok(angle)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcParams {
    pub center: Point,
    pub radius: f32,
    start_angle: f32,
    end_angle: f32,
    pub counterclockwise: bool,
}

impl ArcParams {
    /// Angles must lie within [0, 2pi]; anything else is an invalid
    /// parameter and the arc cannot be constructed.
    pub fn new(
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            center,
            radius,
            start_angle: check_angle(start_angle)?,
            end_angle: check_angle(end_angle)?,
            counterclockwise,
        })
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    pub fn span(&self) -> f32 {
        arc_span(self.start_angle, self.end_angle, self.counterclockwise)
    }

    /// End angle of the partial arc at completion fraction `t`.
    pub fn end_angle_at(&self, t: f32) -> f32 {
        if self.counterclockwise {
            self.start_angle - t * self.span()
        } else {
            self.start_angle + t * self.span()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EllipticalArcParams {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
    rotation: f32,
    start_angle: f32,
    end_angle: f32,
    pub counterclockwise: bool,
}

impl EllipticalArcParams {
    /// Same angle-range validation as a circular arc. The axis rotation is
    /// free-range and gets normalized into [0, 2pi).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        center: Point,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            center,
            radius_x,
            radius_y,
            rotation: rotation.rem_euclid(2.0 * PI),
            start_angle: check_angle(start_angle)?,
            end_angle: check_angle(end_angle)?,
            counterclockwise,
        })
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    pub fn span(&self) -> f32 {
        arc_span(self.start_angle, self.end_angle, self.counterclockwise)
    }

    pub fn end_angle_at(&self, t: f32) -> f32 {
        if self.counterclockwise {
            self.start_angle - t * self.span()
        } else {
            self.start_angle + t * self.span()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Line(LineParams),
    QuadraticCurve(QuadraticCurveParams),
    CubicCurve(CubicCurveParams),
    Arc(ArcParams),
    EllipticalArc(EllipticalArcParams),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub timing: Timing,
    pub style: StrokeStyle,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn new(timing: Timing, style: StrokeStyle, kind: ShapeKind) -> Self {
        Self {
            timing,
            style,
            kind,
        }
    }

    /// Completion fraction for a given elapsed time measured from the start
    /// of this shape's time budget. Pure; can be negative (not started yet)
    /// or exceed 1 (already finished) -- callers clamp to [0, 1] before
    /// rendering.
    pub fn progress(&self, elapsed: f32) -> f32 {
        (elapsed - self.timing.wait_before) / self.timing.duration
    }

    /// Full time budget including both waits.
    pub fn total_time(&self) -> f32 {
        self.timing.total()
    }
}

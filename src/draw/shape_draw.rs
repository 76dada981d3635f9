// src/draw/shape_draw.rs
// Shape translation to RenderSurface calls.
//
// Rendering a shape at completion fraction `progress` issues exactly one
// stroked path: the sub-curve or sub-arc covering the first `progress` of
// the shape's parametric interval.

use crate::models::{Shape, ShapeKind};
use crate::render::RenderSurface;

/// Draw the partial shape for `progress` in [0, 1]. Pass exactly 1.0 to
/// draw the shape in its final, fully-revealed state. The stroke style is
/// reset and a fresh path begun before the variant geometry is emitted.
pub fn draw_shape<S: RenderSurface>(shape: &Shape, progress: f32, surface: &mut S) {
    surface.begin_path(&shape.style);
    match &shape.kind {
        ShapeKind::Line(line) => {
            surface.move_to(line.start);
            surface.line_to(line.point_at(progress));
        }
        ShapeKind::QuadraticCurve(curve) => {
            surface.move_to(curve.start);
            surface.quadratic_to(
                curve.sub_control_point(progress),
                curve.sub_end_point(progress),
            );
        }
        ShapeKind::CubicCurve(curve) => {
            surface.move_to(curve.start);
            surface.cubic_to(
                curve.sub_control_point1(progress),
                curve.sub_control_point2(progress),
                curve.sub_end_point(progress),
            );
        }
        ShapeKind::Arc(arc) => {
            surface.arc(
                arc.center,
                arc.radius,
                arc.start_angle(),
                arc.end_angle_at(progress),
                arc.counterclockwise,
            );
        }
        ShapeKind::EllipticalArc(arc) => {
            surface.ellipse(
                arc.center,
                arc.radius_x,
                arc.radius_y,
                arc.rotation(),
                arc.start_angle(),
                arc.end_angle_at(progress),
                arc.counterclockwise,
            );
        }
    }
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ArcParams, CubicCurveParams, LineParams, Point, QuadraticCurveParams, Shape, StrokeStyle,
        Timing,
    };
    use crate::render::{RecordingSurface, SurfaceOp};
    use std::f32::consts::PI;

    fn line_shape() -> Shape {
        Shape::new(
            Timing::new(1.0),
            StrokeStyle::default(),
            ShapeKind::Line(LineParams {
                start: Point::new(0.0, 0.0),
                end: Point::new(100.0, 50.0),
            }),
        )
    }

    #[test]
    fn test_line_render_at_zero_and_one() {
        let shape = line_shape();

        let mut surface = RecordingSurface::new();
        draw_shape(&shape, 0.0, &mut surface);
        // Zero-length segment held at the start point.
        assert_eq!(surface.ops[1], SurfaceOp::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(surface.ops[2], SurfaceOp::LineTo(Point::new(0.0, 0.0)));

        let mut surface = RecordingSurface::new();
        draw_shape(&shape, 1.0, &mut surface);
        assert_eq!(surface.ops[2], SurfaceOp::LineTo(Point::new(100.0, 50.0)));
    }

    #[test]
    fn test_path_contract_order() {
        let shape = line_shape();
        let mut surface = RecordingSurface::new();
        draw_shape(&shape, 0.5, &mut surface);

        // Style reset, fresh path, geometry, one stroke.
        assert!(matches!(surface.ops[0], SurfaceOp::BeginPath { .. }));
        assert_eq!(*surface.ops.last().unwrap(), SurfaceOp::Stroke);
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn test_quadratic_full_progress_reproduces_original_points() {
        let curve = QuadraticCurveParams {
            start: Point::new(500.0, 300.0),
            control: Point::new(900.0, 200.0),
            end: Point::new(500.0, 600.0),
        };
        let shape = Shape::new(
            Timing::new(1.5),
            StrokeStyle::default(),
            ShapeKind::QuadraticCurve(curve.clone()),
        );

        let mut surface = RecordingSurface::new();
        draw_shape(&shape, 1.0, &mut surface);
        assert_eq!(surface.ops[1], SurfaceOp::MoveTo(curve.start));
        assert_eq!(
            surface.ops[2],
            SurfaceOp::QuadraticTo {
                control: curve.control,
                end: curve.end,
            }
        );
    }

    #[test]
    fn test_cubic_full_progress_reproduces_original_points() {
        let curve = CubicCurveParams {
            start: Point::new(0.0, 0.0),
            control1: Point::new(10.0, 20.0),
            control2: Point::new(30.0, 20.0),
            end: Point::new(40.0, 0.0),
        };
        let shape = Shape::new(
            Timing::new(1.0),
            StrokeStyle::default(),
            ShapeKind::CubicCurve(curve.clone()),
        );

        let mut surface = RecordingSurface::new();
        draw_shape(&shape, 1.0, &mut surface);
        assert_eq!(
            surface.ops[2],
            SurfaceOp::CubicTo {
                control1: curve.control1,
                control2: curve.control2,
                end: curve.end,
            }
        );
    }

    #[test]
    fn test_arc_partial_end_angle() {
        let arc = ArcParams::new(Point::new(400.0, 400.0), 200.0, 0.0, PI, false).unwrap();
        let shape = Shape::new(
            Timing::new(1.0),
            StrokeStyle::default(),
            ShapeKind::Arc(arc),
        );

        let mut surface = RecordingSurface::new();
        draw_shape(&shape, 0.5, &mut surface);
        match &surface.ops[1] {
            SurfaceOp::Arc {
                start_angle,
                end_angle,
                counterclockwise,
                ..
            } => {
                assert_eq!(*start_angle, 0.0);
                assert!((end_angle - PI / 2.0).abs() < 1e-5);
                assert!(!counterclockwise);
            }
            other => panic!("expected an arc op, got {:?}", other),
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let shape = line_shape();

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        draw_shape(&shape, 0.37, &mut first);
        draw_shape(&shape, 0.37, &mut second);
        assert_eq!(first.ops, second.ops);

        // Rendering twice on the same surface repeats the identical path.
        let mut twice = RecordingSurface::new();
        draw_shape(&shape, 0.37, &mut twice);
        draw_shape(&shape, 0.37, &mut twice);
        let half = twice.ops.len() / 2;
        assert_eq!(twice.ops[..half], twice.ops[half..]);
    }
}

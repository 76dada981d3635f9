// src/models/builtin.rs
// Built-in demo scenes, selectable by name from the config.

use std::f32::consts::PI;

use crate::models::scene::{ItemBase, ItemSpec, Scene};
use crate::models::shape::Point;

fn base(duration: f32) -> ItemBase {
    ItemBase {
        duration,
        wait_before_start_drawing: 0.0,
        wait_after_drawing_end: 0.0,
        stroke_color: "#000000".to_string(),
        line_width: 1.0,
    }
}

/// Look up a built-in scene by name.
pub fn builtin_scene(name: &str) -> Option<Scene> {
    match name {
        "heart" => Some(heart()),
        "chanel-logo" => Some(chanel_logo()),
        "apple-logo" => Some(apple_logo()),
        _ => None,
    }
}

/// Two mirrored quadratic curves meeting at the tip.
fn heart() -> Scene {
    Scene {
        canvas_width: 1000.0,
        canvas_height: 800.0,
        auxiliary_line: true,
        mouse_coordinate: true,
        items: vec![
            ItemSpec::QuadraticCurve {
                base: base(1.5),
                start_point: Point::new(500.0, 300.0),
                control_point: Point::new(900.0, 200.0),
                end_point: Point::new(500.0, 600.0),
            },
            ItemSpec::QuadraticCurve {
                base: base(1.5),
                start_point: Point::new(500.0, 300.0),
                control_point: Point::new(100.0, 200.0),
                end_point: Point::new(500.0, 600.0),
            },
        ],
    }
}

/// Two interlocking open rings drawn with a heavy stroke, the second one
/// swept counterclockwise.
fn chanel_logo() -> Scene {
    Scene {
        canvas_width: 1100.0,
        canvas_height: 800.0,
        auxiliary_line: false,
        mouse_coordinate: false,
        items: vec![
            ItemSpec::Arc {
                base: ItemBase {
                    line_width: 45.0,
                    ..base(1.0)
                },
                center: Point::new(400.0, 400.0),
                radius: 200.0,
                start_angle: 7.0 * PI / 6.0,
                end_angle: 5.0 * PI / 6.0,
                counterclockwise: false,
            },
            ItemSpec::Arc {
                base: ItemBase {
                    line_width: 45.0,
                    ..base(1.0)
                },
                center: Point::new(700.0, 400.0),
                radius: 200.0,
                start_angle: 11.0 * PI / 6.0,
                end_angle: PI / 6.0,
                counterclockwise: true,
            },
        ],
    }
}

/// Circle construction sketch of the apple silhouette: four full circles
/// and a counterclockwise elliptical base.
fn apple_logo() -> Scene {
    Scene {
        canvas_width: 1400.0,
        canvas_height: 1100.0,
        auxiliary_line: false,
        mouse_coordinate: false,
        items: vec![
            ItemSpec::Arc {
                base: base(0.1),
                center: Point::new(700.0, 400.0),
                radius: 300.0,
                start_angle: 0.0,
                end_angle: 2.0 * PI,
                counterclockwise: false,
            },
            ItemSpec::Arc {
                base: base(0.1),
                center: Point::new(850.0, 250.0),
                radius: 180.0,
                start_angle: 0.0,
                end_angle: 2.0 * PI,
                counterclockwise: false,
            },
            ItemSpec::Arc {
                base: base(0.1),
                center: Point::new(550.0, 250.0),
                radius: 180.0,
                start_angle: 0.0,
                end_angle: 2.0 * PI,
                counterclockwise: false,
            },
            ItemSpec::EllipticalArc {
                base: base(0.1),
                center: Point::new(700.0, 800.0),
                radius_x: 300.0,
                radius_y: 150.0,
                rotation: 0.0,
                start_angle: 7.0 * PI / 8.0 + PI,
                end_angle: PI / 8.0 + PI,
                counterclockwise: true,
            },
            ItemSpec::Arc {
                base: base(0.1),
                center: Point::new(700.0, 350.0),
                radius: 350.0,
                start_angle: 0.0,
                end_angle: 2.0 * PI,
                counterclockwise: false,
            },
        ],
    }
}

// src/draw/coordinate_draw.rs
// The live mouse-position readout overlay.
//
// The label is offset into the quadrant that keeps it inside the canvas:
// pointers in the right half get an end-aligned label to their left, and
// pointers in the top half get the label pushed below the cursor.

use crate::models::Point;
use crate::render::{RenderSurface, TextAlign};

#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub anchor: Point,
    pub align: TextAlign,
}

/// Quadrant-relative placement of the coordinate label for a pointer at
/// `point` on a canvas of the given size.
pub fn place_label(point: Point, width: f32, height: f32) -> LabelPlacement {
    let text = format!("({:.0},{:.0})", point.x, point.y);

    if point.x > width / 2.0 {
        let anchor = if point.y > height / 2.0 {
            Point::new(point.x - 10.0, point.y - 10.0)
        } else {
            Point::new(point.x - 10.0, point.y + 30.0)
        };
        LabelPlacement {
            text,
            anchor,
            align: TextAlign::End,
        }
    } else {
        let anchor = if point.y > height / 2.0 {
            Point::new(point.x + 10.0, point.y - 10.0)
        } else {
            Point::new(point.x + 20.0, point.y + 40.0)
        };
        LabelPlacement {
            text,
            anchor,
            align: TextAlign::Start,
        }
    }
}

/// One frame of the readout loop: clear the overlay surface, then draw
/// the label if a pointer position is known.
pub fn draw_coordinate<S: RenderSurface>(
    point: Option<Point>,
    width: f32,
    height: f32,
    surface: &mut S,
) {
    surface.clear();
    if let Some(point) = point {
        let label = place_label(point, width, height);
        surface.text(&label.text, label.anchor, label.align);
    }
}

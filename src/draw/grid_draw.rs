// src/draw/grid_draw.rs
// The auxiliary-line overlay: a fixed-gap dashed grid over the canvas.
//
// The dash segments only depend on the canvas dimensions, so they are
// computed once at startup and replayed each frame.

use crate::models::{Point, StrokeStyle};
use crate::render::RenderSurface;

pub const AUXILIARY_LINE_GAP: f32 = 100.0;

const DASH_ON: f32 = 1.0;
const DASH_OFF: f32 = 2.0;

/// Dash segments for every grid line on a canvas of the given size.
/// Horizontal lines at y = i * gap for i in 1..=floor(height / gap),
/// vertical lines likewise across the width.
pub fn grid_dash_segments(width: f32, height: f32) -> Vec<(Point, Point)> {
    let mut segments = Vec::new();

    let horizontal_count = (height / AUXILIARY_LINE_GAP).floor() as u32;
    for i in 1..=horizontal_count {
        let y = i as f32 * AUXILIARY_LINE_GAP;
        dash_line(Point::new(0.0, y), Point::new(width, y), &mut segments);
    }

    let vertical_count = (width / AUXILIARY_LINE_GAP).floor() as u32;
    for i in 1..=vertical_count {
        let x = i as f32 * AUXILIARY_LINE_GAP;
        dash_line(Point::new(x, 0.0), Point::new(x, height), &mut segments);
    }

    segments
}

/// Cut one line into 1-on / 2-off dash segments.
fn dash_line(from: Point, to: Point, out: &mut Vec<(Point, Point)>) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= 0.0 {
        return;
    }
    let (ux, uy) = (dx / length, dy / length);

    let mut offset = 0.0;
    while offset < length {
        let end = (offset + DASH_ON).min(length);
        out.push((
            Point::new(from.x + ux * offset, from.y + uy * offset),
            Point::new(from.x + ux * end, from.y + uy * end),
        ));
        offset += DASH_ON + DASH_OFF;
    }
}

/// Replay precomputed dash segments as a single hairline stroke.
pub fn draw_grid<S: RenderSurface>(segments: &[(Point, Point)], surface: &mut S) {
    let style = StrokeStyle {
        weight: 1.0,
        ..StrokeStyle::default()
    };
    surface.begin_path(&style);
    for (start, end) in segments {
        surface.move_to(*start);
        surface.line_to(*end);
    }
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_counts() {
        // 450 x 320 canvas: 3 horizontal lines (y = 100, 200, 300) and
        // 4 vertical (x = 100..400).
        let segments = grid_dash_segments(450.0, 320.0);

        let horizontal: Vec<_> = segments.iter().filter(|(a, b)| a.y == b.y).collect();
        let vertical: Vec<_> = segments.iter().filter(|(a, b)| a.x == b.x).collect();
        assert!(!horizontal.is_empty());
        assert!(!vertical.is_empty());

        let mut h_lines: Vec<f32> = horizontal.iter().map(|(a, _)| a.y).collect();
        h_lines.dedup();
        assert_eq!(h_lines.len(), 3);

        let mut v_lines: Vec<f32> = vertical.iter().map(|(a, _)| a.x).collect();
        v_lines.dedup();
        assert_eq!(v_lines.len(), 4);
    }

    #[test]
    fn test_no_lines_on_small_canvas() {
        assert!(grid_dash_segments(99.0, 99.0).is_empty());
    }

    #[test]
    fn test_dash_lengths() {
        let mut segments = Vec::new();
        dash_line(Point::new(0.0, 100.0), Point::new(10.0, 100.0), &mut segments);

        // Pattern is 1 on / 2 off: dashes start at 0, 3, 6, 9.
        assert_eq!(segments.len(), 4);
        for (start, end) in &segments[..3] {
            assert!((end.x - start.x - DASH_ON).abs() < 1e-5);
        }
        // Final dash is clipped to the line end.
        let (last_start, last_end) = segments[3];
        assert_eq!(last_start.x, 9.0);
        assert_eq!(last_end.x, 10.0);
    }

    #[test]
    fn test_draw_grid_single_stroke() {
        use crate::render::{RecordingSurface, SurfaceOp};

        let segments = grid_dash_segments(200.0, 200.0);
        let mut surface = RecordingSurface::new();
        draw_grid(&segments, &mut surface);

        assert_eq!(surface.stroke_count(), 1);
        match &surface.ops[0] {
            SurfaceOp::BeginPath { style } => assert_eq!(style.weight, 1.0),
            other => panic!("expected begin_path, got {:?}", other),
        }
    }
}

// src/render/nannou_surface.rs
// RenderSurface backend over the nannou immediate-mode Draw API.
//
// Canvas coordinates (top-left origin, y down) are converted to nannou
// coordinates (center origin, y up) at the point of drawing. Curves and
// arcs are flattened into polylines; the flattened points are computed in
// canvas space first so winding and angle conventions match the canvas
// contract exactly.

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::models::{Point, StrokeStyle};
use crate::render::{RenderSurface, TextAlign};

const CURVE_RESOLUTION: usize = 64;
const ARC_RESOLUTION: usize = 128;

const FONT_SIZE: u32 = 20;
const TEXT_AREA_WIDTH: f32 = 200.0;

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
    style: StrokeStyle,
    subpaths: Vec<Vec<Point>>,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, width: f32, height: f32) -> Self {
        Self {
            draw,
            width,
            height,
            style: StrokeStyle::default(),
            subpaths: Vec::new(),
        }
    }

    /// Canvas point to nannou screen point.
    fn to_screen(&self, point: Point) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// Window-space pointer position back to canvas coordinates.
    pub fn screen_to_canvas(width: f32, height: f32, position: Point2) -> Point {
        Point::new(position.x + width / 2.0, height / 2.0 - position.y)
    }

    /// Extend the current subpath, opening one if the path is empty.
    fn extend_subpath(&mut self, points: impl IntoIterator<Item = Point>) {
        if self.subpaths.is_empty() {
            self.subpaths.push(Vec::new());
        }
        if let Some(subpath) = self.subpaths.last_mut() {
            subpath.extend(points);
        }
    }

    fn current_point(&self) -> Option<Point> {
        self.subpaths.last().and_then(|sub| sub.last()).copied()
    }

    /// Signed sweep between two angles honoring the winding direction,
    /// canvas-style: clockwise sweeps are non-negative, counterclockwise
    /// non-positive, wrapping by a full turn when the raw difference has
    /// the wrong sign.
    fn normalize_sweep(start_angle: f32, end_angle: f32, counterclockwise: bool) -> f32 {
        let mut sweep = end_angle - start_angle;
        if counterclockwise {
            if sweep > 0.0 {
                sweep -= TAU;
            }
        } else if sweep < 0.0 {
            sweep += TAU;
        }
        sweep
    }
}

fn quadratic_point(p0: Point, control: Point, end: Point, t: f32) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * p0.x + 2.0 * u * t * control.x + t * t * end.x,
        u * u * p0.y + 2.0 * u * t * control.y + t * t * end.y,
    )
}

fn cubic_point(p0: Point, control1: Point, control2: Point, end: Point, t: f32) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * u * p0.x
            + 3.0 * t * u * u * control1.x
            + 3.0 * t * t * u * control2.x
            + t * t * t * end.x,
        u * u * u * p0.y
            + 3.0 * t * u * u * control1.y
            + 3.0 * t * t * u * control2.y
            + t * t * t * end.y,
    )
}

/// Flattened points of a partial elliptical arc, in canvas space.
#[allow(clippy::too_many_arguments)]
pub fn generate_arc_points(
    center: Point,
    radius_x: f32,
    radius_y: f32,
    rotation: f32,
    start_angle: f32,
    sweep: f32,
    resolution: usize,
) -> Vec<Point> {
    let (sin_rot, cos_rot) = rotation.sin_cos();
    let mut points = Vec::with_capacity(resolution + 1);
    for i in 0..=resolution {
        let t = i as f32 / resolution as f32;
        let angle = start_angle + t * sweep;
        let (sin_a, cos_a) = angle.sin_cos();
        points.push(Point::new(
            center.x + radius_x * cos_a * cos_rot - radius_y * sin_a * sin_rot,
            center.y + radius_x * cos_a * sin_rot + radius_y * sin_a * cos_rot,
        ));
    }
    points
}

impl RenderSurface for NannouSurface<'_> {
    fn begin_path(&mut self, style: &StrokeStyle) {
        self.style = style.clone();
        self.subpaths.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.subpaths.push(vec![point]);
    }

    fn line_to(&mut self, point: Point) {
        self.extend_subpath([point]);
    }

    fn quadratic_to(&mut self, control: Point, end: Point) {
        let p0 = self.current_point().unwrap_or(control);
        let points = (1..=CURVE_RESOLUTION)
            .map(|i| quadratic_point(p0, control, end, i as f32 / CURVE_RESOLUTION as f32));
        self.extend_subpath(points);
    }

    fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) {
        let p0 = self.current_point().unwrap_or(control1);
        let points = (1..=CURVE_RESOLUTION)
            .map(|i| cubic_point(p0, control1, control2, end, i as f32 / CURVE_RESOLUTION as f32));
        self.extend_subpath(points);
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        let sweep = Self::normalize_sweep(start_angle, end_angle, counterclockwise);
        let points = generate_arc_points(
            center,
            radius,
            radius,
            0.0,
            start_angle,
            sweep,
            ARC_RESOLUTION,
        );
        self.extend_subpath(points);
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
        let sweep = Self::normalize_sweep(start_angle, end_angle, counterclockwise);
        let points = generate_arc_points(
            center,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            sweep,
            ARC_RESOLUTION,
        );
        self.extend_subpath(points);
    }

    fn stroke(&mut self) {
        for subpath in &self.subpaths {
            if subpath.len() < 2 {
                continue;
            }
            let points: Vec<Point2> = subpath.iter().map(|p| self.to_screen(*p)).collect();
            self.draw
                .polyline()
                .weight(self.style.weight)
                .join_round()
                .caps_round()
                .points(points)
                .color(self.style.color);
        }
    }

    fn clear(&mut self) {
        // The host clears the frame on every refresh; dropping pending
        // path state is all that is left to do here.
        self.subpaths.clear();
    }

    fn text(&mut self, text: &str, anchor: Point, align: TextAlign) {
        let screen = self.to_screen(anchor);
        // nannou centers the text layout rect on x_y; shift it so the
        // requested edge of the text sits on the anchor.
        let x = match align {
            TextAlign::Start => screen.x + TEXT_AREA_WIDTH / 2.0,
            TextAlign::End => screen.x - TEXT_AREA_WIDTH / 2.0,
        };
        let drawing = self
            .draw
            .text(text)
            .x_y(x, screen.y)
            .w(TEXT_AREA_WIDTH)
            .font_size(FONT_SIZE)
            .color(self.style.color);
        match align {
            TextAlign::Start => drawing.left_justify(),
            TextAlign::End => drawing.right_justify(),
        };
    }
}

// src/models/scene.rs
// The JSON-based scene data model.
//
// A scene is one playback session: canvas dimensions, overlay switches,
// and the ordered item list. Items are raw serde definitions; building
// them into Shapes performs the construction-time validation, so a bad
// angle or color aborts the whole scene before playback starts.

use nannou::prelude::*;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::shape::{
    ArcParams, CubicCurveParams, EllipticalArcParams, GeometryError, LineParams, Point,
    QuadraticCurveParams, Shape, ShapeKind, StrokeStyle, Timing,
};

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("invalid stroke color {0:?}: expected \"#rrggbb\"")]
    InvalidColor(String),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub canvas_width: f32,
    pub canvas_height: f32,
    #[serde(default)]
    pub auxiliary_line: bool,
    #[serde(default)]
    pub mouse_coordinate: bool,
    pub items: Vec<ItemSpec>,
}

/// Shared timing and style fields of every item definition. Field names
/// follow the scene-file JSON convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBase {
    pub duration: f32,
    #[serde(default)]
    pub wait_before_start_drawing: f32,
    #[serde(default)]
    pub wait_after_drawing_end: f32,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    #[serde(default = "default_line_width")]
    pub line_width: f32,
}

fn default_stroke_color() -> String {
    "#000000".to_string()
}

fn default_line_width() -> f32 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemSpec {
    #[serde(rename_all = "camelCase")]
    Line {
        #[serde(flatten)]
        base: ItemBase,
        start_point: Point,
        end_point: Point,
    },
    #[serde(rename_all = "camelCase")]
    QuadraticCurve {
        #[serde(flatten)]
        base: ItemBase,
        start_point: Point,
        control_point: Point,
        end_point: Point,
    },
    #[serde(rename_all = "camelCase")]
    CubicCurve {
        #[serde(flatten)]
        base: ItemBase,
        start_point: Point,
        control_point1: Point,
        control_point2: Point,
        end_point: Point,
    },
    #[serde(rename_all = "camelCase")]
    Arc {
        #[serde(flatten)]
        base: ItemBase,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        #[serde(default)]
        counterclockwise: bool,
    },
    #[serde(rename_all = "camelCase")]
    EllipticalArc {
        #[serde(flatten)]
        base: ItemBase,
        center: Point,
        radius_x: f32,
        radius_y: f32,
        #[serde(default)]
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        #[serde(default)]
        counterclockwise: bool,
    },
}

impl ItemSpec {
    pub fn into_shape(self) -> Result<Shape, SceneError> {
        match self {
            ItemSpec::Line {
                base,
                start_point,
                end_point,
            } => {
                let (timing, style) = build_base(&base)?;
                Ok(Shape::new(
                    timing,
                    style,
                    ShapeKind::Line(LineParams {
                        start: start_point,
                        end: end_point,
                    }),
                ))
            }
            ItemSpec::QuadraticCurve {
                base,
                start_point,
                control_point,
                end_point,
            } => {
                let (timing, style) = build_base(&base)?;
                Ok(Shape::new(
                    timing,
                    style,
                    ShapeKind::QuadraticCurve(QuadraticCurveParams {
                        start: start_point,
                        control: control_point,
                        end: end_point,
                    }),
                ))
            }
            ItemSpec::CubicCurve {
                base,
                start_point,
                control_point1,
                control_point2,
                end_point,
            } => {
                let (timing, style) = build_base(&base)?;
                Ok(Shape::new(
                    timing,
                    style,
                    ShapeKind::CubicCurve(CubicCurveParams {
                        start: start_point,
                        control1: control_point1,
                        control2: control_point2,
                        end: end_point,
                    }),
                ))
            }
            ItemSpec::Arc {
                base,
                center,
                radius,
                start_angle,
                end_angle,
                counterclockwise,
            } => {
                let (timing, style) = build_base(&base)?;
                let params =
                    ArcParams::new(center, radius, start_angle, end_angle, counterclockwise)?;
                Ok(Shape::new(timing, style, ShapeKind::Arc(params)))
            }
            ItemSpec::EllipticalArc {
                base,
                center,
                radius_x,
                radius_y,
                rotation,
                start_angle,
                end_angle,
                counterclockwise,
            } => {
                let (timing, style) = build_base(&base)?;
                let params = EllipticalArcParams::new(
                    center,
                    radius_x,
                    radius_y,
                    rotation,
                    start_angle,
                    end_angle,
                    counterclockwise,
                )?;
                Ok(Shape::new(timing, style, ShapeKind::EllipticalArc(params)))
            }
        }
    }
}

fn build_base(base: &ItemBase) -> Result<(Timing, StrokeStyle), SceneError> {
    let timing = Timing {
        duration: base.duration,
        wait_before: base.wait_before_start_drawing,
        wait_after: base.wait_after_drawing_end,
    };
    let style = StrokeStyle {
        color: parse_hex_color(&base.stroke_color)?,
        weight: base.line_width,
    };
    Ok((timing, style))
}

/// Parse a "#rrggbb" color into linear components.
pub fn parse_hex_color(value: &str) -> Result<Rgb<f32>, SceneError> {
    let invalid = || SceneError::InvalidColor(value.to_string());

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
    Ok(rgb(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

impl Scene {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let scene: Scene = serde_json::from_str(&content)?;
        Ok(scene)
    }

    /// Convert the raw item definitions into validated shapes, in
    /// playback order. The first invalid parameter aborts the build.
    pub fn build_items(&self) -> Result<Vec<Shape>, SceneError> {
        self.items
            .iter()
            .cloned()
            .map(ItemSpec::into_shape)
            .collect()
    }
}

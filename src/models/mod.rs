// src/models/mod.rs

pub mod builtin;
pub mod scene;
pub mod shape;

pub use builtin::builtin_scene;
pub use scene::{ItemBase, ItemSpec, Scene, SceneError};
pub use shape::{
    arc_span, ArcParams, CubicCurveParams, EllipticalArcParams, GeometryError, LineParams, Point,
    QuadraticCurveParams, Shape, ShapeKind, StrokeStyle, Timing,
};

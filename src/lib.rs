//! Spline-Bridge Library.
//!
//! Import/Export von Spline-Kontrollpunktdaten im Blender-JSON-Format in
//! eine native Bezier-Spline-Repräsentation, plus Auswertung von Punkten
//! und Orientierungen entlang einer Spline — optional deformiert entlang
//! einer zweiten Pfad-Spline (Profil folgt Trägerkurve, z.B. für
//! Straßen- und Strecken-Deformation).

pub mod core;
pub mod deform;
pub mod json;
pub mod shared;

pub use core::{BezierKnot, Spline, SplineContainer, Transform};
pub use deform::DeformEvaluator;
pub use json::{
    export_document, import_document, parse_spline_json, write_spline_json, ControlPointRecord,
    DocumentVec3, SplineDocument, SplineRecord,
};
pub use shared::{look_rotation, safe_look_rotation, swap_axes};

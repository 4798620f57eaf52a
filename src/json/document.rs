//! Serde-Typen für das JSON-Drahtformat.
//!
//! Die Feldnamen sind der Draht-Vertrag (`splines`, `controlPoints`,
//! `handleL`, `handleR`, `tilt`) und dürfen nicht umbenannt werden.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein Vektor im Dokumentformat (verschachteltes `{x, y, z}`-Objekt).
///
/// Eigener Typ statt `glam::Vec3`, weil glam als `[x, y, z]`-Array
/// serialisiert und der Draht-Vertrag Objekte verlangt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for DocumentVec3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<DocumentVec3> for Vec3 {
    fn from(v: DocumentVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Ein Kontrollpunkt im Dokument.
///
/// `handle_l`/`handle_r` sind absolute Handle-Positionen, keine Offsets.
/// `tilt` ist die Rotation um die Vorwärtsachse in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPointRecord {
    pub position: DocumentVec3,
    pub handle_l: DocumentVec3,
    pub handle_r: DocumentVec3,
    #[serde(default)]
    pub tilt: f32,
}

/// Eine Kurve im Dokument.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplineRecord {
    #[serde(default)]
    pub control_points: Vec<ControlPointRecord>,
    #[serde(default)]
    pub closed: bool,
}

/// Wurzel des Interchange-Formats. Ephemer: wird bei jedem Import/Export
/// frisch aufgebaut.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SplineDocument {
    #[serde(default)]
    pub splines: Vec<SplineRecord>,
}

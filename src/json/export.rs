//! Export des nativen Containers als Spline-Dokument.

use anyhow::{Context, Result};

use super::{ControlPointRecord, SplineDocument, SplineRecord};
use crate::core::SplineContainer;
use crate::shared::swap_axes;

/// Baut ein Dokument aus dem aktuellen Container-Zustand.
///
/// Die Handle-Positionen entstehen aus den Knoten-lokalen Tangenten,
/// zurückgedreht in den Container-Raum und an die Knotenposition angehängt.
///
/// Bekannte Asymmetrien zum Import (bewusst beibehalten, kein Bug-Fix):
/// `tilt` wird nicht aus der Knoten-Rotation rekonstruiert — die Rotation
/// reduziert sich beim Export auf die Handle-Richtung, der Roll-Anteil geht
/// verloren und `tilt` bleibt 0. Der Import-`scale` wird nicht wieder
/// herausdividiert.
pub fn export_document(container: &SplineContainer) -> SplineDocument {
    let mut document = SplineDocument::default();

    for spline in &container.splines {
        let mut record = SplineRecord {
            closed: spline.closed,
            control_points: Vec::with_capacity(spline.knots.len()),
        };

        for knot in &spline.knots {
            record.control_points.push(ControlPointRecord {
                position: swap_axes(knot.position).into(),
                handle_l: swap_axes(knot.position + knot.world_tangent_in()).into(),
                handle_r: swap_axes(knot.position + knot.world_tangent_out()).into(),
                tilt: 0.0,
            });
        }

        document.splines.push(record);
    }

    document
}

/// Serialisiert ein Dokument als hübsch formatiertes JSON.
///
/// Ein leeres Dokument ergibt `{"splines": []}`.
pub fn write_spline_json(document: &SplineDocument) -> Result<String> {
    serde_json::to_string_pretty(document).context("Spline-JSON konnte nicht geschrieben werden")
}

//! Import eines Spline-Dokuments in den nativen Container.

use anyhow::{Context, Result};
use glam::{Quat, Vec3};

use super::SplineDocument;
use crate::core::{BezierKnot, SplineContainer};
use crate::shared::{safe_look_rotation, swap_axes};

/// Parsed ein Spline-Dokument aus einem JSON-String.
pub fn parse_spline_json(json_content: &str) -> Result<SplineDocument> {
    serde_json::from_str(json_content).context("Spline-JSON konnte nicht geparsed werden")
}

/// Baut den Container aus einem Dokument neu auf.
///
/// Alle vorhandenen Splines werden entfernt. Pro Kontrollpunkt:
/// Achsen-Tausch Dokument → Engine, Knoten-Rotation aus Blickrichtung zum
/// rechten Handle plus `-tilt` Grad Roll um die Vorwärtsachse, Tangenten in
/// den Knoten-lokalen Raum zurückgedreht und mit `scale` skaliert.
///
/// Leere Dokumente oder Records ohne Kontrollpunkte ergeben leere Splines,
/// keinen Fehler.
pub fn import_document(document: &SplineDocument, scale: f32, container: &mut SplineContainer) {
    container.clear_splines();

    for record in &document.splines {
        let spline = container.add_spline();
        spline.closed = record.closed;

        for control_point in &record.control_points {
            let position = swap_axes(control_point.position.into());
            let handle_l = swap_axes(control_point.handle_l.into());
            let handle_r = swap_axes(control_point.handle_r.into());

            let rotation = safe_look_rotation(handle_r - position, Vec3::Y)
                * Quat::from_axis_angle(Vec3::Z, -control_point.tilt.to_radians());

            // Tangenten im Knoten-lokalen Raum speichern (inverse Rotation),
            // Ein- und Aushandle bleiben unabhängig (broken)
            spline.add_knot(BezierKnot {
                position: position * scale,
                rotation,
                tangent_in: rotation.inverse() * (handle_l - position) * scale,
                tangent_out: rotation.inverse() * (handle_r - position) * scale,
            });
        }
    }

    log::info!(
        "Spline-Import: {} Splines, {} Knoten",
        container.spline_count(),
        container.splines.iter().map(|s| s.knots.len()).sum::<usize>()
    );
}

//! Auswertung einer Spline, optional deformiert entlang einer Pfad-Spline.
//!
//! Die Basis-Spline wird als Profil interpretiert: ihre lokale X-Koordinate
//! ist Bogenlänge entlang der Deform-Spline, Y/Z sind vertikaler bzw.
//! seitlicher Versatz im mitbewegten Rahmen (Tangente/Up/Rechts) der
//! Deform-Spline. Die Orientierung des deformierten Ergebnisses entsteht
//! nicht aus der analytischen Tangente, sondern per finiter Differenz
//! zweier benachbarter Auswertungen — eine Näherung, deren Fehler mit der
//! Auflösung sinkt.

use glam::{Quat, Vec3};

use crate::core::{Spline, SplineContainer};
use crate::shared::safe_look_rotation;

/// Wertet Splines eines Containers aus, optional deformiert entlang der
/// ersten Spline eines zweiten Containers.
///
/// Jede Auswertung ist eine reine Funktion des aktuellen Container-Zustands;
/// es gibt keinen internen Cache. Gleichzeitige Mutation der Container
/// während einer Auswertung muss der Besitzer extern serialisieren.
#[derive(Debug, Clone, Copy)]
pub struct DeformEvaluator<'a> {
    /// Basis-Container (Profil-Splines)
    pub container: &'a SplineContainer,
    /// Optionaler Deform-Container (Trägerkurve), `None` = direkte Auswertung
    pub deform: Option<&'a SplineContainer>,
    /// Auflösung für finite Differenzen und die Nearest-Point-Abtastung
    pub resolution: f32,
}

impl<'a> DeformEvaluator<'a> {
    /// Evaluator ohne Deformation.
    pub fn new(container: &'a SplineContainer) -> Self {
        Self {
            container,
            deform: None,
            resolution: 1.0,
        }
    }

    /// Evaluator mit Deform-Container.
    pub fn with_deform(container: &'a SplineContainer, deform: &'a SplineContainer) -> Self {
        Self {
            container,
            deform: Some(deform),
            resolution: 1.0,
        }
    }

    /// Weltposition und -orientierung bei `anchor + distance / Bogenlänge`.
    ///
    /// `anchor` ist ein normalisierter Parameter, `distance` eine absolute
    /// Bogenlängen-Distanz relativ dazu. Ein Index außerhalb des Containers
    /// ist ein Programmierfehler und paniced.
    pub fn evaluate(&self, spline_index: usize, anchor: f32, distance: f32) -> (Vec3, Quat) {
        let spline = &self.container.splines[spline_index];
        let length = spline.arc_length();
        let t = if length > 0.0 {
            anchor + distance / length
        } else {
            anchor
        };
        self.evaluate_parameter(spline_index, t)
    }

    /// Nächster Punkt der (ggf. deformierten) Spline zu `point` per
    /// Brute-Force-Abtastung — der kanonische Vertrag.
    ///
    /// Tastet `ceil(Bogenlänge) * resolution` Parameter-Schritte ab
    /// (mindestens 1) und liefert `(position, rotation, t)` der Stützstelle
    /// mit minimalem Abstand. Bei Gleichstand gewinnt das niedrigste `t`;
    /// `t` liegt immer in [0, 1].
    ///
    /// O(resolution × Bogenlänge) pro Aufruf; bewusst einfach gehalten.
    /// Schneller, aber unter starker Deform-Krümmung ungenauer:
    /// [`Self::nearest_point_projected`].
    pub fn nearest_point(&self, spline_index: usize, point: Vec3) -> (Vec3, Quat, f32) {
        let spline = &self.container.splines[spline_index];
        let steps = ((spline.arc_length().ceil() * self.resolution).ceil() as usize).max(1);

        let (mut best_position, mut best_rotation) = self.evaluate_parameter(spline_index, 0.0);
        let mut best_t = 0.0f32;
        let mut best_distance = best_position.distance_squared(point);

        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let (position, rotation) = self.evaluate_parameter(spline_index, t);
            let distance = position.distance_squared(point);
            if distance < best_distance {
                best_distance = distance;
                best_position = position;
                best_rotation = rotation;
                best_t = t;
            }
        }

        (best_position, best_rotation, best_t.clamp(0.0, 1.0))
    }

    /// Nearest-Point über Projektion auf die Deform-Spline.
    ///
    /// Projiziert den Abfragepunkt erst über das native Nearest-Primitiv auf
    /// die Deform-Spline, rekonstruiert daraus einen Profil-Raum-Punkt und
    /// sucht dann auf der Basis-Spline. Nutzt deutlich weniger Abtastungen
    /// als [`Self::nearest_point`], weicht aber unter starker
    /// Deform-Krümmung von dessen Ergebnis ab.
    pub fn nearest_point_projected(&self, spline_index: usize, point: Vec3) -> (Vec3, Quat, f32) {
        let Some(deform) = self.deform_spline() else {
            // Ohne Deform-Spline: natives Nearest auf der Basis-Spline
            let spline = &self.container.splines[spline_index];
            let local = self.container.transform.inverse_transform_point(point);
            let (position, t) = spline.nearest(local, self.resolution);
            let (_, tangent, up) = spline.evaluate(t);
            return (
                self.container.transform.transform_point(position),
                self.container.transform.rotation * safe_look_rotation(tangent, up),
                t.clamp(0.0, 1.0),
            );
        };

        // Abfragepunkt in den mitbewegten Rahmen der Deform-Spline zerlegen
        let (nearest, t_deform) = deform.nearest(point, self.resolution);
        let (_, tangent, up_vector) = deform.evaluate(t_deform);
        let difference = point - nearest;

        let right = up_vector.cross(tangent).normalize_or_zero();
        let up = up_vector.normalize_or_zero();
        let forward = tangent.normalize_or_zero();

        let offset = Vec3::new(
            difference.dot(forward),
            difference.dot(up),
            -difference.dot(right),
        );

        let arc_distance = t_deform.clamp(0.0, 1.0) * deform.arc_length();
        let profile_query = Vec3::new(arc_distance, 0.0, 0.0) + offset;

        let spline = &self.container.splines[spline_index];
        let local_query = self.container.transform.inverse_transform_point(profile_query);
        let (_, t) = spline.nearest(local_query, self.resolution);

        let (position, rotation) = self.evaluate_parameter(spline_index, t);
        (position, rotation, t.clamp(0.0, 1.0))
    }

    /// Tastet die (ggf. deformierte) Spline als Polylinie ab, ein Segment
    /// pro Meter Bogenlänge (mindestens eines).
    pub fn sample_polyline(&self, spline_index: usize) -> Vec<Vec3> {
        let spline = &self.container.splines[spline_index];
        let segments = (spline.arc_length().ceil() as usize).max(1);

        (0..=segments)
            .map(|step| {
                let t = step as f32 / segments as f32;
                self.evaluate_parameter(spline_index, t).0
            })
            .collect()
    }

    /// Vollständige Pipeline bei normalisiertem Parameter `t`: direkte oder
    /// deformierte Auswertung, dann Welt-Transformation des Containers.
    fn evaluate_parameter(&self, spline_index: usize, t: f32) -> (Vec3, Quat) {
        let spline = &self.container.splines[spline_index];

        let (position, tangent, up_vector) = match self.deform_spline() {
            Some(deform) => deform_spline(spline, deform, t, self.resolution),
            None => spline.evaluate(t),
        };

        let world_position = self.container.transform.transform_point(position);
        let world_rotation =
            self.container.transform.rotation * safe_look_rotation(tangent, up_vector);
        (world_position, world_rotation)
    }

    /// Erste Spline des Deform-Containers. Ein leerer Deform-Container
    /// degradiert zur direkten Auswertung.
    fn deform_spline(&self) -> Option<&Spline> {
        self.deform.and_then(|container| container.first_spline())
    }
}

/// Deformierte Auswertung der Basis-Spline bei `t`.
///
/// Die Tangente entsteht per finiter Differenz zweier Auswertungen im
/// Abstand `1 / resolution_scale`, mit `resolution_scale =
/// ceil(Deform-Bogenlänge) * resolution`. `t` wird nur für die Wahl der
/// Stützstellen in [0, 1] geklemmt. Der Up-Vektor ist die Welt-Y-Achse;
/// die Rotation wird erst downstream über die sichere Blickrotation gebaut.
fn deform_spline(spline: &Spline, deform: &Spline, t: f32, resolution: f32) -> (Vec3, Vec3, Vec3) {
    let resolution_scale = (deform.arc_length().ceil() * resolution).max(1.0);
    let step = 1.0 / resolution_scale;

    let (profile, _, _) = spline.evaluate(t);
    let position = evaluate_point(deform, profile);

    let t0 = t.clamp(0.0, 1.0 - step);
    let (profile0, _, _) = spline.evaluate(t0);
    let point0 = evaluate_point(deform, profile0);

    let (profile1, _, _) = spline.evaluate(t0 + step);
    let point1 = evaluate_point(deform, profile1);

    (position, point1 - point0, Vec3::Y)
}

/// Projiziert einen Profil-Raum-Punkt in den Weltraum der Deform-Spline.
///
/// `point.x` ist Bogenlänge entlang der Deform-Spline; Überschuss jenseits
/// von [0, Bogenlänge] wird linear entlang der End-Tangente extrapoliert,
/// damit das Profil ohne Sprung über die Kurvenenden hinauslaufen kann.
/// `point.z`/`point.y` sind seitlicher/vertikaler Versatz im Rahmen.
fn evaluate_point(deform: &Spline, point: Vec3) -> Vec3 {
    let length = deform.arc_length();
    let t = if length > 0.0 { point.x / length } else { 0.0 };
    let (deform_position, deform_tangent, deform_up) = deform.evaluate(t);

    let right = deform_tangent.cross(deform_up).normalize_or_zero();
    let up = deform_up.normalize_or_zero();
    let forward = deform_tangent.normalize_or_zero();

    let overshoot = (point.x - length).max(0.0) + point.x.min(0.0);

    deform_position + forward * overshoot + right * point.z + up * point.y
}

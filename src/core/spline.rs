//! Eine Bezier-Spline über Kontrollknoten mit bogenlängen-parametrisierter
//! Auswertung.
//!
//! Die Auswertung `t ∈ [0, 1]` läuft über die Bogenlänge der gesamten Spline,
//! nicht uniform über die Segmente. Dafür wird pro Aufruf eine kumulative
//! Längentabelle aufgebaut (keine interne Cache-Haltung: jede Operation ist
//! eine reine Funktion des aktuellen Knoten-Zustands).

use glam::Vec3;

use super::BezierKnot;
use crate::shared::bezier::{cubic_bezier_derivative, cubic_bezier_point};

/// Unterteilungen pro Segment für die Bogenlängen-Tabelle.
const ARC_SAMPLES_PER_SEGMENT: usize = 16;

/// Eine offene oder geschlossene Bezier-Spline.
#[derive(Debug, Clone, Default)]
pub struct Spline {
    /// Kontrollknoten in Kurvenreihenfolge
    pub knots: Vec<BezierKnot>,
    /// Geschlossene Kurve: letztes Segment führt zurück zum ersten Knoten
    pub closed: bool,
}

/// Stützstelle der Bogenlängen-Tabelle.
#[derive(Debug, Clone, Copy)]
struct ArcSample {
    /// Kumulative Bogenlänge bis zu dieser Stützstelle
    arc: f32,
    /// Segment-Index
    segment: usize,
    /// Kurvenparameter innerhalb des Segments
    t: f32,
}

/// Pro Aufruf aufgebaute Bogenlängen-Tabelle.
#[derive(Debug)]
pub(crate) struct ArcTable {
    samples: Vec<ArcSample>,
    total: f32,
}

impl Spline {
    /// Leere offene Spline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Knoten ans Kurvenende an.
    pub fn add_knot(&mut self, knot: BezierKnot) {
        self.knots.push(knot);
    }

    /// Anzahl der Bezier-Segmente (0 bei weniger als zwei Knoten).
    pub fn segment_count(&self) -> usize {
        match self.knots.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Die vier Weltraum-Kontrollpunkte des Segments `index`.
    ///
    /// Die inneren Kontrollpunkte entstehen aus den Knoten-lokalen Tangenten,
    /// zurückgedreht in den Container-Raum.
    fn segment_points(&self, index: usize) -> [Vec3; 4] {
        let a = &self.knots[index];
        let b = &self.knots[(index + 1) % self.knots.len()];
        [
            a.position,
            a.position + a.world_tangent_out(),
            b.position + b.world_tangent_in(),
            b.position,
        ]
    }

    /// Die beiden Randknoten des Segments `index`.
    fn segment_knots(&self, index: usize) -> (&BezierKnot, &BezierKnot) {
        (
            &self.knots[index],
            &self.knots[(index + 1) % self.knots.len()],
        )
    }

    /// Gesamte Bogenlänge der Spline (0 bei degenerierten Splines).
    pub fn arc_length(&self) -> f32 {
        self.arc_table().total
    }

    /// Wertet die Spline bei `t ∈ [0, 1]` aus (bogenlängen-parametrisiert).
    ///
    /// Liefert `(position, tangent, up)` im lokalen Container-Raum. `t` wird
    /// in [0, 1] geklemmt; die Tangente ist die unnormierte Ableitung. Der
    /// Up-Vektor entsteht durch Slerp der beiden Randknoten-Rotationen und
    /// trägt damit den importierten Tilt.
    ///
    /// Degenerierte Splines (kein Segment oder Bogenlänge 0) liefern ein
    /// deterministisches, endliches Ergebnis statt einer Division durch Null.
    pub fn evaluate(&self, t: f32) -> (Vec3, Vec3, Vec3) {
        let table = self.arc_table();
        self.evaluate_with_table(t, &table)
    }

    /// Nächstgelegener Kurvenpunkt zu `point` per Brute-Force-Abtastung.
    ///
    /// Tastet `ceil(arc_length) * resolution` gleichverteilte Parameter ab
    /// (mindestens 1 Schritt) und liefert `(position, t)` der Stützstelle mit
    /// minimalem Abstand. Bei Gleichstand gewinnt das niedrigste `t`
    /// (strikter `<`-Vergleich).
    pub fn nearest(&self, point: Vec3, resolution: f32) -> (Vec3, f32) {
        let table = self.arc_table();
        let steps = ((table.total.ceil() * resolution).ceil() as usize).max(1);

        let mut best_position = self.evaluate_with_table(0.0, &table).0;
        let mut best_t = 0.0f32;
        let mut best_distance = best_position.distance_squared(point);

        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let (position, _, _) = self.evaluate_with_table(t, &table);
            let distance = position.distance_squared(point);
            if distance < best_distance {
                best_distance = distance;
                best_position = position;
                best_t = t;
            }
        }

        (best_position, best_t)
    }

    /// Auswertung gegen eine bereits aufgebaute Bogenlängen-Tabelle.
    pub(crate) fn evaluate_with_table(&self, t: f32, table: &ArcTable) -> (Vec3, Vec3, Vec3) {
        if self.segment_count() == 0 || table.total <= f32::EPSILON {
            let position = self.knots.first().map(|k| k.position).unwrap_or(Vec3::ZERO);
            let up = self
                .knots
                .first()
                .map(|k| k.rotation * Vec3::Y)
                .unwrap_or(Vec3::Y);
            return (position, Vec3::Z, up);
        }

        let arc = t.clamp(0.0, 1.0) * table.total;
        let (segment, local_t) = table.locate(arc);

        let [p0, p1, p2, p3] = self.segment_points(segment);
        let position = cubic_bezier_point(p0, p1, p2, p3, local_t);
        let tangent = cubic_bezier_derivative(p0, p1, p2, p3, local_t);

        let (a, b) = self.segment_knots(segment);
        let up = a.rotation.slerp(b.rotation, local_t) * Vec3::Y;

        (position, tangent, up)
    }

    /// Baut die kumulative Bogenlängen-Tabelle über alle Segmente auf.
    pub(crate) fn arc_table(&self) -> ArcTable {
        let segments = self.segment_count();
        let mut samples = Vec::with_capacity(segments * ARC_SAMPLES_PER_SEGMENT + 1);
        samples.push(ArcSample {
            arc: 0.0,
            segment: 0,
            t: 0.0,
        });

        let mut arc = 0.0f32;
        for segment in 0..segments {
            let [p0, p1, p2, p3] = self.segment_points(segment);
            let mut previous = p0;
            for step in 1..=ARC_SAMPLES_PER_SEGMENT {
                let t = step as f32 / ARC_SAMPLES_PER_SEGMENT as f32;
                let point = cubic_bezier_point(p0, p1, p2, p3, t);
                arc += previous.distance(point);
                previous = point;
                samples.push(ArcSample { arc, segment, t });
            }
        }

        ArcTable {
            samples,
            total: arc,
        }
    }
}

impl ArcTable {
    /// Findet das Segment und den lokalen Kurvenparameter zur Bogenlänge
    /// `arc` per Binärsuche über die Stützstellen.
    fn locate(&self, arc: f32) -> (usize, f32) {
        let last = self.samples.len() - 1;
        if arc <= 0.0 {
            return (0, 0.0);
        }
        if arc >= self.samples[last].arc {
            let sample = self.samples[last];
            return (sample.segment, sample.t);
        }

        let mut lo = 0usize;
        let mut hi = last;
        while lo < hi - 1 {
            let mid = (lo + hi) / 2;
            if self.samples[mid].arc <= arc {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let a = self.samples[lo];
        let b = self.samples[lo + 1];
        let span = b.arc - a.arc;
        let blend = if span > 0.0 { (arc - a.arc) / span } else { 0.0 };

        if a.segment == b.segment {
            (a.segment, a.t + (b.t - a.t) * blend)
        } else {
            // Segmentgrenze: Stützstelle b liegt am Anfang des nächsten Segments
            (b.segment, b.t * blend)
        }
    }
}

#[cfg(test)]
mod tests;

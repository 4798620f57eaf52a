//! Container für Splines samt Welt-Transformation.

use glam::{Quat, Vec3};

use super::Spline;

/// Welt-Transformation eines Containers: Translation, Rotation und
/// uniformer Maßstab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Lokalen Punkt in den Weltraum transformieren.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.translation + self.rotation * (point * self.scale)
    }

    /// Weltpunkt in den lokalen Raum zurücktransformieren.
    ///
    /// Erwartet `scale != 0`.
    #[inline]
    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        (self.rotation.inverse() * (point - self.translation)) / self.scale
    }
}

/// Besitzt eine geordnete Menge von Splines und deren Welt-Transformation.
///
/// Die Lebensdauer der Splines gehört dem Container; der Import entfernt
/// alle vorhandenen Splines und baut sie neu auf.
#[derive(Debug, Clone, Default)]
pub struct SplineContainer {
    /// Alle Splines in Dokumentreihenfolge
    pub splines: Vec<Spline>,
    /// Welt-Transformation des Containers
    pub transform: Transform,
}

impl SplineContainer {
    /// Leerer Container mit Identitäts-Transformation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entfernt alle Splines.
    pub fn clear_splines(&mut self) {
        self.splines.clear();
    }

    /// Fügt eine leere Spline hinzu und liefert sie zum Befüllen.
    pub fn add_spline(&mut self) -> &mut Spline {
        self.splines.push(Spline::new());
        self.splines.last_mut().unwrap()
    }

    /// Erste Spline des Containers, falls vorhanden.
    pub fn first_spline(&self) -> Option<&Spline> {
        self.splines.first()
    }

    /// Anzahl der Splines.
    pub fn spline_count(&self) -> usize {
        self.splines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_point_roundtrip() {
        let transform = Transform {
            translation: Vec3::new(5.0, -2.0, 1.0),
            rotation: Quat::from_axis_angle(Vec3::Y, 1.1),
            scale: 2.5,
        };

        let local = Vec3::new(1.0, 2.0, 3.0);
        let world = transform.transform_point(local);
        let back = transform.inverse_transform_point(world);
        assert_relative_eq!(back.distance(local), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_default_transform_is_identity() {
        let transform = Transform::default();
        let p = Vec3::new(7.0, 8.0, 9.0);
        assert_eq!(transform.transform_point(p), p);
    }
}

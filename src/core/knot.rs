//! Ein Kontrollknoten einer Bezier-Spline.

use glam::{Quat, Vec3};

/// Kontrollknoten mit Position, Rotation und zwei unabhängigen Tangenten.
///
/// Die Tangenten sind im lokalen Knoten-Raum gespeichert (in die
/// Knoten-Rotation hineingedreht), nicht im Weltraum. Ein- und ausgehende
/// Tangente sind "broken": sie werden nie kollinear oder gleich lang
/// erzwungen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierKnot {
    /// Position im lokalen Raum des Containers
    pub position: Vec3,
    /// Orientierung des Knotens (trägt u.a. den importierten Tilt)
    pub rotation: Quat,
    /// Eingehende Tangente im Knoten-lokalen Raum
    pub tangent_in: Vec3,
    /// Ausgehende Tangente im Knoten-lokalen Raum
    pub tangent_out: Vec3,
}

impl BezierKnot {
    /// Knoten ohne Rotation und ohne Tangenten an einer Position.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            tangent_in: Vec3::ZERO,
            tangent_out: Vec3::ZERO,
        }
    }

    /// Eingehende Tangente, in den Container-Raum zurückgedreht.
    #[inline]
    pub fn world_tangent_in(&self) -> Vec3 {
        self.rotation * self.tangent_in
    }

    /// Ausgehende Tangente, in den Container-Raum zurückgedreht.
    #[inline]
    pub fn world_tangent_out(&self) -> Vec3 {
        self.rotation * self.tangent_out
    }
}

//! Achsen-Konvertierung und Blickrichtungs-Rotationen.
//!
//! Das JSON-Dokument nutzt die Blender-Konvention (Z nach oben), die Engine
//! die Y-hoch-Konvention. Die Konvertierung ist ein reiner Y/Z-Tausch und
//! damit ihre eigene Inverse.

use glam::{Mat3, Quat, Vec3};

/// Tauscht Y- und Z-Komponente (Dokument-Achsen ↔ Engine-Achsen).
///
/// Selbstinvers: `swap_axes(swap_axes(v)) == v`.
#[inline]
pub fn swap_axes(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, v.y)
}

/// Rotation, deren +Z-Achse entlang `forward` zeigt, mit `up` als Referenz.
///
/// Liefert `None`, wenn `forward` (nahezu) Null ist oder parallel zu `up`
/// steht — in beiden Fällen lässt sich keine stabile Basis aufspannen.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let f = forward.try_normalize()?;
    let r = up.cross(f).try_normalize()?;
    let u = f.cross(r);
    Some(Quat::from_mat3(&Mat3::from_cols(r, u, f)))
}

/// Wie [`look_rotation`], propagiert aber nie NaN: steht `forward` parallel
/// zu `up`, wird eine alternative Referenzachse versucht (stabile, beliebige
/// Roll-Lage), bei Null-`forward` bleibt es die Identität.
pub fn safe_look_rotation(forward: Vec3, up: Vec3) -> Quat {
    look_rotation(forward, up)
        .or_else(|| look_rotation(forward, Vec3::Z))
        .or_else(|| look_rotation(forward, Vec3::X))
        .unwrap_or(Quat::IDENTITY)
}

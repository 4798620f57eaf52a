//! Geteilte, layer-neutrale Geometrie-Helfer.
//!
//! Reine Funktionen ohne Zustand: können von `core`, `json` und `deform`
//! importiert werden ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod bezier;
pub mod frame;

pub use bezier::{cubic_bezier_derivative, cubic_bezier_point, polyline_length};
pub use frame::{look_rotation, safe_look_rotation, swap_axes};

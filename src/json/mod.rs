//! JSON Import/Export für Spline-Kontrollpunktdaten.
//!
//! Das Drahtformat ist das vom Blender-Exporter geschriebene Dokument:
//! eine Liste von Splines mit Kontrollpunkten (Position, zwei absolute
//! Handle-Positionen, Tilt in Grad), alle Vektoren in Dokument-Achsen
//! (Z nach oben).

pub mod document;
pub mod export;
pub mod import;

pub use document::{ControlPointRecord, DocumentVec3, SplineDocument, SplineRecord};
pub use export::{export_document, write_spline_json};
pub use import::{import_document, parse_spline_json};

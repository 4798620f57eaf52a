//! Native Spline-Domänentypen: Knoten, Splines, Container.

pub mod container;
pub mod knot;
pub mod spline;

pub use container::{SplineContainer, Transform};
pub use knot::BezierKnot;
pub use spline::Spline;

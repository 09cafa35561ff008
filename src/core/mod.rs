//! Core-Domänentypen: Bounding-Box, Spline-Geometrie, Viewport-Transform.

pub mod bbox;
pub mod error;
pub mod spline;
pub mod transform;

pub use bbox::BoundingBox;
pub use error::SplineError;
pub use spline::Spline;
pub use transform::ViewportTransform;

//! Structured-grid index space: zone extents, BC windows, face stencils.

pub mod window;

pub use window::{GridDims, PointRange, WindowDirection, WindowFaces};

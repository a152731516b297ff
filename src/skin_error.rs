//! MeshSkinError: unified error type for mesh-skin public APIs
//!
//! This error type is used throughout the mesh-skin library to provide
//! robust, non-panicking error handling for all public APIs. Buffer-capacity
//! violations on caller-sized output buffers are an implementation error, not
//! a recoverable condition, and are deliberately not represented here.

use thiserror::Error;

/// Unified error type for mesh-skin operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshSkinError {
    /// A BC window has zero or more than one degenerate axis, so its normal
    /// direction cannot be determined.
    #[error("unable to determine the direction of the BC window: {degenerate_axes} degenerate axes")]
    MalformedWindow {
        /// Number of axes with `min == max`.
        degenerate_axes: usize,
    },
    /// A window bound pair is reversed (`min > max`).
    #[error("window bounds reversed on axis {axis}: min {min} > max {max}")]
    ReversedWindow { axis: usize, min: usize, max: usize },
    /// A window bound is zero; structured indices are 1-based.
    #[error("window bound on axis {axis} must be 1-based, got 0")]
    ZeroWindowBound { axis: usize },
    /// A window addresses vertices outside the structured grid.
    #[error("window exceeds grid on axis {axis}: needs vertex {needed}, grid has {available}")]
    WindowOutOfGrid {
        axis: usize,
        needed: usize,
        available: usize,
    },
    /// A face selection entry does not address the incidence table.
    #[error("face id {face} out of range for a table of {n_faces} faces")]
    FaceOutOfRange { face: i64, n_faces: usize },
    /// A vertex id does not address the marking table.
    #[error("vertex id {vertex} out of range for a table of {n_vtx} vertices")]
    VertexOutOfRange { vertex: i64, n_vtx: usize },
    /// Face-vertex offsets are empty, do not start at 0, or decrease.
    #[error("face-vertex offsets must start at 0 and be non-decreasing (violated at entry {index})")]
    InvalidOffsets { index: usize },
    /// Face-vertex offsets address more entries than the connectivity holds.
    #[error("face-vertex offsets end at {end} but connectivity holds {len} entries")]
    OffsetsConnectivityMismatch { end: i64, len: usize },
    /// Coordinate component arrays disagree in length.
    #[error("coordinate arrays disagree in length: x={x}, y={y}, z={z}")]
    CoordinateLengthMismatch { x: usize, y: usize, z: usize },
    /// The marking table does not cover the zone's vertex set.
    #[error("marking table covers {found} vertices, zone has {expected}")]
    MarkerLengthMismatch { expected: usize, found: usize },
    /// The coordinate arrays do not cover the zone's vertex set.
    #[error("coordinate arrays cover {found} vertices, zone has {expected}")]
    CoordinateCountMismatch { expected: usize, found: usize },
    /// A strided gather index addresses outside the source array.
    #[error("gather index at position {position} out of range for an array of {len} entries")]
    GatherIndexOutOfRange { position: usize, len: usize },
    /// An interleaved coordinate array is not a whole number of triples.
    #[error("interleaved coordinate array of length {len} is not a multiple of 3")]
    InterleavedLengthInvalid { len: usize },
    /// Parent-element and face-cell arrays disagree in shape.
    #[error("parent-element table length {pe} and face-cell length {face_cell} must be equal and even")]
    ParentElementShapeMismatch { pe: usize, face_cell: usize },
}

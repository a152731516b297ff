//! Boundary-condition surface extraction.
//!
//! Both mesh representations share one three-stage contract per boundary
//! group, built around a shared [`VertexMarker`](crate::data::marker::VertexMarker):
//!
//! 1. **Mark** ([`unstructured::mark_boundary_vertices`],
//!    [`structured::mark_boundary_vertices`]) scans the selection and returns
//!    [`BoundaryCounts`], marking each newly-seen vertex.
//! 2. **Compact** ([`unstructured::boundary_vertex_ids`],
//!    [`structured::boundary_vertex_ids`]) re-scans and returns the original
//!    1-based vertex ids in first-seen order.
//! 3. **Extract** ([`unstructured::extract_boundary_faces`],
//!    [`structured::extract_boundary_faces`]) re-scans once more, writing
//!    remapped connectivity and compacted coordinates into caller-sized
//!    [`SurfaceBuffers`].
//!
//! Every stage is self-marking, so it runs standalone on a fresh marker; a
//! sweep over several groups shares the marker to dedup vertices across
//! groups and the caller resets it between the Mark, Compact and Extract
//! sweeps. Output buffers must be sized from the summed Mark counts before
//! Extract runs; [`surface`] wires this protocol up for one zone.

pub mod structured;
pub mod surface;
pub mod unstructured;

use serde::{Deserialize, Serialize};

/// Counts returned by the Mark stage, used to size output buffers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCounts {
    /// Distinct vertices newly seen by the scan.
    pub n_vtx: usize,
    /// Total face-vertex incidences, shared vertices counted per face.
    pub n_face_vtx: usize,
}

impl core::ops::AddAssign for BoundaryCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.n_vtx += rhs.n_vtx;
        self.n_face_vtx += rhs.n_face_vtx;
    }
}

/// Caller-sized output buffers shared by the Extract calls of one zone.
///
/// `face_vtx_idx` holds one offset per face plus one, with entry 0 set to 0
/// before the first group; `face_vtx` holds `n_face_vtx` connectivity slots
/// and `vtx_coords` holds `3 * n_vtx` interleaved coordinate slots, both
/// summed over all groups being concatenated. Undersized buffers are a caller
/// bug and panic on slice indexing.
#[derive(Debug)]
pub struct SurfaceBuffers<'a> {
    /// Boundary face→vertex connectivity, 1-based compacted ids.
    pub face_vtx: &'a mut [i64],
    /// Offsets into `face_vtx`, one per boundary face plus one.
    pub face_vtx_idx: &'a mut [i64],
    /// Interleaved `x,y,z` triples of the compacted vertices.
    pub vtx_coords: &'a mut [f64],
}

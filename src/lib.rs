//! # mesh-skin
//!
//! mesh-skin extracts boundary surfaces ("skins") from volumetric CFD meshes
//! during parallel preprocessing. Given a zone in either the structured
//! (Cartesian index space) or unstructured (CSR face→vertex) representation
//! and a set of boundary-condition face selections, it computes the induced
//! boundary sub-mesh: the deduplicated vertex set, a face→vertex connectivity
//! renumbered to that set, and the compacted vertex coordinates.
//!
//! ## Pipeline
//!
//! Extraction is a three-sweep pipeline over one shared, caller-owned
//! [`VertexMarker`](data::marker::VertexMarker):
//!
//! 1. **Mark** counts distinct vertices and face-vertex incidences, so the
//!    caller can size output buffers.
//! 2. **Compact** emits the original vertex ids in first-seen order (the
//!    renumbering map).
//! 3. **Extract** writes remapped connectivity and compacted coordinates,
//!    advancing running cursors so multiple boundary groups concatenate into
//!    shared buffers.
//!
//! Each sweep runs over every boundary group of a zone; the marker is reset
//! between sweeps, never between groups, which is what dedups vertices shared
//! across groups. See [`algs::extract_bc`] for the full contract, and
//! [`algs::extract_bc::surface`] for a driver that sequences the sweeps over
//! one zone.
//!
//! ## Conventions
//!
//! Face and vertex ids follow CGNS conventions: 1-based in inputs and
//! outputs, with all internal flat addressing 0-based. Structured zones use
//! column-major (Fortran-order) vertex numbering.
//!
//! Cross-partition parallelism lives outside this crate: a distributed caller
//! runs the pipeline per partition and merges the concatenated results.

pub mod algs;
pub mod data;
pub mod grid;
pub mod skin_error;

/// A convenient prelude importing the most-used types and entry points.
pub mod prelude {
    pub use crate::algs::extract_bc::surface::{
        BoundarySurface, extract_surface_s, extract_surface_u,
    };
    pub use crate::algs::extract_bc::{BoundaryCounts, SurfaceBuffers};
    pub use crate::data::coordinates::VertexCoords;
    pub use crate::data::csr::FaceVtx;
    pub use crate::data::marker::VertexMarker;
    pub use crate::grid::window::{GridDims, PointRange, WindowDirection, WindowFaces};
    pub use crate::skin_error::MeshSkinError;
}

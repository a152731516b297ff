//! Boundary extraction over a structured BC window.
//!
//! The selection is a [`PointRange`] window on a column-major vertex grid;
//! every boundary face is a quad whose corner addresses come from
//! [`WindowFaces`]. The three stages mirror the unstructured contract, with
//! the window direction resolved (and the window validated) before the
//! marker is touched, so a malformed window never leaves partial marks.

use crate::algs::extract_bc::{BoundaryCounts, SurfaceBuffers};
use crate::data::coordinates::VertexCoords;
use crate::data::marker::{VertexMarker, Visit};
use crate::grid::window::{GridDims, PointRange, QUAD_VERTEX_COUNT, WindowFaces};
use crate::skin_error::MeshSkinError;

fn check_marker(dims: GridDims, marker: &VertexMarker) -> Result<(), MeshSkinError> {
    if marker.len() != dims.vertex_count() {
        return Err(MeshSkinError::MarkerLengthMismatch {
            expected: dims.vertex_count(),
            found: marker.len(),
        });
    }
    Ok(())
}

/// Mark stage: counts the window's distinct new vertices and its face-vertex
/// incidences (four per quad), marking each newly-seen vertex in scan order.
pub fn mark_boundary_vertices(
    dims: GridDims,
    window: &PointRange,
    marker: &mut VertexMarker,
) -> Result<BoundaryCounts, MeshSkinError> {
    check_marker(dims, marker)?;
    let faces = WindowFaces::new(dims, window)?;
    let mut counts = BoundaryCounts::default();
    for corners in faces {
        counts.n_face_vtx += QUAD_VERTEX_COUNT;
        for ivtx in corners {
            if marker.try_visit(ivtx)?.is_new() {
                counts.n_vtx += 1;
            }
        }
    }
    Ok(counts)
}

/// Compact stage: the original vertex ids of the window's new vertices in
/// first-seen order, as 1-based column-major grid indices.
///
/// `n_vtx_bc` is the Mark count for the same window and sizes the result.
pub fn boundary_vertex_ids(
    n_vtx_bc: usize,
    dims: GridDims,
    window: &PointRange,
    marker: &mut VertexMarker,
) -> Result<Vec<i64>, MeshSkinError> {
    check_marker(dims, marker)?;
    let faces = WindowFaces::new(dims, window)?;
    let mut vtx_ids = Vec::with_capacity(n_vtx_bc);
    for corners in faces {
        for ivtx in corners {
            if marker.try_visit(ivtx)?.is_new() {
                vtx_ids.push(ivtx as i64 + 1);
            }
        }
    }
    debug_assert_eq!(
        vtx_ids.len(),
        n_vtx_bc,
        "window disagrees with its Mark count"
    );
    Ok(vtx_ids)
}

/// Extract stage: writes the window's remapped quad connectivity and
/// compacted coordinates at its global position in the shared buffers.
///
/// Same cursor protocol as the unstructured variant: `group_face_start`'s
/// entry in `face_vtx_idx` holds the group's connectivity start, and the
/// updated global vertex cursor is returned.
pub fn extract_boundary_faces(
    group_face_start: usize,
    dims: GridDims,
    window: &PointRange,
    marker: &mut VertexMarker,
    coords: &VertexCoords<'_>,
    vtx_cursor: usize,
    out: &mut SurfaceBuffers<'_>,
) -> Result<usize, MeshSkinError> {
    check_marker(dims, marker)?;
    if coords.len() != dims.vertex_count() {
        return Err(MeshSkinError::CoordinateCountMismatch {
            expected: dims.vertex_count(),
            found: coords.len(),
        });
    }
    let faces = WindowFaces::new(dims, window)?;
    debug_assert!(
        vtx_cursor >= marker.rank_count(),
        "vertex cursor behind the shared marker"
    );
    let base = vtx_cursor - marker.rank_count();
    let mut write = out.face_vtx_idx[group_face_start] as usize;

    for (local_face, corners) in faces.enumerate() {
        for ivtx in corners {
            let rank = match marker.try_visit(ivtx)? {
                Visit::New(rank) => {
                    let slot = base + rank;
                    let [x, y, z] = coords.triple(ivtx);
                    out.vtx_coords[3 * slot] = x;
                    out.vtx_coords[3 * slot + 1] = y;
                    out.vtx_coords[3 * slot + 2] = z;
                    rank
                }
                Visit::Seen(rank) => rank,
            };
            out.face_vtx[write] = (base + rank + 1) as i64;
            write += 1;
        }
        let global_face = group_face_start + local_face;
        out.face_vtx_idx[global_face + 1] =
            out.face_vtx_idx[global_face] + QUAD_VERTEX_COUNT as i64;
    }
    Ok(base + marker.rank_count())
}

//! Boundary extraction over an explicit face-id selection.
//!
//! The selection is an ordered list of 1-based face ids into a CSR
//! face→vertex table, as read from a CGNS `BC_t` point list on an `NGON_n`
//! zone. Faces keep their input vertex ordering and may have any vertex
//! count.

use crate::algs::extract_bc::{BoundaryCounts, SurfaceBuffers};
use crate::data::coordinates::VertexCoords;
use crate::data::csr::FaceVtx;
use crate::data::marker::{VertexMarker, Visit};
use crate::skin_error::MeshSkinError;

/// Translates a 1-based vertex id into a 0-based table index.
fn vertex_index(id: i64, n_vtx: usize) -> Result<usize, MeshSkinError> {
    if id < 1 || id as u64 > n_vtx as u64 {
        return Err(MeshSkinError::VertexOutOfRange { vertex: id, n_vtx });
    }
    Ok((id - 1) as usize)
}

/// Mark stage: counts this selection's distinct new vertices and its total
/// face-vertex incidences, marking each newly-seen vertex in scan order.
pub fn mark_boundary_vertices(
    point_list: &[i64],
    faces: &FaceVtx<'_>,
    marker: &mut VertexMarker,
) -> Result<BoundaryCounts, MeshSkinError> {
    let mut counts = BoundaryCounts::default();
    for &face in point_list {
        let face_vtx = faces.face(face)?;
        counts.n_face_vtx += face_vtx.len();
        for &id in face_vtx {
            let ivtx = vertex_index(id, marker.len())?;
            if marker.try_visit(ivtx)?.is_new() {
                counts.n_vtx += 1;
            }
        }
    }
    Ok(counts)
}

/// Compact stage: the original 1-based vertex ids of this selection's new
/// vertices, in first-seen order.
///
/// `n_vtx_bc` is the Mark count for the same selection and sizes the result.
pub fn boundary_vertex_ids(
    n_vtx_bc: usize,
    point_list: &[i64],
    faces: &FaceVtx<'_>,
    marker: &mut VertexMarker,
) -> Result<Vec<i64>, MeshSkinError> {
    let mut vtx_ids = Vec::with_capacity(n_vtx_bc);
    for &face in point_list {
        for &id in faces.face(face)? {
            let ivtx = vertex_index(id, marker.len())?;
            if marker.try_visit(ivtx)?.is_new() {
                vtx_ids.push(id);
            }
        }
    }
    debug_assert_eq!(
        vtx_ids.len(),
        n_vtx_bc,
        "selection disagrees with its Mark count"
    );
    Ok(vtx_ids)
}

/// Extract stage: writes this group's remapped connectivity and compacted
/// coordinates at its global position in the shared buffers.
///
/// `group_face_start` is the group's first face slot in `face_vtx_idx`, whose
/// entry must already hold the group's connectivity start (0 for the first
/// group). `vtx_cursor` is the global coordinate-slot cursor; the updated
/// cursor is returned so callers can chain groups.
pub fn extract_boundary_faces(
    group_face_start: usize,
    point_list: &[i64],
    faces: &FaceVtx<'_>,
    marker: &mut VertexMarker,
    coords: &VertexCoords<'_>,
    vtx_cursor: usize,
    out: &mut SurfaceBuffers<'_>,
) -> Result<usize, MeshSkinError> {
    if coords.len() != marker.len() {
        return Err(MeshSkinError::MarkerLengthMismatch {
            expected: coords.len(),
            found: marker.len(),
        });
    }
    debug_assert!(
        vtx_cursor >= marker.rank_count(),
        "vertex cursor behind the shared marker"
    );
    // Ranks are sweep-relative; the cursor carried across partitions rebases
    // them to global coordinate slots.
    let base = vtx_cursor - marker.rank_count();
    let mut write = out.face_vtx_idx[group_face_start] as usize;

    for (local_face, &face) in point_list.iter().enumerate() {
        let face_vtx = faces.face(face)?;
        let global_face = group_face_start + local_face;
        out.face_vtx_idx[global_face + 1] =
            out.face_vtx_idx[global_face] + face_vtx.len() as i64;

        for &id in face_vtx {
            let ivtx = vertex_index(id, marker.len())?;
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
    }
    Ok(base + marker.rank_count())
}

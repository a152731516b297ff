//! One-zone surface driver.
//!
//! Sequences the three sweeps over all the boundary groups of a zone and
//! returns an owned surface with the groups laid out contiguously. This is
//! the protocol a distributed caller repeats per partition; the driver keeps
//! the single-partition part in one place.

use log::debug;

use crate::algs::extract_bc::{BoundaryCounts, SurfaceBuffers, structured, unstructured};
use crate::data::coordinates::VertexCoords;
use crate::data::csr::FaceVtx;
use crate::data::marker::VertexMarker;
use crate::grid::window::{GridDims, PointRange, QUAD_VERTEX_COUNT};
use crate::skin_error::MeshSkinError;

/// Boundary surface of one zone, groups concatenated in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundarySurface {
    /// Offsets into `face_vtx`, one per boundary face plus one.
    pub face_vtx_idx: Vec<i64>,
    /// Face→vertex connectivity, 1-based compacted vertex ids.
    pub face_vtx: Vec<i64>,
    /// Interleaved `x,y,z` triples of the compacted vertices.
    pub vtx_coords: Vec<f64>,
    /// Original 1-based vertex id of each compacted vertex, in rank order.
    pub vtx_ids: Vec<i64>,
}

impl BoundarySurface {
    /// Number of boundary faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_vtx_idx.len().saturating_sub(1)
    }

    /// Number of compacted vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vtx_ids.len()
    }
}

/// Extracts the boundary surface of an unstructured zone.
///
/// `groups` are the zone's BC face selections, each an ordered list of
/// 1-based face ids into `faces`.
pub fn extract_surface_u(
    faces: &FaceVtx<'_>,
    coords: &VertexCoords<'_>,
    groups: &[&[i64]],
) -> Result<BoundarySurface, MeshSkinError> {
    let mut marker = VertexMarker::new(coords.len());

    let mut group_counts = Vec::with_capacity(groups.len());
    let mut total = BoundaryCounts::default();
    for group in groups {
        let counts = unstructured::mark_boundary_vertices(group, faces, &mut marker)?;
        total += counts;
        group_counts.push(counts);
    }
    let n_faces: usize = groups.iter().map(|group| group.len()).sum();
    debug!(
        "marked {} boundary vertices over {} faces in {} groups",
        total.n_vtx,
        n_faces,
        groups.len()
    );

    marker.reset();
    let mut vtx_ids = Vec::with_capacity(total.n_vtx);
    for (group, counts) in groups.iter().zip(&group_counts) {
        vtx_ids.extend(unstructured::boundary_vertex_ids(
            counts.n_vtx,
            group,
            faces,
            &mut marker,
        )?);
    }

    marker.reset();
    let mut face_vtx_idx = vec![0_i64; n_faces + 1];
    let mut face_vtx = vec![0_i64; total.n_face_vtx];
    let mut vtx_coords = vec![0.0_f64; 3 * total.n_vtx];
    let mut out = SurfaceBuffers {
        face_vtx: &mut face_vtx,
        face_vtx_idx: &mut face_vtx_idx,
        vtx_coords: &mut vtx_coords,
    };
    let mut vtx_cursor = 0;
    let mut face_cursor = 0;
    for group in groups {
        vtx_cursor = unstructured::extract_boundary_faces(
            face_cursor,
            group,
            faces,
            &mut marker,
            coords,
            vtx_cursor,
            &mut out,
        )?;
        face_cursor += group.len();
    }
    debug!("extracted surface: {n_faces} faces, {vtx_cursor} vertices");

    Ok(BoundarySurface {
        face_vtx_idx,
        face_vtx,
        vtx_coords,
        vtx_ids,
    })
}

/// Extracts the boundary surface of a structured zone.
///
/// `windows` are the zone's BC windows; every face is a quad.
pub fn extract_surface_s(
    dims: GridDims,
    coords: &VertexCoords<'_>,
    windows: &[PointRange],
) -> Result<BoundarySurface, MeshSkinError> {
    if coords.len() != dims.vertex_count() {
        return Err(MeshSkinError::CoordinateCountMismatch {
            expected: dims.vertex_count(),
            found: coords.len(),
        });
    }
    let mut marker = VertexMarker::new(dims.vertex_count());

    let mut group_counts = Vec::with_capacity(windows.len());
    let mut total = BoundaryCounts::default();
    for window in windows {
        let counts = structured::mark_boundary_vertices(dims, window, &mut marker)?;
        total += counts;
        group_counts.push(counts);
    }
    let n_faces = total.n_face_vtx / QUAD_VERTEX_COUNT;
    debug!(
        "marked {} boundary vertices over {} faces in {} windows",
        total.n_vtx,
        n_faces,
        windows.len()
    );

    marker.reset();
    let mut vtx_ids = Vec::with_capacity(total.n_vtx);
    for (window, counts) in windows.iter().zip(&group_counts) {
        vtx_ids.extend(structured::boundary_vertex_ids(
            counts.n_vtx,
            dims,
            window,
            &mut marker,
        )?);
    }

    marker.reset();
    let mut face_vtx_idx = vec![0_i64; n_faces + 1];
    let mut face_vtx = vec![0_i64; total.n_face_vtx];
    let mut vtx_coords = vec![0.0_f64; 3 * total.n_vtx];
    let mut out = SurfaceBuffers {
        face_vtx: &mut face_vtx,
        face_vtx_idx: &mut face_vtx_idx,
        vtx_coords: &mut vtx_coords,
    };
    let mut vtx_cursor = 0;
    let mut face_cursor = 0;
    for (window, counts) in windows.iter().zip(&group_counts) {
        vtx_cursor = structured::extract_boundary_faces(
            face_cursor,
            dims,
            window,
            &mut marker,
            coords,
            vtx_cursor,
            &mut out,
        )?;
        face_cursor += counts.n_face_vtx / QUAD_VERTEX_COUNT;
    }
    debug!("extracted surface: {n_faces} faces, {vtx_cursor} vertices");

    Ok(BoundarySurface {
        face_vtx_idx,
        face_vtx,
        vtx_coords,
        vtx_ids,
    })
}

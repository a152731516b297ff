//! Stage-level tests for the structured extraction pipeline.

mod util;

use mesh_skin::algs::extract_bc::{SurfaceBuffers, structured};
use mesh_skin::data::coordinates::VertexCoords;
use mesh_skin::data::marker::VertexMarker;
use mesh_skin::grid::window::{GridDims, PointRange};
use mesh_skin::skin_error::MeshSkinError;
use util::unit_coords;

fn window(min: [usize; 3], max: [usize; 3]) -> PointRange {
    PointRange::try_new(min, max).unwrap()
}

#[test]
fn mark_counts_quad_incidences() {
    let dims = GridDims::new(2, 2, 2);
    let mut marker = VertexMarker::new(dims.vertex_count());
    let counts =
        structured::mark_boundary_vertices(dims, &window([1, 1, 1], [1, 2, 2]), &mut marker)
            .unwrap();
    assert_eq!(counts.n_vtx, 4);
    assert_eq!(counts.n_face_vtx, 4);
    // Corner scan order of the single I-normal face: flat 0, 2, 6, 4.
    assert_eq!(marker.as_slice(), &[0, -1, 1, -1, 3, -1, 2, -1]);
}

#[test]
fn full_boundary_plane_marks_every_plane_vertex() {
    let dims = GridDims::new(3, 3, 3);
    let mut marker = VertexMarker::new(dims.vertex_count());
    let counts =
        structured::mark_boundary_vertices(dims, &window([1, 1, 1], [3, 3, 1]), &mut marker)
            .unwrap();
    // Four quads over the k=1 plane: nine distinct vertices, sixteen slots.
    assert_eq!(counts.n_vtx, 9);
    assert_eq!(counts.n_face_vtx, 16);
}

#[test]
fn compact_ids_are_one_based_flat_indices() {
    let dims = GridDims::new(2, 2, 2);
    let range = window([1, 1, 1], [1, 2, 2]);
    let mut marker = VertexMarker::new(dims.vertex_count());
    let ids = structured::boundary_vertex_ids(4, dims, &range, &mut marker).unwrap();
    // Output ids are 1-based: each entry is linear_index + 1.
    assert_eq!(
        ids,
        [
            dims.linear_index([1, 1, 1]) as i64 + 1,
            dims.linear_index([1, 2, 1]) as i64 + 1,
            dims.linear_index([1, 2, 2]) as i64 + 1,
            dims.linear_index([1, 1, 2]) as i64 + 1,
        ]
    );
    assert_eq!(ids, [1, 3, 7, 5]);
}

#[test]
fn extract_writes_quad_connectivity_and_coordinates() {
    let dims = GridDims::new(2, 2, 2);
    let range = window([1, 1, 1], [1, 2, 2]);
    let (x, y, z) = unit_coords(dims);
    let coords = VertexCoords::new(&x, &y, &z).unwrap();

    let mut marker = VertexMarker::new(dims.vertex_count());
    let mut face_vtx_idx = [0_i64; 2];
    let mut face_vtx = [0_i64; 4];
    let mut vtx_coords = [0.0_f64; 12];
    let mut out = SurfaceBuffers {
        face_vtx: &mut face_vtx,
        face_vtx_idx: &mut face_vtx_idx,
        vtx_coords: &mut vtx_coords,
    };
    let cursor =
        structured::extract_boundary_faces(0, dims, &range, &mut marker, &coords, 0, &mut out)
            .unwrap();

    assert_eq!(cursor, 4);
    assert_eq!(face_vtx_idx, [0, 4]);
    assert_eq!(face_vtx, [1, 2, 3, 4]);
    // Ranks follow the corner scan order (1,1,1), (1,2,1), (1,2,2), (1,1,2).
    assert_eq!(
        vtx_coords,
        [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]
    );
}

#[test]
fn windows_sharing_an_edge_dedup_through_the_marker() {
    let dims = GridDims::new(2, 2, 2);
    let i_plane = window([1, 1, 1], [1, 2, 2]);
    let j_plane = window([1, 1, 1], [2, 1, 2]);
    let (x, y, z) = unit_coords(dims);
    let coords = VertexCoords::new(&x, &y, &z).unwrap();

    let mut marker = VertexMarker::new(dims.vertex_count());
    let first = structured::mark_boundary_vertices(dims, &i_plane, &mut marker).unwrap();
    let second = structured::mark_boundary_vertices(dims, &j_plane, &mut marker).unwrap();
    assert_eq!((first.n_vtx, first.n_face_vtx), (4, 4));
    // The j=1 plane shares the edge i ∈ {1,2}, j=1 with the i=1 plane.
    assert_eq!((second.n_vtx, second.n_face_vtx), (2, 4));

    marker.reset();
    let ids_a = structured::boundary_vertex_ids(4, dims, &i_plane, &mut marker).unwrap();
    let ids_b = structured::boundary_vertex_ids(2, dims, &j_plane, &mut marker).unwrap();
    assert_eq!(ids_a, [1, 3, 7, 5]);
    assert_eq!(ids_b, [2, 6]);

    marker.reset();
    let mut face_vtx_idx = [0_i64; 3];
    let mut face_vtx = [0_i64; 8];
    let mut vtx_coords = [0.0_f64; 18];
    let mut out = SurfaceBuffers {
        face_vtx: &mut face_vtx,
        face_vtx_idx: &mut face_vtx_idx,
        vtx_coords: &mut vtx_coords,
    };
    let cursor =
        structured::extract_boundary_faces(0, dims, &i_plane, &mut marker, &coords, 0, &mut out)
            .unwrap();
    assert_eq!(cursor, 4);
    let cursor =
        structured::extract_boundary_faces(1, dims, &j_plane, &mut marker, &coords, cursor, &mut out)
            .unwrap();
    assert_eq!(cursor, 6);

    assert_eq!(face_vtx_idx, [0, 4, 8]);
    // Shared corners keep the compacted ids the first window assigned.
    assert_eq!(face_vtx, [1, 2, 3, 4, 1, 5, 6, 4]);
    assert_eq!(
        vtx_coords,
        [
            0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 1.0, 1.0, //
            0.0, 0.0, 1.0, //
            1.0, 0.0, 0.0, //
            1.0, 0.0, 1.0,
        ]
    );
}

#[test]
fn malformed_windows_fail_without_marking() {
    let dims = GridDims::new(3, 3, 3);
    let mut marker = VertexMarker::new(dims.vertex_count());
    let err = structured::mark_boundary_vertices(dims, &window([1, 1, 1], [3, 3, 3]), &mut marker)
        .unwrap_err();
    assert_eq!(err, MeshSkinError::MalformedWindow { degenerate_axes: 0 });
    let err = structured::mark_boundary_vertices(dims, &window([1, 1, 2], [1, 1, 2]), &mut marker)
        .unwrap_err();
    assert_eq!(err, MeshSkinError::MalformedWindow { degenerate_axes: 3 });
    assert_eq!(marker.rank_count(), 0);
    assert!(marker.as_slice().iter().all(|&slot| slot == -1));
}

#[test]
fn marker_must_cover_the_zone() {
    let dims = GridDims::new(3, 3, 3);
    let mut marker = VertexMarker::new(8);
    let err = structured::mark_boundary_vertices(dims, &window([1, 1, 1], [1, 3, 3]), &mut marker)
        .unwrap_err();
    assert_eq!(err, MeshSkinError::MarkerLengthMismatch { expected: 27, found: 8 });
}

#[test]
fn extract_checks_coordinate_coverage() {
    let dims = GridDims::new(2, 2, 2);
    let short = [0.0_f64; 4];
    let coords = VertexCoords::new(&short, &short, &short).unwrap();
    let mut marker = VertexMarker::new(dims.vertex_count());
    let mut face_vtx_idx = [0_i64; 2];
    let mut face_vtx = [0_i64; 4];
    let mut vtx_coords = [0.0_f64; 12];
    let mut out = SurfaceBuffers {
        face_vtx: &mut face_vtx,
        face_vtx_idx: &mut face_vtx_idx,
        vtx_coords: &mut vtx_coords,
    };
    let err = structured::extract_boundary_faces(
        0,
        dims,
        &window([1, 1, 1], [1, 2, 2]),
        &mut marker,
        &coords,
        0,
        &mut out,
    )
    .unwrap_err();
    assert_eq!(err, MeshSkinError::CoordinateCountMismatch { expected: 8, found: 4 });
}

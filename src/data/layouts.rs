//! Array-layout conversions between CGNS and parallel-mesh conventions.
//!
//! The two representations disagree on coordinate interleaving (separate
//! `x`/`y`/`z` arrays vs `xyz` triples) and on the parent-element table
//! (column-major two-column CGNS `ParentElements` vs interleaved face-cell
//! pairs). These conversions are branch-free index arithmetic; the only
//! checked conditions are shape agreement and gather-index range.

use itertools::{Itertools, izip};
use num_traits::PrimInt;

use crate::skin_error::MeshSkinError;

/// Interleaves separate coordinate components into `x,y,z` triples.
pub fn interlace_coords(x: &[f64], y: &[f64], z: &[f64]) -> Result<Vec<f64>, MeshSkinError> {
    if x.len() != y.len() || x.len() != z.len() {
        return Err(MeshSkinError::CoordinateLengthMismatch {
            x: x.len(),
            y: y.len(),
            z: z.len(),
        });
    }
    let mut xyz = Vec::with_capacity(3 * x.len());
    for (&xi, &yi, &zi) in izip!(x, y, z) {
        xyz.extend([xi, yi, zi]);
    }
    Ok(xyz)
}

/// Splits an interleaved `x,y,z` triple array into its components.
pub fn deinterlace_coords(xyz: &[f64]) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), MeshSkinError> {
    if xyz.len() % 3 != 0 {
        return Err(MeshSkinError::InterleavedLengthInvalid { len: xyz.len() });
    }
    let n = xyz.len() / 3;
    let (mut x, mut y, mut z) = (
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    );
    for (&xi, &yi, &zi) in xyz.iter().tuples() {
        x.push(xi);
        y.push(yi);
        z.push(zi);
    }
    Ok((x, y, z))
}

/// Gathers `stride`-wide records of `array` at the given indices.
///
/// Each index is rebased by `shift` before addressing (`shift = 1` for
/// 1-based id arrays, `0` for flat indices), generic over the index width the
/// collaborators use (`i32` local ids, `i64` global numbers).
pub fn gather_strided<T, I>(
    array: &[T],
    indices: &[I],
    stride: usize,
    shift: I,
) -> Result<Vec<T>, MeshSkinError>
where
    T: Copy,
    I: PrimInt,
{
    let mut gathered = Vec::with_capacity(indices.len() * stride);
    for (position, index) in indices.iter().enumerate() {
        let record = index
            .checked_sub(&shift)
            .and_then(|rebased| rebased.to_usize())
            .and_then(|idx| array.get(stride * idx..stride * idx + stride))
            .ok_or(MeshSkinError::GatherIndexOutOfRange {
                position,
                len: array.len(),
            })?;
        gathered.extend_from_slice(record);
    }
    Ok(gathered)
}

/// Transposes a column-major two-column `ParentElements` table into
/// interleaved face-cell pairs.
///
/// `pe` holds the left cells of all faces first, then the right cells;
/// `face_cell` receives `left, right` per face.
pub fn parent_elements_to_face_cell<G: PrimInt>(
    pe: &[G],
    face_cell: &mut [G],
) -> Result<(), MeshSkinError> {
    check_pe_shape(pe.len(), face_cell.len())?;
    let n_face = pe.len() / 2;
    let (left, right) = pe.split_at(n_face);
    for (i_face, (&l, &r)) in left.iter().zip(right).enumerate() {
        face_cell[2 * i_face] = l;
        face_cell[2 * i_face + 1] = r;
    }
    Ok(())
}

/// Inverse of [`parent_elements_to_face_cell`].
pub fn face_cell_to_parent_elements<G: PrimInt>(
    face_cell: &[G],
    pe: &mut [G],
) -> Result<(), MeshSkinError> {
    check_pe_shape(pe.len(), face_cell.len())?;
    let n_face = face_cell.len() / 2;
    let (left, right) = pe.split_at_mut(n_face);
    for (i_face, (l, r)) in left.iter_mut().zip(right).enumerate() {
        *l = face_cell[2 * i_face];
        *r = face_cell[2 * i_face + 1];
    }
    Ok(())
}

fn check_pe_shape(pe: usize, face_cell: usize) -> Result<(), MeshSkinError> {
    if pe != face_cell || pe % 2 != 0 {
        return Err(MeshSkinError::ParentElementShapeMismatch { pe, face_cell });
    }
    Ok(())
}

/// Extracts the sub-cloud of a point cloud at the given 0-based indices:
/// interleaved coordinates with stride 3, global ids with stride 1.
pub fn extract_sub_cloud(
    coords: &[f64],
    ids: &[i64],
    indices: &[i64],
) -> Result<(Vec<f64>, Vec<i64>), MeshSkinError> {
    let sub_ids = gather_strided(ids, indices, 1, 0)?;
    let sub_coords = gather_strided(coords, indices, 3, 0)?;
    Ok((sub_coords, sub_ids))
}

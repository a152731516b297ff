//! CSR face→vertex incidence view.

use crate::skin_error::MeshSkinError;

/// Borrowed face→vertex incidence table in CSR form.
///
/// `offsets` has one entry per face plus one, starts at 0 and is
/// non-decreasing; `connectivity` holds the flattened 1-based vertex ids, so
/// face `f` (1-based) owns `connectivity[offsets[f-1]..offsets[f]]`. Both
/// arrays follow the CGNS `NGON_n` element layout and are validated once at
/// construction.
#[derive(Copy, Clone, Debug)]
pub struct FaceVtx<'a> {
    offsets: &'a [i64],
    connectivity: &'a [i64],
}

impl<'a> FaceVtx<'a> {
    /// Wraps and validates an offsets/connectivity pair.
    pub fn new(offsets: &'a [i64], connectivity: &'a [i64]) -> Result<Self, MeshSkinError> {
        match offsets.first() {
            Some(0) => {}
            _ => return Err(MeshSkinError::InvalidOffsets { index: 0 }),
        }
        for (index, window) in offsets.windows(2).enumerate() {
            if window[1] < window[0] {
                return Err(MeshSkinError::InvalidOffsets { index: index + 1 });
            }
        }
        let end = offsets[offsets.len() - 1];
        if end as usize != connectivity.len() {
            return Err(MeshSkinError::OffsetsConnectivityMismatch {
                end,
                len: connectivity.len(),
            });
        }
        Ok(Self {
            offsets,
            connectivity,
        })
    }

    /// Number of faces in the table.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Vertex ids (1-based) of a 1-based face id.
    pub fn face(&self, face: i64) -> Result<&'a [i64], MeshSkinError> {
        let n_faces = self.face_count();
        if face < 1 || face as u64 > n_faces as u64 {
            return Err(MeshSkinError::FaceOutOfRange { face, n_faces });
        }
        let f = (face - 1) as usize;
        Ok(&self.connectivity[self.offsets[f] as usize..self.offsets[f + 1] as usize])
    }
}

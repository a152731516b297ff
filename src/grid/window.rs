//! Structured zone extents and boundary-condition windows.
//!
//! A structured zone is a logically Cartesian vertex grid with column-major
//! (Fortran-order) numbering. A boundary patch is described by a CGNS-style
//! `PointRange` window: an axis-aligned index range with exactly one
//! degenerate axis, which is the patch's normal direction. [`WindowFaces`]
//! walks the quad faces of such a window, synthesizing the four corner
//! vertex addresses per grid cell from a single stencil shared by all three
//! directions.

use serde::{Deserialize, Serialize};

use crate::skin_error::MeshSkinError;

/// Vertex extents of a structured zone, one count per axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    /// Vertex count along the I axis.
    pub im: usize,
    /// Vertex count along the J axis.
    pub jm: usize,
    /// Vertex count along the K axis.
    pub km: usize,
}

impl GridDims {
    /// Creates zone extents from per-axis vertex counts.
    pub fn new(im: usize, jm: usize, km: usize) -> Self {
        Self { im, jm, km }
    }

    /// Total number of vertices in the zone.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.im * self.jm * self.km
    }

    /// Column-major flat index of a 1-based `(i, j, k)` vertex.
    ///
    /// The layout is `i-1 + (j-1)*im + (k-1)*im*jm`, the Fortran-order
    /// convention of CGNS structured zones.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if any component is zero; indices are 1-based.
    #[inline]
    pub fn linear_index(&self, vertex: [usize; 3]) -> usize {
        let [i, j, k] = vertex;
        debug_assert!(i >= 1 && j >= 1 && k >= 1, "structured indices are 1-based");
        (i - 1) + (j - 1) * self.im + (k - 1) * self.im * self.jm
    }

    #[inline]
    fn axis(&self, axis: usize) -> usize {
        [self.im, self.jm, self.km][axis]
    }
}

/// Normal direction of a boundary-condition window.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WindowDirection {
    /// Window normal to the I axis (`imin == imax`).
    INormal,
    /// Window normal to the J axis (`jmin == jmax`).
    JNormal,
    /// Window normal to the K axis (`kmin == kmax`).
    KNormal,
}

impl WindowDirection {
    /// Axis index (0, 1, 2) of the window normal.
    #[inline]
    pub const fn normal_axis(self) -> usize {
        match self {
            WindowDirection::INormal => 0,
            WindowDirection::JNormal => 1,
            WindowDirection::KNormal => 2,
        }
    }

    /// The two in-plane axes as `(fast, slow)`: the fast axis varies
    /// innermost when scanning the window's faces.
    #[inline]
    pub const fn in_plane_axes(self) -> (usize, usize) {
        match self {
            WindowDirection::INormal => (1, 2),
            WindowDirection::JNormal => (0, 2),
            WindowDirection::KNormal => (0, 1),
        }
    }

    const fn from_normal_axis(axis: usize) -> Self {
        match axis {
            0 => WindowDirection::INormal,
            1 => WindowDirection::JNormal,
            _ => WindowDirection::KNormal,
        }
    }
}

/// Number of vertices bounding a structured boundary face.
pub const QUAD_VERTEX_COUNT: usize = 4;

/// Relative corner offsets of a boundary quad in `(fast, slow)` in-plane
/// coordinates. Once the axes are permuted per direction, all three
/// directions share this one stencil, which reproduces the outward-facing
/// right-handed corner order of the per-direction loops it replaces.
const QUAD_CORNERS: [(usize, usize); 4] = [(0, 0), (1, 0), (1, 1), (0, 1)];

/// Boundary-condition window on a structured zone: a 1-based, inclusive
/// index range per axis with exactly one degenerate axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PointRange {
    min: [usize; 3],
    max: [usize; 3],
}

impl PointRange {
    /// Creates a window from per-axis `(min, max)` bounds.
    ///
    /// Bounds must be 1-based and non-reversed; the degenerate-axis
    /// invariant is checked later, when a direction is resolved.
    pub fn try_new(min: [usize; 3], max: [usize; 3]) -> Result<Self, MeshSkinError> {
        for axis in 0..3 {
            if min[axis] == 0 {
                return Err(MeshSkinError::ZeroWindowBound { axis });
            }
            if min[axis] > max[axis] {
                return Err(MeshSkinError::ReversedWindow {
                    axis,
                    min: min[axis],
                    max: max[axis],
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Lower corner of the window (1-based, inclusive).
    #[inline]
    pub fn min(&self) -> [usize; 3] {
        self.min
    }

    /// Upper corner of the window (1-based, inclusive).
    #[inline]
    pub fn max(&self) -> [usize; 3] {
        self.max
    }

    /// Resolves the window's normal direction from its single degenerate
    /// axis. A window with zero or several degenerate axes is malformed and
    /// never silently resolves to a default.
    pub fn direction(&self) -> Result<WindowDirection, MeshSkinError> {
        let mut degenerate_axes = 0;
        let mut normal = None;
        for axis in 0..3 {
            if self.min[axis] == self.max[axis] {
                degenerate_axes += 1;
                normal = Some(axis);
            }
        }
        match (degenerate_axes, normal) {
            (1, Some(axis)) => Ok(WindowDirection::from_normal_axis(axis)),
            _ => Err(MeshSkinError::MalformedWindow { degenerate_axes }),
        }
    }

    /// Per-axis cell counts, `max(1, max - min)`.
    ///
    /// The lower clamp makes a single vertex layer (`min == max` on an
    /// in-plane axis) denote one cell rather than zero.
    #[inline]
    pub fn cell_counts(&self) -> [usize; 3] {
        std::array::from_fn(|axis| 1.max(self.max[axis] - self.min[axis]))
    }
}

/// Iterator over the quad faces of a BC window.
///
/// Yields, per boundary cell, the four 0-based flat vertex addresses of the
/// face's corners. Faces are scanned with the fast in-plane axis innermost,
/// matching the per-direction loop order of structured CGNS tooling, so
/// repeated traversals of the same window visit faces (and therefore first
/// see vertices) in the same order.
#[derive(Clone, Debug)]
pub struct WindowFaces {
    dims: GridDims,
    origin: [usize; 3],
    fast: usize,
    slow: usize,
    n_fast: usize,
    n_slow: usize,
    cursor: usize,
}

impl WindowFaces {
    /// Resolves the window direction and validates the window against the
    /// zone extents. Fails without side effects on a malformed window or one
    /// whose cells would address vertices outside the grid.
    pub fn new(dims: GridDims, window: &PointRange) -> Result<Self, MeshSkinError> {
        let direction = window.direction()?;
        let (fast, slow) = direction.in_plane_axes();
        let counts = window.cell_counts();
        let min = window.min();
        for axis in 0..3 {
            // Corner stencils reach one vertex past the last cell on the
            // in-plane axes and stay on the window plane along the normal.
            let needed = if axis == direction.normal_axis() {
                min[axis]
            } else {
                min[axis] + counts[axis]
            };
            if needed > dims.axis(axis) {
                return Err(MeshSkinError::WindowOutOfGrid {
                    axis,
                    needed,
                    available: dims.axis(axis),
                });
            }
        }
        Ok(Self {
            dims,
            origin: min,
            fast,
            slow,
            n_fast: counts[fast],
            n_slow: counts[slow],
            cursor: 0,
        })
    }

    /// Total number of quad faces in the window.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.n_fast * self.n_slow
    }
}

impl Iterator for WindowFaces {
    type Item = [usize; QUAD_VERTEX_COUNT];

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.face_count() {
            return None;
        }
        let d_fast = self.cursor % self.n_fast;
        let d_slow = self.cursor / self.n_fast;
        self.cursor += 1;

        let mut cell = self.origin;
        cell[self.fast] += d_fast;
        cell[self.slow] += d_slow;
        Some(QUAD_CORNERS.map(|(c_fast, c_slow)| {
            let mut vertex = cell;
            vertex[self.fast] += c_fast;
            vertex[self.slow] += c_slow;
            self.dims.linear_index(vertex)
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.face_count() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowFaces {}

//! Vertex coordinate access for one zone.

use crate::skin_error::MeshSkinError;

/// Borrowed per-component coordinate arrays of one zone's vertices.
///
/// CGNS stores `CoordinateX/Y/Z` as separate arrays; this view keeps that
/// layout and hands out one `[x, y, z]` triple per 0-based vertex index.
#[derive(Copy, Clone, Debug)]
pub struct VertexCoords<'a> {
    x: &'a [f64],
    y: &'a [f64],
    z: &'a [f64],
}

impl<'a> VertexCoords<'a> {
    /// Wraps the three component arrays, which must agree in length.
    pub fn new(x: &'a [f64], y: &'a [f64], z: &'a [f64]) -> Result<Self, MeshSkinError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(MeshSkinError::CoordinateLengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    /// Number of vertices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the zone has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Coordinate triple of a 0-based vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range; extraction stages bounds-check
    /// vertex ids against the marking table before reading coordinates.
    #[inline]
    pub fn triple(&self, vertex: usize) -> [f64; 3] {
        [self.x[vertex], self.y[vertex], self.z[vertex]]
    }
}

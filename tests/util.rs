#![allow(dead_code)]
use mesh_skin::grid::window::GridDims;

/// Unit-spaced coordinates where vertex `(i, j, k)` sits at `(i-1, j-1, k-1)`.
pub fn unit_coords(dims: GridDims) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let n = dims.vertex_count();
    let (mut x, mut y, mut z) = (vec![0.0; n], vec![0.0; n], vec![0.0; n]);
    for k in 1..=dims.km {
        for j in 1..=dims.jm {
            for i in 1..=dims.im {
                let v = dims.linear_index([i, j, k]);
                x[v] = (i - 1) as f64;
                y[v] = (j - 1) as f64;
                z[v] = (k - 1) as f64;
            }
        }
    }
    (x, y, z)
}

//! Masked linear-system assembly for the discrete Poisson equation.
//!
//! Every Hole pixel becomes one unknown. The coefficient matrix encodes the
//! 5-point stencil in positive-definite orientation: the diagonal holds the
//! number of in-bounds 4-neighbors of the pixel (4 in the interior, fewer on
//! the grid border) and each in-bounds Hole neighbor contributes `-1`. Valid
//! neighbors carry known values and are folded into the right-hand side, so
//! for channel values `t` and guidance Laplacian `L` the row for pixel `p`
//! reads
//!
//! ```text
//! deg(p)·x_p - Σ_{hole q} x_q = Σ_{valid q} t[q] - L[p]
//! ```
//!
//! The matrix depends only on mask topology and is shared across channels;
//! only the right-hand side varies per channel.

use crate::field::ScalarField;
use crate::mask::RegionMask;

const NO_VAR: usize = usize::MAX;

/// Sparse matrix in compressed sparse row form.
#[derive(Clone, Debug)]
pub struct SparseMatrix {
    rows: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl SparseMatrix {
    /// Returns the number of rows (equal to the number of unknowns).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of stored non-zero entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the `(column, value)` entries of one row.
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        self.col_idx[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// Computes `out = A * x`.
    pub(crate) fn mul_vec(&self, x: &[f64], out: &mut [f64]) {
        for row in 0..self.rows {
            let start = self.row_ptr[row];
            let end = self.row_ptr[row + 1];
            let mut acc = 0.0;
            for k in start..end {
                acc += self.values[k] * x[self.col_idx[k]];
            }
            out[row] = acc;
        }
    }
}

/// Assembled Poisson system: unknown bijection plus coefficient matrix.
#[derive(Clone, Debug)]
pub struct PoissonSystem {
    matrix: SparseMatrix,
    /// Variable index -> pixel coordinate, in row-major assignment order.
    unknowns: Vec<(usize, usize)>,
    /// Pixel (row-major) -> variable index, `NO_VAR` for Valid pixels.
    index_of: Vec<usize>,
    width: usize,
}

impl PoissonSystem {
    /// Builds the variable bijection and coefficient matrix for a mask.
    pub fn build(mask: &RegionMask) -> Self {
        let width = mask.width();
        let height = mask.height();

        let mut index_of = vec![NO_VAR; width * height];
        let mut unknowns = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if mask.is_hole(x, y) {
                    index_of[y * width + x] = unknowns.len();
                    unknowns.push((x, y));
                }
            }
        }

        let mut row_ptr = Vec::with_capacity(unknowns.len() + 1);
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);
        for &(x, y) in &unknowns {
            let center_slot = values.len();
            col_idx.push(index_of[y * width + x]);
            values.push(0.0);
            let mut degree = 0usize;
            for (nx, ny) in mask.neighbors4(x, y) {
                degree += 1;
                if mask.is_hole(nx, ny) {
                    col_idx.push(index_of[ny * width + nx]);
                    values.push(-1.0);
                }
            }
            values[center_slot] = degree as f64;
            row_ptr.push(values.len());
        }

        Self {
            matrix: SparseMatrix {
                rows: unknowns.len(),
                row_ptr,
                col_idx,
                values,
            },
            unknowns,
            index_of,
            width,
        }
    }

    /// Returns the number of unknowns (Hole pixels).
    pub fn unknown_count(&self) -> usize {
        self.unknowns.len()
    }

    /// Returns the shared coefficient matrix.
    pub fn matrix(&self) -> &SparseMatrix {
        &self.matrix
    }

    /// Returns the pixel coordinate of a variable index.
    pub fn pixel_of(&self, var: usize) -> (usize, usize) {
        self.unknowns[var]
    }

    /// Returns the variable index assigned to a Hole pixel, if any.
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width {
            return None;
        }
        let idx = y.checked_mul(self.width)?.checked_add(x)?;
        match self.index_of.get(idx) {
            Some(&idx) if idx != NO_VAR => Some(idx),
            _ => None,
        }
    }

    /// Returns all unknown pixel coordinates in variable order.
    pub(crate) fn unknowns(&self) -> &[(usize, usize)] {
        &self.unknowns
    }

    /// Builds the right-hand side for one channel.
    ///
    /// `b[p] = Σ_{valid q} target[q] - laplacian[p]` per the stencil's
    /// positive-definite orientation.
    pub fn rhs(
        &self,
        mask: &RegionMask,
        target: &ScalarField,
        laplacian: &ScalarField,
    ) -> Vec<f64> {
        let mut b = Vec::with_capacity(self.unknowns.len());
        for &(x, y) in &self.unknowns {
            let mut acc = -f64::from(laplacian.at(x, y));
            for (nx, ny) in mask.neighbors4(x, y) {
                if mask.is_valid(nx, ny) {
                    acc += f64::from(target.at(nx, ny));
                }
            }
            b.push(acc);
        }
        b
    }
}

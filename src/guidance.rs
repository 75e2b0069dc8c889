//! Guidance-field construction.
//!
//! The source term of the Poisson solve is a scalar Laplacian field. It can
//! be derived from a 2-component derivative field (divergence of the field,
//! via per-axis backward differences) or taken directly from an image plane
//! (`laplacian_of`, the seamless-cloning path where the guidance is the
//! Laplacian of a source image).
//!
//! All operators replicate the border sample where the stencil leaves the
//! grid, consistently across axes, so a constant input differentiates to
//! exact zero everywhere, edges included.

use crate::field::{ScalarField, VectorField};

/// Backward difference along the x axis: `out[x, y] = f[x, y] - f[x-1, y]`.
pub fn backward_difference_x(field: &ScalarField) -> ScalarField {
    let (width, height) = (field.width(), field.height());
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let here = field.at(x, y);
            let left = field.at_clamped(x as isize - 1, y as isize);
            out.push(here - left);
        }
    }
    ScalarField::from_raw(out, width, height)
}

/// Backward difference along the y axis: `out[x, y] = f[x, y] - f[x, y-1]`.
pub fn backward_difference_y(field: &ScalarField) -> ScalarField {
    let (width, height) = (field.width(), field.height());
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let here = field.at(x, y);
            let up = field.at_clamped(x as isize, y as isize - 1);
            out.push(here - up);
        }
    }
    ScalarField::from_raw(out, width, height)
}

/// Computes the divergence of a derivative field.
///
/// `L[p] = d/dx(v_x)[p] + d/dy(v_y)[p]`, the Laplacian of the scalar
/// potential whose gradient is `v`.
pub fn compute_laplacian(field: &VectorField) -> ScalarField {
    let ddx = backward_difference_x(field.dx());
    let ddy = backward_difference_y(field.dy());
    let (width, height) = (field.width(), field.height());
    let sum: Vec<f32> = ddx
        .as_slice()
        .iter()
        .zip(ddy.as_slice())
        .map(|(a, b)| a + b)
        .collect();
    ScalarField::from_raw(sum, width, height)
}

/// Computes the 5-point discrete Laplacian of an image plane.
///
/// `L[p] = f[left] + f[right] + f[up] + f[down] - 4 f[p]` with border
/// replication. Used to derive a cloning guidance field from a source image.
pub fn laplacian_of(plane: &ScalarField) -> ScalarField {
    let (width, height) = (plane.width(), plane.height());
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let (xi, yi) = (x as isize, y as isize);
            let sum = plane.at_clamped(xi - 1, yi)
                + plane.at_clamped(xi + 1, yi)
                + plane.at_clamped(xi, yi - 1)
                + plane.at_clamped(xi, yi + 1);
            out.push(sum - 4.0 * plane.at(x, y));
        }
    }
    ScalarField::from_raw(out, width, height)
}

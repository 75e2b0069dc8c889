//! Conjugate-gradient solve of the assembled sparse system.
//!
//! The 5-point matrix restricted to a well-anchored Hole region is symmetric
//! positive definite, so plain conjugate gradient converges deterministically.
//! Arithmetic runs in `f64`: residual and direction dot products accumulate
//! over every unknown and drift visibly in single precision.

use crate::system::SparseMatrix;
use crate::util::{PoissonError, PoissonResult};

/// Stopping criteria for the conjugate-gradient solver.
#[derive(Clone, Copy, Debug)]
pub struct SolveParams {
    /// Relative residual tolerance: converged when `‖r‖ ≤ tolerance · ‖b‖`.
    pub tolerance: f64,
    /// Iteration budget before the solve is reported as failed.
    pub max_iterations: usize,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 10_000,
        }
    }
}

/// Solves `A x = b`, reporting failure as `SingularSystem` for `channel`.
pub(crate) fn solve(
    matrix: &SparseMatrix,
    rhs: &[f64],
    params: SolveParams,
    channel: usize,
) -> PoissonResult<Vec<f64>> {
    let n = matrix.rows();
    debug_assert_eq!(rhs.len(), n);

    let mut x = vec![0.0; n];
    let b_norm = dot(rhs, rhs).sqrt();
    if b_norm == 0.0 {
        return Ok(x);
    }
    let threshold = params.tolerance * b_norm;

    // x0 = 0, so the initial residual is b itself.
    let mut r = rhs.to_vec();
    let mut p = rhs.to_vec();
    let mut ap = vec![0.0; n];
    let mut rs = dot(&r, &r);

    for iteration in 0..params.max_iterations {
        if rs.sqrt() <= threshold {
            return Ok(x);
        }
        matrix.mul_vec(&p, &mut ap);
        let pap = dot(&p, &ap);
        if !pap.is_finite() || pap <= 0.0 {
            // Loss of positive-definiteness: the system is singular or
            // inconsistent with the stencil's orientation.
            return Err(PoissonError::SingularSystem {
                channel,
                iterations: iteration,
                residual: rs.sqrt(),
            });
        }
        let alpha = rs / pap;
        for i in 0..n {
            x[i] += alpha * p[i];
            r[i] -= alpha * ap[i];
        }
        let rs_next = dot(&r, &r);
        let beta = rs_next / rs;
        for i in 0..n {
            p[i] = r[i] + beta * p[i];
        }
        rs = rs_next;
    }

    if rs.sqrt() <= threshold {
        Ok(x)
    } else {
        Err(PoissonError::SingularSystem {
            channel,
            iterations: params.max_iterations,
            residual: rs.sqrt(),
        })
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

//! Whole-pipeline masked Poisson fill.
//!
//! `fill_masked_region` validates the inputs, assembles the shared
//! coefficient matrix once, then solves and composites each channel
//! independently. Channels share only read-only state, so with the `rayon`
//! feature they run as parallel tasks with identical results.

use crate::field::{Image, ScalarField, VectorField};
use crate::guidance::compute_laplacian;
use crate::mask::RegionMask;
use crate::solver::{self, SolveParams};
use crate::system::PoissonSystem;
use crate::trace::{trace_event, trace_span};
use crate::util::{PoissonError, PoissonResult};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Fills the Hole region of `target` so its discrete Laplacian matches
/// `laplacian` and Valid pixels are preserved exactly.
///
/// `laplacian` must have either one plane (broadcast to every channel) or
/// one plane per target channel. Default solver parameters are used; see
/// [`fill_masked_region_with_params`] to override them.
pub fn fill_masked_region(
    target: &Image,
    mask: &RegionMask,
    laplacian: &Image,
) -> PoissonResult<Image> {
    fill_masked_region_with_params(target, mask, laplacian, SolveParams::default())
}

/// Masked Poisson fill with explicit solver parameters.
pub fn fill_masked_region_with_params(
    target: &Image,
    mask: &RegionMask,
    laplacian: &Image,
    params: SolveParams,
) -> PoissonResult<Image> {
    validate(target, mask, laplacian)?;

    let _span = trace_span!("fill_masked_region").entered();

    // No unknowns: the output is the target, bit for bit.
    if mask.hole_count() == 0 {
        return Ok(target.clone());
    }

    if let Some((x, y)) = mask.degenerate_hole_component() {
        return Err(PoissonError::DegenerateRegion { x, y });
    }

    let system = PoissonSystem::build(mask);
    trace_event!(
        "system_assembled",
        unknowns = system.unknown_count() as u64,
        channels = target.channels() as u64
    );

    let channels = 0..target.channels();

    let solve_channel = |c: usize| {
        fill_channel(
            &system,
            mask,
            target.plane(c),
            guidance_plane(laplacian, c),
            params,
            c,
        )
    };

    #[cfg(feature = "rayon")]
    let planes = channels
        .into_par_iter()
        .map(solve_channel)
        .collect::<PoissonResult<Vec<_>>>()?;

    #[cfg(not(feature = "rayon"))]
    let planes = channels
        .map(solve_channel)
        .collect::<PoissonResult<Vec<_>>>()?;

    Image::from_planes(planes)
}

/// Masked Poisson fill driven by derivative fields instead of a Laplacian.
///
/// Each vector field is converted with [`compute_laplacian`]; one field is
/// broadcast to every channel, otherwise the count must match the image.
pub fn fill_masked_region_with_guidance(
    target: &Image,
    mask: &RegionMask,
    guidance: &[VectorField],
    params: SolveParams,
) -> PoissonResult<Image> {
    let planes: Vec<ScalarField> = guidance.iter().map(compute_laplacian).collect();
    let laplacian = Image::from_planes(planes)?;
    fill_masked_region_with_params(target, mask, &laplacian, params)
}

fn validate(target: &Image, mask: &RegionMask, laplacian: &Image) -> PoissonResult<()> {
    let (width, height) = (target.width(), target.height());
    if mask.width() != width || mask.height() != height {
        return Err(PoissonError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            width: mask.width(),
            height: mask.height(),
        });
    }
    if laplacian.width() != width || laplacian.height() != height {
        return Err(PoissonError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            width: laplacian.width(),
            height: laplacian.height(),
        });
    }
    if laplacian.channels() != 1 && laplacian.channels() != target.channels() {
        return Err(PoissonError::ChannelCountMismatch {
            image: target.channels(),
            guidance: laplacian.channels(),
        });
    }
    Ok(())
}

fn guidance_plane(laplacian: &Image, channel: usize) -> &ScalarField {
    if laplacian.channels() == 1 {
        laplacian.plane(0)
    } else {
        laplacian.plane(channel)
    }
}

fn fill_channel(
    system: &PoissonSystem,
    mask: &RegionMask,
    target: &ScalarField,
    laplacian: &ScalarField,
    params: SolveParams,
    channel: usize,
) -> PoissonResult<ScalarField> {
    let rhs = system.rhs(mask, target, laplacian);
    let solution = solver::solve(system.matrix(), &rhs, params, channel)?;
    Ok(composite(target, system, &solution))
}

/// Copies Valid pixels verbatim and writes solved values into Hole pixels.
fn composite(target: &ScalarField, system: &PoissonSystem, solution: &[f64]) -> ScalarField {
    let mut out = target.clone();
    for (var, &(x, y)) in system.unknowns().iter().enumerate() {
        out.set(x, y, solution[var] as f32);
    }
    out
}

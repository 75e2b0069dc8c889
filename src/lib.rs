//! Poisson image editing: seamless masked region filling and cloning.
//!
//! Given a target image, a Hole/Valid mask, and a guidance Laplacian
//! (supplied directly or derived from a derivative field), the crate solves
//! the discrete Poisson equation over the Hole pixels so the filled region
//! matches the guidance's second-derivative structure and blends
//! continuously into the Valid boundary. Channels are solved independently;
//! the `rayon` feature runs them in parallel.

pub mod field;
mod fill;
pub mod guidance;
pub mod mask;
mod solver;
pub mod system;
pub(crate) mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub mod io;

pub use field::{Image, ScalarField, VectorField};
pub use fill::{
    fill_masked_region, fill_masked_region_with_guidance, fill_masked_region_with_params,
};
pub use guidance::{
    backward_difference_x, backward_difference_y, compute_laplacian, laplacian_of,
};
pub use mask::{PixelLabel, RegionMask};
pub use solver::SolveParams;
pub use system::{PoissonSystem, SparseMatrix};
pub use util::{PoissonError, PoissonResult};

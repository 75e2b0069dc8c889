use clap::Parser;
use poissonfill::io::{load_mask, load_rgb_image, save_rgb_image};
use poissonfill::{
    fill_masked_region_with_params, laplacian_of, Image, PoissonResult, ScalarField, SolveParams,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Poisson region fill / seamless clone")]
struct Cli {
    /// Target image whose masked region is replaced.
    target: PathBuf,
    /// Mask image: bright pixels mark the region to fill.
    mask: PathBuf,
    /// Output image path.
    output: PathBuf,
    /// Source image for seamless cloning; its Laplacian becomes the
    /// guidance field. Without it the fill is harmonic (zero guidance).
    #[arg(short, long)]
    source: Option<PathBuf>,
    /// Relative residual tolerance for the solver.
    #[arg(long, default_value_t = 1e-10)]
    tol: f64,
    /// Solver iteration budget.
    #[arg(long, default_value_t = 10_000)]
    max_iters: usize,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> PoissonResult<()> {
    let target = load_rgb_image(&cli.target)?;
    let mask = load_mask(&cli.mask)?;

    let laplacian = match &cli.source {
        Some(path) => {
            let source = load_rgb_image(path)?;
            let planes: Vec<ScalarField> = source.planes().iter().map(laplacian_of).collect();
            Image::from_planes(planes)?
        }
        None => Image::from_plane(ScalarField::zeros(target.width(), target.height())?),
    };

    let params = SolveParams {
        tolerance: cli.tol,
        max_iterations: cli.max_iters,
    };
    let start = std::time::Instant::now();
    let output = fill_masked_region_with_params(&target, &mask, &laplacian, params)?;
    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "fill complete");
    save_rgb_image(&output, &cli.output)
}

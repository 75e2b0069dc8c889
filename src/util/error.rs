//! Error types for poissonfill.

use thiserror::Error;

/// Result alias for poissonfill operations.
pub type PoissonResult<T> = std::result::Result<T, PoissonError>;

/// Errors that can occur while validating inputs or running a fill.
#[derive(Debug, Error, PartialEq)]
pub enum PoissonError {
    /// A grid was constructed with a zero width or height.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The backing buffer is shorter than the grid requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall {
        /// Number of elements the grid requires.
        needed: usize,
        /// Number of elements supplied.
        got: usize,
    },
    /// An image was constructed with no channel planes.
    #[error("image has no channel planes")]
    EmptyImage,
    /// Mask, guidance, or plane dimensions disagree with the target image.
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        /// Width the grid was expected to have.
        expected_width: usize,
        /// Height the grid was expected to have.
        expected_height: usize,
        /// Actual width.
        width: usize,
        /// Actual height.
        height: usize,
    },
    /// Guidance plane count matches neither the image channel count nor one.
    #[error("channel count mismatch: image has {image} channels, guidance has {guidance}")]
    ChannelCountMismatch {
        /// Channel count of the target image.
        image: usize,
        /// Plane count of the guidance Laplacian.
        guidance: usize,
    },
    /// A Hole connected component has no Valid neighbor to anchor the solve.
    #[error("degenerate hole region with no valid boundary, e.g. at ({x}, {y})")]
    DegenerateRegion {
        /// X coordinate of a pixel inside the offending component.
        x: usize,
        /// Y coordinate of a pixel inside the offending component.
        y: usize,
    },
    /// The solver lost positive-definiteness or ran out of iterations.
    #[error("singular system on channel {channel}: residual {residual:e} after {iterations} iterations")]
    SingularSystem {
        /// Channel whose solve failed.
        channel: usize,
        /// Iterations performed before giving up.
        iterations: usize,
        /// Residual norm at the point of failure.
        residual: f64,
    },
    /// Image file decoding or encoding failed.
    #[error("image i/o error: {reason}")]
    ImageIo {
        /// Underlying decoder/encoder message.
        reason: String,
    },
}

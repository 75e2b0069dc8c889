//! Owned raster grids: scalar planes, multi-plane images and vector fields.
//!
//! `ScalarField` is a row-major `f32` grid. An `Image` is an ordered list of
//! equally sized planes, one per channel, so grayscale and RGB inputs share
//! one representation. A `VectorField` pairs two planes holding per-pixel
//! (∂/∂x, ∂/∂y) estimates for guidance-field construction.

use crate::util::{PoissonError, PoissonResult};

/// Owned row-major scalar grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl ScalarField {
    /// Creates a field from a row-major buffer.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> PoissonResult<Self> {
        let needed = required_len(width, height)?;
        if data.len() < needed {
            return Err(PoissonError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a field with every sample set to `value`.
    pub fn filled(value: f32, width: usize, height: usize) -> PoissonResult<Self> {
        let needed = required_len(width, height)?;
        Ok(Self {
            data: vec![value; needed],
            width,
            height,
        })
    }

    /// Creates an all-zero field.
    pub fn zeros(width: usize, height: usize) -> PoissonResult<Self> {
        Self::filled(0.0, width, height)
    }

    /// Returns the field width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the field height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the backing row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the sample at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Returns a contiguous slice for row `y`.
    pub fn row(&self, y: usize) -> Option<&[f32]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Internal constructor for buffers whose size is correct by construction.
    pub(crate) fn from_raw(data: Vec<f32>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Sample access for in-bounds coordinates.
    pub(crate) fn at(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    /// Sample access with coordinates clamped to the grid (border replication).
    pub(crate) fn at_clamped(&self, x: isize, y: isize) -> f32 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.data[cy * self.width + cx]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[y * self.width + x] = value;
    }
}

fn required_len(width: usize, height: usize) -> PoissonResult<usize> {
    if width == 0 || height == 0 {
        return Err(PoissonError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(PoissonError::InvalidDimensions { width, height })
}

/// Multi-channel image as a list of equally sized planes.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    planes: Vec<ScalarField>,
}

impl Image {
    /// Creates an image from channel planes, which must share dimensions.
    pub fn from_planes(planes: Vec<ScalarField>) -> PoissonResult<Self> {
        let first = planes.first().ok_or(PoissonError::EmptyImage)?;
        let (width, height) = (first.width(), first.height());
        for plane in &planes {
            if plane.width() != width || plane.height() != height {
                return Err(PoissonError::DimensionMismatch {
                    expected_width: width,
                    expected_height: height,
                    width: plane.width(),
                    height: plane.height(),
                });
            }
        }
        Ok(Self { planes })
    }

    /// Creates a single-channel image.
    pub fn from_plane(plane: ScalarField) -> Self {
        Self {
            planes: vec![plane],
        }
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.planes[0].width()
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.planes[0].height()
    }

    /// Returns the number of channel planes.
    pub fn channels(&self) -> usize {
        self.planes.len()
    }

    /// Returns the plane for channel `c`.
    ///
    /// # Panics
    /// Panics if `c` is not a valid channel index.
    pub fn plane(&self, c: usize) -> &ScalarField {
        &self.planes[c]
    }

    /// Returns all channel planes.
    pub fn planes(&self) -> &[ScalarField] {
        &self.planes
    }

    /// Consumes the image, returning its planes.
    pub fn into_planes(self) -> Vec<ScalarField> {
        self.planes
    }
}

/// Per-pixel 2-component vector field (∂/∂x, ∂/∂y estimates).
#[derive(Clone, Debug, PartialEq)]
pub struct VectorField {
    dx: ScalarField,
    dy: ScalarField,
}

impl VectorField {
    /// Creates a vector field from its component planes.
    pub fn new(dx: ScalarField, dy: ScalarField) -> PoissonResult<Self> {
        if dx.width() != dy.width() || dx.height() != dy.height() {
            return Err(PoissonError::DimensionMismatch {
                expected_width: dx.width(),
                expected_height: dx.height(),
                width: dy.width(),
                height: dy.height(),
            });
        }
        Ok(Self { dx, dy })
    }

    /// Returns the x-component plane.
    pub fn dx(&self) -> &ScalarField {
        &self.dx
    }

    /// Returns the y-component plane.
    pub fn dy(&self) -> &ScalarField {
        &self.dy
    }

    /// Returns the field width in pixels.
    pub fn width(&self) -> usize {
        self.dx.width()
    }

    /// Returns the field height in pixels.
    pub fn height(&self) -> usize {
        self.dx.height()
    }
}

//! Hole/Valid region masks.
//!
//! A mask labels every pixel either `Hole` (solved for) or `Valid` (known,
//! supplying Dirichlet data). Boundary membership is a computed predicate,
//! not a stored third label, so it can never drift out of sync with the
//! labels themselves.

use crate::util::{PoissonError, PoissonResult};

/// Per-pixel mask label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLabel {
    /// Pixel to be solved for.
    Hole,
    /// Known pixel used as boundary data.
    Valid,
}

/// Label grid partitioning an image into Hole and Valid pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionMask {
    labels: Vec<PixelLabel>,
    width: usize,
    height: usize,
}

impl RegionMask {
    /// Creates a mask from a row-major label buffer.
    pub fn from_labels(
        labels: Vec<PixelLabel>,
        width: usize,
        height: usize,
    ) -> PoissonResult<Self> {
        if width == 0 || height == 0 {
            return Err(PoissonError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(PoissonError::InvalidDimensions { width, height })?;
        if labels.len() < needed {
            return Err(PoissonError::BufferTooSmall {
                needed,
                got: labels.len(),
            });
        }
        Ok(Self {
            labels,
            width,
            height,
        })
    }

    /// Creates a mask by evaluating `label` at every coordinate.
    pub fn from_fn<F>(width: usize, height: usize, label: F) -> PoissonResult<Self>
    where
        F: Fn(usize, usize) -> PixelLabel,
    {
        if width == 0 || height == 0 {
            return Err(PoissonError::InvalidDimensions { width, height });
        }
        let mut labels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                labels.push(label(x, y));
            }
        }
        Ok(Self {
            labels,
            width,
            height,
        })
    }

    /// Creates a mask with every pixel labeled Valid.
    pub fn all_valid(width: usize, height: usize) -> PoissonResult<Self> {
        Self::from_fn(width, height, |_, _| PixelLabel::Valid)
    }

    /// Returns the mask width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the mask height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the label at `(x, y)` if it is within bounds.
    pub fn label(&self, x: usize, y: usize) -> Option<PixelLabel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.labels.get(y * self.width + x).copied()
    }

    /// Returns true if `(x, y)` is in bounds and labeled Hole.
    pub fn is_hole(&self, x: usize, y: usize) -> bool {
        self.label(x, y) == Some(PixelLabel::Hole)
    }

    /// Returns true if `(x, y)` is in bounds and labeled Valid.
    pub fn is_valid(&self, x: usize, y: usize) -> bool {
        self.label(x, y) == Some(PixelLabel::Valid)
    }

    /// Returns true if `(x, y)` is Valid with at least one Hole 4-neighbor.
    pub fn is_boundary(&self, x: usize, y: usize) -> bool {
        self.is_valid(x, y) && self.neighbors4(x, y).any(|(nx, ny)| self.is_hole(nx, ny))
    }

    /// Returns the in-bounds 4-neighbors of `(x, y)`, without wraparound.
    pub fn neighbors4(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        let height = self.height;
        [
            (x > 0).then(|| (x - 1, y)),
            (x + 1 < width).then_some((x + 1, y)),
            (y > 0).then(|| (x, y - 1)),
            (y + 1 < height).then_some((x, y + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Returns the number of Hole pixels.
    pub fn hole_count(&self) -> usize {
        self.labels
            .iter()
            .filter(|&&label| label == PixelLabel::Hole)
            .count()
    }

    /// Finds a Hole connected component with no Valid neighbor anywhere.
    ///
    /// Such a component has no Dirichlet data and makes the linear system
    /// underdetermined. Returns a representative pixel of the first one
    /// found, in row-major order.
    pub(crate) fn degenerate_hole_component(&self) -> Option<(usize, usize)> {
        let mut visited = vec![false; self.labels.len()];
        let mut stack = Vec::new();
        for start in 0..self.labels.len() {
            if visited[start] || self.labels[start] == PixelLabel::Valid {
                continue;
            }
            let first = (start % self.width, start / self.width);
            let mut touches_valid = false;
            visited[start] = true;
            stack.push(first);
            while let Some((x, y)) = stack.pop() {
                for (nx, ny) in self.neighbors4(x, y) {
                    let idx = ny * self.width + nx;
                    match self.labels[idx] {
                        PixelLabel::Valid => touches_valid = true,
                        PixelLabel::Hole => {
                            if !visited[idx] {
                                visited[idx] = true;
                                stack.push((nx, ny));
                            }
                        }
                    }
                }
            }
            if !touches_valid {
                return Some(first);
            }
        }
        None
    }
}

//! Convenience helpers bridging the `image` crate to in-memory grids.
//!
//! Available when the `image-io` feature is enabled. Pixel values are kept
//! on the `[0, 255]` scale as `f32`; saving clamps and rounds back to `u8`.
//! Mask files follow the bright-is-hole convention: luma of at least 128
//! marks a pixel to be filled.

use crate::field::{Image, ScalarField};
use crate::mask::{PixelLabel, RegionMask};
use crate::util::{PoissonError, PoissonResult};
use std::path::Path;

/// Creates a scalar plane from a grayscale image buffer.
pub fn plane_from_gray_image(img: &image::GrayImage) -> PoissonResult<ScalarField> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.as_raw().iter().map(|&v| f32::from(v)).collect();
    ScalarField::new(data, width, height)
}

/// Creates a 3-plane image from an RGB image buffer.
pub fn image_from_rgb(img: &image::RgbImage) -> PoissonResult<Image> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut planes = vec![Vec::with_capacity(width * height); 3];
    for pixel in img.pixels() {
        for (plane, &value) in planes.iter_mut().zip(pixel.0.iter()) {
            plane.push(f32::from(value));
        }
    }
    let planes = planes
        .into_iter()
        .map(|data| ScalarField::new(data, width, height))
        .collect::<PoissonResult<Vec<_>>>()?;
    Image::from_planes(planes)
}

/// Creates a Hole/Valid mask from a grayscale image buffer (bright = Hole).
pub fn mask_from_gray_image(img: &image::GrayImage) -> PoissonResult<RegionMask> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let labels = img
        .as_raw()
        .iter()
        .map(|&v| {
            if v >= 128 {
                PixelLabel::Hole
            } else {
                PixelLabel::Valid
            }
        })
        .collect();
    RegionMask::from_labels(labels, width, height)
}

/// Loads an image from disk as a single grayscale plane.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> PoissonResult<ScalarField> {
    let img = open(path)?;
    plane_from_gray_image(&img.to_luma8())
}

/// Loads an image from disk as a 3-channel RGB image.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> PoissonResult<Image> {
    let img = open(path)?;
    image_from_rgb(&img.to_rgb8())
}

/// Loads a mask image from disk (bright = Hole).
pub fn load_mask<P: AsRef<Path>>(path: P) -> PoissonResult<RegionMask> {
    let img = open(path)?;
    mask_from_gray_image(&img.to_luma8())
}

/// Saves a scalar plane as a grayscale image, clamping to `[0, 255]`.
pub fn save_gray_image<P: AsRef<Path>>(plane: &ScalarField, path: P) -> PoissonResult<()> {
    let buffer = image::GrayImage::from_fn(plane.width() as u32, plane.height() as u32, |x, y| {
        image::Luma([quantize(plane.get(x as usize, y as usize).unwrap_or(0.0))])
    });
    buffer.save(path).map_err(io_error)
}

/// Saves a 3-channel image as RGB, clamping each channel to `[0, 255]`.
pub fn save_rgb_image<P: AsRef<Path>>(img: &Image, path: P) -> PoissonResult<()> {
    if img.channels() != 3 {
        return Err(PoissonError::ImageIo {
            reason: format!("expected 3 channels for RGB output, got {}", img.channels()),
        });
    }
    let buffer = image::RgbImage::from_fn(img.width() as u32, img.height() as u32, |x, y| {
        let (x, y) = (x as usize, y as usize);
        image::Rgb([
            quantize(img.plane(0).get(x, y).unwrap_or(0.0)),
            quantize(img.plane(1).get(x, y).unwrap_or(0.0)),
            quantize(img.plane(2).get(x, y).unwrap_or(0.0)),
        ])
    });
    buffer.save(path).map_err(io_error)
}

fn open<P: AsRef<Path>>(path: P) -> PoissonResult<image::DynamicImage> {
    image::open(path).map_err(io_error)
}

fn io_error(err: image::ImageError) -> PoissonError {
    PoissonError::ImageIo {
        reason: err.to_string(),
    }
}

fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

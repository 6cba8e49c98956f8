//! EXIF-driven orientation normalization.
//!
//! Cameras frequently store pixels rotated and record the upright transform
//! as metadata. The geometry engine works in upright coordinates, so both
//! the dimension lookup and the decode path bake the stored orientation in
//! before anything else sees the image.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use image::{RgbaImage, imageops};
use tracing::debug;

/// Decode an image to RGBA8 with its stored orientation applied. Images
/// without EXIF metadata pass through unchanged.
pub fn load_upright(path: &Path) -> Result<RgbaImage> {
    let decoded = image::ImageReader::open(path)
        .with_context(|| format!("failed to open image at {}", path.display()))?
        .with_guessed_format()
        .context("failed to guess image format")?
        .decode()
        .with_context(|| format!("failed to decode image at {}", path.display()))?;
    let orientation = read_orientation(path).unwrap_or(1);
    Ok(apply_orientation(decoded.to_rgba8(), orientation))
}

/// Header-only dimensions with the EXIF orientation applied; orientations
/// 5 through 8 swap the reported axes.
pub fn upright_dimensions(path: &Path) -> Result<(u32, u32)> {
    let (raw_w, raw_h) = image::image_dimensions(path)
        .with_context(|| format!("failed to read image header at {}", path.display()))?;
    let orientation = read_orientation(path).unwrap_or(1);
    if matches!(orientation, 5..=8) {
        Ok((raw_h, raw_w))
    } else {
        Ok((raw_w, raw_h))
    }
}

/// Bake an EXIF orientation value into the pixel buffer. Unknown values
/// leave the buffer untouched.
pub fn apply_orientation(img: RgbaImage, orientation: u16) -> RgbaImage {
    match orientation {
        2 => imageops::flip_horizontal(&img),
        3 => imageops::rotate180(&img),
        4 => imageops::flip_vertical(&img),
        5 => imageops::flip_horizontal(&imageops::rotate90(&img)),
        6 => imageops::rotate90(&img),
        7 => imageops::flip_horizontal(&imageops::rotate270(&img)),
        8 => imageops::rotate270(&img),
        _ => img,
    }
}

fn read_orientation(path: &Path) -> Option<u16> {
    let file = File::open(path).ok()?;
    let mut buf = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut buf).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let value = field.value.get_uint(0)? as u16;
    debug!("exif orientation {} for {}", value, path.display());
    Some(value)
}

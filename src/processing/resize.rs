use anyhow::{Context, Result, ensure};
use fast_image_resize as fir;
use image::RgbaImage;

/// Resize an RGBA buffer to exactly `target_w` x `target_h`, normalizing the
/// source to display scale before the pixel-accurate crop.
pub fn resize_rgba(source: &RgbaImage, target_w: u32, target_h: u32) -> Result<RgbaImage> {
    ensure!(target_w > 0 && target_h > 0, "resize dimensions must be positive");
    if source.dimensions() == (target_w, target_h) {
        return Ok(source.clone());
    }

    let src_view = fir::images::ImageRef::new(
        source.width(),
        source.height(),
        source.as_raw(),
        fir::PixelType::U8x4,
    )
    .context("failed to create source view for display-scale resize")?;
    let mut dst = fir::images::Image::new(target_w, target_h, fir::PixelType::U8x4);
    let options = fir::ResizeOptions::new()
        .resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::CatmullRom));
    fir::Resizer::new()
        .resize(&src_view, &mut dst, Some(&options))
        .context("display-scale resize failed")?;

    RgbaImage::from_raw(target_w, target_h, dst.into_vec())
        .ok_or_else(|| anyhow::anyhow!("failed to construct resized RGBA image"))
}

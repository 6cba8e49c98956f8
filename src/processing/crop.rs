use image::{RgbaImage, imageops};

use crate::error::Error;

/// Crop region in resized-image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Extract `region` from `image`. The region must have area and lie fully
/// inside the image bounds.
pub fn crop_rgba(image: &RgbaImage, region: PixelRect) -> Result<RgbaImage, Error> {
    let (image_w, image_h) = image.dimensions();
    let fits = region.width > 0
        && region.height > 0
        && region
            .x
            .checked_add(region.width)
            .is_some_and(|right| right <= image_w)
        && region
            .y
            .checked_add(region.height)
            .is_some_and(|bottom| bottom <= image_h);
    if !fits {
        return Err(Error::RegionOutOfBounds {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            image_w,
            image_h,
        });
    }
    Ok(imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image())
}

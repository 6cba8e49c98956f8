use std::path::PathBuf;

use image::RgbaImage;

use crate::processing::crop::PixelRect;

/// Ask the exporter to produce a cropped bitmap from `source`.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub source: PathBuf,
    /// Size the source is resized to before cropping (the displayed size).
    pub display_size: (u32, u32),
    /// Crop region in resized-image pixel space.
    pub region: PixelRect,
}

/// Terminal outcome of one export: the cropped bitmap, or the first failure
/// of the pipeline.
#[derive(Debug)]
pub struct CropOutcome(pub anyhow::Result<RgbaImage>);

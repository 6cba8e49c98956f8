use thiserror::Error;

/// Library error type for crop operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Aspect ratio components must be positive and finite.
    #[error("invalid aspect ratio: {0}")]
    BadRatio(String),

    /// Source image, viewport, or derived layout has an unusable dimension.
    #[error("invalid crop geometry: {0}")]
    BadGeometry(String),

    /// A pixel-space crop region fell outside the image bounds.
    #[error("crop region {width}x{height}+{x}+{y} outside image {image_w}x{image_h}")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_w: u32,
        image_h: u32,
    },

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Image decode/encode error.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

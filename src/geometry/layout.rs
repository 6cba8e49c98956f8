use crate::error::Error;

/// Placement of the scaled image within the viewport.
///
/// Computed once when a crop session starts and immutable afterwards. The
/// image is scaled to fit the viewport preserving its own aspect ratio (not
/// the crop ratio), and centered; the insets are the leftover borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub viewport_w: f32,
    pub viewport_h: f32,
    /// Displayed image size after scaling.
    pub image_w: f32,
    pub image_h: f32,
    /// Offsets of the displayed image within the viewport.
    pub inset_x: f32,
    pub inset_y: f32,
}

impl DisplayMetrics {
    /// Fit `source` into the viewport. Fits by width first; falls back to
    /// fitting by height when the width-derived height overflows.
    pub fn fit(
        source_w: u32,
        source_h: u32,
        viewport_w: f32,
        viewport_h: f32,
    ) -> Result<Self, Error> {
        if source_w == 0 || source_h == 0 {
            return Err(Error::BadGeometry(format!(
                "source image has no area ({source_w}x{source_h})"
            )));
        }
        if !(viewport_w > 0.0) || !(viewport_h > 0.0) {
            return Err(Error::BadGeometry(format!(
                "viewport has no area ({viewport_w}x{viewport_h})"
            )));
        }

        let sw = source_w as f32;
        let sh = source_h as f32;
        let mut image_w = viewport_w;
        let mut image_h = sh * (viewport_w / sw);
        if image_h > viewport_h {
            image_h = viewport_h;
            image_w = sw * (viewport_h / sh);
        }

        Ok(Self {
            viewport_w,
            viewport_h,
            image_w,
            image_h,
            inset_x: ((viewport_w - image_w) / 2.0).max(0.0),
            inset_y: ((viewport_h - image_h) / 2.0).max(0.0),
        })
    }

    /// Displayed size in whole pixels, for the bitmap pipeline.
    pub fn display_size_px(&self) -> (u32, u32) {
        (
            self.image_w.round().max(1.0) as u32,
            self.image_h.round().max(1.0) as u32,
        )
    }
}

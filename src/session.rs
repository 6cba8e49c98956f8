//! Crop session: display metrics, size limits, the live rect, and gesture
//! tracking, wired together behind three pointer-event entry points.

use tracing::debug;

use crate::config::SessionConfig;
use crate::error::Error;
use crate::geometry::engine::{self, Limits};
use crate::geometry::gesture::{Gesture, classify};
use crate::geometry::layout::DisplayMetrics;
use crate::geometry::rect::{AspectRatio, CropRect, Point};
use crate::processing::crop::PixelRect;

/// One crop session over a single source image.
///
/// Metrics, ratio, and limits are fixed at construction; the rect is the
/// only live state and is mutated exclusively through the pointer-event
/// methods. All positions are in viewport coordinates.
#[derive(Debug)]
pub struct CropSession {
    ratio: AspectRatio,
    metrics: DisplayMetrics,
    limits: Limits,
    corner_hit_size: f32,
    rect: CropRect,
    gesture: Gesture,
}

impl CropSession {
    /// Build a session for a `source` image (pixel dimensions, upright)
    /// displayed inside `viewport`.
    pub fn new(
        source: (u32, u32),
        viewport: (f32, f32),
        config: &SessionConfig,
    ) -> Result<Self, Error> {
        let ratio = config.aspect_ratio;
        let metrics = DisplayMetrics::fit(source.0, source.1, viewport.0, viewport.1)?;

        let min_w = config.min_width.unwrap_or(metrics.viewport_w / 2.0);
        let limits = Limits {
            min_w,
            min_h: ratio.height_for(min_w),
            max_w: metrics.image_w,
            max_h: metrics.image_h,
        };

        let rect = initial_rect(&metrics, ratio, config.initial_margin);
        if !(rect.width > 0.0) || !(rect.height > 0.0) {
            return Err(Error::BadGeometry(format!(
                "initial crop rect has no area ({}x{})",
                rect.width, rect.height
            )));
        }
        debug!(?rect, ?limits, "crop session initialized");

        Ok(Self {
            ratio,
            metrics,
            limits,
            corner_hit_size: config.corner_hit_size,
            rect,
            gesture: Gesture::default(),
        })
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Pointer-down: classify the touched zone and start tracking. A down
    /// while already tracking reclassifies from scratch.
    pub fn pointer_down(&mut self, position: Point) {
        let local = Point::new(position.x - self.rect.x, position.y - self.rect.y);
        let zone = classify(local, self.rect.width, self.rect.height, self.corner_hit_size);
        self.gesture.begin(zone);
    }

    /// Pointer-move with the current and previous positions. Ignored unless
    /// a gesture is active.
    pub fn pointer_moved(&mut self, position: Point, previous: Point) {
        let Some(zone) = self.gesture.zone() else {
            return;
        };
        let dx = position.x - previous.x;
        let dy = position.y - previous.y;
        self.rect = engine::update(self.rect, zone, dx, dy, self.ratio, self.limits, &self.metrics);
    }

    /// Pointer-up: stop tracking. The rect stays where the last move left it.
    pub fn pointer_up(&mut self) {
        self.gesture.finish();
    }

    /// The final crop rect mapped into resized-image pixel space: the insets
    /// are subtracted from the origin (display and image share scale, so the
    /// size carries over) and the result is trimmed to the image bounds.
    pub fn export_rect(&self) -> PixelRect {
        let (image_w, image_h) = self.metrics.display_size_px();
        let x = ((self.rect.x - self.metrics.inset_x).round().max(0.0) as u32)
            .min(image_w.saturating_sub(1));
        let y = ((self.rect.y - self.metrics.inset_y).round().max(0.0) as u32)
            .min(image_h.saturating_sub(1));
        PixelRect {
            x,
            y,
            width: (self.rect.width.round().max(1.0) as u32).min(image_w - x),
            height: (self.rect.height.round().max(1.0) as u32).min(image_h - y),
        }
    }
}

/// Default crop rect: as wide as the viewport allows inside a symmetric
/// margin, height derived from the ratio, falling back to full displayed
/// height for short images; centered on the displayed image.
fn initial_rect(metrics: &DisplayMetrics, ratio: AspectRatio, initial_margin: f32) -> CropRect {
    let margin = metrics.inset_x.max(initial_margin);
    let mut width = metrics.viewport_w - 2.0 * margin;
    let mut height = ratio.height_for(width);
    if height > metrics.image_h {
        height = metrics.image_h;
        width = ratio.width_for(height);
    }
    CropRect::new(
        metrics.inset_x + (metrics.image_w - width) / 2.0,
        metrics.inset_y + (metrics.image_h - height) / 2.0,
        width,
        height,
    )
}

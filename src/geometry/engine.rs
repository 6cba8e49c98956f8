//! Crop-rect updates: body drags, corner-anchored resizes, bounds clamping.

use crate::geometry::gesture::{Corner, Zone};
use crate::geometry::layout::DisplayMetrics;
use crate::geometry::rect::{AspectRatio, CropRect};

/// Size bounds for the crop rect, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min_w: f32,
    pub min_h: f32,
    pub max_w: f32,
    pub max_h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Shrink,
    Grow,
}

fn axis_step(movement: f32, outward: f32) -> Option<Step> {
    let along = movement * outward;
    if along > 0.0 {
        Some(Step::Grow)
    } else if along < 0.0 {
        Some(Step::Shrink)
    } else {
        None
    }
}

/// Combine both axis signals for a corner. A disagreement (one axis growing,
/// the other shrinking) discards the step instead of guessing.
fn step_for(corner: Corner, dx: f32, dy: f32) -> Option<Step> {
    let (sx, sy) = corner.outward();
    match (axis_step(dx, sx), axis_step(dy, sy)) {
        (Some(a), Some(b)) if a == b => Some(a),
        (Some(_), Some(_)) => None,
        (Some(step), None) | (None, Some(step)) => Some(step),
        (None, None) => None,
    }
}

/// Apply one pointer-move to the rect. `dx`/`dy` are the pointer deltas
/// since the previous move event. The result is always clamped.
pub fn update(
    rect: CropRect,
    zone: Zone,
    dx: f32,
    dy: f32,
    ratio: AspectRatio,
    limits: Limits,
    metrics: &DisplayMetrics,
) -> CropRect {
    let candidate = match zone {
        Zone::Body => rect.translated(dx, dy),
        Zone::Corner(corner) => match resize(rect, corner, dx, dy, ratio, limits) {
            Some(resized) => resized,
            None => return rect,
        },
        Zone::Outside => return rect,
    };
    clamp(candidate, ratio, limits, metrics)
}

/// Corner-anchored resize. The step magnitude is the dominant axis of the
/// pointer delta, width changes by that amount, and height is always derived
/// from the ratio. Edges owned by the dragged corner shift by the size
/// change, which keeps the diagonally opposite corner stationary.
fn resize(
    rect: CropRect,
    corner: Corner,
    dx: f32,
    dy: f32,
    ratio: AspectRatio,
    limits: Limits,
) -> Option<CropRect> {
    let step = step_for(corner, dx, dy)?;
    let delta = dx.abs().max(dy.abs());

    let width = match step {
        Step::Shrink => {
            if !(rect.width > limits.min_w && rect.height > limits.min_h) {
                return None;
            }
            rect.width - delta
        }
        Step::Grow => {
            if !(rect.width < limits.max_w && rect.height < limits.max_h) {
                return None;
            }
            rect.width + delta
        }
    };
    let height = ratio.height_for(width);

    let (sx, sy) = corner.outward();
    let x = if sx < 0.0 { rect.x + (rect.width - width) } else { rect.x };
    let y = if sy < 0.0 { rect.y + (rect.height - height) } else { rect.y };
    Some(CropRect::new(x, y, width, height))
}

fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Normalize a candidate rect: origin into the displayed image region, size
/// into the limits. Width snaps first and re-derives height; the height snap
/// runs second and re-derives width, so height constraints win when both
/// axes are violated. After a size snap the origin is settled against the
/// final size, so containment holds after every update.
pub fn clamp(rect: CropRect, ratio: AspectRatio, limits: Limits, metrics: &DisplayMetrics) -> CropRect {
    let mut x = clamp_axis(
        rect.x,
        metrics.inset_x,
        metrics.viewport_w - rect.width - metrics.inset_x,
    );
    let mut y = clamp_axis(
        rect.y,
        metrics.inset_y,
        metrics.viewport_h - rect.height - metrics.inset_y,
    );

    let mut width = rect.width;
    let mut height = rect.height;
    if width < limits.min_w {
        width = limits.min_w;
        height = ratio.height_for(width);
    } else if width > limits.max_w {
        width = limits.max_w;
        height = ratio.height_for(width);
    }
    if height < limits.min_h {
        height = limits.min_h;
        width = ratio.width_for(height);
    } else if height > limits.max_h {
        height = limits.max_h;
        width = ratio.width_for(height);
    }

    if width != rect.width || height != rect.height {
        x = clamp_axis(x, metrics.inset_x, metrics.viewport_w - width - metrics.inset_x);
        y = clamp_axis(y, metrics.inset_y, metrics.viewport_h - height - metrics.inset_y);
    }

    CropRect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> DisplayMetrics {
        DisplayMetrics::fit(400, 400, 400.0, 800.0).unwrap()
    }

    fn square_limits() -> Limits {
        Limits {
            min_w: 100.0,
            min_h: 100.0,
            max_w: 400.0,
            max_h: 400.0,
        }
    }

    #[test]
    fn height_clamp_overrides_width_clamp() {
        let ratio: AspectRatio = "2:1".parse().unwrap();
        let limits = Limits {
            min_w: 10.0,
            min_h: 5.0,
            max_w: 200.0,
            max_h: 80.0,
        };
        let metrics = DisplayMetrics::fit(800, 400, 800.0, 400.0).unwrap();
        // Width snap alone would give 200x100; the height snap wins.
        let out = clamp(CropRect::new(0.0, 0.0, 300.0, 150.0), ratio, limits, &metrics);
        assert_eq!((out.width, out.height), (160.0, 80.0));
    }

    #[test]
    fn disagreeing_axes_discard_the_step() {
        let ratio: AspectRatio = "1:1".parse().unwrap();
        let rect = CropRect::new(100.0, 300.0, 200.0, 200.0);
        // Top-left: +x shrinks, -y grows.
        let out = update(
            rect,
            Zone::Corner(Corner::TopLeft),
            10.0,
            -10.0,
            ratio,
            square_limits(),
            &metrics(),
        );
        assert_eq!(out, rect);
    }

    #[test]
    fn top_left_grow_anchors_the_bottom_right_corner() {
        let ratio: AspectRatio = "1:1".parse().unwrap();
        let limits = Limits {
            min_w: 100.0,
            min_h: 100.0,
            max_w: 300.0,
            max_h: 300.0,
        };
        let rect = CropRect::new(100.0, 300.0, 200.0, 200.0);
        let out = update(
            rect,
            Zone::Corner(Corner::TopLeft),
            -10.0,
            -10.0,
            ratio,
            limits,
            &metrics(),
        );
        assert_eq!((out.width, out.height), (210.0, 210.0));
        assert_eq!((out.x, out.y), (90.0, 290.0));
        assert_eq!((out.max_x(), out.max_y()), (rect.max_x(), rect.max_y()));
    }

    #[test]
    fn single_axis_motion_still_steps() {
        let ratio: AspectRatio = "1:1".parse().unwrap();
        let rect = CropRect::new(100.0, 300.0, 200.0, 200.0);
        let out = update(
            rect,
            Zone::Corner(Corner::BottomRight),
            8.0,
            0.0,
            ratio,
            square_limits(),
            &metrics(),
        );
        assert_eq!((out.width, out.height), (208.0, 208.0));
        // Top-left corner anchored.
        assert_eq!((out.x, out.y), (100.0, 300.0));
    }

    #[test]
    fn origin_settles_after_a_size_snap() {
        let ratio: AspectRatio = "1:1".parse().unwrap();
        // Oversized candidate hugging the right edge: width snaps to the
        // max, and the origin must land back inside the image region.
        let out = clamp(
            CropRect::new(380.0, 250.0, 450.0, 450.0),
            ratio,
            square_limits(),
            &metrics(),
        );
        assert_eq!((out.width, out.height), (400.0, 400.0));
        assert_eq!((out.x, out.y), (0.0, 200.0));
    }
}

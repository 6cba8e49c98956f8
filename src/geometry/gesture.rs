//! Hit zones and per-gesture tracking state.

use crate::geometry::rect::Point;

/// One of the four resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Outward direction of this corner: pointer motion with these signs
    /// grows the rect, motion against them shrinks it.
    pub(crate) const fn outward(self) -> (f32, f32) {
        match self {
            Self::TopLeft => (-1.0, -1.0),
            Self::TopRight => (1.0, -1.0),
            Self::BottomLeft => (-1.0, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// Where a pointer-down landed relative to the crop rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Corner(Corner),
    Body,
    Outside,
}

/// Classify a pointer-down in the rect's local coordinate space.
///
/// Each corner owns a `hit_size` square anchored at that corner; corners win
/// over the body and are checked top-left, top-right, bottom-left,
/// bottom-right. The result is fixed for the whole gesture.
pub fn classify(local: Point, rect_w: f32, rect_h: f32, hit_size: f32) -> Zone {
    let in_square = |ox: f32, oy: f32| {
        local.x >= ox && local.x < ox + hit_size && local.y >= oy && local.y < oy + hit_size
    };

    if in_square(0.0, 0.0) {
        Zone::Corner(Corner::TopLeft)
    } else if in_square(rect_w - hit_size, 0.0) {
        Zone::Corner(Corner::TopRight)
    } else if in_square(0.0, rect_h - hit_size) {
        Zone::Corner(Corner::BottomLeft)
    } else if in_square(rect_w - hit_size, rect_h - hit_size) {
        Zone::Corner(Corner::BottomRight)
    } else if local.x >= 0.0 && local.x < rect_w && local.y >= 0.0 && local.y < rect_h {
        Zone::Body
    } else {
        Zone::Outside
    }
}

/// Gesture phase. Move events only act while `Tracking`, so a move without a
/// preceding pointer-down has no state to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Tracking(Zone),
}

impl Gesture {
    /// Pointer-down: start tracking with a fresh classification.
    pub fn begin(&mut self, zone: Zone) {
        *self = Self::Tracking(zone);
    }

    /// Pointer-up: back to idle, ready for the next gesture.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn zone(&self) -> Option<Zone> {
        match self {
            Self::Tracking(zone) => Some(*zone),
            Self::Idle => None,
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::{self, Deserializer};

use crate::error::Error;

/// A position in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The live crop rectangle, in display coordinates.
///
/// Invariants are maintained by [`crate::geometry::engine`]: the
/// width/height ratio matches the session's [`AspectRatio`], the size stays
/// within the session limits, and the rect stays inside the displayed image
/// region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Width:height pair every crop resize must preserve.
///
/// Components are validated at construction; a zero or non-finite dimension
/// would poison every derived size downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    width: f32,
    height: f32,
}

impl AspectRatio {
    pub fn new(width: f32, height: f32) -> Result<Self, Error> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(Error::BadRatio(format!("{width}:{height}")));
        }
        Ok(Self { width, height })
    }

    /// Height derived from `width` at this ratio.
    pub fn height_for(&self, width: f32) -> f32 {
        (width / self.width) * self.height
    }

    /// Width derived from `height` at this ratio.
    pub fn width_for(&self, height: f32) -> f32 {
        (height / self.height) * self.width
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| Error::BadRatio(s.to_string()))?;
        let width: f32 = w
            .trim()
            .parse()
            .map_err(|_| Error::BadRatio(s.to_string()))?;
        let height: f32 = h
            .trim()
            .parse()
            .map_err(|_| Error::BadRatio(s.to_string()))?;
        Self::new(width, height)
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

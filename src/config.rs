//! Session configuration: the knobs a host passes in at crop start.

use std::path::Path;

use anyhow::{Result, ensure};
use serde::Deserialize;

use crate::geometry::rect::AspectRatio;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SessionConfig {
    /// Width:height pair every resize preserves, e.g. "4:3".
    pub aspect_ratio: AspectRatio,
    /// Side length of the square corner hit regions, in display units.
    #[serde(default = "SessionConfig::default_corner_hit_size")]
    pub corner_hit_size: f32,
    /// Lower bound on the symmetric margin around the initial crop rect.
    #[serde(default = "SessionConfig::default_initial_margin")]
    pub initial_margin: f32,
    /// Minimum crop width in display units. Defaults to half the viewport
    /// width at session start.
    #[serde(default)]
    pub min_width: Option<f32>,
}

impl SessionConfig {
    const fn default_corner_hit_size() -> f32 {
        50.0
    }

    const fn default_initial_margin() -> f32 {
        32.0
    }

    pub fn with_ratio(aspect_ratio: AspectRatio) -> Self {
        Self {
            aspect_ratio,
            corner_hit_size: Self::default_corner_hit_size(),
            initial_margin: Self::default_initial_margin(),
            min_width: None,
        }
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde
    /// defaults alone. The aspect ratio is already validated by its own
    /// constructor.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            self.corner_hit_size > 0.0,
            "corner-hit-size must be positive"
        );
        ensure!(
            self.initial_margin >= 0.0,
            "initial-margin must not be negative"
        );
        if let Some(min_width) = self.min_width {
            ensure!(min_width > 0.0, "min-width must be positive");
        }
        Ok(self)
    }
}

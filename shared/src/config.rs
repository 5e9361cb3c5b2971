use serde::{Deserialize, Serialize};

use crate::colors::Rgb;
use crate::contrast::ContrastRule;
use crate::error::ConfigError;

pub const SPIN_DURATION_MS: u32 = 5000; // Duration of the visual spin
pub const SETTLE_BUFFER_MS: u32 = 1000; // Extra wait before the winner is announced
pub const EXTRA_REVOLUTIONS: u32 = 10;  // Full turns added per spin
pub const STROKE_COLOR: Rgb = Rgb::new(0x48, 0x5D, 0x6C);

/// Tunables for the wheel. Every field has a default, so a config file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub spin_duration_ms: u32,
    pub settle_buffer_ms: u32,
    pub extra_revolutions: u32,
    pub stroke_color: Rgb,
    pub stroke_width: f64,
    /// Room kept between the rim and the raster edge for the border stroke
    pub stroke_margin: f64,
    /// Distance from the hub at which label text starts
    pub label_margin: f64,
    /// Shift along the wedge's local Y axis to center text on the bisector
    pub label_baseline: f64,
    pub font_family: String,
    pub font_size_px: u32,
    pub fallback_font: String,
    pub neutral_fill: Rgb,
    pub contrast: ContrastRule,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            settle_buffer_ms: SETTLE_BUFFER_MS,
            extra_revolutions: EXTRA_REVOLUTIONS,
            stroke_color: STROKE_COLOR,
            stroke_width: 5.0,
            stroke_margin: 5.0,
            label_margin: 100.0,
            label_baseline: 7.0,
            font_family: "Lobster".to_string(),
            font_size_px: 30,
            fallback_font: "sans-serif".to_string(),
            neutral_fill: Rgb::WHITE,
            contrast: ContrastRule::Cmyk,
        }
    }
}

impl WheelConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extra_revolutions == 0 {
            return Err(ConfigError::Invalid("extra_revolutions must be at least 1"));
        }
        if self.spin_duration_ms == 0 {
            return Err(ConfigError::Invalid("spin_duration_ms must be positive"));
        }
        if !(self.stroke_width > 0.0) {
            return Err(ConfigError::Invalid("stroke_width must be positive"));
        }
        if self.stroke_margin < 0.0 || self.label_margin < 0.0 {
            return Err(ConfigError::Invalid("margins cannot be negative"));
        }
        if self.font_size_px == 0 {
            return Err(ConfigError::Invalid("font_size_px must be positive"));
        }
        Ok(())
    }

    /// Time from a spin request until its winner is emitted.
    pub fn settle_delay_ms(&self) -> u32 {
        self.spin_duration_ms.saturating_add(self.settle_buffer_ms)
    }
}

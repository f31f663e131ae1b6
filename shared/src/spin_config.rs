use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::ConfigError;
use crate::sector_map::COLOR_SECTORS;

pub const DEFAULT_JITTER_DEGREES: f64 = 10.0;
pub const DEFAULT_MIN_ROTATIONS: u32 = 6;
pub const DEFAULT_MAX_ROTATIONS: u32 = 8;
pub const DEFAULT_SAFETY_MARGIN: f64 = 5.0;
pub const DEFAULT_SPIN_DURATION_MS: u32 = 5000;

/// Presentation knobs for a spin. None of these can move the wheel onto the
/// wrong color: the safety margin clamp runs after the jitter is applied.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_spin_bounds"))]
pub struct SpinConfig {
    /// Random offset range around the sector center, in degrees either way.
    #[validate(range(min = 0.0, max = 45.0))]
    pub jitter_degrees: f64,
    #[validate(range(min = 1, max = 50))]
    pub min_rotations: u32,
    #[validate(range(min = 1, max = 50))]
    pub max_rotations: u32,
    /// Minimum distance between the resting angle and either sector boundary.
    #[validate(range(min = 1.0, max = 59.0))]
    pub safety_margin: f64,
    #[validate(range(min = 500, max = 20000))]
    pub spin_duration_ms: u32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            jitter_degrees: DEFAULT_JITTER_DEGREES,
            min_rotations: DEFAULT_MIN_ROTATIONS,
            max_rotations: DEFAULT_MAX_ROTATIONS,
            safety_margin: DEFAULT_SAFETY_MARGIN,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
        }
    }
}

impl SpinConfig {
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}

fn validate_spin_bounds(config: &SpinConfig) -> Result<(), ValidationError> {
    if config.min_rotations > config.max_rotations {
        return Err(ValidationError::new("min_rotations_above_max"));
    }

    let leaves_landing_band = COLOR_SECTORS
        .iter()
        .all(|sector| sector.start + config.safety_margin < sector.end - config.safety_margin);
    if !leaves_landing_band {
        return Err(ValidationError::new("safety_margin_too_wide"));
    }

    Ok(())
}

use thiserror::Error;

use crate::sector_map::WheelColor;

/// Errors raised while turning an authoritative outcome into a spin.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpinError {
    /// The outcome source sent a color index outside `0..=2`.
    #[error("invalid target color index {0}")]
    InvalidTargetColor(u8),

    #[error("unknown color name {0:?}")]
    UnknownColorName(String),

    /// The rotation arithmetic produced a result that contradicts its input.
    /// This is a logic defect, never a condition to recover from.
    #[error("spin invariant violated: {0}")]
    InvariantViolation(Violation),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("resting angle {resting_angle:.3} decodes to {decoded} instead of {target}")]
    ColorMismatch {
        target: WheelColor,
        decoded: WheelColor,
        resting_angle: f64,
    },

    #[error("rotation did not increase ({previous:.3} -> {next:.3})")]
    RotationNotIncreasing { previous: f64, next: f64 },

    #[error("css rotation {css_rotation:.3} rests at {actual:.6} but target is {expected:.6}")]
    RestingAngleDrift {
        css_rotation: f64,
        expected: f64,
        actual: f64,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid spin configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    #[error("bet amount {0:?} is not a valid ETH amount")]
    Malformed(String),

    #[error("bet must be at least {min} ETH")]
    BelowMinimum { min: String },

    #[error("bet must be between {min} and {max} ETH")]
    AboveMaximum { min: String, max: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a spin is already in progress")]
    SpinInFlight,

    #[error("no spin is in progress")]
    NoSpinInFlight,
}

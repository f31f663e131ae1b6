use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SpinError, Violation};
use crate::sector_map::{SectorMap, WheelColor};
use crate::spin_config::SpinConfig;

/// Largest gap tolerated between `css_rotation mod 360` and the resting angle
/// while the cumulative rotation is small.
pub const RESTING_ANGLE_TOLERANCE: f64 = 1e-6;

/// Tolerance for angles derived from a cumulative rotation of `rotation`
/// degrees. Grows with the rounding error of `f64` once the total gets large.
pub fn resting_angle_tolerance(rotation: f64) -> f64 {
    RESTING_ANGLE_TOLERANCE.max(rotation.abs() * f64::EPSILON * 8.0)
}

/// Where the wheel is between spins. Owned by the caller and only replaced by
/// folding in a [`SpinResult`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WheelState {
    /// Cumulative rotation fed to the rotation transform. Never wrapped.
    pub total_rotation: f64,
    /// `total_rotation` modulo 360, what the player actually sees.
    pub visual_position: f64,
    pub current_color: WheelColor,
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelState {
    pub fn new() -> Self {
        Self {
            total_rotation: 0.0,
            visual_position: 0.0,
            current_color: SectorMap::lookup(0.0),
        }
    }

    /// State the wheel settles into once the animation for `result` finishes.
    pub fn after_spin(result: &SpinResult) -> Self {
        Self {
            total_rotation: result.css_rotation,
            visual_position: result.resting_angle,
            current_color: result.decoded_color,
        }
    }

    pub fn apply(&mut self, result: &SpinResult) {
        *self = Self::after_spin(result);
    }

    pub fn is_consistent(&self) -> bool {
        self.current_color == SectorMap::lookup(self.visual_position)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinRequest {
    pub state: WheelState,
    pub target: WheelColor,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinResult {
    /// Rotation to animate to.
    pub css_rotation: f64,
    /// Final pointer angle in `[0, 360)`.
    pub resting_angle: f64,
    pub decoded_color: WheelColor,
    /// Full turns included in the spin, for pacing.
    pub rotation_count: u32,
    /// Offset applied around the sector center before clamping.
    pub jitter: f64,
}

/// Clockwise-only angular distance from `current` to `target`, in `(0, 360]`.
pub fn clockwise_delta(current: f64, target: f64) -> f64 {
    let mut delta = target - current;
    if delta <= 0.0 {
        delta += 360.0;
    }
    delta
}

/// Turns an authoritative color into a wheel rotation that lands on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinResolver {
    config: SpinConfig,
}

impl SpinResolver {
    /// Rejects configs whose rotation range is empty or whose safety margin
    /// leaves no landing band.
    pub fn new(config: SpinConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    pub fn resolve(&self, state: &WheelState, target: WheelColor) -> Result<SpinResult, SpinError> {
        self.resolve_with_rng(state, target, &mut rand::thread_rng())
    }

    pub fn resolve_request(&self, request: &SpinRequest) -> Result<SpinResult, SpinError> {
        self.resolve(&request.state, request.target)
    }

    /// Resolves a color index as encoded by the game contract.
    pub fn resolve_index(&self, state: &WheelState, color_index: u8) -> Result<SpinResult, SpinError> {
        let target = WheelColor::from_index(color_index).map_err(|e| {
            log::error!("Outcome source sent unknown color index {}", color_index);
            e
        })?;
        self.resolve(state, target)
    }

    pub fn resolve_with_rng<R: Rng + ?Sized>(
        &self,
        state: &WheelState,
        target: WheelColor,
        rng: &mut R,
    ) -> Result<SpinResult, SpinError> {
        let sector = SectorMap::sector_of(target);
        let nominal = sector.center();

        let jitter = if self.config.jitter_degrees > 0.0 {
            rng.gen_range(-self.config.jitter_degrees..=self.config.jitter_degrees)
        } else {
            0.0
        };
        let jittered = nominal + jitter;

        let margin = self.config.safety_margin;
        let resting_angle = jittered.clamp(sector.start + margin, sector.end - margin);
        if resting_angle != jittered {
            log::debug!(
                "Clamped target {:.1}° -> {:.1}° to stay inside {} [{}, {}]",
                jittered,
                resting_angle,
                target,
                sector.start,
                sector.end
            );
        }

        // Measured from the rendered orientation, `total_rotation mod 360`.
        let current = SectorMap::normalize(state.total_rotation);
        if angular_distance(current, state.visual_position) > resting_angle_tolerance(state.total_rotation) {
            log::warn!(
                "Wheel state out of sync: total {:.6}° shows {:.6}° but visual position is {:.6}°",
                state.total_rotation,
                current,
                state.visual_position
            );
        }
        let delta = clockwise_delta(current, resting_angle);
        let rotation_count = rng.gen_range(self.config.min_rotations..=self.config.max_rotations);
        let full_rotation_degrees = f64::from(rotation_count) * 360.0;
        let css_rotation = state.total_rotation + full_rotation_degrees + delta;

        log::debug!(
            "Spin from {:.1}° (total {:.1}°, {}) to {}: center {:.1}°, jitter {:+.1}°, delta {:.1}°, {} turns",
            current,
            state.total_rotation,
            state.current_color,
            target,
            nominal,
            jitter,
            delta,
            rotation_count
        );

        let result = SpinResult {
            css_rotation,
            resting_angle,
            decoded_color: SectorMap::lookup(resting_angle),
            rotation_count,
            jitter,
        };
        verify(state, target, &result)?;

        log::info!(
            "Spin resolved to {} at {:.1}° (css rotation {:.1}°)",
            result.decoded_color,
            result.resting_angle,
            result.css_rotation
        );
        Ok(result)
    }
}

/// Resolves with the default presentation settings.
pub fn resolve(state: &WheelState, target: WheelColor) -> Result<SpinResult, SpinError> {
    SpinResolver::default().resolve(state, target)
}

/// Checks the finished arithmetic against the request. A failure here means
/// the wheel would contradict the authoritative outcome.
fn verify(state: &WheelState, target: WheelColor, result: &SpinResult) -> Result<(), SpinError> {
    let violation = if result.decoded_color != target {
        Some(Violation::ColorMismatch {
            target,
            decoded: result.decoded_color,
            resting_angle: result.resting_angle,
        })
    } else if result.css_rotation.is_nan() || result.css_rotation <= state.total_rotation {
        Some(Violation::RotationNotIncreasing {
            previous: state.total_rotation,
            next: result.css_rotation,
        })
    } else {
        let actual = SectorMap::normalize(result.css_rotation);
        let expected = SectorMap::normalize(result.resting_angle);
        if angular_distance(actual, expected) > resting_angle_tolerance(result.css_rotation) {
            Some(Violation::RestingAngleDrift {
                css_rotation: result.css_rotation,
                expected,
                actual,
            })
        } else {
            None
        }
    };

    match violation {
        Some(violation) => {
            log::error!("🚨 Wheel would contradict the authoritative outcome: {}", violation);
            Err(SpinError::InvariantViolation(violation))
        }
        None => Ok(()),
    }
}

fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn margin_ok(result: &SpinResult) {
        let sector = SectorMap::sector_of(result.decoded_color);
        assert!(result.resting_angle >= sector.start + 5.0);
        assert!(result.resting_angle <= sector.end - 5.0);
    }

    #[test]
    fn test_new_state_is_consistent() {
        let state = WheelState::new();
        assert_eq!(state.total_rotation, 0.0);
        assert_eq!(state.current_color, WheelColor::Green);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_clockwise_delta_never_goes_backward() {
        assert_eq!(clockwise_delta(0.0, 180.0), 180.0);
        assert_eq!(clockwise_delta(300.0, 60.0), 120.0);
        assert_eq!(clockwise_delta(90.0, 90.0), 360.0);
    }

    #[test]
    fn test_spin_from_orange_to_pink() {
        let state = WheelState {
            total_rotation: 0.0,
            visual_position: 0.0,
            current_color: WheelColor::Orange,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let result = SpinResolver::default()
            .resolve_with_rng(&state, WheelColor::Pink, &mut rng)
            .unwrap();

        assert_eq!(result.decoded_color, WheelColor::Pink);
        assert!((126.0..=235.0).contains(&result.resting_angle));
        assert!((6..=8).contains(&result.rotation_count));
        let expected = f64::from(result.rotation_count) * 360.0 + result.resting_angle;
        assert!((result.css_rotation - expected).abs() < 1e-9);
    }

    #[test]
    fn test_jitter_stays_in_configured_range() {
        let resolver = SpinResolver::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let result = resolver
                .resolve_with_rng(&WheelState::new(), WheelColor::Orange, &mut rng)
                .unwrap();
            assert!(result.jitter.abs() <= 10.0);
            margin_ok(&result);
        }
    }

    #[test]
    fn test_clamp_pulls_wide_jitter_back_inside_sector() {
        let resolver = SpinResolver::new(SpinConfig {
            jitter_degrees: 45.0,
            safety_margin: 55.0,
            ..SpinConfig::default()
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let result = resolver
                .resolve_with_rng(&WheelState::new(), WheelColor::Green, &mut rng)
                .unwrap();
            assert!((55.0..=65.0).contains(&result.resting_angle));
        }
    }

    #[test]
    fn test_zero_jitter_lands_on_center() {
        let resolver = SpinResolver::new(SpinConfig {
            jitter_degrees: 0.0,
            ..SpinConfig::default()
        })
        .unwrap();
        let result = resolver.resolve(&WheelState::new(), WheelColor::Pink).unwrap();
        assert_eq!(result.jitter, 0.0);
        assert_eq!(result.resting_angle, 180.5);
    }

    #[test]
    fn test_fixed_rotation_count() {
        let resolver = SpinResolver::new(SpinConfig {
            min_rotations: 7,
            max_rotations: 7,
            ..SpinConfig::default()
        })
        .unwrap();
        let result = resolver.resolve(&WheelState::new(), WheelColor::Orange).unwrap();
        assert_eq!(result.rotation_count, 7);
    }

    #[test]
    fn test_inverted_rotation_range_is_rejected() {
        let result = SpinResolver::new(SpinConfig {
            min_rotations: 9,
            max_rotations: 6,
            ..SpinConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_margin_wider_than_sector_is_rejected() {
        let result = SpinResolver::new(SpinConfig {
            safety_margin: 70.0,
            ..SpinConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = SpinResolver::new(SpinConfig {
            safety_margin: 59.5,
            ..SpinConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_request_matches_resolve() {
        let request = SpinRequest {
            state: WheelState {
                total_rotation: 720.0 + 300.0,
                visual_position: 300.0,
                current_color: WheelColor::Orange,
            },
            target: WheelColor::Green,
        };
        let result = SpinResolver::default().resolve_request(&request).unwrap();
        assert_eq!(result.decoded_color, WheelColor::Green);
        assert!(result.css_rotation > request.state.total_rotation);
        let turned = result.css_rotation - request.state.total_rotation;
        assert!(turned >= 6.0 * 360.0 && turned <= 9.0 * 360.0);
    }

    #[test]
    fn test_huge_cumulative_rotation_still_verifies() {
        let total_rotation = 1.08e11;
        let visual_position = SectorMap::normalize(total_rotation);
        let state = WheelState {
            total_rotation,
            visual_position,
            current_color: SectorMap::lookup(visual_position),
        };
        let resolver = SpinResolver::default();
        let mut rng = StdRng::seed_from_u64(99);
        for target in WheelColor::ALL {
            let result = resolver.resolve_with_rng(&state, target, &mut rng).unwrap();
            assert_eq!(result.decoded_color, target);
            assert!(result.css_rotation > total_rotation);
        }
    }

    #[test]
    fn test_tolerance_scales_with_rotation() {
        assert_eq!(resting_angle_tolerance(0.0), RESTING_ANGLE_TOLERANCE);
        assert_eq!(resting_angle_tolerance(5000.0), RESTING_ANGLE_TOLERANCE);
        assert!(resting_angle_tolerance(1.08e11) > 1e-5);
    }

    #[test]
    fn test_invalid_color_index_is_an_error() {
        let err = SpinResolver::default()
            .resolve_index(&WheelState::new(), 5)
            .unwrap_err();
        assert_eq!(err, SpinError::InvalidTargetColor(5));
    }

    #[test]
    fn test_same_color_twice_still_spins_forward() {
        let resolver = SpinResolver::default();
        let mut rng = StdRng::seed_from_u64(21);
        let mut state = WheelState::new();
        for _ in 0..20 {
            let result = resolver
                .resolve_with_rng(&state, WheelColor::Green, &mut rng)
                .unwrap();
            assert!(result.css_rotation - state.total_rotation >= 6.0 * 360.0);
            state.apply(&result);
        }
    }

    #[test]
    fn test_verify_reports_color_mismatch() {
        let state = WheelState::new();
        let bogus = SpinResult {
            css_rotation: 2160.0 + 60.0,
            resting_angle: 60.0,
            decoded_color: WheelColor::Green,
            rotation_count: 6,
            jitter: 0.0,
        };
        let err = verify(&state, WheelColor::Pink, &bogus).unwrap_err();
        assert!(matches!(
            err,
            SpinError::InvariantViolation(Violation::ColorMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_reports_drift_and_backward_rotation() {
        let state = WheelState {
            total_rotation: 5000.0,
            visual_position: 320.0,
            current_color: WheelColor::Orange,
        };
        let drifted = SpinResult {
            css_rotation: 5000.0 + 2160.0 + 10.0,
            resting_angle: 60.0,
            decoded_color: WheelColor::Green,
            rotation_count: 6,
            jitter: 0.0,
        };
        assert!(matches!(
            verify(&state, WheelColor::Green, &drifted),
            Err(SpinError::InvariantViolation(Violation::RestingAngleDrift { .. }))
        ));

        let backward = SpinResult {
            css_rotation: 4980.0,
            ..drifted
        };
        assert!(matches!(
            verify(&state, WheelColor::Green, &backward),
            Err(SpinError::InvariantViolation(Violation::RotationNotIncreasing { .. }))
        ));
    }

    #[test]
    fn test_after_spin_folds_result() {
        let result = resolve(&WheelState::new(), WheelColor::Orange).unwrap();
        let state = WheelState::after_spin(&result);
        assert_eq!(state.total_rotation, result.css_rotation);
        assert_eq!(state.visual_position, result.resting_angle);
        assert_eq!(state.current_color, WheelColor::Orange);
        assert!(state.is_consistent());
    }
}

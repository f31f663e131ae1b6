use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::spin_resolver::resting_angle_tolerance;
use shared::{SectorMap, SpinConfig, SpinResolver, WheelColor, WheelState, COLOR_SECTORS};

fn any_color() -> impl Strategy<Value = WheelColor> {
    prop_oneof![
        Just(WheelColor::Orange),
        Just(WheelColor::Pink),
        Just(WheelColor::Green),
    ]
}

fn state_after(prior_turns: u32, visual_position: f64) -> WheelState {
    WheelState {
        total_rotation: f64::from(prior_turns) * 360.0 + visual_position,
        visual_position,
        current_color: SectorMap::lookup(visual_position),
    }
}

fn rests_at(css_rotation: f64, resting_angle: f64) -> bool {
    let diff = (SectorMap::normalize(css_rotation) - resting_angle).abs();
    diff.min(360.0 - diff) <= resting_angle_tolerance(css_rotation)
}

proptest! {
    #[test]
    fn lookup_agrees_with_owning_sector(angle in 0.0f64..360.0) {
        let color = SectorMap::lookup(angle);
        if let Some(owner) = COLOR_SECTORS.iter().find(|s| s.contains(angle)) {
            prop_assert_eq!(color, owner.color);
        }
    }

    #[test]
    fn resolved_spin_lands_on_target(
        prior_turns in 0u32..8000,
        visual_position in 0.0f64..360.0,
        target in any_color(),
        seed in any::<u64>(),
    ) {
        let state = state_after(prior_turns, visual_position);
        let mut rng = StdRng::seed_from_u64(seed);
        let result = SpinResolver::default()
            .resolve_with_rng(&state, target, &mut rng)
            .unwrap();

        prop_assert_eq!(result.decoded_color, target);
        prop_assert_eq!(SectorMap::lookup(result.resting_angle), target);
        prop_assert!(result.css_rotation > state.total_rotation);
        prop_assert!(rests_at(result.css_rotation, result.resting_angle));

        let sector = SectorMap::sector_of(target);
        prop_assert!(result.resting_angle >= sector.start + 5.0);
        prop_assert!(result.resting_angle - sector.start <= sector.width() - 5.0);

        let next = WheelState::after_spin(&result);
        prop_assert!(next.is_consistent());
    }

    #[test]
    fn custom_config_keeps_margin(
        jitter in 0.0f64..45.0,
        margin in 1.0f64..59.0,
        target in any_color(),
        seed in any::<u64>(),
    ) {
        let config = SpinConfig {
            jitter_degrees: jitter,
            safety_margin: margin,
            ..SpinConfig::default()
        };
        let resolver = SpinResolver::new(config);
        prop_assume!(resolver.is_ok());

        let mut rng = StdRng::seed_from_u64(seed);
        let result = resolver
            .unwrap()
            .resolve_with_rng(&WheelState::new(), target, &mut rng)
            .unwrap();
        let sector = SectorMap::sector_of(target);
        prop_assert!(result.resting_angle >= sector.start + margin);
        prop_assert!(result.resting_angle <= sector.end - margin);
    }
}

#[test]
fn orange_to_pink_lands_in_pink() {
    let state = WheelState {
        total_rotation: 0.0,
        visual_position: 0.0,
        current_color: WheelColor::Orange,
    };
    let result = SpinResolver::default().resolve(&state, WheelColor::Pink).unwrap();

    assert_eq!(result.decoded_color, WheelColor::Pink);
    assert!((126.0..=235.0).contains(&result.resting_angle));
    let delta = result.resting_angle;
    let expected = f64::from(result.rotation_count) * 360.0 + delta;
    assert!((result.css_rotation - expected).abs() < 1e-9);
}

#[test]
fn five_hundred_chained_spins_stay_in_sync() {
    let resolver = SpinResolver::default();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut state = WheelState::new();
    let targets = WheelColor::ALL;

    for spin in 0..500 {
        let target = targets[(spin * 7 + spin / 3) % targets.len()];
        let result = resolver.resolve_with_rng(&state, target, &mut rng).unwrap();

        assert_eq!(result.decoded_color, target, "spin {spin}");
        assert!(result.css_rotation > state.total_rotation, "spin {spin}");
        assert!(rests_at(result.css_rotation, result.resting_angle), "spin {spin}");

        state.apply(&result);
        assert!(state.is_consistent(), "spin {spin}");
    }

    assert!(state.total_rotation >= 500.0 * 6.0 * 360.0);
}

#[test]
fn long_session_does_not_drift() {
    let resolver = SpinResolver::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = WheelState::new();

    for spin in 0..5000 {
        let target = WheelColor::ALL[spin % 3];
        let result = resolver.resolve_with_rng(&state, target, &mut rng).unwrap();
        state.apply(&result);
    }

    let shown = SectorMap::normalize(state.total_rotation);
    assert!((shown - state.visual_position).abs() <= resting_angle_tolerance(state.total_rotation));
    assert_eq!(SectorMap::lookup(shown), state.current_color);
}

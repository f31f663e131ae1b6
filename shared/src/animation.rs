/// Decelerating curve for the wheel: fast start, gentle stop. `t` is clamped
/// to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Share of the animation completed after `elapsed_ms`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Rotation to draw `elapsed_ms` into a spin from `start` to `end`. Returns
/// exactly `end` once the duration has passed.
pub fn rotation_at(start: f64, end: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    let p = progress(elapsed_ms, duration_ms);
    if p >= 1.0 {
        return end;
    }
    start + (end - start) * ease_out_cubic(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_rotation_reaches_target_exactly() {
        let end = 2160.0 + 187.25;
        assert_eq!(rotation_at(0.0, end, 0.0, 5000.0), 0.0);
        assert_eq!(rotation_at(0.0, end, 5000.0, 5000.0), end);
        assert_eq!(rotation_at(0.0, end, 9000.0, 5000.0), end);
    }

    #[test]
    fn test_rotation_never_moves_backward() {
        let mut last = 100.0;
        for step in 0..=100 {
            let r = rotation_at(100.0, 3000.0, step as f64 * 50.0, 5000.0);
            assert!(r >= last);
            last = r;
        }
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        assert_eq!(rotation_at(10.0, 20.0, 0.0, 0.0), 20.0);
    }
}

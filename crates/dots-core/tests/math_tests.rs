// Host-side tests for the easing and interpolation helpers.

use dots_core::math::*;
use glam::Vec3;

#[test]
fn ease_endpoints_are_exact() {
    assert_eq!(ease_in_out_sine(0.0), 0.0);
    assert_eq!(ease_in_out_sine(1.0), 1.0);
    assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn ease_is_monotonic_and_symmetric() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let t = i as f32 / 100.0;
        let e = ease_in_out_sine(t);
        assert!(e >= prev, "ease decreased at t={t}");
        // symmetric about (0.5, 0.5)
        assert!((e + ease_in_out_sine(1.0 - t) - 1.0).abs() < 1e-5);
        prev = e;
    }
}

#[test]
fn ease_is_slow_at_the_ends() {
    let start = ease_in_out_sine(0.1) - ease_in_out_sine(0.0);
    let middle = ease_in_out_sine(0.55) - ease_in_out_sine(0.45);
    let end = ease_in_out_sine(1.0) - ease_in_out_sine(0.9);
    assert!(middle > start * 3.0);
    assert!(middle > end * 3.0);
}

#[test]
fn ease_clamps_out_of_range_input() {
    assert_eq!(ease_in_out_sine(-0.5), 0.0);
    assert_eq!(ease_in_out_sine(1.7), 1.0);
}

#[test]
fn lerp_hits_endpoints_and_extrapolates() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-1.0, 0.0, 5.0);
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
    assert!((lerp(a, b, 0.5) - Vec3::new(0.0, 1.0, 4.0)).length() < 1e-6);
    // t is not clamped
    assert!((lerp(a, b, 2.0) - Vec3::new(-3.0, -2.0, 7.0)).length() < 1e-6);
}

#[test]
fn clamp_bounds_values() {
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
}

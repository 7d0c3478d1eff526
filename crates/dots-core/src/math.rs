use glam::Vec3;
use std::f32::consts::PI;

#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

// Exact at both endpoints
#[inline]
pub fn ease_in_out_sine(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    (1.0 - (PI * t).cos()) * 0.5
}

#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

#[inline]
pub(crate) fn frac(x: f64) -> f64 {
    x - x.floor()
}

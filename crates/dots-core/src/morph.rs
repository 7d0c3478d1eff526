use crate::buffers::RenderBuffers;
use crate::constants::*;
use crate::field::ParticleField;
use crate::math::clamp;

// Toggling moves the target; lerp eases toward it by MORPH_EASE per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphControl {
    enabled: bool,
    lerp: f32,
}

impl Default for MorphControl {
    fn default() -> Self {
        Self {
            enabled: true,
            lerp: 1.0,
        }
    }
}

impl MorphControl {
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::info!("[morph] enabled={}", enabled);
        }
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) {
        self.set_enabled(!self.enabled);
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn lerp(&self) -> f32 {
        self.lerp
    }

    pub fn advance(&mut self) -> f32 {
        let target = if self.enabled { 1.0 } else { 0.0 };
        self.lerp += (target - self.lerp) * MORPH_EASE;
        self.lerp
    }
}

#[inline]
pub fn wave(time_ms: f64, theta: f32, phi: f32) -> f32 {
    let (theta, phi) = (theta as f64, phi as f64);
    let w1 = (time_ms * WAVE1_SPEED + theta * 5.0 + phi * 3.0).sin();
    let w2 = (time_ms * WAVE2_SPEED + theta * 3.0 - phi * 2.0).cos();
    ((w1 + w2) * 0.5) as f32
}

#[inline]
pub fn blink_color(time_ms: f64, index: usize) -> [f32; 3] {
    if (time_ms * BLINK_RATE + index as f64).sin() > 0.0 {
        DOT_BLUE
    } else {
        DOT_WHITE
    }
}

// y clamped so acos never sees rounding past the poles
#[inline]
pub fn spherical_angles(ux: f32, uy: f32, uz: f32) -> (f32, f32) {
    (clamp(uy, -1.0, 1.0).acos(), uz.atan2(ux))
}

// Wave from the undisplaced lattice position, spread offset added last.
pub fn evaluate(field: &ParticleField, time_ms: f64, morph: f32, buffers: &mut RenderBuffers) {
    if buffers.len() != field.count() {
        log::warn!(
            "[morph] buffers sized for {} dots, field has {}; rebuilding",
            buffers.len(),
            field.count()
        );
        *buffers = RenderBuffers::zeroed(field.count());
    }
    let radius = field.radius();
    let amplitude = WAVE_AMPLITUDE_FACTOR * radius;
    for (i, (original, offset)) in field
        .original_positions()
        .iter()
        .zip(field.spread_offsets())
        .enumerate()
    {
        let unit = *original / radius;
        let (theta, phi) = spherical_angles(unit.x, unit.y, unit.z);
        let wave_offset = wave(time_ms, theta, phi) * amplitude * morph;
        let position = unit * (radius + wave_offset) + *offset;
        buffers.write(i, position, blink_color(time_ms, i));
    }
    buffers.mark_dirty();
}

use crate::constants::*;
use crate::field::{ParticleField, Regime};
use crate::math::{clamp, ease_in_out_sine, lerp};
use glam::{Quat, Vec3};
use smallvec::SmallVec;

pub const PATH_SAMPLES: usize = PATH_STEPS + 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPath {
    pub previous: Vec3,
    pub current: Vec3,
    // logical px per frame
    pub speed: f32,
}

impl CursorPath {
    pub fn stationary(at: Vec3) -> Self {
        Self {
            previous: at,
            current: at,
            speed: 0.0,
        }
    }

    #[inline]
    pub fn force(&self) -> f32 {
        self.speed / FORCE_DIVISOR
    }

    fn samples(&self) -> SmallVec<[Vec3; PATH_SAMPLES]> {
        (0..PATH_SAMPLES)
            .map(|s| lerp(self.previous, self.current, s as f32 / PATH_STEPS as f32))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionReport {
    pub kicks_per_step: [u8; PATH_SAMPLES],
    pub touched: usize,
    // one point may snap at several samples
    pub snaps: usize,
    pub eases: usize,
}

impl InteractionReport {
    pub fn total_kicks(&self) -> usize {
        self.kicks_per_step.iter().map(|&k| k as usize).sum()
    }
}

// Zero below the knee, then a capped power law.
pub fn kick_magnitude(force: f32, radius: f32) -> f32 {
    let over = (force - KICK_FORCE_KNEE).max(0.0);
    clamp(KICK_GAIN * over.powf(KICK_EXPONENT), 0.0, KICK_MAX_FACTOR * radius)
}

pub struct Interaction {
    cursor_radius: f32,
    world: Vec<Vec3>,
    touched: Vec<bool>,
}

impl Interaction {
    pub fn new(field: &ParticleField) -> Self {
        Self {
            cursor_radius: CURSOR_RADIUS_FACTOR * field.radius(),
            world: vec![Vec3::ZERO; field.count()],
            touched: vec![false; field.count()],
        }
    }

    pub fn cursor_radius(&self) -> f32 {
        self.cursor_radius
    }

    pub fn update(
        &mut self,
        field: &mut ParticleField,
        rotation: Quat,
        path: Option<CursorPath>,
    ) -> InteractionReport {
        advance_regimes(field);

        let mut report = InteractionReport::default();
        self.touched.fill(false);
        if let Some(path) = path {
            self.sweep(field, rotation, &path, &mut report);
        }

        for (regime, touched) in field.regimes.iter_mut().zip(&self.touched) {
            if !touched && matches!(regime, Regime::Held { .. }) {
                *regime = Regime::AtRest;
            }
        }
        report.touched = self.touched.iter().filter(|t| **t).count();
        if report.total_kicks() > 0 {
            log::debug!(
                "[interaction] kicks={} touched={} speed={:.1}",
                report.total_kicks(),
                report.touched,
                path.map(|p| p.speed).unwrap_or(0.0)
            );
        }
        report
    }

    fn sweep(
        &mut self,
        field: &mut ParticleField,
        rotation: Quat,
        path: &CursorPath,
        report: &mut InteractionReport,
    ) {
        let radius = field.radius();
        let inv_rotation = rotation.inverse();
        for (w, p) in self.world.iter_mut().zip(field.original_positions()) {
            *w = rotation * *p;
        }

        let force = path.force();
        let wants_kick = force > KICK_FORCE_THRESHOLD;
        let soft_limit = self.cursor_radius + SOFT_BAND_WIDTH;

        for (step, cursor) in path.samples().into_iter().enumerate() {
            let mut kicks = 0u8;
            for i in 0..field.count() {
                if field.regimes[i].is_kicking() {
                    continue;
                }
                let to_point = self.world[i] - cursor;
                let dist = to_point.length();
                if dist >= soft_limit {
                    continue;
                }

                let original = field.original_position(i);
                let away = if dist > 1e-6 {
                    to_point / dist
                } else {
                    self.world[i].normalize_or_zero()
                };
                let boundary_world = cursor + away * self.cursor_radius;
                let boundary_offset = inv_rotation * boundary_world - original;

                if dist < self.cursor_radius {
                    if wants_kick && kicks < MAX_KICKS_PER_STEP {
                        kicks += 1;
                        let delta = original.normalize_or_zero() * kick_magnitude(force, radius);
                        field.regimes[i] = Regime::Kicking {
                            progress: 0.0,
                            start: boundary_offset,
                            delta,
                        };
                    } else {
                        report.snaps += 1;
                    }
                    field.offsets[i] = boundary_offset;
                } else {
                    field.offsets[i] = lerp(field.offsets[i], boundary_offset, SOFT_EASE);
                    field.regimes[i] = Regime::Held { timer: HOLD_TIME };
                    report.eases += 1;
                }
                self.touched[i] = true;
            }
            report.kicks_per_step[step] = kicks;
        }
    }
}

fn advance_regimes(field: &mut ParticleField) {
    for (offset, regime) in field.offsets.iter_mut().zip(field.regimes.iter_mut()) {
        match *regime {
            Regime::Kicking {
                progress,
                start,
                delta,
            } => {
                let progress = (progress + KICK_STEP).min(1.0);
                *offset = start + delta * ease_in_out_sine(progress);
                *regime = if progress >= 1.0 {
                    Regime::AtRest
                } else {
                    Regime::Kicking {
                        progress,
                        start,
                        delta,
                    }
                };
            }
            Regime::Held { timer } => {
                let timer = (timer - HOLD_STEP).max(0.0);
                *regime = if timer > 0.0 {
                    Regime::Held { timer }
                } else {
                    Regime::AtRest
                };
            }
            Regime::AtRest => {
                *offset = lerp(*offset, Vec3::ZERO, RETURN_RATE);
            }
        }
    }
}

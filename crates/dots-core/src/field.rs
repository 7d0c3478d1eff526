use crate::buffers::RenderBuffers;
use crate::config::{ConfigError, SphereConfig};
use crate::constants::{DOT_BLUE, GOLDEN_RATIO_FRACTION};
use crate::math::frac;
use glam::Vec3;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Regime {
    AtRest,
    Held { timer: f32 },
    // offset = start + delta * ease(progress)
    Kicking { progress: f32, start: Vec3, delta: Vec3 },
}

impl Regime {
    #[inline]
    pub fn is_kicking(&self) -> bool {
        matches!(self, Regime::Kicking { .. })
    }

    /// 1.0 unless a kick is in flight.
    #[inline]
    pub fn kick_progress(&self) -> f32 {
        match self {
            Regime::Kicking { progress, .. } => *progress,
            _ => 1.0,
        }
    }

    #[inline]
    pub fn return_timer(&self) -> f32 {
        match self {
            Regime::Held { timer } => *timer,
            _ => 0.0,
        }
    }
}

// A single-point lattice sits at the north pole.
pub fn fibonacci_point(index: usize, count: usize, radius: f32) -> Vec3 {
    let y = if count > 1 {
        1.0 - 2.0 * index as f64 / (count - 1) as f64
    } else {
        1.0
    };
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let theta = TAU * frac(index as f64 * GOLDEN_RATIO_FRACTION);
    let x = theta.cos() * ring;
    let z = theta.sin() * ring;
    Vec3::new(x as f32, y as f32, z as f32) * radius
}

pub struct ParticleField {
    radius: f32,
    original: Vec<Vec3>,
    pub(crate) offsets: Vec<Vec3>,
    pub(crate) regimes: Vec<Regime>,
}

impl ParticleField {
    pub fn new(config: SphereConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let SphereConfig { dot_count, radius } = config;
        let original = (0..dot_count)
            .map(|i| fibonacci_point(i, dot_count, radius))
            .collect::<Vec<_>>();
        log::info!("[field] dots={} radius={:.2}", dot_count, radius);
        Ok(Self {
            radius,
            original,
            offsets: vec![Vec3::ZERO; dot_count],
            regimes: vec![Regime::AtRest; dot_count],
        })
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.original.len()
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn original_positions(&self) -> &[Vec3] {
        &self.original
    }

    pub fn spread_offsets(&self) -> &[Vec3] {
        &self.offsets
    }

    pub fn regimes(&self) -> &[Regime] {
        &self.regimes
    }

    pub fn original_position(&self, index: usize) -> Vec3 {
        self.original[index]
    }

    pub fn spread_offset(&self, index: usize) -> Vec3 {
        self.offsets[index]
    }

    pub fn regime(&self, index: usize) -> Regime {
        self.regimes[index]
    }

    pub fn kick_progress(&self, index: usize) -> f32 {
        self.regimes[index].kick_progress()
    }

    pub fn return_timer(&self, index: usize) -> f32 {
        self.regimes[index].return_timer()
    }

    pub fn kick_start(&self, index: usize) -> Option<Vec3> {
        match self.regimes[index] {
            Regime::Kicking { start, .. } => Some(start),
            _ => None,
        }
    }

    pub fn kick_direction(&self, index: usize) -> Option<Vec3> {
        match self.regimes[index] {
            Regime::Kicking { delta, .. } => Some(delta),
            _ => None,
        }
    }

    // lattice + pointer offset, no wave
    pub fn displaced_position(&self, index: usize) -> Vec3 {
        self.original[index] + self.offsets[index]
    }

    pub fn geometry(&self) -> RenderBuffers {
        let mut buffers = RenderBuffers::zeroed(self.count());
        for (i, p) in self.original.iter().enumerate() {
            buffers.write(i, *p, DOT_BLUE);
        }
        buffers
    }
}

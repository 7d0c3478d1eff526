use crate::constants::{COMPACT_DOT_COUNT, DEFAULT_DOT_COUNT, DEFAULT_RADIUS};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereConfig {
    pub dot_count: usize,
    pub radius: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            dot_count: DEFAULT_DOT_COUNT,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl SphereConfig {
    pub fn compact() -> Self {
        Self {
            dot_count: COMPACT_DOT_COUNT,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dot_count == 0 {
            return Err(ConfigError::InvalidDotCount(self.dot_count));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("dot count must be at least 1, got {0}")]
    InvalidDotCount(usize),
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
}

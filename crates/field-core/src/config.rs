//! Field configuration as exposed to embedding pages.
//!
//! Every field is optional when deserialized; missing values fall back to
//! [`FieldConfig::default`]. Keys are camelCase so a page can pass a plain
//! JavaScript object.

use crate::color::Rgba;
use crate::constants::MAX_PARTICLE_COUNT;
use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Particle-particle connection threshold in surface units.
    pub connection_distance: f32,
    pub particle_color: Rgba,
    pub line_color: Rgba,
    pub pointer_line_color: Rgba,
    pub glow_color: Rgba,
    /// Upper bound added to the minimum radius when spawning.
    pub particle_size: f32,
    /// Width of the initial velocity range, per axis.
    pub speed: f32,
    /// Gates every pointer-driven effect: repulsion, pointer lines and glow.
    pub interactive: bool,
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            connection_distance: 100.0,
            particle_color: Rgba::WHITE,
            line_color: Rgba::WHITE,
            pointer_line_color: Rgba::rgb(138, 180, 255),
            glow_color: Rgba::rgb(138, 180, 255),
            particle_size: 2.0,
            speed: 0.5,
            interactive: true,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(FieldError::InvalidConfig {
                field: "particleCount",
                reason: format!("must be at most {MAX_PARTICLE_COUNT}, got {}", self.particle_count),
            });
        }
        if !self.connection_distance.is_finite() || self.connection_distance <= 0.0 {
            return Err(FieldError::InvalidConfig {
                field: "connectionDistance",
                reason: format!("must be positive, got {}", self.connection_distance),
            });
        }
        for (field, value) in [("particleSize", self.particle_size), ("speed", self.speed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FieldError::InvalidConfig {
                    field,
                    reason: format!("must be zero or positive, got {value}"),
                });
            }
        }
        Ok(())
    }

    pub fn pointer_reach(&self) -> f32 {
        self.connection_distance * crate::constants::POINTER_REACH_FACTOR
    }
}

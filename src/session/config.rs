use std::path::PathBuf;

use crate::{
    classify::velocity::{DEFAULT_MIN_VELOCITY, DEFAULT_VELOCITY_RANGE, VelocityClassifier},
    color::palette::DEFAULT_PALETTE_SIZE,
    foundation::error::{SnapError, SnapResult},
};

/// Immutable settings for one render session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    /// Visible world width, in world units.
    pub world_width: f64,
    /// Visible world height, in world units.
    pub world_height: f64,
    /// Particle marker radius, in world units. Visual size only.
    pub particle_radius: f64,
    /// Directory the rendered PNG is written to. Must already exist.
    pub output_dir: PathBuf,
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
    #[serde(default = "default_min_velocity")]
    pub min_velocity: f64,
    #[serde(default = "default_velocity_range")]
    pub velocity_range: f64,
}

fn default_palette_size() -> usize {
    DEFAULT_PALETTE_SIZE
}

fn default_min_velocity() -> f64 {
    DEFAULT_MIN_VELOCITY
}

fn default_velocity_range() -> f64 {
    DEFAULT_VELOCITY_RANGE
}

impl RenderConfig {
    /// Config with the default palette size and velocity window.
    pub fn new(
        world_width: f64,
        world_height: f64,
        particle_radius: f64,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            world_width,
            world_height,
            particle_radius,
            output_dir: output_dir.into(),
            palette_size: DEFAULT_PALETTE_SIZE,
            min_velocity: DEFAULT_MIN_VELOCITY,
            velocity_range: DEFAULT_VELOCITY_RANGE,
        }
    }

    pub fn validate(&self) -> SnapResult<()> {
        for (name, v) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("particle_radius", self.particle_radius),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(SnapError::invalid_config(format!(
                    "{name} must be finite and positive, got {v}"
                )));
            }
        }
        if self.palette_size == 0 {
            return Err(SnapError::invalid_config("palette_size must be >= 1"));
        }
        self.classifier().map(|_| ())
    }

    pub fn classifier(&self) -> SnapResult<VelocityClassifier> {
        VelocityClassifier::new(self.min_velocity, self.velocity_range)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;

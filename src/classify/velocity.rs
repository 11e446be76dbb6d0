use crate::foundation::error::{SnapError, SnapResult};

pub const DEFAULT_MIN_VELOCITY: f64 = 0.3;
pub const DEFAULT_VELOCITY_RANGE: f64 = 4.0;

// Scaled positions within this distance below a bucket boundary snap up to it, so decimal
// inputs such as 2.3 - 0.3 (= 1.9999999999999998) land in the bucket their value names.
const BOUNDARY_SNAP: f64 = 1e-9;

/// Linear velocity -> palette bucket mapping.
///
/// Velocities are expected in `[min_velocity, min_velocity + velocity_range]`. Anything outside
/// clamps to the first or last bucket instead of failing, so simulation outliers still render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityClassifier {
    min_velocity: f64,
    velocity_range: f64,
}

impl VelocityClassifier {
    pub fn new(min_velocity: f64, velocity_range: f64) -> SnapResult<Self> {
        if !min_velocity.is_finite() {
            return Err(SnapError::invalid_config("min_velocity must be finite"));
        }
        if velocity_range == 0.0 {
            return Err(SnapError::invalid_config("velocity_range must be non-zero"));
        }
        if !velocity_range.is_finite() || velocity_range < 0.0 {
            return Err(SnapError::invalid_config(
                "velocity_range must be finite and positive",
            ));
        }
        Ok(Self {
            min_velocity,
            velocity_range,
        })
    }

    pub fn min_velocity(&self) -> f64 {
        self.min_velocity
    }

    pub fn velocity_range(&self) -> f64 {
        self.velocity_range
    }

    /// Bucket index in `0..palette_size` for `velocity`.
    ///
    /// NaN velocities fall into bucket 0.
    pub fn classify(&self, velocity: f64, palette_size: usize) -> SnapResult<usize> {
        if palette_size == 0 {
            return Err(SnapError::invalid_config("palette size must be >= 1"));
        }
        let scaled = (velocity - self.min_velocity) / self.velocity_range * palette_size as f64;
        let bucket = (scaled + BOUNDARY_SNAP).floor();
        let last = palette_size - 1;
        if bucket.is_nan() || bucket <= 0.0 {
            Ok(0)
        } else if bucket >= last as f64 {
            Ok(last)
        } else {
            Ok(bucket as usize)
        }
    }
}

impl Default for VelocityClassifier {
    fn default() -> Self {
        Self {
            min_velocity: DEFAULT_MIN_VELOCITY,
            velocity_range: DEFAULT_VELOCITY_RANGE,
        }
    }
}

/// One-shot form of [`VelocityClassifier::classify`].
pub fn classify(
    velocity: f64,
    palette_size: usize,
    min_velocity: f64,
    velocity_range: f64,
) -> SnapResult<usize> {
    VelocityClassifier::new(min_velocity, velocity_range)?.classify(velocity, palette_size)
}

#[cfg(test)]
#[path = "../../tests/unit/classify/velocity.rs"]
mod tests;

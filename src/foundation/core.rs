use std::path::Path;

use crate::foundation::error::{SnapError, SnapResult};

pub use kurbo::Point;

/// Simulation time step identifier, taken from the frame file name.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameId(pub u64);

impl FrameId {
    /// Parse the identifier from a frame file's base name, e.g. `frames/00007.json` -> `7`.
    pub fn from_path(path: impl AsRef<Path>) -> SnapResult<Self> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                SnapError::invalid_input(format!(
                    "frame path '{}' has no usable file name",
                    path.display()
                ))
            })?;
        Self::parse(stem)
    }

    pub fn parse(stem: &str) -> SnapResult<Self> {
        stem.trim().parse::<u64>().map(Self).map_err(|e| {
            SnapError::invalid_input(format!(
                "frame name '{stem}' is not a non-negative integer: {e}"
            ))
        })
    }

    /// Output file name for this frame: the id zero-padded to 5 digits with a `.png` extension.
    pub fn png_file_name(self) -> String {
        format!("{:05}.png", self.0)
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Linear RGB color with each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `k`, saturating at 1.0.
    pub fn scaled(self, k: f64) -> Self {
        let s = |c: f64| (c * k).clamp(0.0, 1.0);
        Self::new(s(self.r), s(self.g), s(self.b))
    }

    /// Quantize to opaque RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

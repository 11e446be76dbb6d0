use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{FrameId, Point},
    error::{SnapError, SnapResult},
};

/// Decoded particle state for one simulation time step.
///
/// Positions are stored flattened (`[x0, y0, x1, y1, ...]`) and are read back per particle
/// through [`Frame::position`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub frame_id: FrameId,
    positions: Vec<f64>,
    velocities: Vec<f64>,
}

impl Frame {
    /// Build a frame from already flattened positions.
    pub fn new(frame_id: FrameId, positions: Vec<f64>, velocities: Vec<f64>) -> SnapResult<Self> {
        if positions.len() != velocities.len() * 2 {
            return Err(SnapError::decode(format!(
                "positions hold {} coordinates but there are {} velocity magnitudes",
                positions.len(),
                velocities.len()
            )));
        }
        Ok(Self {
            frame_id,
            positions,
            velocities,
        })
    }

    /// Read and decode a frame file; the frame id comes from the file's base name.
    pub fn from_path(path: impl AsRef<Path>) -> SnapResult<Self> {
        let path = path.as_ref();
        let frame_id = FrameId::from_path(path)?;
        let bytes = std::fs::read(path)
            .with_context(|| format!("read frame file '{}'", path.display()))?;
        decode_frame(&bytes, frame_id)
    }

    pub fn particle_count(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    /// World-space position of particle `idx`.
    pub fn position(&self, idx: usize) -> Option<Point> {
        let x = *self.positions.get(2 * idx)?;
        let y = *self.positions.get(2 * idx + 1)?;
        Some(Point::new(x, y))
    }

    pub fn velocity(&self, idx: usize) -> Option<f64> {
        self.velocities.get(idx).copied()
    }

    pub fn positions_flat(&self) -> &[f64] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    /// `(position, velocity)` per particle, in input order.
    pub fn particles(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.positions
            .chunks_exact(2)
            .zip(&self.velocities)
            .map(|(xy, &v)| (Point::new(xy[0], xy[1]), v))
    }
}

#[derive(serde::Deserialize)]
struct FrameDoc {
    positions: Vec<PositionDoc>,
    velocity_magnitudes: Vec<f64>,
}

#[derive(serde::Deserialize)]
struct PositionDoc {
    x: f64,
    y: f64,
}

/// Decode one frame's JSON document.
///
/// Expects `positions` (objects with numeric `x` and `y`) and `velocity_magnitudes` (numbers),
/// index-aligned by particle. Unknown fields are ignored.
pub fn decode_frame(bytes: &[u8], frame_id: FrameId) -> SnapResult<Frame> {
    let doc: FrameDoc = serde_json::from_slice(bytes)
        .map_err(|e| SnapError::decode(format!("frame {frame_id}: {e}")))?;

    if doc.positions.len() != doc.velocity_magnitudes.len() {
        return Err(SnapError::decode(format!(
            "frame {frame_id}: {} positions but {} velocity magnitudes",
            doc.positions.len(),
            doc.velocity_magnitudes.len()
        )));
    }

    let positions = doc.positions.iter().flat_map(|p| [p.x, p.y]).collect();
    Frame::new(frame_id, positions, doc.velocity_magnitudes)
}

#[cfg(test)]
#[path = "../../tests/unit/frame/decode.rs"]
mod tests;

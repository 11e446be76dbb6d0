use std::path::{Path, PathBuf};

use crate::{
    foundation::{core::FrameId, error::SnapResult},
    frame::decode::Frame,
    render::engine::RenderEngine,
    session::{config::RenderConfig, render_session::RenderSession},
};

/// Summary of a completed one-shot render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFrame {
    pub frame_id: FrameId,
    pub particle_count: usize,
    /// Palette index assigned to each particle, in input order.
    pub palette_indices: Vec<usize>,
    pub output_path: PathBuf,
}

/// Decode one frame file and render it to `config.output_dir/<frame_id:05>.png`.
///
/// The entity pool is sized from the frame itself. Any error aborts before the image is
/// written.
#[tracing::instrument(skip_all, fields(input = %input.display()))]
pub fn render_frame_file<E: RenderEngine>(
    input: &Path,
    config: &RenderConfig,
    engine: E,
) -> SnapResult<RenderedFrame> {
    let frame = Frame::from_path(input)?;
    tracing::debug!(
        frame_id = %frame.frame_id,
        particles = frame.particle_count(),
        "frame decoded"
    );
    if frame.is_empty() {
        tracing::warn!(frame_id = %frame.frame_id, "frame has no particles");
    }

    let mut session = RenderSession::new(engine, config.clone())?;
    session.initialize()?;
    session.prepare_entities(frame.particle_count())?;
    let palette_indices = session.apply_frame(&frame)?;
    let output_path = session.raster(frame.frame_id)?;

    Ok(RenderedFrame {
        frame_id: frame.frame_id,
        particle_count: frame.particle_count(),
        palette_indices,
        output_path,
    })
}

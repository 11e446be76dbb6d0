use std::path::PathBuf;

use crate::{
    classify::velocity::VelocityClassifier,
    color::palette::Palette,
    foundation::{
        core::FrameId,
        error::{SnapError, SnapResult},
    },
    frame::decode::Frame,
    render::engine::{EntityHandle, RenderEngine, StyleHandle, WorldDesc},
    session::config::RenderConfig,
};

/// Where a [`RenderSession`] is in its lifecycle.
///
/// `Uninitialized -> SceneReady -> EntitiesReady -> FrameApplied -> Rastered`, after which
/// further frames loop through `FrameApplied -> Rastered` on the same entity pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    SceneReady,
    EntitiesReady,
    FrameApplied,
    Rastered,
}

/// Drives a [`RenderEngine`] through one or more velocity-colored particle frames.
///
/// The session owns its engine, the palette and the handles of the entity pool. The pool size is
/// fixed when it is prepared and changes only through [`RenderSession::resize_entities`].
pub struct RenderSession<E: RenderEngine> {
    engine: E,
    config: RenderConfig,
    classifier: VelocityClassifier,
    state: SessionState,
    applied: Option<FrameId>,
    palette: Option<Palette>,
    styles: Vec<StyleHandle>,
    entities: Vec<EntityHandle>,
}

impl<E: RenderEngine> RenderSession<E> {
    /// Validate `config` and wrap `engine`. No engine calls are made yet.
    pub fn new(engine: E, config: RenderConfig) -> SnapResult<Self> {
        config.validate()?;
        let classifier = config.classifier()?;
        Ok(Self {
            engine,
            config,
            classifier,
            state: SessionState::Uninitialized,
            applied: None,
            palette: None,
            styles: Vec::new(),
            entities: Vec::new(),
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The frame currently held by the engine, if one was fully applied.
    pub fn applied_frame(&self) -> Option<FrameId> {
        self.applied
    }

    /// The session palette, once [`RenderSession::initialize`] has built it.
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entity_handles(&self) -> &[EntityHandle] {
        &self.entities
    }

    pub fn style_handles(&self) -> &[StyleHandle] {
        &self.styles
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Set up world framing and register the palette styles with the engine.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&mut self) -> SnapResult<()> {
        self.expect_state("initialize", &[SessionState::Uninitialized])?;

        self.engine.create_world(&WorldDesc {
            width: self.config.world_width,
            height: self.config.world_height,
        })?;

        let palette = Palette::build(self.config.palette_size)?;
        let styles = self.engine.create_styles(&palette)?;
        if styles.len() != palette.len() {
            return Err(SnapError::Other(anyhow::anyhow!(
                "engine registered {} styles for a palette of {}",
                styles.len(),
                palette.len()
            )));
        }
        tracing::debug!(palette_size = palette.len(), "scene ready");

        self.palette = Some(palette);
        self.styles = styles;
        self.state = SessionState::SceneReady;
        Ok(())
    }

    /// Create the entity pool: `count` markers of the configured radius, all in style 0.
    #[tracing::instrument(skip(self))]
    pub fn prepare_entities(&mut self, count: usize) -> SnapResult<()> {
        self.expect_state("prepare_entities", &[SessionState::SceneReady])?;
        self.entities = self.create_styled_entities(count)?;
        self.state = SessionState::EntitiesReady;
        Ok(())
    }

    /// Change the pool size between frames.
    ///
    /// The first `min(old, new)` entities are kept as they are, surplus entities are destroyed
    /// from the end of the pool, and missing ones are appended in style 0.
    #[tracing::instrument(skip(self))]
    pub fn resize_entities(&mut self, count: usize) -> SnapResult<()> {
        self.expect_state(
            "resize_entities",
            &[
                SessionState::EntitiesReady,
                SessionState::FrameApplied,
                SessionState::Rastered,
            ],
        )?;

        let current = self.entities.len();
        if count < current {
            for handle in self.entities.drain(count..).rev() {
                self.engine.destroy_entity(handle)?;
            }
        } else if count > current {
            let extra = self.create_styled_entities(count - current)?;
            self.entities.extend(extra);
        }
        tracing::debug!(from = current, to = count, "entity pool resized");

        self.state = SessionState::EntitiesReady;
        self.applied = None;
        Ok(())
    }

    /// Position every entity at its particle and style it by velocity bucket.
    ///
    /// Returns the palette index chosen for each particle. Applying the same frame twice leaves
    /// the engine in the same state. If an engine call fails partway, the session drops back to
    /// `EntitiesReady` and nothing can be rastered until a frame is applied in full.
    #[tracing::instrument(skip(self, frame), fields(frame_id = %frame.frame_id))]
    pub fn apply_frame(&mut self, frame: &Frame) -> SnapResult<Vec<usize>> {
        self.expect_state(
            "apply_frame",
            &[
                SessionState::EntitiesReady,
                SessionState::FrameApplied,
                SessionState::Rastered,
            ],
        )?;

        if frame.particle_count() != self.entities.len() {
            return Err(SnapError::frame_mismatch(format!(
                "frame {} has {} particles but the entity pool holds {}",
                frame.frame_id,
                frame.particle_count(),
                self.entities.len()
            )));
        }

        let palette_size = self.styles.len();
        let indices = frame
            .velocities()
            .iter()
            .map(|&v| self.classifier.classify(v, palette_size))
            .collect::<SnapResult<Vec<_>>>()?;

        self.state = SessionState::EntitiesReady;
        self.applied = None;
        for ((&entity, (pos, _)), &idx) in self.entities.iter().zip(frame.particles()).zip(&indices)
        {
            self.engine.set_entity_position(entity, pos.x, pos.y, 0.0)?;
            self.engine.set_entity_style(entity, self.styles[idx])?;
        }
        tracing::debug!(particles = indices.len(), "frame applied");

        self.state = SessionState::FrameApplied;
        self.applied = Some(frame.frame_id);
        Ok(indices)
    }

    /// Write the current scene to `output_dir/<frame_id:05>.png` and return that path.
    ///
    /// `frame_id` must name the frame last passed to [`RenderSession::apply_frame`].
    #[tracing::instrument(skip(self))]
    pub fn raster(&mut self, frame_id: FrameId) -> SnapResult<PathBuf> {
        self.expect_state("raster", &[SessionState::FrameApplied])?;
        if self.applied != Some(frame_id) {
            return Err(SnapError::lifecycle(format!(
                "raster of frame {frame_id} but the applied frame is {:?}",
                self.applied
            )));
        }

        let path = self.config.output_dir.join(frame_id.png_file_name());
        self.engine.raster_still(&path)?;
        tracing::info!(path = %path.display(), "frame rastered");

        self.state = SessionState::Rastered;
        Ok(path)
    }

    fn create_styled_entities(&mut self, count: usize) -> SnapResult<Vec<EntityHandle>> {
        let base_style = *self
            .styles
            .first()
            .ok_or_else(|| SnapError::lifecycle("no styles registered"))?;
        let handles = self
            .engine
            .create_entities(count, self.config.particle_radius)?;
        if handles.len() != count {
            return Err(SnapError::Other(anyhow::anyhow!(
                "engine created {} entities, expected {count}",
                handles.len()
            )));
        }
        for &h in &handles {
            self.engine.set_entity_style(h, base_style)?;
        }
        Ok(handles)
    }

    fn expect_state(&self, op: &str, allowed: &[SessionState]) -> SnapResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(SnapError::lifecycle(format!(
                "{op} is not valid in state {:?}",
                self.state
            )))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;

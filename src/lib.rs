//! fluidsnap renders one velocity-colored still image per frame of a 2D particle fluid.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: frame JSON -> [`Frame`] (flattened positions + velocity magnitudes)
//! 2. **Palette**: turbo colormap sampled into a fixed [`Palette`] of discrete styles
//! 3. **Classify**: each velocity -> palette bucket via [`VelocityClassifier`]
//! 4. **Apply**: a [`RenderSession`] positions and styles one engine entity per particle
//! 5. **Raster**: the [`RenderEngine`] writes `<frame_id:05>.png`
//!
//! The engine is injected. [`CpuEngine`] is the built-in `vello_cpu` implementation; anything
//! implementing [`RenderEngine`] can replace it.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No global scene state**: the session holds only the handles the engine gave it.
//! - **All or nothing**: an image is written only after every particle was assigned.
#![forbid(unsafe_code)]

mod classify;
mod color;
mod foundation;
mod frame;
mod pipeline;
mod render;
mod session;

pub use classify::velocity::{
    DEFAULT_MIN_VELOCITY, DEFAULT_VELOCITY_RANGE, VelocityClassifier, classify,
};
pub use color::colormap::turbo;
pub use color::palette::{DEFAULT_PALETTE_SIZE, Palette};
pub use foundation::core::{FrameId, Point, Rgb};
pub use foundation::error::{SnapError, SnapResult};
pub use frame::decode::{Frame, decode_frame};
pub use pipeline::{RenderedFrame, render_frame_file};
pub use render::cpu::{CpuEngine, CpuEngineOpts, FrameRGBA};
pub use render::engine::{EntityHandle, RenderEngine, StyleHandle, WorldDesc};
pub use session::config::RenderConfig;
pub use session::render_session::{RenderSession, SessionState};

use std::path::Path;

use crate::{color::palette::Palette, foundation::error::SnapResult};

/// Engine-owned handle to one renderable particle marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityHandle(pub u32);

/// Engine-owned handle to one registered visual style (a palette entry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleHandle(pub u32);

/// World framing requested from the engine.
///
/// The camera looks straight down the z axis at the origin and frames exactly
/// `width x height` world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldDesc {
    pub width: f64,
    pub height: f64,
}

/// Capabilities the render session needs from a host rendering engine.
///
/// The engine owns the scene; the session only keeps the handles it was given. Any engine that
/// implements this trait can stand in for the built-in [`crate::CpuEngine`].
pub trait RenderEngine {
    /// Set up camera, background and lighting for a world of the given size.
    fn create_world(&mut self, world: &WorldDesc) -> SnapResult<()>;

    /// Register one style per palette entry, returned in palette order.
    fn create_styles(&mut self, palette: &Palette) -> SnapResult<Vec<StyleHandle>>;

    /// Create `count` identical point-like markers of the given world-space radius.
    fn create_entities(&mut self, count: usize, radius: f64) -> SnapResult<Vec<EntityHandle>>;

    fn set_entity_position(
        &mut self,
        entity: EntityHandle,
        x: f64,
        y: f64,
        z: f64,
    ) -> SnapResult<()>;

    fn set_entity_style(&mut self, entity: EntityHandle, style: StyleHandle) -> SnapResult<()>;

    /// Remove a marker from the scene. Its handle must not be used afterwards.
    fn destroy_entity(&mut self, entity: EntityHandle) -> SnapResult<()>;

    /// Rasterize the current scene and write one still image to `path`.
    fn raster_still(&mut self, path: &Path) -> SnapResult<()>;
}

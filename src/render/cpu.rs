use std::path::Path;

use anyhow::Context as _;
use vello_cpu::kurbo::Shape as _;

use crate::{
    color::palette::Palette,
    foundation::{
        core::Rgb,
        error::{SnapError, SnapResult},
    },
    render::engine::{EntityHandle, RenderEngine, StyleHandle, WorldDesc},
};

/// A rendered still as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, top row first.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Options for the built-in CPU engine.
#[derive(Clone, Debug, PartialEq)]
pub struct CpuEngineOpts {
    /// Output pixels per world unit along both axes.
    pub pixels_per_unit: f64,
    /// Straight-alpha background color.
    pub background_rgba: [u8; 4],
    /// Multiplier applied to every style color before quantization, saturating at 1.0.
    ///
    /// Defaults to 1.0, not the 1.5 emission strength of the Blender renderer, so particles
    /// keep the exact palette colors. Set 1.5 for the brighter look.
    pub emission_strength: f64,
    /// Maximum deviation, in pixels, when flattening particle discs into paths.
    pub circle_tolerance_px: f64,
}

impl Default for CpuEngineOpts {
    fn default() -> Self {
        Self {
            pixels_per_unit: 100.0,
            background_rgba: [0, 0, 0, 255],
            emission_strength: 1.0,
            circle_tolerance_px: 0.1,
        }
    }
}

struct CpuWorld {
    width_px: u16,
    height_px: u16,
    // World units -> pixels, y up, origin at the image center.
    to_pixels: vello_cpu::kurbo::Affine,
}

#[derive(Clone, Copy, Debug)]
struct CpuEntity {
    center: vello_cpu::kurbo::Point,
    radius: f64,
    style: StyleHandle,
}

/// [`RenderEngine`] that rasterizes particles as flat filled discs with `vello_cpu`.
///
/// The camera is orthographic and top-down, so the z coordinate of an entity is ignored and
/// later entities draw over earlier ones.
pub struct CpuEngine {
    opts: CpuEngineOpts,
    world: Option<CpuWorld>,
    styles: Vec<[u8; 4]>,
    entities: Vec<Option<CpuEntity>>,
}

impl CpuEngine {
    pub fn new(opts: CpuEngineOpts) -> Self {
        Self {
            opts,
            world: None,
            styles: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Number of live entities in the scene.
    pub fn entity_count(&self) -> usize {
        self.entities.iter().flatten().count()
    }

    /// Rasterize the current scene into memory. Pixels are premultiplied.
    pub fn render_rgba8(&self) -> SnapResult<FrameRGBA> {
        let world = self
            .world
            .as_ref()
            .ok_or_else(|| SnapError::lifecycle("cpu engine: raster before create_world"))?;

        let mut ctx = vello_cpu::RenderContext::new(world.width_px, world.height_px);

        let [r, g, b, a] = self.opts.background_rgba;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(world.width_px),
            f64::from(world.height_px),
        ));

        ctx.set_transform(world.to_pixels);
        let tolerance = self.opts.circle_tolerance_px / self.opts.pixels_per_unit;
        for entity in self.entities.iter().flatten() {
            let [r, g, b, a] = self.style_rgba(entity.style)?;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            let disc = vello_cpu::kurbo::Circle::new(entity.center, entity.radius);
            ctx.fill_path(&disc.to_path(tolerance));
        }

        let mut pixmap = vello_cpu::Pixmap::new(world.width_px, world.height_px);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(world.width_px),
            height: u32::from(world.height_px),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn style_rgba(&self, style: StyleHandle) -> SnapResult<[u8; 4]> {
        self.styles
            .get(style.0 as usize)
            .copied()
            .ok_or_else(|| SnapError::lifecycle(format!("cpu engine: unknown style {style:?}")))
    }

    fn entity_mut(&mut self, entity: EntityHandle) -> SnapResult<&mut CpuEntity> {
        self.entities
            .get_mut(entity.0 as usize)
            .and_then(Option::as_mut)
            .ok_or_else(|| SnapError::lifecycle(format!("cpu engine: unknown entity {entity:?}")))
    }
}

impl Default for CpuEngine {
    fn default() -> Self {
        Self::new(CpuEngineOpts::default())
    }
}

impl RenderEngine for CpuEngine {
    fn create_world(&mut self, world: &WorldDesc) -> SnapResult<()> {
        let ppu = self.opts.pixels_per_unit;
        if !(ppu.is_finite() && ppu > 0.0) {
            return Err(SnapError::invalid_config(
                "pixels_per_unit must be finite and positive",
            ));
        }
        let width_px = pixel_extent(world.width, ppu, "width")?;
        let height_px = pixel_extent(world.height, ppu, "height")?;

        let half_w = f64::from(width_px) / 2.0;
        let half_h = f64::from(height_px) / 2.0;
        self.world = Some(CpuWorld {
            width_px,
            height_px,
            to_pixels: vello_cpu::kurbo::Affine::new([ppu, 0.0, 0.0, -ppu, half_w, half_h]),
        });
        tracing::debug!(width_px, height_px, "cpu engine world ready");
        Ok(())
    }

    fn create_styles(&mut self, palette: &Palette) -> SnapResult<Vec<StyleHandle>> {
        let emission = self.opts.emission_strength;
        let mut handles = Vec::with_capacity(palette.len());
        for color in palette.iter() {
            let id = u32::try_from(self.styles.len())
                .map_err(|_| SnapError::invalid_config("too many styles"))?;
            self.styles.push(emissive_rgba8(color, emission));
            handles.push(StyleHandle(id));
        }
        Ok(handles)
    }

    fn create_entities(&mut self, count: usize, radius: f64) -> SnapResult<Vec<EntityHandle>> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let id = u32::try_from(self.entities.len())
                .map_err(|_| SnapError::invalid_config("too many entities"))?;
            self.entities.push(Some(CpuEntity {
                center: vello_cpu::kurbo::Point::ZERO,
                radius,
                style: StyleHandle(0),
            }));
            handles.push(EntityHandle(id));
        }
        Ok(handles)
    }

    fn set_entity_position(
        &mut self,
        entity: EntityHandle,
        x: f64,
        y: f64,
        _z: f64,
    ) -> SnapResult<()> {
        self.entity_mut(entity)?.center = vello_cpu::kurbo::Point::new(x, y);
        Ok(())
    }

    fn set_entity_style(&mut self, entity: EntityHandle, style: StyleHandle) -> SnapResult<()> {
        self.style_rgba(style)?;
        self.entity_mut(entity)?.style = style;
        Ok(())
    }

    fn destroy_entity(&mut self, entity: EntityHandle) -> SnapResult<()> {
        let slot = self
            .entities
            .get_mut(entity.0 as usize)
            .filter(|e| e.is_some())
            .ok_or_else(|| SnapError::lifecycle(format!("cpu engine: unknown entity {entity:?}")))?;
        *slot = None;
        Ok(())
    }

    fn raster_still(&mut self, path: &Path) -> SnapResult<()> {
        let mut frame = self.render_rgba8()?;
        if frame.premultiplied {
            unpremultiply_rgba8_in_place(&mut frame.data);
        }

        image::save_buffer_with_format(
            path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn pixel_extent(world_units: f64, ppu: f64, axis: &str) -> SnapResult<u16> {
    // Truncates, so 19.2 world units at 100 px/unit is 1920 px.
    let px = world_units * ppu;
    if !(1.0..=f64::from(u16::MAX)).contains(&px) {
        return Err(SnapError::invalid_config(format!(
            "world {axis} of {world_units} units gives {px} px; expected 1..={}",
            u16::MAX
        )));
    }
    Ok(px as u16)
}

fn emissive_rgba8(color: Rgb, strength: f64) -> [u8; 4] {
    color.scaled(strength).to_rgba8()
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

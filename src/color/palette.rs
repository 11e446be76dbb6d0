use crate::{
    color::colormap::turbo,
    foundation::{
        core::Rgb,
        error::{SnapError, SnapResult},
    },
};

/// Palette size used when the config does not override it.
pub const DEFAULT_PALETTE_SIZE: usize = 20;

/// Fixed-length, ordered set of discrete colors sampled from the turbo ramp.
///
/// Built once per render session; entry `i` is the style every particle in velocity bucket `i`
/// is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<Rgb>,
}

impl Palette {
    /// Sample the colormap at `n` evenly spaced points in `[0, 1]`, both ends included.
    ///
    /// A single-entry palette holds the low end of the ramp.
    pub fn build(n: usize) -> SnapResult<Self> {
        if n == 0 {
            return Err(SnapError::invalid_config("palette size must be >= 1"));
        }
        Ok(Self { entries: sample(n) })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A built palette is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.entries.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: sample(DEFAULT_PALETTE_SIZE),
        }
    }
}

fn sample(n: usize) -> Vec<Rgb> {
    if n <= 1 {
        return vec![turbo(0.0)];
    }
    let last = (n - 1) as f64;
    (0..n).map(|i| turbo(i as f64 / last)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;

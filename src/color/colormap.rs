//! Turbo colormap as a closed-form polynomial fit.
//!
//! Each channel is a degree-5 polynomial in `t`; the fit overshoots `[0, 1]` near the ends of
//! the ramp, so both the input and every output channel are clamped.

use crate::foundation::core::Rgb;

// c0..c5, lowest degree first.
const RED: [f64; 6] = [
    0.13572138,
    4.6153926,
    -42.66032258,
    132.13108234,
    -152.94239396,
    59.28637943,
];
const GREEN: [f64; 6] = [
    0.09140261,
    2.19418839,
    4.84296658,
    -14.18503333,
    4.27729857,
    2.82956604,
];
const BLUE: [f64; 6] = [
    0.1066733,
    12.64194608,
    -60.58204836,
    110.36276771,
    -89.90310912,
    27.34824973,
];

/// Map a normalized scalar to the turbo ramp (blue -> green -> yellow -> red).
///
/// `t` is clamped to `[0, 1]` first; NaN maps to the low end of the ramp.
pub fn turbo(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    Rgb::new(channel(&RED, t), channel(&GREEN, t), channel(&BLUE, t))
}

fn channel(coeffs: &[f64; 6], t: f64) -> f64 {
    coeffs
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * t + c)
        .clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/color/colormap.rs"]
mod tests;

//! RGB ↔ HSV helpers and the per-color operations built on them.
//!
//! Channels move between the 8-bit and the unit scale with a factor of
//! `256.0`, not `255.0`. Going down divides, going up multiplies and
//! truncates. Every 8-bit value maps to an exact binary fraction, and the
//! brightness band (`min_v`, `max_v`) uses the same scale as the pixels.

use palette::convert::FromColorUnclamped;
use palette::{Hsv, RgbHue, Srgb};

use crate::error::{ColorzError, Result};

/// Factor between 8-bit channels and the unit interval.
pub const SCALE: f32 = 256.0;

#[inline]
pub fn down_scale(x: f32) -> f32 {
    x / SCALE
}

/// Scale a unit value back to a channel, truncating and saturating into `0..=255`.
#[inline]
pub fn up_scale(x: f32) -> u8 {
    (x * SCALE).trunc().clamp(0.0, 255.0) as u8
}

/// Convert unit-scale RGB into `(hue, saturation, value)`, each in `[0, 1]`.
///
/// The hue is a fraction of a full turn, wrapped into `[0, 1)`. Grays get a
/// hue of `0`.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let hsv: Hsv = Hsv::from_color_unclamped(Srgb::new(r, g, b));
    let hue = (hsv.hue.into_positive_degrees() / 360.0).rem_euclid(1.0);
    (hue, hsv.saturation, hsv.value)
}

/// Inverse of [`rgb_to_hsv`].
///
/// Nothing is clamped here: a value above `1.0` yields channels above `1.0`.
/// Saturate with [`up_scale`] once the result leaves the unit scale.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let hsv: Hsv = Hsv::new(RgbHue::from_degrees(h * 360.0), s, v);
    let rgb: Srgb = Srgb::from_color_unclamped(hsv);
    rgb.into_components()
}

fn to_hsv(color: Srgb<u8>) -> (f32, f32, f32) {
    rgb_to_hsv(
        down_scale(f32::from(color.red)),
        down_scale(f32::from(color.green)),
        down_scale(f32::from(color.blue)),
    )
}

fn from_hsv(h: f32, s: f32, v: f32) -> Srgb<u8> {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    Srgb::new(up_scale(r), up_scale(g), up_scale(b))
}

/// Check that `[min_v, max_v]` is a usable brightness band on the 8-bit scale.
pub(crate) fn check_value_band(min_v: i32, max_v: i32) -> Result<()> {
    for (name, bound) in [("min_v", min_v), ("max_v", max_v)] {
        if !(0..=255).contains(&bound) {
            return Err(ColorzError::InvalidParameter(format!(
                "{name} must be within 0..=255, got {bound}"
            )));
        }
    }
    if min_v > max_v {
        return Err(ColorzError::InvalidParameter(format!(
            "min_v ({min_v}) is greater than max_v ({max_v})"
        )));
    }
    Ok(())
}

/// Clamp the HSV value of `color` into `[min_v, max_v]`, keeping hue and saturation.
pub fn clamp_value(color: Srgb<u8>, min_v: i32, max_v: i32) -> Result<Srgb<u8>> {
    check_value_band(min_v, max_v)?;
    let (h, s, v) = to_hsv(color);
    let lo = down_scale(min_v as f32);
    let hi = down_scale(max_v as f32);
    Ok(from_hsv(h, s, v.max(lo).min(hi)))
}

/// Add `delta` (8-bit scale, may be negative) to the HSV value of `color`.
///
/// The shifted value is allowed to leave `[0, 1]`; channels saturate only when
/// converted back to 8 bits.
pub fn brighten(color: Srgb<u8>, delta: i32) -> Srgb<u8> {
    if delta == 0 {
        return color;
    }
    let (h, s, v) = to_hsv(color);
    from_hsv(h, s, v + down_scale(delta as f32))
}

/// Stable sort by hue, ascending (red, yellow, green, cyan, blue, magenta).
///
/// Each color goes through HSV and back, so channels may shift by one.
pub fn order_by_hue(colors: &[Srgb<u8>]) -> Vec<Srgb<u8>> {
    let mut hsvs: Vec<(f32, f32, f32)> = colors.iter().map(|&c| to_hsv(c)).collect();
    hsvs.sort_by(|a, b| a.0.total_cmp(&b.0));
    hsvs.into_iter().map(|(h, s, v)| from_hsv(h, s, v)).collect()
}

/// Hue of an 8-bit color as a fraction of a turn.
pub fn hue_of(color: Srgb<u8>) -> f32 {
    to_hsv(color).0
}

/// HSV value of an 8-bit color back on the 8-bit scale.
pub fn value_of(color: Srgb<u8>) -> u8 {
    color.red.max(color.green).max(color.blue)
}

/// Format as `#rrggbb`, lower-case.
pub fn hexify(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Parse `#rrggbb` or `rrggbb`.
pub fn parse_hex(s: &str) -> Result<Srgb<u8>> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ColorzError::InvalidHex(s.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorzError::InvalidHex(s.to_string()))
    };
    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

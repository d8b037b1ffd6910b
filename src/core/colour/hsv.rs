//! Hue-saturation-value to RGB conversion.

use crate::core::data::colour::Colour;

/// Converts `hue` (degrees, expected in `[0, 360)`) plus `saturation` and
/// `value` (both in `[0, 1]`) to an 8-bit RGB colour.
///
/// Uses the six 60° sector table. A hue that falls in no sector (negative,
/// `>= 360` or NaN) contributes nothing but the lightness offset
/// `value - chroma`, which is black for a fully saturated colour.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let second = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

    let (r, g, b) = if (0.0..1.0).contains(&sector) {
        (chroma, second, 0.0)
    } else if (1.0..2.0).contains(&sector) {
        (second, chroma, 0.0)
    } else if (2.0..3.0).contains(&sector) {
        (0.0, chroma, second)
    } else if (3.0..4.0).contains(&sector) {
        (0.0, second, chroma)
    } else if (4.0..5.0).contains(&sector) {
        (second, 0.0, chroma)
    } else if (5.0..6.0).contains(&sector) {
        (chroma, 0.0, second)
    } else {
        (0.0, 0.0, 0.0)
    };

    let offset = value - chroma;

    Colour {
        r: to_channel(r + offset),
        g: to_channel(g + offset),
        b: to_channel(b + offset),
    }
}

// truncates, matching integer conversion of the scaled float
fn to_channel(component: f64) -> u8 {
    (component * 255.0) as u8
}

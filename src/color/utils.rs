use libm::{fabsf, floorf, fmodf};

/// Convert HSV to RGB using the standard per-sector formula.
///
/// # Arguments
/// * `h` - Hue in degrees, [0, 360)
/// * `s` - Saturation, [0, 1]
/// * `v` - Value, [0, 1]
///
/// Returns (r, g, b), each in [0, 1].
pub fn hsv2rgb_f32(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let chroma = v * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - fabsf(fmodf(sector, 2.0) - 1.0));
    // Match value, lifts each channel onto the requested brightness
    let m = v - chroma;

    let (r, g, b) = match floorf(sector) as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// Convert RGB back to HSV (inverse of [`hsv2rgb_f32`]).
///
/// All inputs in [0, 1]; returns (hue in degrees, saturation, value).
/// Hue is 0 for achromatic inputs.
pub fn rgb2hsv_f32(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let val = max;
    let sat = if max == 0.0 { 0.0 } else { delta / max };

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * fmodf((g - b) / delta, 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    (hue, sat, val)
}

/// Map a value in [0, `in_max`] onto the byte range [0, 255], truncating.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn map_to_byte(value: f32, in_max: f32) -> u8 {
    (value * 255.0 / in_max) as u8
}

/// Map a percent value (0..=100) onto the byte range (0..=255).
pub const fn percent_to_byte(value: u8) -> u8 {
    (value as u16 * 255 / 100) as u8
}

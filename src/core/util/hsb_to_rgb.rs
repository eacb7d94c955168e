use crate::core::data::colour::Colour;

fn channel(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

/// Converts a hue/saturation/brightness triple to RGB.
///
/// Hue wraps modulo 1.0 (only its fractional part is used), saturation and
/// brightness are expected in `0.0..=1.0`. The arithmetic is single precision
/// throughout so that colours are bit-for-bit stable across platforms.
#[must_use]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Colour {
    if saturation == 0.0 {
        let grey = channel(brightness);
        return Colour::new(grey, grey, grey);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        // h < 6.0, so this is the fifth sextant
        _ => (brightness, p, q),
    };

    Colour::new(channel(r), channel(g), channel(b))
}

//! 8-bit color math
//!
//! Integer-only helpers in the style of the usual LED libraries: `scale8`
//! style fades and hue arithmetic that wraps around the color wheel.

use smart_leds::hsv::{hsv2rgb, Hsv};
use smart_leds::RGB8;

/// Number of pixels on the marquee strip
pub const STRIP_LEN: usize = 100;

pub type Rgb = RGB8;

/// One frame of the strip
pub type Frame = [Rgb; STRIP_LEN];

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * u16::from(scale)) >> 8) as u8
}

/// Full saturation, full value color at `hue`
pub fn hue_to_rgb(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Dim every pixel toward black by `amount` (0 = unchanged, 255 = off)
pub fn fade_to_black_by(pixels: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for pixel in pixels {
        pixel.r = scale8(pixel.r, keep);
        pixel.g = scale8(pixel.g, keep);
        pixel.b = scale8(pixel.b, keep);
    }
}

/// Blend two hues along the shorter arc of the color wheel
///
/// `amount_of_b`: 0 = all `a`, 255 = all `b`.
pub fn blend_hue(a: u8, b: u8, amount_of_b: u8) -> u8 {
    match amount_of_b {
        0 => a,
        255 => b,
        _ => {
            let forward = b.wrapping_sub(a);
            // A half-turn apart goes forward
            if forward > 128 {
                a.wrapping_sub(scale8(a.wrapping_sub(b), amount_of_b))
            } else {
                a.wrapping_add(scale8(forward, amount_of_b))
            }
        }
    }
}

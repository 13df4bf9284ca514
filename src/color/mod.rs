//! Pixel color types
//!
//! The engine works in HSV end to end. Conversion to RGB is left to output
//! drivers and uses the same `smart-leds` routine on every host, so the
//! firmware and the desktop preview agree bit for bit.

use smart_leds::{RGB8, hsv::Hsv as SmartHsv, hsv::hsv2rgb};

pub type Rgb = RGB8;

/// One LED in hue/saturation/value form, every channel 0-255
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    /// Unlit pixel
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    /// Same hue and saturation with a different value
    #[must_use]
    pub const fn with_val(self, val: u8) -> Self {
        Self { val, ..self }
    }

    /// Convert to RGB for drivers that expect it
    pub fn to_rgb(self) -> Rgb {
        hsv2rgb(SmartHsv {
            hue: self.hue,
            sat: self.sat,
            val: self.val,
        })
    }
}

/// Convert a whole frame to RGB.
///
/// Converts `min(frame.len(), out.len())` pixels.
pub fn frame_to_rgb(frame: &[Hsv], out: &mut [Rgb]) {
    for (pixel, rgb) in frame.iter().zip(out.iter_mut()) {
        *rgb = pixel.to_rgb();
    }
}

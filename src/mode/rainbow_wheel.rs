//! Rainbow wheel
//!
//! Spreads the hue wheel over the whole strip, starting at the foreground
//! hue. Covers every pixel, so the background never shows through.

use super::{Pattern, RenderContext, rainbow_increment, strip_len, wrap_hue};
use crate::{color::Hsv, parameter::Parameter};

pub struct RainbowWheel;

impl Pattern for RainbowWheel {
    const USES: &'static [Parameter] = &[
        Parameter::ForegroundHue,
        Parameter::ForegroundSaturation,
        Parameter::ForegroundBrightness,
    ];

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let inc = rainbow_increment(strip_len(leds));
        for (i, led) in (0..).zip(leds.iter_mut()) {
            let hue = wrap_hue(i32::from(p.fg_hue) + i * inc);
            *led = Hsv::new(hue, p.fg_sat, p.fg_bright);
        }
    }
}

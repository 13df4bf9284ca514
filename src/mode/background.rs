//! Background patterns. Each one overwrites every pixel.

use super::{Pattern, RenderContext, rainbow_increment, sinusoid_hue, strip_len, wrap_hue};
use crate::{color::Hsv, parameter::Parameter};

/// Single solid color
pub struct FlatBackground;

/// Hue ramp across the whole strip, starting at the background hue
pub struct RainbowBackground;

/// Hue oscillating around the background hue along the strip
pub struct SinusoidBackground;

const COLOR: &[Parameter] = &[
    Parameter::BackgroundHue,
    Parameter::BackgroundSaturation,
    Parameter::BackgroundBrightness,
];

impl Pattern for FlatBackground {
    const USES: &'static [Parameter] = COLOR;

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        leds.fill(Hsv::new(p.bg_hue, p.bg_sat, p.bg_bright));
    }
}

impl Pattern for RainbowBackground {
    const USES: &'static [Parameter] = COLOR;

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let inc = rainbow_increment(strip_len(leds));
        let mut hue = i32::from(p.bg_hue);
        for led in leds {
            *led = Hsv::new(wrap_hue(hue), p.bg_sat, p.bg_bright);
            hue += inc;
        }
    }
}

impl Pattern for SinusoidBackground {
    const USES: &'static [Parameter] = &[
        Parameter::BackgroundHue,
        Parameter::BackgroundSaturation,
        Parameter::BackgroundBrightness,
        Parameter::BackgroundStart,
        Parameter::BackgroundLength,
        Parameter::ColorAmplitude,
    ];

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        if p.bg_length == 0 {
            FlatBackground::render(ctx, leds);
            return;
        }

        for (i, led) in (0..).zip(leds.iter_mut()) {
            let hue = sinusoid_hue(p.bg_hue, p.color_amplitude, i, p.bg_start, p.bg_length);
            *led = Hsv::new(hue, p.bg_sat, p.bg_bright);
        }
    }
}

use super::{Pattern, RenderContext, sinusoid_hue};
use crate::{color::Hsv, parameter::Parameter};

/// Foreground hue swinging along a sine wave of `length` LEDs per period
pub struct ColorSinusoid;

impl Pattern for ColorSinusoid {
    const USES: &'static [Parameter] = &[
        Parameter::ForegroundHue,
        Parameter::ForegroundSaturation,
        Parameter::ForegroundBrightness,
        Parameter::ForegroundStart,
        Parameter::ForegroundLength,
        Parameter::ColorAmplitude,
    ];

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        if p.fg_length == 0 {
            return;
        }

        for (i, led) in (0..).zip(leds.iter_mut()) {
            let hue = sinusoid_hue(p.fg_hue, p.color_amplitude, i, p.fg_start, p.fg_length);
            *led = Hsv::new(hue, p.fg_sat, p.fg_bright);
        }
    }
}

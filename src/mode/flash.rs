use super::{Pattern, RenderContext};
use crate::{clock::FrameRng, color::Hsv, parameter::Parameter};

/// Every LED flips a coin each frame: full foreground brightness or off.
///
/// The coin is seeded from the frame counter only, so replaying a frame
/// number reproduces the frame exactly.
pub struct FlashLights;

impl Pattern for FlashLights {
    const USES: &'static [Parameter] = &[
        Parameter::ForegroundHue,
        Parameter::ForegroundSaturation,
        Parameter::ForegroundBrightness,
    ];

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let mut rng = FrameRng::new(ctx.frame);
        for led in leds {
            let val = if rng.next_bool() { p.fg_bright } else { 0 };
            *led = Hsv::new(p.fg_hue, p.fg_sat, val);
        }
    }
}

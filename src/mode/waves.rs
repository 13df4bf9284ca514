//! Wave patterns on the facing top/bottom runs
//!
//! A wave is centred on a point picked by the pan control and fades
//! linearly from full brightness at the centre to nothing at its edges.
//! The half width is limited so the wave stays inside the part of the strip
//! the mirror map covers, and each lit LED is repeated on the facing run.

use super::{Pattern, RenderContext, channel, set_led, strip_len};
use crate::{
    color::Hsv,
    parameter::Parameter,
    tables::{WAVE_WINDOW_END, WAVE_WINDOW_START, mirror},
};

/// Symmetric wave mirrored onto the facing run
pub struct OceanWaves;

/// Wave whose mirror image travels the opposite way around the strip
pub struct OpposingWaves;

const WAVE: &[Parameter] = &[
    Parameter::ForegroundHue,
    Parameter::ForegroundSaturation,
    Parameter::ForegroundBrightness,
    Parameter::ForegroundLength,
    Parameter::Pan,
];

/// Centre LED of the wave for a strip of `len` LEDs
pub(crate) fn wave_center(len: i32, pan: u8) -> i32 {
    (len / 2 - 1) * i32::from(pan) / 127 + len / 4
}

fn fade(bright: u8, amp: i32, p: i32) -> u8 {
    channel(i32::from(bright) * (amp - p) / amp)
}

fn in_window(index: i32) -> bool {
    (WAVE_WINDOW_START..=WAVE_WINDOW_END).contains(&index)
}

fn set_mirrored(leds: &mut [Hsv], offset: i32, color: Hsv) {
    if let Some(led) = mirror(offset).and_then(|led| leds.get_mut(led)) {
        *led = color;
    }
}

impl Pattern for OceanWaves {
    const USES: &'static [Parameter] = WAVE;

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let mid = wave_center(strip_len(leds), p.pan);
        let mut amp = i32::from(p.fg_length) / 2;

        if mid - amp <= WAVE_WINDOW_START {
            amp = mid - WAVE_WINDOW_START;
        } else if mid + amp > WAVE_WINDOW_END {
            amp = WAVE_WINDOW_END - mid;
        }
        if amp <= 0 {
            return;
        }

        let color = Hsv::new(p.fg_hue, p.fg_sat, 0);
        for step in 0..amp {
            let color = color.with_val(fade(p.fg_bright, amp, step));

            for index in [mid + step, mid - step] {
                if in_window(index) {
                    set_led(leds, index, color);
                }
                set_mirrored(leds, index - WAVE_WINDOW_START, color);
            }
        }
    }
}

impl Pattern for OpposingWaves {
    const USES: &'static [Parameter] = WAVE;

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let len = strip_len(leds);
        let mid = wave_center(len, p.pan);
        let mut amp = i32::from(p.fg_length) / 2;

        // One LED wider at the low edge than OceanWaves, and the loop below
        // includes `amp` itself.
        if mid - amp <= WAVE_WINDOW_START {
            amp = mid - (WAVE_WINDOW_START - 1);
        } else if mid + amp > WAVE_WINDOW_END {
            amp = WAVE_WINDOW_END - mid;
        }
        if amp <= 0 {
            return;
        }

        let color = Hsv::new(p.fg_hue, p.fg_sat, 0);
        let opposite = len - mid;
        for step in 0..=amp {
            let color = color.with_val(fade(p.fg_bright, amp, step));

            set_led(leds, mid + step, color);
            set_led(leds, mid - step, color);
            set_mirrored(leds, opposite + step - WAVE_WINDOW_START, color);
            set_mirrored(leds, opposite - step - WAVE_WINDOW_START, color);
        }
    }
}

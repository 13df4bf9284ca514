//! Line based patterns
//!
//! A "line" is a run of `length` LEDs beginning at the foreground start.
//! Dotted patterns repeat the run `lines` times, evenly spaced around the
//! strip, and every index wraps modulo the strip length.

use super::{Pattern, RenderContext, channel, rainbow_increment, set_led, strip_len, wrap_hue};
use crate::{color::Hsv, parameter::Parameter};

/// Evenly spaced solid runs
pub struct MovingDots;

/// Like [`MovingDots`], with brightness ramping up along each run
pub struct Comets;

/// Alternating lit and unlit blocks tiled across the strip
pub struct BackAndForth;

/// Rainbow tinted runs whose start advances on every Note-On
pub struct MoveStart;

const DOTTED: &[Parameter] = &[
    Parameter::ForegroundHue,
    Parameter::ForegroundSaturation,
    Parameter::ForegroundBrightness,
    Parameter::ForegroundStart,
    Parameter::ForegroundLength,
    Parameter::LineCount,
];

/// Visit every LED of every repeated run.
///
/// The callback receives the line number, the LED offset before repetition
/// and the wrapped strip index.
fn for_each_run(ctx: &RenderContext<'_>, len: usize, mut visit: impl FnMut(i32, i32, i32)) {
    let Ok(n) = i32::try_from(len) else {
        return;
    };
    if n == 0 {
        return;
    }
    let p = ctx.params;
    let lines = i32::from(p.effective_lines());
    let line_offset = i32::try_from(p.line_offset(len)).unwrap_or(n);
    let start = i32::from(p.fg_start);
    let end = start + i32::from(p.fg_length);

    for line in 0..lines {
        for led in start..end {
            visit(line, led, (led + line * line_offset) % n);
        }
    }
}

impl Pattern for MovingDots {
    const USES: &'static [Parameter] = DOTTED;

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let color = Hsv::new(p.fg_hue, p.fg_sat, p.fg_bright);
        for_each_run(ctx, leds.len(), |_, _, index| {
            set_led(leds, index, color);
        });
    }
}

impl Pattern for Comets {
    const USES: &'static [Parameter] = DOTTED;

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        if p.fg_length == 0 {
            return;
        }
        let length = i32::from(p.fg_length);
        let start = i32::from(p.fg_start);
        let bright = i32::from(p.fg_bright);
        let color = Hsv::new(p.fg_hue, p.fg_sat, 0);

        for_each_run(ctx, leds.len(), |_, led, index| {
            // LEDs remaining until the end of the run
            let k = length - 1 - (led - start);
            let val = channel(bright * (length - k) / length);
            set_led(leds, index, color.with_val(val));
        });
    }
}

impl Pattern for BackAndForth {
    const USES: &'static [Parameter] = &[
        Parameter::ForegroundHue,
        Parameter::ForegroundSaturation,
        Parameter::ForegroundBrightness,
        Parameter::ForegroundStart,
        Parameter::ForegroundLength,
    ];

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let len = strip_len(leds);
        if p.fg_length == 0 || len == 0 {
            return;
        }
        let length = i32::from(p.fg_length);
        let origin = i32::from(p.fg_start) * length;
        let color = Hsv::new(p.fg_hue, p.fg_sat, p.fg_bright);

        let mut block = 0;
        while block < len {
            for led in 0..length {
                set_led(leds, (origin + block + led) % len, color);
            }
            block += 2 * length;
        }
    }
}

impl Pattern for MoveStart {
    const USES: &'static [Parameter] = &[
        Parameter::ForegroundHue,
        Parameter::ForegroundSaturation,
        Parameter::ForegroundBrightness,
        Parameter::ForegroundStart,
        Parameter::ForegroundLength,
        Parameter::LineCount,
        Parameter::BackgroundSaturation,
    ];

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let len = strip_len(leds);
        let inc = rainbow_increment(len);

        for_each_run(ctx, leds.len(), |line, led, index| {
            let hue = wrap_hue(i32::from(p.fg_hue) + led * inc);
            // Odd lines take the background saturation
            let sat = if line % 2 == 0 { p.fg_sat } else { p.bg_sat };
            set_led(leds, index, Hsv::new(hue, sat, p.fg_bright));
        });
    }
}

//! Notes to drives
//!
//! Each MIDI channel drives one floppy drive and owns six LEDs. While the
//! channel holds a note its LEDs show the foreground color, otherwise they
//! fall back to a warm/cool idle checkerboard. The state is sampled every
//! frame rather than on note edges.

use super::{Pattern, RenderContext, set_led};
use crate::{
    color::Hsv,
    parameter::Parameter,
    tables::{CHANNEL_COUNT, drive_leds},
};

pub const IDLE_WARM_HUE: u8 = 80;
pub const IDLE_COOL_HUE: u8 = 100;
pub const IDLE_SATURATION: u8 = 200;

pub struct NotesToDrives;

impl NotesToDrives {
    /// Idle color of the `n`-th LED of a drive
    pub const fn idle_color(n: usize, val: u8) -> Hsv {
        let hue = if n % 2 == 0 {
            IDLE_WARM_HUE
        } else {
            IDLE_COOL_HUE
        };
        Hsv::new(hue, IDLE_SATURATION, val)
    }
}

impl Pattern for NotesToDrives {
    const USES: &'static [Parameter] = &[
        Parameter::ForegroundHue,
        Parameter::ForegroundSaturation,
        Parameter::ForegroundBrightness,
    ];

    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        let p = ctx.params;
        let lit = Hsv::new(p.fg_hue, p.fg_sat, p.fg_bright);

        for channel in 1..=CHANNEL_COUNT {
            let Some(drive) = drive_leds(channel) else {
                continue;
            };
            #[allow(clippy::cast_possible_truncation)]
            let active = ctx.notes.is_channel_active(channel as u8);

            for (n, &led) in drive.iter().enumerate() {
                let color = if active {
                    lit
                } else {
                    Self::idle_color(n, p.fg_bright)
                };
                set_led(leds, i32::from(led), color);
            }
        }
    }
}

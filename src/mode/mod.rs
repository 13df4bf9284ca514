//! Foreground and background patterns
//!
//! Every pattern is a stateless type implementing [`Pattern`]. The mode enums
//! map a selector value onto a pattern and dispatch to it, so all modes
//! are known at compile time and nothing is allocated.

mod background;
mod color_sinusoid;
mod drives;
mod flash;
mod lines;
mod rainbow_wheel;
mod waves;

pub use background::{FlatBackground, RainbowBackground, SinusoidBackground};
pub use color_sinusoid::ColorSinusoid;
pub use drives::{IDLE_COOL_HUE, IDLE_SATURATION, IDLE_WARM_HUE, NotesToDrives};
pub use flash::FlashLights;
pub use lines::{BackAndForth, Comets, MoveStart, MovingDots};
pub use rainbow_wheel::RainbowWheel;
pub use waves::{OceanWaves, OpposingWaves};

use crate::{
    color::Hsv,
    note::NoteState,
    parameter::{Parameter, ParameterState},
    tables,
};

const MODE_NAME_NOTES_TO_DRIVES: &str = "notes_to_drives";
const MODE_NAME_RAINBOW_WHEEL: &str = "rainbow_wheel";
const MODE_NAME_MOVING_DOTS: &str = "moving_dots";
const MODE_NAME_COMETS: &str = "comets";
const MODE_NAME_BACK_AND_FORTH: &str = "back_and_forth";
const MODE_NAME_MOVE_START: &str = "move_start";
const MODE_NAME_COLOR_SINUSOID: &str = "color_sinusoid";
const MODE_NAME_FLASH_LIGHTS: &str = "flash_lights";
const MODE_NAME_OCEAN_WAVES: &str = "ocean_waves";
const MODE_NAME_OPPOSING_WAVES: &str = "opposing_waves";

const MODE_NAME_FLAT: &str = "flat";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_SINUSOID: &str = "sinusoid";

/// Everything a pattern may read while rendering one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub params: &'a ParameterState,
    pub notes: &'a NoteState,
    /// Frame counter, the only source of randomness
    pub frame: u32,
}

pub trait Pattern {
    /// Parameters the pattern reads
    const USES: &'static [Parameter];

    /// Render into `leds`.
    ///
    /// Foreground patterns receive the buffer already holding the
    /// background and only overwrite the pixels they light.
    fn render(ctx: &RenderContext<'_>, leds: &mut [Hsv]);
}

/// Foreground selector values (CC6)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ForegroundMode {
    NotesToDrives = 0,
    RainbowWheel = 1,
    MovingDots = 2,
    Comets = 3,
    BackAndForth = 4,
    MoveStart = 5,
    ColorSinusoid = 6,
    FlashLights = 7,
    OceanWaves = 8,
    OpposingWaves = 9,
}

/// Background selector values (CC9)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BackgroundMode {
    #[default]
    Flat = 0,
    Rainbow = 1,
    Sinusoid = 2,
}

impl ForegroundMode {
    pub const ALL: [Self; 10] = [
        Self::NotesToDrives,
        Self::RainbowWheel,
        Self::MovingDots,
        Self::Comets,
        Self::BackAndForth,
        Self::MoveStart,
        Self::ColorSinusoid,
        Self::FlashLights,
        Self::OceanWaves,
        Self::OpposingWaves,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotesToDrives => MODE_NAME_NOTES_TO_DRIVES,
            Self::RainbowWheel => MODE_NAME_RAINBOW_WHEEL,
            Self::MovingDots => MODE_NAME_MOVING_DOTS,
            Self::Comets => MODE_NAME_COMETS,
            Self::BackAndForth => MODE_NAME_BACK_AND_FORTH,
            Self::MoveStart => MODE_NAME_MOVE_START,
            Self::ColorSinusoid => MODE_NAME_COLOR_SINUSOID,
            Self::FlashLights => MODE_NAME_FLASH_LIGHTS,
            Self::OceanWaves => MODE_NAME_OCEAN_WAVES,
            Self::OpposingWaves => MODE_NAME_OPPOSING_WAVES,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s)
    }

    /// Human readable name, as shown on controller templates
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NotesToDrives => "Notes to Drives",
            Self::RainbowWheel => "Rainbow Wheel",
            Self::MovingDots => "Moving Dots",
            Self::Comets => "Comets",
            Self::BackAndForth => "Back and Forth",
            Self::MoveStart => "Move startLED with each note on event",
            Self::ColorSinusoid => "Color Sinusoid",
            Self::FlashLights => "Flash Lights",
            Self::OceanWaves => "Ocean Waves",
            Self::OpposingWaves => "Opposing Waves",
        }
    }

    pub const fn uses(self) -> &'static [Parameter] {
        match self {
            Self::NotesToDrives => NotesToDrives::USES,
            Self::RainbowWheel => RainbowWheel::USES,
            Self::MovingDots => MovingDots::USES,
            Self::Comets => Comets::USES,
            Self::BackAndForth => BackAndForth::USES,
            Self::MoveStart => MoveStart::USES,
            Self::ColorSinusoid => ColorSinusoid::USES,
            Self::FlashLights => FlashLights::USES,
            Self::OceanWaves => OceanWaves::USES,
            Self::OpposingWaves => OpposingWaves::USES,
        }
    }

    pub fn render(self, ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        match self {
            Self::NotesToDrives => NotesToDrives::render(ctx, leds),
            Self::RainbowWheel => RainbowWheel::render(ctx, leds),
            Self::MovingDots => MovingDots::render(ctx, leds),
            Self::Comets => Comets::render(ctx, leds),
            Self::BackAndForth => BackAndForth::render(ctx, leds),
            Self::MoveStart => MoveStart::render(ctx, leds),
            Self::ColorSinusoid => ColorSinusoid::render(ctx, leds),
            Self::FlashLights => FlashLights::render(ctx, leds),
            Self::OceanWaves => OceanWaves::render(ctx, leds),
            Self::OpposingWaves => OpposingWaves::render(ctx, leds),
        }
    }
}

impl BackgroundMode {
    pub const ALL: [Self; 3] = [Self::Flat, Self::Rainbow, Self::Sinusoid];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Resolve a selector, falling back to [`BackgroundMode::Flat`]
    pub fn from_raw_or_flat(value: u8) -> Self {
        Self::from_raw(value).unwrap_or_default()
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => MODE_NAME_FLAT,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Sinusoid => MODE_NAME_SINUSOID,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s)
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Flat => "Flat Color background",
            Self::Rainbow => "Rainbow wheel background",
            Self::Sinusoid => "Color Sinusoid",
        }
    }

    pub const fn uses(self) -> &'static [Parameter] {
        match self {
            Self::Flat => FlatBackground::USES,
            Self::Rainbow => RainbowBackground::USES,
            Self::Sinusoid => SinusoidBackground::USES,
        }
    }

    pub fn render(self, ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
        match self {
            Self::Flat => FlatBackground::render(ctx, leds),
            Self::Rainbow => RainbowBackground::render(ctx, leds),
            Self::Sinusoid => SinusoidBackground::render(ctx, leds),
        }
    }
}

/// Overwrite `leds` with the background selected by CC9
pub fn render_background(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
    BackgroundMode::from_raw_or_flat(ctx.params.bg_mode).render(ctx, leds);
}

/// Composite the foreground selected by CC6 over `leds`.
///
/// Unknown selectors leave the background untouched.
pub fn render_foreground(ctx: &RenderContext<'_>, leds: &mut [Hsv]) {
    if let Some(mode) = ForegroundMode::from_raw(ctx.params.fg_mode) {
        mode.render(ctx, leds);
    }
}

/// Strip length as a signed index type
pub(crate) fn strip_len(leds: &[Hsv]) -> i32 {
    i32::try_from(leds.len()).unwrap_or(i32::MAX)
}

/// Write one pixel, ignoring indices outside the strip
pub(crate) fn set_led(leds: &mut [Hsv], index: i32, color: Hsv) {
    let Ok(index) = usize::try_from(index) else {
        return;
    };
    if let Some(led) = leds.get_mut(index) {
        *led = color;
    }
}

/// Hue step between neighbouring LEDs of a full-strip rainbow
pub(crate) const fn rainbow_increment(len: i32) -> i32 {
    if len <= 0 { 0 } else { 255 / len }
}

/// Reduce a hue onto the 0-255 wheel
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn wrap_hue(hue: i32) -> u8 {
    hue.rem_euclid(256) as u8
}

/// Clamp an intermediate channel value into a byte
pub(crate) fn channel(value: i32) -> u8 {
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}

/// Hue of LED `index` on a sine wave of period `length` LEDs.
///
/// `length` must be non-zero.
pub(crate) fn sinusoid_hue(base: u8, amplitude: u8, index: i32, start: u8, length: u8) -> u8 {
    let phase_index = ((index + i32::from(start)) * 64 / i32::from(length)) % 64;
    let offset = i32::from(amplitude) * tables::phase(phase_index) / 100;
    wrap_hue(256 + i32::from(base) + offset)
}

//! Static lookup tables baked into the 108 LED floppy-drive layout.
//!
//! The strip is wired as several physical runs. The top run (LEDs 0-23) and
//! the bottom run (LEDs 72-95) face each other, which is what the mirror map
//! encodes. Each of the sixteen floppy drives owns six consecutive LEDs.

/// Number of samples in [`COLOR_PHASE`]
pub const PHASE_STEPS: usize = 64;

/// Number of entries in [`TOP_BOTTOM_MIRROR_MAP`]
pub const MIRROR_LEN: usize = 48;

/// Number of LEDs lit per drive in [`CHANNEL_TO_LED`]
pub const LEDS_PER_DRIVE: usize = 6;

/// Number of addressable MIDI channels (1-16)
pub const CHANNEL_COUNT: usize = 16;

/// First strip index covered by the mirror map
pub const WAVE_WINDOW_START: i32 = 24;

/// Last strip index covered by the mirror map
pub const WAVE_WINDOW_END: i32 = 71;

/// One period of `100 * sin(theta)`, sampled 64 times.
pub const COLOR_PHASE: [i8; PHASE_STEPS] = [
    10, 20, 29, 38, 47, 56, 63, 71, 77, 83, 88, 92, 96, 98, 100, 100, //
    100, 98, 96, 92, 88, 83, 77, 71, 63, 56, 47, 38, 29, 20, 10, 0, //
    -10, -20, -29, -38, -47, -56, -63, -71, -77, -83, -88, -92, -96, -98, -100, -100, //
    -100, -98, -96, -92, -88, -83, -77, -71, -63, -56, -47, -38, -29, -20, -10, 0,
];

/// Maps an offset into the wave window (strip index - 24) onto the LED that
/// faces it on the opposite run.
pub const TOP_BOTTOM_MIRROR_MAP: [u8; MIRROR_LEN] = [
    23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, //
    95, 94, 93, 92, 91, 90, 89, 88, 87, 86, 85, 84, 83, 82, 81, 80, 79, 78, 77, 76, 75, 74, 73,
    72,
];

/// LEDs owned by each MIDI channel's drive. Row 0 is unused.
pub const CHANNEL_TO_LED: [[u8; LEDS_PER_DRIVE]; CHANNEL_COUNT + 1] = [
    [0, 0, 0, 0, 0, 0],
    [19, 20, 21, 22, 23, 24],
    [29, 30, 31, 32, 33, 34],
    [13, 14, 15, 16, 17, 18],
    [35, 36, 37, 38, 39, 40],
    [7, 8, 9, 10, 11, 12],
    [41, 42, 43, 44, 45, 46],
    [1, 2, 3, 4, 5, 6],
    [47, 48, 49, 50, 51, 52],
    [73, 74, 75, 76, 77, 78],
    [83, 84, 85, 86, 87, 88],
    [67, 68, 69, 70, 71, 72],
    [89, 90, 91, 92, 93, 94],
    [61, 62, 63, 64, 65, 66],
    [95, 96, 97, 98, 99, 100],
    [55, 56, 57, 58, 59, 60],
    [101, 102, 103, 104, 105, 106],
];

/// Sample the sine table, wrapping the index into one period
#[inline]
pub fn phase(index: i32) -> i32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let steps = PHASE_STEPS as i32;
    #[allow(clippy::cast_sign_loss)]
    let index = index.rem_euclid(steps) as usize;
    i32::from(COLOR_PHASE[index])
}

/// Look up the mirrored LED for a mirror-map offset.
///
/// Returns `None` when the offset lies outside the table.
#[inline]
pub fn mirror(offset: i32) -> Option<usize> {
    let offset = usize::try_from(offset).ok()?;
    TOP_BOTTOM_MIRROR_MAP.get(offset).map(|&led| usize::from(led))
}

/// LEDs of the drive assigned to `channel` (1-16)
#[inline]
pub fn drive_leds(channel: usize) -> Option<&'static [u8; LEDS_PER_DRIVE]> {
    if channel == 0 {
        return None;
    }
    CHANNEL_TO_LED.get(channel)
}

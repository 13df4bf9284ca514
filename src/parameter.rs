//! Control-Change addressable parameters
//!
//! Fifteen fields, each addressed by a CC number. Hue, saturation and
//! brightness arrive as 0-127 and are stored doubled (0-254) so they can be
//! used as 8-bit color channels directly. Everything else is stored as sent.

/// Largest value a MIDI data byte can carry
pub const MAX_CC_VALUE: u8 = 127;

/// Start offset past which move-start mode wraps back to 0
const START_WRAP: u8 = 127;

/// A parameter, identified by its CC number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Parameter {
    ForegroundHue = 1,
    ForegroundSaturation = 2,
    ForegroundBrightness = 3,
    ForegroundStart = 4,
    ForegroundLength = 5,
    ForegroundMode = 6,
    LineCount = 7,
    ColorAmplitude = 8,
    BackgroundMode = 9,
    Pan = 10,
    BackgroundHue = 11,
    BackgroundSaturation = 12,
    BackgroundBrightness = 13,
    BackgroundStart = 14,
    BackgroundLength = 15,
}

impl Parameter {
    /// All parameters in CC order
    pub const ALL: [Self; 15] = [
        Self::ForegroundHue,
        Self::ForegroundSaturation,
        Self::ForegroundBrightness,
        Self::ForegroundStart,
        Self::ForegroundLength,
        Self::ForegroundMode,
        Self::LineCount,
        Self::ColorAmplitude,
        Self::BackgroundMode,
        Self::Pan,
        Self::BackgroundHue,
        Self::BackgroundSaturation,
        Self::BackgroundBrightness,
        Self::BackgroundStart,
        Self::BackgroundLength,
    ];

    pub fn from_cc(cc: u8) -> Option<Self> {
        let index = usize::from(cc).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub const fn cc(self) -> u8 {
        self as u8
    }

    /// Whether the stored value is the received value doubled
    pub const fn is_scaled(self) -> bool {
        matches!(
            self,
            Self::ForegroundHue
                | Self::ForegroundSaturation
                | Self::ForegroundBrightness
                | Self::BackgroundHue
                | Self::BackgroundSaturation
                | Self::BackgroundBrightness
        )
    }
}

/// Current value of every parameter, in internal (stored) units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterState {
    pub fg_hue: u8,
    pub fg_sat: u8,
    pub fg_bright: u8,
    pub fg_start: u8,
    pub fg_length: u8,
    pub fg_mode: u8,
    pub lines: u8,
    pub color_amplitude: u8,
    pub bg_mode: u8,
    pub pan: u8,
    pub bg_hue: u8,
    pub bg_sat: u8,
    pub bg_bright: u8,
    pub bg_start: u8,
    pub bg_length: u8,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self {
            fg_hue: 0,
            fg_sat: 200,
            fg_bright: 200,
            fg_start: 0,
            fg_length: 0,
            fg_mode: 0,
            lines: 0,
            color_amplitude: 0,
            bg_mode: 0,
            pan: 64,
            bg_hue: 0,
            bg_sat: 200,
            bg_bright: 0,
            bg_start: 0,
            bg_length: 0,
        }
    }
}

impl ParameterState {
    fn slot_mut(&mut self, parameter: Parameter) -> &mut u8 {
        match parameter {
            Parameter::ForegroundHue => &mut self.fg_hue,
            Parameter::ForegroundSaturation => &mut self.fg_sat,
            Parameter::ForegroundBrightness => &mut self.fg_bright,
            Parameter::ForegroundStart => &mut self.fg_start,
            Parameter::ForegroundLength => &mut self.fg_length,
            Parameter::ForegroundMode => &mut self.fg_mode,
            Parameter::LineCount => &mut self.lines,
            Parameter::ColorAmplitude => &mut self.color_amplitude,
            Parameter::BackgroundMode => &mut self.bg_mode,
            Parameter::Pan => &mut self.pan,
            Parameter::BackgroundHue => &mut self.bg_hue,
            Parameter::BackgroundSaturation => &mut self.bg_sat,
            Parameter::BackgroundBrightness => &mut self.bg_bright,
            Parameter::BackgroundStart => &mut self.bg_start,
            Parameter::BackgroundLength => &mut self.bg_length,
        }
    }

    /// Stored value of a parameter, in internal units
    pub const fn raw(&self, parameter: Parameter) -> u8 {
        match parameter {
            Parameter::ForegroundHue => self.fg_hue,
            Parameter::ForegroundSaturation => self.fg_sat,
            Parameter::ForegroundBrightness => self.fg_bright,
            Parameter::ForegroundStart => self.fg_start,
            Parameter::ForegroundLength => self.fg_length,
            Parameter::ForegroundMode => self.fg_mode,
            Parameter::LineCount => self.lines,
            Parameter::ColorAmplitude => self.color_amplitude,
            Parameter::BackgroundMode => self.bg_mode,
            Parameter::Pan => self.pan,
            Parameter::BackgroundHue => self.bg_hue,
            Parameter::BackgroundSaturation => self.bg_sat,
            Parameter::BackgroundBrightness => self.bg_bright,
            Parameter::BackgroundStart => self.bg_start,
            Parameter::BackgroundLength => self.bg_length,
        }
    }

    /// Store a value received over MIDI (0-127, larger values are clamped)
    pub fn set(&mut self, parameter: Parameter, value: u8) {
        let value = value.min(MAX_CC_VALUE);
        let stored = if parameter.is_scaled() { value * 2 } else { value };
        *self.slot_mut(parameter) = stored;
    }

    /// Read a value back in MIDI units (0-127)
    pub const fn get(&self, parameter: Parameter) -> u8 {
        let raw = self.raw(parameter);
        if parameter.is_scaled() { raw / 2 } else { raw }
    }

    /// Apply a Control-Change. Unknown control numbers are ignored.
    ///
    /// Returns the parameter that was updated.
    pub fn set_cc(&mut self, cc: u8, value: u8) -> Option<Parameter> {
        let parameter = Parameter::from_cc(cc)?;
        self.set(parameter, value);
        Some(parameter)
    }

    /// Read a parameter by CC number in MIDI units
    pub fn get_cc(&self, cc: u8) -> Option<u8> {
        Parameter::from_cc(cc).map(|parameter| self.get(parameter))
    }

    /// Line count with 0 treated as a single line
    pub fn effective_lines(&self) -> u8 {
        self.lines.max(1)
    }

    /// Spacing between repeated lines on a strip of `led_count` LEDs
    pub fn line_offset(&self, led_count: usize) -> usize {
        led_count / usize::from(self.effective_lines())
    }

    /// Move the foreground start one LED forward, wrapping back to 0 at 127
    pub fn advance_start(&mut self) {
        self.fg_start = self.fg_start.saturating_add(1);
        if self.fg_start >= START_WRAP {
            self.fg_start = 0;
        }
    }
}

use core::cmp::min;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::FrameClock;
use crate::color::Hsv;
use crate::event::{EventReceiver, MidiEvent};
use crate::mode::{
    BackgroundMode, ForegroundMode, NotesToDrives, RenderContext, render_background,
    render_foreground,
};
use crate::note::NoteState;
use crate::parameter::{Parameter, ParameterState};

/// LED count of the floppy-drive rig the lookup tables describe
pub const DEFAULT_LED_COUNT: usize = 108;

/// Configuration for the light engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Active strip length, clamped to `1..=MAX_LEDS`
    pub led_count: usize,
    /// Parameter values at power-on
    pub parameters: ParameterState,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            parameters: ParameterState::default(),
        }
    }
}

/// Light Engine - turns MIDI state into HSV frames
///
/// `MAX_LEDS` is the buffer capacity; the strip in use may be shorter.
pub struct LightEngine<const MAX_LEDS: usize> {
    led_count: usize,

    // Input state
    params: ParameterState,
    notes: NoteState,
    clock: FrameClock,

    // Frame buffers
    background: [Hsv; MAX_LEDS],
    frame_buffer: [Hsv; MAX_LEDS],
}

impl<const MAX_LEDS: usize> LightEngine<MAX_LEDS> {
    /// Create a new engine.
    ///
    /// The strip starts out showing the idle checkerboard at the configured
    /// foreground brightness until the first frame is rendered.
    pub fn new(config: &EngineConfig) -> Self {
        let led_count = min(config.led_count.clamp(1, MAX_LEDS.max(1)), MAX_LEDS);
        #[cfg(feature = "esp32-log")]
        println!(
            "[engine] {} LEDs (requested {}, capacity {})",
            led_count, config.led_count, MAX_LEDS
        );

        let mut frame_buffer = [Hsv::BLACK; MAX_LEDS];
        for (n, led) in frame_buffer.iter_mut().take(led_count).enumerate() {
            *led = NotesToDrives::idle_color(n, config.parameters.fg_bright);
        }

        Self {
            led_count,
            params: config.parameters,
            notes: NoteState::new(),
            clock: FrameClock::new(),
            background: [Hsv::BLACK; MAX_LEDS],
            frame_buffer,
        }
    }

    /// Apply a Control-Change.
    ///
    /// The channel is ignored; every channel addresses the same parameters.
    /// Control numbers outside 1-15 are dropped.
    pub fn handle_control_change(&mut self, _channel: u8, control: u8, value: u8) {
        #[cfg_attr(not(feature = "esp32-log"), allow(unused_variables))]
        let Some(parameter) = self.params.set_cc(control, value) else {
            #[cfg(feature = "esp32-log")]
            println!("[engine] ignored CC{} = {}", control, value);
            return;
        };

        #[cfg(feature = "esp32-log")]
        match parameter {
            Parameter::ForegroundMode => println!(
                "[engine] foreground -> {}",
                ForegroundMode::from_raw(self.params.fg_mode).map_or("none", ForegroundMode::as_str)
            ),
            Parameter::BackgroundMode => println!(
                "[engine] background -> {}",
                BackgroundMode::from_raw_or_flat(self.params.bg_mode).as_str()
            ),
            _ => {}
        }
    }

    /// Apply a Note-On.
    ///
    /// Besides recording the note, this advances the foreground start by one
    /// LED while [`ForegroundMode::MoveStart`] is selected. That is the only
    /// place a parameter changes outside of a Control-Change.
    pub fn handle_note_on(&mut self, channel: u8, note: u8, velocity: u8) {
        if !self.notes.note_on(channel, note, velocity) {
            return;
        }
        if self.foreground_mode() == Some(ForegroundMode::MoveStart) {
            self.params.advance_start();
        }
    }

    /// Apply a Note-Off
    pub fn handle_note_off(&mut self, channel: u8, note: u8, _velocity: u8) {
        self.notes.note_off(channel, note);
    }

    /// Apply any supported MIDI event
    pub fn handle_event(&mut self, event: MidiEvent) {
        match event {
            MidiEvent::ControlChange {
                channel,
                control,
                value,
            } => self.handle_control_change(channel, control, value),
            MidiEvent::NoteOn {
                channel,
                note,
                velocity,
            } => self.handle_note_on(channel, note, velocity),
            MidiEvent::NoteOff {
                channel,
                note,
                velocity,
            } => self.handle_note_off(channel, note, velocity),
        }
    }

    /// Drain and apply every queued event (non-blocking)
    ///
    /// Returns the number of events applied.
    pub fn process_pending<const SIZE: usize>(&mut self, events: &EventReceiver<'_, SIZE>) -> usize {
        let mut applied = 0;
        while let Ok(event) = events.try_receive() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Render one frame
    ///
    /// Advances the frame clock, renders the background, copies it into the
    /// output buffer and composites the foreground on top.
    pub fn render(&mut self) -> &[Hsv] {
        let frame = self.clock.tick();
        let ctx = RenderContext {
            params: &self.params,
            notes: &self.notes,
            frame,
        };

        let background = &mut self.background[..self.led_count];
        render_background(&ctx, background);

        let leds = &mut self.frame_buffer[..self.led_count];
        leds.copy_from_slice(background);
        render_foreground(&ctx, leds);

        leds
    }

    /// Last rendered frame
    pub fn leds(&self) -> &[Hsv] {
        &self.frame_buffer[..self.led_count]
    }

    /// Last rendered background layer
    pub fn background(&self) -> &[Hsv] {
        &self.background[..self.led_count]
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    /// Read a parameter by CC number, in 0-127 units
    pub fn get_cc(&self, cc: u8) -> Option<u8> {
        self.params.get_cc(cc)
    }

    /// Write a parameter by CC number, in 0-127 units
    pub fn set_cc(&mut self, cc: u8, value: u8) {
        self.handle_control_change(0, cc, value);
    }

    pub fn get(&self, parameter: Parameter) -> u8 {
        self.params.get(parameter)
    }

    pub const fn parameters(&self) -> &ParameterState {
        &self.params
    }

    pub const fn notes(&self) -> &NoteState {
        &self.notes
    }

    /// Number of frames rendered so far (wrapping)
    pub const fn frame_count(&self) -> u32 {
        self.clock.frame()
    }

    pub fn foreground_mode(&self) -> Option<ForegroundMode> {
        ForegroundMode::from_raw(self.params.fg_mode)
    }

    pub fn background_mode(&self) -> BackgroundMode {
        BackgroundMode::from_raw_or_flat(self.params.bg_mode)
    }

    /// Spacing between repeated lines on the active strip
    pub fn line_offset(&self) -> usize {
        self.params.line_offset(self.led_count)
    }
}

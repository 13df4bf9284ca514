//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{EventReceiver, LightEngine, OutputDriver};

/// Default target frame rate (30 FPS).
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Number of MIDI events applied before rendering.
    pub events_applied: usize,
}

/// Portable frame scheduler that manages timing without async.
///
/// Each tick drains the event queue into the engine, renders one frame and
/// hands it to the output driver. Events are only applied between frames.
///
/// # Usage
///
/// ```ignore
/// static EVENTS: EventChannel<32> = EventChannel::new();
///
/// let engine = LightEngine::<108>::new(&EngineConfig::default());
/// let mut scheduler = FrameScheduler::new(engine, EVENTS.receiver(), driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const EVENT_CHANNEL_SIZE: usize>
{
    output: O,
    engine: LightEngine<MAX_LEDS>,
    events: EventReceiver<'a, EVENT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const EVENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, MAX_LEDS, EVENT_CHANNEL_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (30 FPS) for frame timing.
    pub fn new(
        engine: LightEngine<MAX_LEDS>,
        events: EventReceiver<'a, EVENT_CHANNEL_SIZE>,
        driver: O,
    ) -> Self {
        Self::with_frame_duration(engine, events, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: LightEngine<MAX_LEDS>,
        events: EventReceiver<'a, EVENT_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            events,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Applies every queued MIDI event
    /// 3. Renders the frame and writes it to the output driver
    /// 4. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // More than two frames behind: skip the backlog instead of bursting
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let events_applied = self.engine.process_pending(&self.events);
        let frame = self.engine.render();
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            events_applied,
        }
    }

    /// Get a reference to the engine.
    pub const fn engine(&self) -> &LightEngine<MAX_LEDS> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub const fn engine_mut(&mut self) -> &mut LightEngine<MAX_LEDS> {
        &mut self.engine
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }
}

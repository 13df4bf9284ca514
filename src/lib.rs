#![no_std]

pub mod channel;
pub mod clock;
pub mod color;
pub mod engine;
pub mod event;
pub mod frame_scheduler;
pub mod metadata;
pub mod mode;
pub mod note;
pub mod parameter;
pub mod tables;

pub use channel::{TryReceiveError, TrySendError};
pub use clock::{FrameClock, FrameRng};
pub use engine::{DEFAULT_LED_COUNT, EngineConfig, LightEngine};
pub use event::{EventChannel, EventReceiver, EventSender, MidiEvent};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use metadata::{ENGINE_NAME, ENGINE_VERSION, Layer, ParameterInfo, write_template_csv};
pub use mode::{BackgroundMode, ForegroundMode};
pub use note::NoteState;
pub use parameter::{Parameter, ParameterState};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push rendered frames to hardware or a preview.
/// Conversion to RGB, gamma and dithering belong to the driver.
pub trait OutputDriver {
    /// Write one frame of HSV pixels
    fn write(&mut self, pixels: &[Hsv]);
}

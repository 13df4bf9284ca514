//! MIDI events understood by the engine
//!
//! Transports (USB, RTP-MIDI, a plugin host) hand the engine one of three
//! channel voice messages. [`MidiEvent::from_bytes`] decodes raw 3-byte
//! messages for transports that only see the wire format.

use crate::channel::{Channel, Receiver, Sender};

const STATUS_NOTE_OFF: u8 = 0x80;
const STATUS_NOTE_ON: u8 = 0x90;
const STATUS_CONTROL_CHANGE: u8 = 0xB0;

const DATA_MASK: u8 = 0x7F;

/// A channel voice message. Channels are numbered 1-16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    ControlChange { channel: u8, control: u8, value: u8 },
    NoteOn { channel: u8, note: u8, velocity: u8 },
    NoteOff { channel: u8, note: u8, velocity: u8 },
}

impl MidiEvent {
    /// Decode a status byte and its two data bytes.
    ///
    /// Note-On with velocity 0 is reported as Note-Off. Messages other than
    /// Note-On, Note-Off and Control-Change yield `None`.
    pub fn from_bytes(status: u8, data1: u8, data2: u8) -> Option<Self> {
        let channel = (status & 0x0F) + 1;
        let data1 = data1 & DATA_MASK;
        let data2 = data2 & DATA_MASK;

        match status & 0xF0 {
            STATUS_NOTE_OFF => Some(Self::NoteOff {
                channel,
                note: data1,
                velocity: data2,
            }),
            STATUS_NOTE_ON if data2 == 0 => Some(Self::NoteOff {
                channel,
                note: data1,
                velocity: 0,
            }),
            STATUS_NOTE_ON => Some(Self::NoteOn {
                channel,
                note: data1,
                velocity: data2,
            }),
            STATUS_CONTROL_CHANGE => Some(Self::ControlChange {
                channel,
                control: data1,
                value: data2,
            }),
            _ => None,
        }
    }

    /// Encode back into wire bytes
    pub const fn to_bytes(self) -> [u8; 3] {
        let (kind, channel, data1, data2) = match self {
            Self::ControlChange {
                channel,
                control,
                value,
            } => (STATUS_CONTROL_CHANGE, channel, control, value),
            Self::NoteOn {
                channel,
                note,
                velocity,
            } => (STATUS_NOTE_ON, channel, note, velocity),
            Self::NoteOff {
                channel,
                note,
                velocity,
            } => (STATUS_NOTE_OFF, channel, note, velocity),
        };
        [
            kind | (channel.saturating_sub(1) & 0x0F),
            data1 & DATA_MASK,
            data2 & DATA_MASK,
        ]
    }

    pub const fn channel(self) -> u8 {
        match self {
            Self::ControlChange { channel, .. }
            | Self::NoteOn { channel, .. }
            | Self::NoteOff { channel, .. } => channel,
        }
    }
}

/// Type alias for event sender
pub type EventSender<'a, const SIZE: usize> = Sender<'a, SIZE>;

/// Type alias for event receiver
pub type EventReceiver<'a, const SIZE: usize> = Receiver<'a, SIZE>;

/// Type alias for the event channel
pub type EventChannel<const SIZE: usize> = Channel<SIZE>;

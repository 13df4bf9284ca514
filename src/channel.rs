//! Bounded MIDI event queue for `no_std` environments.
//!
//! Lets a transport running in an interrupt or on another thread hand
//! events to the render loop. The queue is a `heapless::Deque` guarded by a
//! critical section; the render loop drains it between frames, so a frame is
//! never rendered against half-applied state.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::event::MidiEvent;

/// Returned when the queue is full. Carries the rejected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub MidiEvent);

/// Returned when the queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe FIFO of [`MidiEvent`]s.
pub struct Channel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<MidiEvent, SIZE>>>,
}

impl<const SIZE: usize> Channel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for transports. Any number may coexist.
    pub const fn sender(&self) -> Sender<'_, SIZE> {
        Sender { channel: self }
    }

    /// Handle for the render loop.
    pub const fn receiver(&self) -> Receiver<'_, SIZE> {
        Receiver { channel: self }
    }

    pub fn try_send(&self, event: MidiEvent) -> Result<(), TrySendError> {
        let result = critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        });
        #[cfg(feature = "esp32-log")]
        if let Err(TrySendError(event)) = result {
            println!("[events] queue full, dropped {:?}", event);
        }
        result
    }

    pub fn try_receive(&self) -> Result<MidiEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for Channel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`Channel`]
#[derive(Clone, Copy)]
pub struct Sender<'a, const SIZE: usize> {
    channel: &'a Channel<SIZE>,
}

impl<const SIZE: usize> Sender<'_, SIZE> {
    pub fn try_send(&self, event: MidiEvent) -> Result<(), TrySendError> {
        self.channel.try_send(event)
    }

    pub fn control_change(&self, channel: u8, control: u8, value: u8) -> Result<(), TrySendError> {
        self.try_send(MidiEvent::ControlChange {
            channel,
            control,
            value,
        })
    }

    pub fn note_on(&self, channel: u8, note: u8, velocity: u8) -> Result<(), TrySendError> {
        self.try_send(MidiEvent::NoteOn {
            channel,
            note,
            velocity,
        })
    }

    pub fn note_off(&self, channel: u8, note: u8, velocity: u8) -> Result<(), TrySendError> {
        self.try_send(MidiEvent::NoteOff {
            channel,
            note,
            velocity,
        })
    }
}

/// Receiving half of a [`Channel`]
#[derive(Clone, Copy)]
pub struct Receiver<'a, const SIZE: usize> {
    channel: &'a Channel<SIZE>,
}

impl<const SIZE: usize> Receiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<MidiEvent, TryReceiveError> {
        self.channel.try_receive()
    }
}

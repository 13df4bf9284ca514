//! Held-note tracking
//!
//! Keeps the velocity of every MIDI note and, per channel, the note that the
//! channel is currently holding. A channel whose held note is 0 counts as
//! idle, so note 0 can never light a drive.

use crate::tables::CHANNEL_COUNT;

/// Number of MIDI note numbers
pub const NOTE_COUNT: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteState {
    velocity: [u8; NOTE_COUNT],
    current_note: [u8; CHANNEL_COUNT + 1],
}

impl Default for NoteState {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteState {
    pub const fn new() -> Self {
        Self {
            velocity: [0; NOTE_COUNT],
            current_note: [0; CHANNEL_COUNT + 1],
        }
    }

    /// Record a Note-On. Returns `false` if the note number is out of range.
    pub fn note_on(&mut self, channel: u8, note: u8, velocity: u8) -> bool {
        let Some(slot) = self.velocity.get_mut(usize::from(note)) else {
            return false;
        };
        *slot = velocity;
        if let Some(held) = channel_slot(&mut self.current_note, channel) {
            *held = note;
        }
        true
    }

    /// Record a Note-Off. Returns `false` if the note number is out of range.
    pub fn note_off(&mut self, channel: u8, note: u8) -> bool {
        let Some(slot) = self.velocity.get_mut(usize::from(note)) else {
            return false;
        };
        *slot = 0;
        if let Some(held) = channel_slot(&mut self.current_note, channel) {
            if *held == note {
                *held = 0;
            }
        }
        true
    }

    /// Velocity of a note, 0 when released
    pub fn velocity(&self, note: u8) -> u8 {
        self.velocity.get(usize::from(note)).copied().unwrap_or(0)
    }

    /// Note currently held on `channel` (1-16), 0 when idle
    pub fn current_note(&self, channel: u8) -> u8 {
        if channel == 0 {
            return 0;
        }
        self.current_note
            .get(usize::from(channel))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the channel's drive should be lit
    pub fn is_channel_active(&self, channel: u8) -> bool {
        self.current_note(channel) != 0
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.velocity = [0; NOTE_COUNT];
        self.current_note = [0; CHANNEL_COUNT + 1];
    }
}

fn channel_slot(table: &mut [u8; CHANNEL_COUNT + 1], channel: u8) -> Option<&mut u8> {
    if channel == 0 {
        return None;
    }
    table.get_mut(usize::from(channel))
}

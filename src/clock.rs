//! Frame counter and the pseudo-random source derived from it.
//!
//! Randomness never touches OS entropy: the generator is a pure function of
//! the frame number, so two hosts fed the same events render the same frames.

/// Monotonic render counter, wraps on overflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    frame: u32,
}

impl FrameClock {
    pub const fn new() -> Self {
        Self { frame: 0 }
    }

    /// Start counting from a given frame
    pub const fn starting_at(frame: u32) -> Self {
        Self { frame }
    }

    /// Advance by one frame and return the new value
    pub fn tick(&mut self) -> u32 {
        self.frame = self.frame.wrapping_add(1);
        self.frame
    }

    pub const fn frame(self) -> u32 {
        self.frame
    }
}

/// SplitMix64 generator
#[derive(Debug, Clone)]
pub struct FrameRng {
    state: u64,
}

impl FrameRng {
    const GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

    #[allow(clippy::cast_lossless)]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        ((z ^ (z >> 31)) >> 32) as u32
    }

    /// Fair coin flip
    pub const fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

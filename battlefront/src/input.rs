//! Per-frame input, with edge detection for clicks and key presses.
use enumflags2::BitFlags;

use crate::layout::Point;

/// Keys the game responds to.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u16)]
pub enum Key {
    Escape = 0b0_0000_0001,
    Enter = 0b0_0000_0010,
    Up = 0b0_0000_0100,
    Down = 0b0_0000_1000,
    Left = 0b0_0001_0000,
    Right = 0b0_0010_0000,
    /// Randomize the fleet during deployment.
    R = 0b0_0100_0000,
    Shift = 0b0_1000_0000,
    C = 0b1_0000_0000,
}

/// A raw device sample: where the pointer is and what is currently held down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawInput {
    pub pointer: Point,
    pub primary_down: bool,
    pub keys_down: BitFlags<Key>,
}

impl RawInput {
    /// A sample with nothing held.
    pub fn idle(pointer: Point) -> Self {
        Self {
            pointer,
            primary_down: false,
            keys_down: BitFlags::empty(),
        }
    }
}

/// Input as seen by one frame of the dispatcher.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInput {
    pub pointer: Point,
    /// The primary button was released this frame after being pressed.
    pub clicked: bool,
    /// The primary button is currently held.
    pub primary_down: bool,
    /// Keys that went down this frame.
    pub typed: BitFlags<Key>,
    /// Keys currently held.
    pub held: BitFlags<Key>,
}

impl FrameInput {
    /// A frame with no buttons or keys active.
    pub fn idle(pointer: Point) -> Self {
        Self {
            pointer,
            clicked: false,
            primary_down: false,
            typed: BitFlags::empty(),
            held: BitFlags::empty(),
        }
    }

    /// A frame in which a click completes at `pointer`.
    pub fn click(pointer: Point) -> Self {
        Self {
            clicked: true,
            ..Self::idle(pointer)
        }
    }

    /// A frame in which `key` was pressed.
    pub fn key(key: Key, pointer: Point) -> Self {
        Self {
            typed: key.into(),
            held: key.into(),
            ..Self::idle(pointer)
        }
    }

    pub fn typed(&self, key: Key) -> bool {
        self.typed.contains(key)
    }

    pub fn held(&self, key: Key) -> bool {
        self.held.contains(key)
    }
}

/// Converts successive [`RawInput`] samples into [`FrameInput`]s. A click is reported
/// once, on the release that follows a press; holding the button reports nothing.
#[derive(Debug, Clone)]
pub struct InputTracker {
    primary_was_down: bool,
    keys_were_down: BitFlags<Key>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            primary_was_down: false,
            keys_were_down: BitFlags::empty(),
        }
    }

    /// Feed the sample for this frame.
    pub fn sample(&mut self, raw: RawInput) -> FrameInput {
        let clicked = self.primary_was_down && !raw.primary_down;
        let typed = raw.keys_down & !self.keys_were_down;
        self.primary_was_down = raw.primary_down;
        self.keys_were_down = raw.keys_down;
        FrameInput {
            pointer: raw.pointer,
            clicked,
            primary_down: raw.primary_down,
            typed,
            held: raw.keys_down,
        }
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

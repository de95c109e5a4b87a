//! Errors used by the [`StateStack`][super::StateStack].

use thiserror::Error;

use crate::state::Mode;

/// Error returned when popping would remove the last mode on the stack.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot pop {mode:?}, it is the last mode on the stack")]
pub struct StateUnderflow {
    /// The mode that was left in place.
    mode: Mode,
}

impl StateUnderflow {
    pub(super) fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// The entry mode that remains on the stack.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

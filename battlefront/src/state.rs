//! The modes the game can be in and the stack that orders them.
use std::slice;

use log::debug;

use crate::menu::MenuId;

pub use self::errors::StateUnderflow;

mod errors;

/// One exclusive interaction context. Only the mode on top of the [`StateStack`]
/// receives input and is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mode {
    /// The player is viewing the main menu.
    MainMenu,
    /// The in-match menu, opened with escape during play.
    GameMenu,
    HighScores,
    /// Difficulty selection, shown above the main menu.
    Settings,
    /// The player is placing their fleet.
    Deploying,
    /// Players are attacking each other's grids.
    Discovering,
    /// A match finished and the result is on screen.
    EndingGame,
    /// Music selection, shown above the main menu.
    AlteringMusic,
    /// Resolution selection, shown above the main menu.
    AlteringResolution,
    /// The player has quit. Nothing is handled once this is on top.
    Quitting,
}

impl Mode {
    /// The menu levels that handle input in this mode, in the order they are offered a
    /// click. Sub-menus come before the main menu they are drawn over. Non-menu modes
    /// return an empty slice.
    pub fn menus(self) -> &'static [MenuId] {
        match self {
            Mode::MainMenu => &[MenuId::Main],
            Mode::GameMenu => &[MenuId::Game],
            Mode::Settings => &[MenuId::Setup, MenuId::Main],
            Mode::AlteringMusic => &[MenuId::Sound, MenuId::Main],
            Mode::AlteringResolution => &[MenuId::Resolution, MenuId::Main],
            Mode::HighScores
            | Mode::Deploying
            | Mode::Discovering
            | Mode::EndingGame
            | Mode::Quitting => &[],
        }
    }

    /// Returns true if input in this mode is handled by menus.
    pub fn is_menu(self) -> bool {
        !self.menus().is_empty()
    }
}

/// Last-in-first-out stack of [`Mode`]s. Never empty: the entry mode at the bottom can
/// not be popped.
#[derive(Debug, Clone)]
pub struct StateStack {
    modes: Vec<Mode>,
}

impl StateStack {
    /// Create a stack holding only [`Mode::MainMenu`].
    pub fn new() -> Self {
        Self::with_entry(Mode::MainMenu)
    }

    /// Create a stack holding only the given entry mode.
    pub fn with_entry(entry: Mode) -> Self {
        Self {
            modes: vec![entry],
        }
    }

    /// The mode on top of the stack.
    pub fn current(&self) -> Mode {
        // The stack is never empty, so last always exists.
        self.modes[self.modes.len() - 1]
    }

    /// Make `mode` current, keeping everything below it.
    pub fn push(&mut self, mode: Mode) {
        debug!("push {:?} over {:?}", mode, self.current());
        self.modes.push(mode);
    }

    /// Remove the current mode, returning it. Fails without modifying the stack if only
    /// the entry mode remains.
    pub fn pop(&mut self) -> Result<Mode, StateUnderflow> {
        match self.modes.len() {
            1 => Err(StateUnderflow::new(self.current())),
            _ => {
                let popped = self.modes.remove(self.modes.len() - 1);
                debug!("pop {:?}, back to {:?}", popped, self.current());
                Ok(popped)
            }
        }
    }

    /// Replace the current mode with `mode`, returning the replaced one. Replacing the
    /// entry mode is allowed.
    pub fn switch(&mut self, mode: Mode) -> Mode {
        let top = self.modes.len() - 1;
        let old = std::mem::replace(&mut self.modes[top], mode);
        debug!("switch {:?} to {:?}", old, mode);
        old
    }

    /// Number of modes on the stack. Always at least 1.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Iterate the stack from the entry mode to the current mode.
    pub fn iter(&self) -> slice::Iter<Mode> {
        self.modes.iter()
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

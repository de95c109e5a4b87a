//! Errors raised while validating a [`MenuDefinition`][super::MenuDefinition].

use thiserror::Error;

use crate::menu::MenuId;

/// Reason a menu definition was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum MenuError {
    /// A menu has no entries.
    #[error("menu {0:?} has no entries")]
    Empty(MenuId),
    /// Two levels were defined for the same menu.
    #[error("menu {0:?} is defined more than once")]
    Duplicate(MenuId),
    /// A menu required by some mode has no definition.
    #[error("menu {0:?} is not defined")]
    Missing(MenuId),
    /// An entry has a blank label.
    #[error("entry {index} of menu {menu:?} has a blank label")]
    BlankLabel { menu: MenuId, index: usize },
    /// Only sub-menus may be raised above the baseline, and they must be.
    #[error("menu {menu:?} is at level {level}, expected {expected}")]
    Level {
        menu: MenuId,
        level: i32,
        expected: &'static str,
    },
}

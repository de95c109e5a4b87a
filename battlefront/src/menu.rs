//! Declarative menu structure and the button layout used both for drawing and for
//! hit-testing clicks.
//!
//! Each [`MenuLevel`] is a row of buttons laid out left to right from [`MENU_LEFT`].
//! Sub-menus sit `level` rows above the main menu baseline and are shifted right by
//! `x_offset` button pitches so they line up with the main menu entry that opened them.
//! Button positions are scaled by the active resolution but their sizes are not; the
//! backgrounds were drawn around exactly that layout.
use once_cell::sync::Lazy;

use crate::{
    assets::Track,
    difficulty::Difficulty,
    layout::{Point, Rect},
    resolution::{Resolution, ResolutionProfile},
    state::Mode,
};

pub use self::errors::MenuError;

mod errors;

/// Baseline (top edge) of level 0 menus, in design pixels.
pub const MENU_TOP: i32 = 570;
pub const MENU_LEFT: i32 = 40;
pub const MENU_GAP: i32 = 0;
pub const BUTTON_WIDTH: i32 = 120;
pub const BUTTON_HEIGHT: i32 = 20;
/// Horizontal distance between the left edges of adjacent buttons.
pub const BUTTON_SEP: i32 = BUTTON_WIDTH + MENU_GAP;

/// Identifies one menu level.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum MenuId {
    Main,
    Game,
    Setup,
    Sound,
    Resolution,
}

impl MenuId {
    pub const ALL: &'static [MenuId] = &[
        MenuId::Main,
        MenuId::Game,
        MenuId::Setup,
        MenuId::Sound,
        MenuId::Resolution,
    ];

    /// Sub-menus are drawn over the main menu and close when an action is taken or a
    /// click misses them.
    pub fn is_sub_menu(self) -> bool {
        match self {
            MenuId::Main | MenuId::Game => false,
            MenuId::Setup | MenuId::Sound | MenuId::Resolution => true,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// What happens when a menu entry is clicked.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuAction {
    /// Begin a new match with the current difficulty.
    StartMatch,
    /// Push the given mode.
    Open(Mode),
    /// Pop the current mode.
    Close,
    /// Leave the game menu and continue the match.
    ReturnToMatch,
    /// Abandon the match and go back to the main menu.
    Surrender,
    /// Leave the game entirely.
    Quit,
    SetDifficulty(Difficulty),
    StopMusic,
    PlayMusic(Track),
    SetResolution(Resolution),
}

/// A single labeled button.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

/// A button as it appears on screen for a particular resolution.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Button<'a> {
    pub label: &'a str,
    pub rect: Rect,
    /// The primary button is held over this button.
    pub highlighted: bool,
}

/// One row of buttons.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MenuLevel {
    id: MenuId,
    level: i32,
    x_offset: i32,
    entries: Vec<MenuEntry>,
}

impl MenuLevel {
    /// Create an empty level. Entries are added with [`MenuLevel::entry`].
    pub fn new(id: MenuId, level: i32, x_offset: i32) -> Self {
        Self {
            id,
            level,
            x_offset,
            entries: Vec::new(),
        }
    }

    /// Append an entry, returning the level for chaining.
    pub fn entry(mut self, label: impl Into<String>, action: MenuAction) -> Self {
        self.entries.push(MenuEntry {
            label: label.into(),
            action,
        });
        self
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    /// Rows above the main menu baseline.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Button pitches this level is shifted right by.
    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Device rectangle of the button at `index`. Only the position is scaled.
    pub fn button_rect(&self, index: usize, profile: &ResolutionProfile) -> Rect {
        let left = MENU_LEFT + BUTTON_SEP * (index as i32 + self.x_offset);
        let top = MENU_TOP - (MENU_GAP + BUTTON_HEIGHT) * self.level;
        Rect::new(
            profile.scale(left),
            profile.scale(top),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    /// Index of the first declared button containing `point`, if any.
    pub fn hit_test(&self, point: Point, profile: &ResolutionProfile) -> Option<usize> {
        (0..self.entries.len()).find(|&i| self.button_rect(i, profile).contains(point))
    }

    /// Get the buttons of this level laid out for `profile`. `held` is the pointer
    /// position if the primary button is down, used to highlight the pressed button.
    pub fn buttons<'a>(
        &'a self,
        profile: &ResolutionProfile,
        held: Option<Point>,
    ) -> impl 'a + Iterator<Item = Button<'a>> {
        let profile = *profile;
        self.entries.iter().enumerate().map(move |(i, entry)| {
            let rect = self.button_rect(i, &profile);
            Button {
                label: &entry.label,
                rect,
                highlighted: held.map_or(false, |p| rect.contains(p)),
            }
        })
    }
}

/// The complete, validated set of menus.
#[derive(Debug, Clone)]
pub struct MenuDefinition {
    /// Levels ordered by [`MenuId`].
    levels: Vec<MenuLevel>,
}

impl MenuDefinition {
    /// Validate and build a definition. Every [`MenuId`] must be defined exactly once,
    /// with at least one entry, no blank labels, top level menus on level 0 and
    /// sub-menus above it.
    pub fn new(mut levels: Vec<MenuLevel>) -> Result<Self, MenuError> {
        levels.sort_by_key(|level| level.id);
        for pair in levels.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(MenuError::Duplicate(pair[0].id));
            }
        }
        for &id in MenuId::ALL {
            if !levels.iter().any(|level| level.id == id) {
                return Err(MenuError::Missing(id));
            }
        }
        for level in levels.iter() {
            if level.entries.is_empty() {
                return Err(MenuError::Empty(level.id));
            }
            if let Some(index) = level.entries.iter().position(|e| e.label.trim().is_empty()) {
                return Err(MenuError::BlankLabel {
                    menu: level.id,
                    index,
                });
            }
            match (level.id.is_sub_menu(), level.level) {
                (false, 0) => {}
                (false, other) => {
                    return Err(MenuError::Level {
                        menu: level.id,
                        level: other,
                        expected: "0",
                    })
                }
                (true, l) if l > 0 => {}
                (true, other) => {
                    return Err(MenuError::Level {
                        menu: level.id,
                        level: other,
                        expected: "greater than 0",
                    })
                }
            }
        }
        Ok(Self { levels })
    }

    /// The standard menus of the game.
    pub fn standard() -> &'static MenuDefinition {
        static STANDARD: Lazy<MenuDefinition> = Lazy::new(|| {
            MenuDefinition::new(standard_levels()).expect("standard menus are well formed")
        });
        &STANDARD
    }

    /// Get the level for the given menu.
    pub fn level(&self, id: MenuId) -> &MenuLevel {
        &self.levels[id.index()]
    }
}

fn standard_levels() -> Vec<MenuLevel> {
    use self::MenuAction::*;
    vec![
        MenuLevel::new(MenuId::Main, 0, 0)
            .entry("PLAY", StartMatch)
            .entry("SETUP", Open(Mode::Settings))
            .entry("SCORES", Open(Mode::HighScores))
            .entry("SOUND", Open(Mode::AlteringMusic))
            .entry("RESOLUTION", Open(Mode::AlteringResolution))
            .entry("QUIT", Close),
        MenuLevel::new(MenuId::Game, 0, 0)
            .entry("RETURN", ReturnToMatch)
            .entry("SURRENDER", Surrender)
            .entry("QUIT", Quit),
        MenuLevel::new(MenuId::Setup, 3, 0)
            .entry("EASY", SetDifficulty(Difficulty::Easy))
            .entry("MEDIUM", SetDifficulty(Difficulty::Medium))
            .entry("HARD", SetDifficulty(Difficulty::Hard)),
        MenuLevel::new(MenuId::Sound, 3, 1)
            .entry("MUTE", StopMusic)
            .entry("TORTUGA", PlayMusic(Track::Tortuga))
            .entry("DRUMS", PlayMusic(Track::Drums))
            .entry("HORROR", PlayMusic(Track::Horror)),
        Resolution::ALL.iter().fold(
            MenuLevel::new(MenuId::Resolution, 3, 3),
            |level, &res| level.entry(res.label(), SetResolution(res)),
        ),
    ]
}

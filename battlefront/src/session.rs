//! The game context passed through every frame: mode stack, display and difficulty
//! settings, the match timer and deployment selection.
use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::{
    assets::{Sound, Track},
    deploy::{DeployPanel, Heading, ShipKind},
    difficulty::Difficulty,
    input::{FrameInput, Key},
    layout::Cell,
    menu::{Button, MenuDefinition, MenuId},
    resolution::{Resolution, ResolutionProfile},
    settings::Settings,
    state::{Mode, StateStack},
    timer::{ElapsedTime, MatchTimer},
    watchdog,
};

/// Size of a player grid in cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridSize {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
}

impl GridSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.within(self.width, self.height)
    }
}

/// Reason a ship could not be placed where the player clicked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlacementError {
    #[error("ship would extend off the grid")]
    OffGrid,
    #[error("ship overlaps another ship")]
    Overlap,
}

/// Result of the human player's shot, including the opponent's reply if the turn
/// passed to it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    Miss,
    Hit,
    /// The shot sank a ship.
    Destroyed(ShipKind),
    /// The cell had already been shot; nothing changed.
    ShotAlready,
    /// The human player sank the last enemy ship.
    Won,
    /// The opponent sank the human player's last ship.
    Lost,
}

/// The grid, fleet and attack rules of a match. Called synchronously by the
/// dispatcher; implementations decide how ships occupy cells and how the opponent
/// replies.
pub trait Battlefield {
    /// Set up fresh grids for a new match.
    fn start_match(&mut self, difficulty: Difficulty);

    /// Size of the human player's own grid.
    fn player_grid(&self) -> GridSize;

    /// Size of the opponent's grid, the one the human attacks.
    fn enemy_grid(&self) -> GridSize;

    /// Place or move a ship of the human player's fleet.
    fn place_ship(&mut self, ship: ShipKind, cell: Cell, heading: Heading) -> Result<(), PlacementError>;

    /// Place every ship of the human player's fleet randomly.
    fn randomize_fleet(&mut self);

    /// Returns true once every ship of the human player's fleet is placed.
    fn fleet_ready(&self) -> bool;

    /// Fire at an in-bounds cell of the enemy grid.
    fn attack(&mut self, cell: Cell) -> AttackOutcome;
}

/// Requests the session makes of the outside world during a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Effect {
    PlayMusic(Track),
    StopMusic,
    PlaySound(Sound),
    /// The window should change to the given resolution.
    Resize(Resolution),
    /// Escape was pressed on the main menu. The caller decides whether to quit, for
    /// example by calling [`Session::shutdown`].
    QuitRequested,
    /// A match ended.
    MatchOver { human_won: bool },
    /// The last mode was closed; the application should exit.
    Shutdown,
}

/// Everything the frame loop needs to know about the game outside of the battlefield.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) stack: StateStack,
    pub(crate) menus: &'static MenuDefinition,
    pub(crate) resolution: Resolution,
    pub(crate) difficulty: Difficulty,
    pub(crate) timer: MatchTimer,
    pub(crate) deploy: DeployPanel,
    pub(crate) human_lost: bool,
    pub(crate) message: Option<String>,
    pub(crate) running: bool,
}

impl Session {
    /// Start a session at the main menu.
    pub fn new(resolution: Resolution, difficulty: Difficulty) -> Self {
        Self {
            stack: StateStack::new(),
            menus: MenuDefinition::standard(),
            resolution,
            difficulty,
            timer: MatchTimer::new(),
            deploy: DeployPanel::new(),
            human_lost: false,
            message: None,
            running: true,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.resolution, settings.difficulty)
    }

    /// Run one frame: dispatch input for the current mode, then apply the match time
    /// limit.
    pub fn frame<B: Battlefield + ?Sized>(
        &mut self,
        input: &FrameInput,
        now: Duration,
        battlefield: &mut B,
    ) -> Vec<Effect> {
        let mut effects = self.handle_input(input, now, battlefield);
        effects.extend(self.update(now));
        effects
    }

    /// Check the match time limit. Only has an effect while discovering.
    pub fn update(&mut self, now: Duration) -> Option<Effect> {
        if !self.running || self.current() != Mode::Discovering {
            return None;
        }
        let elapsed = self.timer.elapsed(now);
        if !watchdog::check(self.difficulty, elapsed).expired() {
            return None;
        }
        info!(
            "time limit of {} reached on {}, match lost",
            ElapsedTime(self.difficulty.time_limit()),
            self.difficulty
        );
        self.human_lost = true;
        let mut ignored = Vec::new();
        self.pop(now, &mut ignored);
        self.push(Mode::EndingGame, now);
        Some(Effect::MatchOver { human_won: false })
    }

    /// The mode receiving input.
    pub fn current(&self) -> Mode {
        self.stack.current()
    }

    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    /// Returns false once the last mode was closed or the player quit.
    pub fn is_running(&self) -> bool {
        self.running && self.current() != Mode::Quitting
    }

    /// End the session, e.g. in answer to [`Effect::QuitRequested`].
    pub fn shutdown(&mut self) {
        info!("shutting down from {:?}", self.current());
        self.running = false;
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn profile(&self) -> ResolutionProfile {
        self.resolution.profile()
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        if resolution != self.resolution {
            info!("resolution {} -> {}", self.resolution, resolution);
        }
        self.resolution = resolution;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("difficulty set to {}", difficulty);
        self.difficulty = difficulty;
    }

    /// Whether the human player lost the last match, either on the board or on time.
    pub fn human_lost(&self) -> bool {
        self.human_lost
    }

    /// Status line shown under the field.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn deploy_panel(&self) -> &DeployPanel {
        &self.deploy
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        self.timer.elapsed(now)
    }

    /// Elapsed match time as `MM:SS`.
    pub fn elapsed_label(&self, now: Duration) -> String {
        ElapsedTime(self.elapsed(now)).to_string()
    }

    /// Shift+C held during discovery reveals the enemy fleet.
    pub fn reveal_enemy(&self, input: &FrameInput) -> bool {
        self.current() == Mode::Discovering && input.held(Key::Shift) && input.held(Key::C)
    }

    /// Menu buttons to draw for the current mode. The main menu is listed before any
    /// sub-menu drawn over it.
    pub fn visible_buttons(&self, input: &FrameInput) -> Vec<(MenuId, Button<'_>)> {
        let profile = self.profile();
        let held = if input.primary_down {
            Some(input.pointer)
        } else {
            None
        };
        let menus = self.menus;
        self.current()
            .menus()
            .iter()
            .rev()
            .flat_map(move |&id| {
                menus
                    .level(id)
                    .buttons(&profile, held)
                    .map(move |button| (id, button))
            })
            .collect()
    }

    /// Push a mode and keep the timer running only while discovering.
    pub(crate) fn push(&mut self, mode: Mode, now: Duration) {
        self.stack.push(mode);
        self.sync_timer(now);
    }

    /// Pop the current mode. Popping the entry mode ends the session.
    pub(crate) fn pop(&mut self, now: Duration, effects: &mut Vec<Effect>) {
        match self.stack.pop() {
            Ok(_) => self.sync_timer(now),
            Err(err) => {
                info!("{}, shutting down", err);
                self.running = false;
                effects.push(Effect::Shutdown);
            }
        }
    }

    pub(crate) fn switch(&mut self, mode: Mode, now: Duration) {
        self.stack.switch(mode);
        self.sync_timer(now);
    }

    fn sync_timer(&mut self, now: Duration) {
        if self.current() == Mode::Discovering {
            self.timer.start(now);
        } else {
            self.timer.pause(now);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Resolution::default(), Difficulty::default())
    }
}

//! Front end state machine for a game of Battleships.
//!
//! The front end is a stack of [`Mode`]s. Each frame, the input for that frame is
//! routed to the handler for the mode on top of the stack, which may push, pop or
//! replace modes, call into the [`Battlefield`] holding the actual grids, and return
//! [`Effect`]s for the caller to carry out (music, window size, shutdown).
//!
//! Everything that is drawn or clicked is laid out in an 800x600 design space and
//! mapped to the device through a [`ResolutionProfile`]. While the player is hunting
//! enemy ships, a watchdog ends the match once the time allowed by the chosen
//! [`Difficulty`] runs out.
//!
//! ```
//! use std::time::Duration;
//! use battlefront::{Session, Mode, Resolution, Difficulty};
//!
//! let session = Session::new(Resolution::Res1024x768, Difficulty::Hard);
//! assert_eq!(session.current(), Mode::MainMenu);
//! assert_eq!(session.elapsed_label(Duration::from_secs(0)), "00:00");
//! ```

pub use self::{
    difficulty::Difficulty,
    input::{FrameInput, InputTracker, Key, RawInput},
    layout::{Cell, Point, Rect},
    resolution::{Resolution, ResolutionProfile},
    session::{AttackOutcome, Battlefield, Effect, GridSize, PlacementError, Session},
    settings::{Settings, SettingsError},
    state::{Mode, StateStack},
    timer::{Clock, ManualClock, SystemClock},
};

pub mod assets;
pub mod deploy;
pub mod difficulty;
mod dispatch;
pub mod input;
pub mod layout;
pub mod menu;
pub mod resolution;
pub mod session;
pub mod settings;
pub mod state;
pub mod timer;
pub mod watchdog;

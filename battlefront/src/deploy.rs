//! Controls on the fleet deployment screen.
use crate::{
    layout::{Point, Rect},
    resolution::ResolutionProfile,
};

pub const SHIPS_TOP: i32 = 98;
pub const SHIPS_LEFT: i32 = 20;
/// Vertical space taken by one ship in the roster.
pub const SHIPS_HEIGHT: i32 = 90;
pub const SHIPS_WIDTH: i32 = 300;

pub const TOP_BUTTONS_TOP: i32 = 72;
pub const TOP_BUTTONS_HEIGHT: i32 = 46;

pub const PLAY_BUTTON_LEFT: i32 = 693;
pub const PLAY_BUTTON_WIDTH: i32 = 80;

pub const UP_DOWN_BUTTON_LEFT: i32 = 410;
pub const LEFT_RIGHT_BUTTON_LEFT: i32 = 350;
pub const DIR_BUTTONS_WIDTH: i32 = 47;

pub const RANDOM_BUTTON_LEFT: i32 = 547;
pub const RANDOM_BUTTON_WIDTH: i32 = 51;

/// Ships in the fleet, in roster order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    Tug,
    Submarine,
    Destroyer,
    Battleship,
    AircraftCarrier,
}

impl ShipKind {
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::Tug,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Battleship,
        ShipKind::AircraftCarrier,
    ];

    /// Number of cells the ship occupies.
    pub fn len(self) -> i32 {
        match self {
            ShipKind::Tug => 1,
            ShipKind::Submarine => 2,
            ShipKind::Destroyer => 3,
            ShipKind::Battleship => 4,
            ShipKind::AircraftCarrier => 5,
        }
    }
}

/// Direction a ship extends from its anchor cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Heading {
    LeftRight,
    UpDown,
}

/// A control on the deployment screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DeployTarget {
    Ship(ShipKind),
    Play,
    UpDown,
    LeftRight,
    Randomize,
}

fn scaled(profile: &ResolutionProfile, left: i32, top: i32, width: i32, height: i32) -> Rect {
    Rect::new(
        profile.scale(left),
        profile.scale(top),
        profile.scale(width),
        profile.scale(height),
    )
}

/// Device rectangle of a control.
pub fn target_rect(target: DeployTarget, profile: &ResolutionProfile) -> Rect {
    match target {
        DeployTarget::Ship(ship) => {
            let index = ShipKind::ALL
                .iter()
                .position(|&s| s == ship)
                .unwrap_or_default() as i32;
            scaled(
                profile,
                SHIPS_LEFT,
                SHIPS_TOP + index * SHIPS_HEIGHT,
                SHIPS_WIDTH,
                SHIPS_HEIGHT,
            )
        }
        DeployTarget::Play => scaled(
            profile,
            PLAY_BUTTON_LEFT,
            TOP_BUTTONS_TOP,
            PLAY_BUTTON_WIDTH,
            TOP_BUTTONS_HEIGHT,
        ),
        DeployTarget::UpDown => scaled(
            profile,
            UP_DOWN_BUTTON_LEFT,
            TOP_BUTTONS_TOP,
            DIR_BUTTONS_WIDTH,
            TOP_BUTTONS_HEIGHT,
        ),
        DeployTarget::LeftRight => scaled(
            profile,
            LEFT_RIGHT_BUTTON_LEFT,
            TOP_BUTTONS_TOP,
            DIR_BUTTONS_WIDTH,
            TOP_BUTTONS_HEIGHT,
        ),
        DeployTarget::Randomize => scaled(
            profile,
            RANDOM_BUTTON_LEFT,
            TOP_BUTTONS_TOP,
            RANDOM_BUTTON_WIDTH,
            TOP_BUTTONS_HEIGHT,
        ),
    }
}

/// Selection state of the deployment screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DeployPanel {
    pub selected: ShipKind,
    pub heading: Heading,
}

impl DeployPanel {
    pub fn new() -> Self {
        Self {
            selected: ShipKind::Tug,
            heading: Heading::LeftRight,
        }
    }

    /// The control under `point`, if any. Roster entries are checked first, then the
    /// buttons along the top. The play button is only reported when `ready` is true.
    pub fn target(&self, point: Point, profile: &ResolutionProfile, ready: bool) -> Option<DeployTarget> {
        let ships = ShipKind::ALL.iter().map(|&ship| DeployTarget::Ship(ship));
        let buttons = [
            DeployTarget::Play,
            DeployTarget::UpDown,
            DeployTarget::LeftRight,
            DeployTarget::Randomize,
        ];
        ships
            .chain(buttons.iter().copied())
            .filter(|&target| ready || target != DeployTarget::Play)
            .find(|&target| target_rect(target, profile).contains(point))
    }
}

impl Default for DeployPanel {
    fn default() -> Self {
        Self::new()
    }
}

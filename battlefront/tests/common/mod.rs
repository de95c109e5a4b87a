//! Shared helpers for driving a [`Session`] from integration tests.
#![allow(dead_code)]

use std::{collections::VecDeque, time::Duration};

use battlefront::{
    deploy::{target_rect, DeployTarget, Heading, ShipKind},
    layout::cell_rect,
    menu::{MenuDefinition, MenuId},
    AttackOutcome, Battlefield, Cell, Clock, Difficulty, Effect, FrameInput, GridSize, Key,
    ManualClock, PlacementError, Point, Session,
};

/// Battlefield double that records every call and answers from canned values.
#[derive(Debug)]
pub struct FakeField {
    pub grid: GridSize,
    pub started: Vec<Difficulty>,
    pub placed: Vec<(ShipKind, Cell, Heading)>,
    pub reject_placement: Option<PlacementError>,
    pub randomized: usize,
    pub ready: bool,
    pub attacks: Vec<Cell>,
    pub outcomes: VecDeque<AttackOutcome>,
}

impl FakeField {
    pub fn new() -> Self {
        Self {
            grid: GridSize::new(10, 10),
            started: Vec::new(),
            placed: Vec::new(),
            reject_placement: None,
            randomized: 0,
            ready: false,
            attacks: Vec::new(),
            outcomes: VecDeque::new(),
        }
    }
}

impl Battlefield for FakeField {
    fn start_match(&mut self, difficulty: Difficulty) {
        self.started.push(difficulty);
    }

    fn player_grid(&self) -> GridSize {
        self.grid
    }

    fn enemy_grid(&self) -> GridSize {
        self.grid
    }

    fn place_ship(&mut self, ship: ShipKind, cell: Cell, heading: Heading) -> Result<(), PlacementError> {
        if let Some(err) = self.reject_placement {
            return Err(err);
        }
        self.placed.push((ship, cell, heading));
        Ok(())
    }

    fn randomize_fleet(&mut self) {
        self.randomized += 1;
        self.ready = true;
    }

    fn fleet_ready(&self) -> bool {
        self.ready
    }

    fn attack(&mut self, cell: Cell) -> AttackOutcome {
        self.attacks.push(cell);
        self.outcomes.pop_front().unwrap_or(AttackOutcome::Miss)
    }
}

/// A session, its battlefield and a clock that only moves when told to.
pub struct Harness {
    pub session: Session,
    pub field: FakeField,
    pub clock: ManualClock,
}

impl Harness {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            field: FakeField::new(),
            clock: ManualClock::new(),
        }
    }

    pub fn frame(&mut self, input: FrameInput) -> Vec<Effect> {
        let now = self.clock.now();
        self.session.frame(&input, now, &mut self.field)
    }

    pub fn idle(&mut self) -> Vec<Effect> {
        self.frame(FrameInput::idle(Point::default()))
    }

    pub fn click(&mut self, point: Point) -> Vec<Effect> {
        self.frame(FrameInput::click(point))
    }

    pub fn key(&mut self, key: Key) -> Vec<Effect> {
        self.frame(FrameInput::key(key, Point::default()))
    }

    pub fn wait(&mut self, secs: u64) {
        self.clock.advance(Duration::from_secs(secs));
    }

    /// Click the centre of the named button of `menu` at the current resolution.
    pub fn click_button(&mut self, menu: MenuId, label: &str) -> Vec<Effect> {
        let point = button_center(&self.session, menu, label);
        self.click(point)
    }

    pub fn click_control(&mut self, target: DeployTarget) -> Vec<Effect> {
        let point = target_rect(target, &self.session.profile()).center();
        self.click(point)
    }

    pub fn click_cell(&mut self, cell: Cell) -> Vec<Effect> {
        let point = cell_rect(cell, &self.session.profile()).center();
        self.click(point)
    }

    /// From the main menu, start a match and deploy a random fleet, leaving the session
    /// in discovery.
    pub fn start_discovering(&mut self) {
        self.click_button(MenuId::Main, "PLAY");
        self.key(Key::R);
        self.click_control(DeployTarget::Play);
    }
}

pub fn button_center(session: &Session, menu: MenuId, label: &str) -> Point {
    let level = MenuDefinition::standard().level(menu);
    let index = level
        .entries()
        .iter()
        .position(|entry| entry.label == label)
        .unwrap_or_else(|| panic!("no button {} in {:?}", label, menu));
    level.button_rect(index, &session.profile()).center()
}

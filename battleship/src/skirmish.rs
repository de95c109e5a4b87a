//! A small in-memory match against a computer opponent, used to drive the front end
//! from the command line.
use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use rand::{seq::SliceRandom, Rng};

use battlefront::{
    deploy::{Heading, ShipKind},
    AttackOutcome, Battlefield, Cell, Difficulty, GridSize, PlacementError,
};

/// Both grids are the standard 10x10.
const GRID: GridSize = GridSize {
    width: 10,
    height: 10,
};

/// Result of a single shot at a fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Shot {
    Repeat,
    Miss,
    Hit,
    Sunk(ShipKind),
}

/// One player's ships and the shots fired at them.
#[derive(Debug, Default, Clone)]
struct Fleet {
    ships: HashMap<ShipKind, Vec<Cell>>,
    shots: HashSet<Cell>,
}

impl Fleet {
    fn footprint(ship: ShipKind, anchor: Cell, heading: Heading) -> impl Iterator<Item = Cell> {
        (0..ship.len()).map(move |i| match heading {
            Heading::LeftRight => Cell::new(anchor.row, anchor.col + i),
            Heading::UpDown => Cell::new(anchor.row + i, anchor.col),
        })
    }

    /// Place `ship`, moving it if it was already placed.
    fn place(&mut self, ship: ShipKind, anchor: Cell, heading: Heading) -> Result<(), PlacementError> {
        let cells: Vec<_> = Self::footprint(ship, anchor, heading).collect();
        if !cells.iter().all(|&cell| GRID.contains(cell)) {
            return Err(PlacementError::OffGrid);
        }
        let overlaps = cells
            .iter()
            .any(|&cell| matches!(self.occupant(cell), Some(other) if other != ship));
        if overlaps {
            return Err(PlacementError::Overlap);
        }
        self.ships.insert(ship, cells);
        Ok(())
    }

    /// Randomly place every ship that has not been placed yet.
    fn randomize(&mut self, rng: &mut impl Rng) {
        for &ship in ShipKind::ALL {
            while !self.ships.contains_key(&ship) {
                let anchor = Cell::new(rng.gen_range(0, GRID.height), rng.gen_range(0, GRID.width));
                let heading = if rng.gen() {
                    Heading::LeftRight
                } else {
                    Heading::UpDown
                };
                let _ = self.place(ship, anchor, heading);
            }
        }
    }

    fn ready(&self) -> bool {
        ShipKind::ALL.iter().all(|ship| self.ships.contains_key(ship))
    }

    fn occupant(&self, cell: Cell) -> Option<ShipKind> {
        self.ships
            .iter()
            .find(|(_, cells)| cells.contains(&cell))
            .map(|(&ship, _)| ship)
    }

    fn sunk(&self, ship: ShipKind) -> bool {
        self.ships
            .get(&ship)
            .map_or(false, |cells| cells.iter().all(|cell| self.shots.contains(cell)))
    }

    fn shoot(&mut self, cell: Cell) -> Shot {
        if !self.shots.insert(cell) {
            return Shot::Repeat;
        }
        match self.occupant(cell) {
            None => Shot::Miss,
            Some(ship) if self.sunk(ship) => Shot::Sunk(ship),
            Some(_) => Shot::Hit,
        }
    }

    fn defeated(&self) -> bool {
        ShipKind::ALL.iter().all(|&ship| self.sunk(ship))
    }

    /// Rows of the grid as displayable cells. Ships are only shown if `reveal` is set or
    /// they have been hit.
    fn rows(&self, reveal: bool) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = GridCell>> {
        (0..GRID.height).map(move |row| {
            (0..GRID.width).map(move |col| {
                let cell = Cell::new(row, col);
                let shot = self.shots.contains(&cell);
                match self.occupant(cell) {
                    None if shot => GridCell::Miss,
                    None => GridCell::Water,
                    Some(ship) if self.sunk(ship) => GridCell::Sunk(ship),
                    Some(ship) if shot => GridCell::Hit(ship),
                    Some(ship) if reveal => GridCell::Ship(ship),
                    Some(_) => GridCell::Water,
                }
            })
        })
    }
}

/// What a cell looks like on a printed board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GridCell {
    Water,
    Miss,
    Ship(ShipKind),
    Hit(ShipKind),
    Sunk(ShipKind),
}

fn abbrev(ship: ShipKind) -> &'static str {
    match ship {
        ShipKind::Tug => "tg",
        ShipKind::Submarine => "ss",
        ShipKind::Destroyer => "dd",
        ShipKind::Battleship => "bb",
        ShipKind::AircraftCarrier => "cv",
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridCell::Water => f.pad("~~"),
            GridCell::Miss => f.pad("x"),
            GridCell::Ship(ship) => f.pad(abbrev(ship)),
            GridCell::Hit(ship) => f.pad(&format!("x{}", abbrev(ship))),
            GridCell::Sunk(ship) => f.pad(&format!("X{}", abbrev(ship))),
        }
    }
}

/// A human player against a computer opponent that fires back after every shot.
#[derive(Debug)]
pub struct Skirmish<R> {
    rng: R,
    difficulty: Difficulty,
    human: Fleet,
    computer: Fleet,
}

impl<R: Rng> Skirmish<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            difficulty: Difficulty::default(),
            human: Fleet::default(),
            computer: Fleet::default(),
        }
    }

    /// Rows of the human player's own grid.
    pub fn human_rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = GridCell>> {
        self.human.rows(true)
    }

    /// Rows of the computer's grid, hiding unhit ships unless `reveal` is set.
    pub fn computer_rows(
        &self,
        reveal: bool,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = GridCell>> {
        self.computer.rows(reveal)
    }

    /// Pick the computer's next target. Above easy, cells next to a hit on a ship that
    /// is still afloat are tried first.
    fn computer_target(&mut self) -> Option<Cell> {
        let human = &self.human;
        let open = |cell: &Cell| GRID.contains(*cell) && !human.shots.contains(cell);
        let mut candidates = Vec::new();
        if self.difficulty != Difficulty::Easy {
            for &shot in human.shots.iter() {
                match human.occupant(shot) {
                    Some(ship) if !human.sunk(ship) => {}
                    _ => continue,
                }
                let neighbors = [
                    Cell::new(shot.row - 1, shot.col),
                    Cell::new(shot.row + 1, shot.col),
                    Cell::new(shot.row, shot.col - 1),
                    Cell::new(shot.row, shot.col + 1),
                ];
                candidates.extend(neighbors.iter().copied().filter(|cell| open(cell)));
            }
        }
        if candidates.is_empty() {
            candidates = (0..GRID.height)
                .flat_map(|row| (0..GRID.width).map(move |col| Cell::new(row, col)))
                .filter(|cell| open(cell))
                .collect();
        }
        candidates.choose(&mut self.rng).copied()
    }
}

impl<R: Rng> Battlefield for Skirmish<R> {
    fn start_match(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.human = Fleet::default();
        self.computer = Fleet::default();
        self.computer.randomize(&mut self.rng);
    }

    fn player_grid(&self) -> GridSize {
        GRID
    }

    fn enemy_grid(&self) -> GridSize {
        GRID
    }

    fn place_ship(&mut self, ship: ShipKind, cell: Cell, heading: Heading) -> Result<(), PlacementError> {
        self.human.place(ship, cell, heading)
    }

    fn randomize_fleet(&mut self) {
        self.human.randomize(&mut self.rng);
    }

    fn fleet_ready(&self) -> bool {
        self.human.ready()
    }

    fn attack(&mut self, cell: Cell) -> AttackOutcome {
        let outcome = match self.computer.shoot(cell) {
            Shot::Repeat => return AttackOutcome::ShotAlready,
            _ if self.computer.defeated() => return AttackOutcome::Won,
            Shot::Miss => AttackOutcome::Miss,
            Shot::Hit => AttackOutcome::Hit,
            Shot::Sunk(ship) => AttackOutcome::Destroyed(ship),
        };
        if let Some(target) = self.computer_target() {
            self.human.shoot(target);
            if self.human.defeated() {
                return AttackOutcome::Lost;
            }
        }
        outcome
    }
}

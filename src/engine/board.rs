//! Board state: cell matrix, placed vessels and shot resolution.

use std::collections::BTreeSet;
use std::fmt;

use crate::engine::common::{PlacementError, ShotError, ShotResult};
use crate::engine::config::BOARD_SIZE;
use crate::engine::coordinate::Coordinate;
use crate::engine::vessel::Vessel;

/// State of a single cell. Transitions only go `Empty -> Occupied`,
/// `Occupied -> Hit` or `Empty -> Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied,
    Hit,
    Miss,
}

impl Cell {
    /// Hit and miss cells cannot be shot again.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Occupied => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
        }
    }
}

/// One player's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    vessels: Vec<Vessel>,
    hidden: bool,
    live_ships: usize,
}

impl Board {
    /// Create an empty board. `hidden` only affects how non-owners see it.
    pub fn new(hidden: bool) -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            vessels: Vec::new(),
            hidden,
            live_ships: 0,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Placed vessels, sunk ones included.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels not yet sunk.
    pub fn live_ships(&self) -> usize {
        self.live_ships
    }

    /// Returns `true` when every placed vessel is sunk.
    pub fn all_sunk(&self) -> bool {
        self.live_ships == 0
    }

    /// State of the cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        coord.index().map(|(r, c)| self.cells[r][c])
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        coord.index().is_none()
    }

    /// All cells touching `vessel`, diagonals included. May contain cells off
    /// the board and cells of the vessel itself.
    pub fn contour(&self, vessel: &Vessel) -> BTreeSet<Coordinate> {
        vessel.cells().flat_map(Coordinate::neighbors).collect()
    }

    /// Place `vessel` if it fits on the board without touching another
    /// vessel. Either all of it is placed or nothing changes.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        for cell in vessel.cells() {
            if self.is_out_of_bounds(cell) {
                return Err(PlacementError::OutOfBounds);
            }
            for placed in &self.vessels {
                if placed.contains(cell) {
                    return Err(PlacementError::Overlaps);
                }
                if self.contour(placed).contains(&cell) {
                    return Err(PlacementError::TouchesAnother);
                }
            }
        }
        for (r, c) in vessel.cells().filter_map(Coordinate::index) {
            self.cells[r][c] = Cell::Occupied;
        }
        self.vessels.push(vessel);
        self.live_ships += 1;
        Ok(())
    }

    /// Resolve a shot at `coord`.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotResult, ShotError> {
        let (r, c) = coord.index().ok_or(ShotError::OutOfBounds(coord))?;
        if self.cells[r][c].is_resolved() {
            return Err(ShotError::AlreadyTargeted(coord));
        }
        match self.vessels.iter_mut().find(|v| v.contains(coord)) {
            Some(vessel) => {
                self.cells[r][c] = Cell::Hit;
                let sunk = vessel.register_hit();
                if sunk {
                    self.live_ships -= 1;
                }
                Ok(ShotResult::Hit { sunk })
            }
            None => {
                self.cells[r][c] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
        }
    }

    /// Text view of the board. Vessels of a hidden board are concealed
    /// unless the viewer owns it.
    pub fn render(&self, viewer_is_owner: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal: viewer_is_owner || !self.hidden,
        }
    }
}

/// Printable board as seen by a particular viewer.
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl BoardView<'_> {
    /// Cell as this viewer sees it.
    pub fn visible_cell(&self, row: usize, col: usize) -> Cell {
        match self.board.cells[row][col] {
            Cell::Occupied if !self.reveal => Cell::Empty,
            cell => cell,
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col + 1)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.visible_cell(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

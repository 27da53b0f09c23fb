//! Vessel geometry and damage tracking.

use crate::engine::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the x axis from the bow.
    Horizontal,
    /// Extends along the y axis from the bow.
    Vertical,
}

impl Orientation {
    /// Unit step from one cell of a vessel to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A straight line of cells starting at `bow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    bow: Coordinate,
    orientation: Orientation,
    hits_remaining: usize,
}

impl Vessel {
    /// Create an undamaged vessel. Geometry is fixed from here on.
    pub fn new(length: usize, bow: Coordinate, orientation: Orientation) -> Self {
        Self {
            length,
            bow,
            orientation,
            hits_remaining: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn hits_remaining(&self) -> usize {
        self.hits_remaining
    }

    pub fn is_sunk(&self) -> bool {
        self.hits_remaining == 0
    }

    /// Occupied cells from the bow outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dx * i, dy * i))
    }

    /// Returns `true` if `coord` is one of the vessel's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record a hit on one segment. Returns `true` if this hit sank the vessel.
    ///
    /// Callers guarantee each cell is hit at most once.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.hits_remaining = self.hits_remaining.saturating_sub(1);
        self.hits_remaining == 0
    }
}

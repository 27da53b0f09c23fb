//! Board positions.

use std::fmt;

use crate::engine::config::BOARD_SIZE;

/// A position on the board. `x` is the column, `y` is the row.
///
/// Components are signed so that neighbours of edge cells and user input
/// such as `0 0` can be represented and rejected as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by (`dx`, `dy`).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The eight surrounding coordinates, including ones off the board.
    pub fn neighbors(self) -> [Coordinate; 8] {
        [
            self.offset(-1, -1),
            self.offset(0, -1),
            self.offset(1, -1),
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(-1, 1),
            self.offset(0, 1),
            self.offset(1, 1),
        ]
    }

    /// `(row, col)` array indices, or `None` when off the board.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        let in_range = |v: i32| v >= 0 && (v as usize) < BOARD_SIZE;
        if in_range(self.x) && in_range(self.y) {
            Some((self.y as usize, self.x as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinate {
    /// Formats as 1-based `row col`, the way players type coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.y + 1, self.x + 1)
    }
}

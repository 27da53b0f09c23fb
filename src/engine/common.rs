//! Common types for the engine: shot results and board errors.

use std::fmt;

use crate::engine::coordinate::Coordinate;

/// Outcome of a shot that landed on an untouched cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// A vessel segment was hit. `sunk` is set when it was the last one.
    Hit { sunk: bool },
    /// No vessel at the target.
    Miss,
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit { .. })
    }
}

/// Reasons a shot is rejected. A rejected shot leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the board.
    OutOfBounds(Coordinate),
    /// Target was already resolved to a hit or a miss.
    AlreadyTargeted(Coordinate),
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds(c) => write!(f, "Shot at {} is off the board", c),
            ShotError::AlreadyTargeted(c) => write!(f, "Cell {} was already shot at", c),
        }
    }
}

impl std::error::Error for ShotError {}

/// Reasons a vessel cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A cell of the vessel lies outside the board.
    OutOfBounds,
    /// A cell of the vessel is occupied by another vessel.
    Overlaps,
    /// A cell of the vessel touches another vessel, diagonals included.
    TouchesAnother,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Vessel placement is out of bounds"),
            PlacementError::Overlaps => write!(f, "Vessel placement overlaps another vessel"),
            PlacementError::TouchesAnother => write!(f, "Vessel placement touches another vessel"),
        }
    }
}

impl std::error::Error for PlacementError {}

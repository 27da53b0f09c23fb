//! Game engine: board model, fleet generation and the turn controller.

pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod generator;
pub mod vessel;

// Re-export commonly used types
pub use board::{Board, BoardView, Cell};
pub use common::{PlacementError, ShotError, ShotResult};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{Game, GameError, GameObserver, SilentObserver, Side, Turn};
pub use generator::{random_board, random_vessel};
pub use vessel::{Orientation, Vessel};

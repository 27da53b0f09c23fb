//! Targeting strategies.
//!
//! A [`Player`] chooses where to shoot next. The turn controller only talks
//! to this trait:
//! - AiPlayer: uniformly random targets
//! - CliPlayer: coordinates typed by a person

use rand::rngs::SmallRng;

use crate::engine::{Board, Coordinate};

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target on the opponent's `enemy` board.
    ///
    /// The coordinate is not required to be valid; the turn controller
    /// rejects bad shots and asks again.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate>;
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::{parse_coordinates, CliPlayer, InputError};

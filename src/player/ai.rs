use rand::rngs::SmallRng;
use rand::Rng;

use crate::engine::{Board, Coordinate, BOARD_SIZE};

use super::Player;

/// Automated player shooting at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are rejected by the board
/// and the turn controller asks again.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Uniformly random coordinate on the board.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    Coordinate::new(
        rng.random_range(0..BOARD_SIZE as i32),
        rng.random_range(0..BOARD_SIZE as i32),
    )
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coordinate> {
        Ok(random_target(rng))
    }
}

//! Random fleet placement.
//!
//! Each vessel gets up to [`PLACEMENT_ATTEMPTS`] random positions. When one
//! runs out of attempts the whole board is thrown away and generation starts
//! over; there is no backtracking between vessels.

use log::{debug, trace};
use rand::Rng;

use crate::engine::board::Board;
use crate::engine::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS};
use crate::engine::coordinate::Coordinate;
use crate::engine::vessel::{Orientation, Vessel};

/// Build a board holding the full [`FLEET`].
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, hidden: bool) -> Board {
    let mut rounds = 1usize;
    loop {
        if let Some(board) = try_fill(rng, hidden) {
            debug!("generated board after {} round(s)", rounds);
            return board;
        }
        trace!("placement attempts exhausted, discarding board");
        rounds += 1;
    }
}

/// A vessel of `length` at a uniformly random bow and orientation.
/// The vessel may stick out of the board; placement rejects it then.
pub fn random_vessel<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vessel {
    let bow = Coordinate::new(
        rng.random_range(0..BOARD_SIZE as i32),
        rng.random_range(0..BOARD_SIZE as i32),
    );
    let orientation = if rng.random() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    Vessel::new(length, bow, orientation)
}

fn try_fill<R: Rng + ?Sized>(rng: &mut R, hidden: bool) -> Option<Board> {
    let mut board = Board::new(hidden);
    for &length in FLEET.iter() {
        let placed = (0..PLACEMENT_ATTEMPTS)
            .any(|_| board.place_vessel(random_vessel(rng, length)).is_ok());
        if !placed {
            return None;
        }
    }
    Some(board)
}

//! Turn controller: alternates shots between the two sides until one fleet
//! is gone.

use std::fmt;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;
use serde::Serialize;

use crate::engine::board::Board;
use crate::engine::common::{ShotError, ShotResult};
use crate::engine::coordinate::Coordinate;
use crate::engine::generator::random_board;
use crate::player::Player;

/// The two participants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Automated => write!(f, "computer"),
        }
    }
}

/// Errors that stop a game before it has a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The configured shot limit was used up.
    ShotLimitReached(usize),
    /// `step` was called after the game ended.
    Finished(Side),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ShotLimitReached(n) => write!(f, "No winner after {} shots", n),
            GameError::Finished(side) => write!(f, "Game already won by the {}", side),
        }
    }
}

impl std::error::Error for GameError {}

/// What a single [`Game::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The shot hit; the same side shoots again.
    Retained(ShotResult),
    /// The shot missed; the turn passes to the other side.
    Passed,
    /// The shot was rejected; the same side must choose again.
    Rejected(ShotError),
    /// The shot sank the last vessel of the opponent.
    Won(Side),
}

/// Output collaborator notified as the game progresses. Every hook defaults
/// to doing nothing.
pub trait GameObserver {
    /// Called before every shot with the human's and the computer's boards.
    fn boards(&mut self, _human: &Board, _automated: &Board) {}

    /// `side` is about to shoot.
    fn turn(&mut self, _side: Side) {}

    /// A shot by `side` at `target` resolved.
    fn shot(&mut self, _side: Side, _target: Coordinate, _result: ShotResult) {}

    /// A shot by `side` was rejected.
    fn rejected(&mut self, _side: Side, _error: ShotError) {}

    /// The game is over.
    fn winner(&mut self, _side: Side) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct SilentObserver;

impl GameObserver for SilentObserver {}

/// Game state: both boards, both players and whose turn it is.
pub struct Game {
    human_board: Board,
    automated_board: Board,
    human: Box<dyn Player>,
    automated: Box<dyn Player>,
    active: Side,
    rng: SmallRng,
    shots: usize,
    shot_limit: Option<usize>,
    winner: Option<Side>,
}

impl Game {
    /// Start a game with freshly generated boards and a random first side.
    /// The computer's board is hidden from the human.
    pub fn new(human: Box<dyn Player>, automated: Box<dyn Player>, mut rng: SmallRng) -> Self {
        let human_board = random_board(&mut rng, false);
        let automated_board = random_board(&mut rng, true);
        let active = if rng.random() {
            Side::Human
        } else {
            Side::Automated
        };
        info!("{} shoots first", active);
        Self::with_boards(human_board, automated_board, human, automated, active, rng)
    }

    /// Start a game from prepared boards with `active` shooting first.
    pub fn with_boards(
        human_board: Board,
        automated_board: Board,
        human: Box<dyn Player>,
        automated: Box<dyn Player>,
        active: Side,
        rng: SmallRng,
    ) -> Self {
        Self {
            human_board,
            automated_board,
            human,
            automated,
            active,
            rng,
            shots: 0,
            shot_limit: None,
            winner: None,
        }
    }

    /// Give up with [`GameError::ShotLimitReached`] once `limit` shots were
    /// taken without a winner. Rejected shots count too.
    pub fn with_shot_limit(mut self, limit: usize) -> Self {
        self.shot_limit = Some(limit);
        self
    }

    /// Side whose turn it is.
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Automated => &self.automated_board,
        }
    }

    /// Shots taken so far, rejected ones included.
    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Play one shot for the active side.
    pub fn step(&mut self, observer: &mut dyn GameObserver) -> anyhow::Result<Turn> {
        if let Some(side) = self.winner {
            return Err(GameError::Finished(side).into());
        }
        if let Some(limit) = self.shot_limit {
            if self.shots >= limit {
                return Err(GameError::ShotLimitReached(limit).into());
            }
        }

        observer.boards(&self.human_board, &self.automated_board);
        let side = self.active;
        observer.turn(side);

        let (player, target_board) = match side {
            Side::Human => (&mut self.human, &mut self.automated_board),
            Side::Automated => (&mut self.automated, &mut self.human_board),
        };
        let target = player.select_target(&mut self.rng, target_board)?;
        self.shots += 1;

        let turn = match target_board.shoot(target) {
            Ok(result) => {
                debug!("{} shot at {}: {:?}", side, target, result);
                observer.shot(side, target, result);
                if result.is_hit() {
                    Turn::Retained(result)
                } else {
                    self.active = side.opponent();
                    Turn::Passed
                }
            }
            Err(error) => {
                debug!("{} shot rejected: {}", side, error);
                observer.rejected(side, error);
                Turn::Rejected(error)
            }
        };

        if let Some(winner) = self.check_winner() {
            info!("{} wins after {} shots", winner, self.shots);
            self.winner = Some(winner);
            observer.winner(winner);
            return Ok(Turn::Won(winner));
        }
        Ok(turn)
    }

    /// Play until one side has no vessels left.
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> anyhow::Result<Side> {
        loop {
            if let Turn::Won(side) = self.step(observer)? {
                return Ok(side);
            }
        }
    }

    fn check_winner(&self) -> Option<Side> {
        if self.human_board.all_sunk() {
            Some(Side::Automated)
        } else if self.automated_board.all_sunk() {
            Some(Side::Human)
        } else {
            None
        }
    }
}

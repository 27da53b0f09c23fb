//! Two-sided sea battle on a 6×6 board: a person against a computer that
//! shoots at random.

pub mod cli;
pub mod engine;
mod logging;
pub mod player;

pub use cli::ConsoleObserver;
pub use engine::*;
pub use logging::init_logging;
pub use player::{AiPlayer, CliPlayer, Player};

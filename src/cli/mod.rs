//! Command-line output: console rendering of the game as it is played.

pub mod interface;

pub use interface::ConsoleObserver;

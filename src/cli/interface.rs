use std::io::{self, Stdout, Write};

use log::warn;

use crate::engine::{Board, Coordinate, GameObserver, ShotError, ShotResult, Side};

/// Prints boards and game events to a writer.
///
/// The human's board is always shown in full. The computer's board is
/// rendered from the human's point of view, so its vessels stay hidden.
pub struct ConsoleObserver<W> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the opening message.
    pub fn greet(&mut self) {
        self.emit(format_args!(
            "Sea battle! Sink the computer's fleet before it sinks yours.\n\
             Shoot by typing a row and a column, e.g. `3 4`.\n\
             Legend: O=water  ■=ship  X=hit  T=miss"
        ));
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            warn!("failed to write game output: {}", e);
        }
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn boards(&mut self, human: &Board, automated: &Board) {
        self.emit(format_args!("Your board:\n{}", human.render(true)));
        self.emit(format_args!("Computer's board:\n{}", automated.render(false)));
    }

    fn turn(&mut self, side: Side) {
        match side {
            Side::Human => self.emit(format_args!("Your turn")),
            Side::Automated => self.emit(format_args!("Computer's turn")),
        }
    }

    fn shot(&mut self, side: Side, target: Coordinate, result: ShotResult) {
        let outcome = match result {
            ShotResult::Hit { sunk: true } => "hit and sunk!",
            ShotResult::Hit { sunk: false } => "hit!",
            ShotResult::Miss => "miss",
        };
        match side {
            Side::Human => self.emit(format_args!("You shot at {}: {}", target, outcome)),
            Side::Automated => {
                self.emit(format_args!("Computer shot at {}: {}", target, outcome))
            }
        }
    }

    fn rejected(&mut self, side: Side, error: ShotError) {
        match side {
            Side::Human => self.emit(format_args!("{}, try again", error)),
            Side::Automated => self.emit(format_args!("Computer: {}", error)),
        }
    }

    fn winner(&mut self, side: Side) {
        match side {
            Side::Human => self.emit(format_args!("You win!")),
            Side::Automated => self.emit(format_args!("The computer wins!")),
        }
    }
}

//! Interactive player reading coordinates from a line-oriented input.

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::engine::{Board, Coordinate};

use super::Player;

/// Problems with a line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line did not hold exactly two tokens.
    TokenCount(usize),
    /// A token was not a non-negative whole number.
    NotANumber(String),
    /// The input reached end of file.
    Closed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::TokenCount(n) => {
                write!(f, "Enter exactly two numbers, got {}", n)
            }
            InputError::NotANumber(token) => {
                write!(f, "'{}' is not a number - use digits 1 to 6", token)
            }
            InputError::Closed => write!(f, "Input closed"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a 1-based `row col` pair into a 0-based [`Coordinate`].
///
/// Range is not checked here: `0 0` or `7 1` parse fine and are rejected
/// when the shot is taken.
pub fn parse_coordinates(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::TokenCount(tokens.len()));
    }
    let number = |token: &str| -> Result<i32, InputError> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber(token.to_string()));
        }
        token
            .parse()
            .map_err(|_| InputError::NotANumber(token.to_string()))
    };
    let row = number(tokens[0])?;
    let col = number(tokens[1])?;
    Ok(Coordinate::new(col - 1, row - 1))
}

/// Player that asks a person for every shot.
pub struct CliPlayer<I, O> {
    input: I,
    output: O,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its input and output.
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Enter coordinates (row col): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::Closed.into());
            }
            match parse_coordinates(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_based_row_then_column() {
        assert_eq!(parse_coordinates("1 1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coordinates("  2\t5 \n"), Ok(Coordinate::new(4, 1)));
    }

    #[test]
    fn zero_parses_to_off_board_coordinate() {
        assert_eq!(parse_coordinates("0 3"), Ok(Coordinate::new(2, -1)));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(parse_coordinates(""), Err(InputError::TokenCount(0)));
        assert_eq!(parse_coordinates("3"), Err(InputError::TokenCount(1)));
        assert_eq!(parse_coordinates("1 2 3"), Err(InputError::TokenCount(3)));
    }

    #[test]
    fn rejects_signs_and_letters() {
        assert_eq!(
            parse_coordinates("-1 2"),
            Err(InputError::NotANumber("-1".to_string()))
        );
        assert_eq!(
            parse_coordinates("1 +2"),
            Err(InputError::NotANumber("+2".to_string()))
        );
        assert_eq!(
            parse_coordinates("a b"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_coordinates("1 99999999999"),
            Err(InputError::NotANumber("99999999999".to_string()))
        );
    }
}

//! Move input parsing and validation.

use std::str::FromStr;

use common::Square;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H][1-8])([a-hA-H][1-8])$").expect("COORD_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// A move given as source and destination squares, e.g. `e2e4`.
    Coordinate { from: Square, to: Square },
    /// Let the engine pick the move.
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("engine") {
            return Ok(MoveInput::UseEngine);
        }

        if let Some(caps) = COORD_RE.captures(trimmed) {
            let squares = (
                Square::from_algebraic(&caps[1]),
                Square::from_algebraic(&caps[2]),
            );
            if let (Some(from), Some(to)) = squares {
                return Ok(MoveInput::Coordinate { from, to });
            }
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Parses a whitespace separated list of moves such as `"e2e4 e7e5"`.
pub fn parse_move_list(input: &str) -> Result<Vec<MoveInput>, InputError> {
    input.split_whitespace().map(str::parse).collect()
}

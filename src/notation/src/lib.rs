#![warn(clippy::pedantic)]

//! Move notation: whitespace separated tokens such as `R`, `U2` or `F'`, each
//! naming one entry of the move catalog.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use log::trace;
use pest::{Parser, error::InputLocation};
use pest_derive::Parser;
use rubik_core::{Cube, Face, MOVES, Turn};
use thiserror::Error;

#[derive(Parser)]
#[grammar = "./notation.pest"]
struct NotationParser;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Unknown move token `{token}` at offset {offset}")]
    UnknownMoveToken { token: String, offset: usize },
}

/// One face turn as written in notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveToken {
    pub face: Face,
    pub turn: Turn,
}

impl MoveToken {
    #[must_use]
    pub fn new(face: Face, turn: Turn) -> Self {
        MoveToken { face, turn }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        MoveToken::new(self.face, self.turn.inverse())
    }

    /// The catalog entry for this token.
    #[must_use]
    pub fn cube(self) -> Cube {
        MOVES.get(self.face, self.turn).cube
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

/// A parsed sequence of face turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm(Vec<MoveToken>);

impl Algorithm {
    #[must_use]
    pub fn moves(&self) -> &[MoveToken] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sequence that undoes this one: every turn inverted, in reverse
    /// order.
    #[must_use]
    pub fn inverse(&self) -> Algorithm {
        self.0.iter().rev().map(|token| token.inverse()).collect()
    }

    /// Fold the catalog entries over `apply`, starting from the solved cube.
    #[must_use]
    pub fn to_cube(&self) -> Cube {
        self.0
            .iter()
            .fold(Cube::SOLVED, |cube, token| cube.apply(&token.cube()))
    }
}

impl FromIterator<MoveToken> for Algorithm {
    fn from_iter<T: IntoIterator<Item = MoveToken>>(iter: T) -> Self {
        Algorithm(iter.into_iter().collect())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for Algorithm {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a notation string. Tokens must be separated by whitespace.
///
/// # Errors
///
/// `UnknownMoveToken` for the first whitespace separated word that is not a
/// catalog move name.
pub fn parse(notation: &str) -> Result<Algorithm, NotationError> {
    let pairs = NotationParser::parse(Rule::algorithm, notation).map_err(|err| {
        let position = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        let (offset, token) = token_at(notation, position);
        NotationError::UnknownMoveToken {
            token: token.to_owned(),
            offset,
        }
    })?;

    let mut moves = vec![];
    for pair in pairs.flatten().filter(|pair| pair.as_rule() == Rule::token) {
        let offset = pair.as_span().start();
        let name = pair.as_str();
        let move_ = MOVES
            .find(name)
            .ok_or_else(|| NotationError::UnknownMoveToken {
                token: name.to_owned(),
                offset,
            })?;
        trace!("Parsed move token `{name}` at offset {offset}");
        moves.push(MoveToken::new(move_.face, move_.turn));
    }

    Ok(Algorithm(moves))
}

/// The separators `WHITESPACE` accepts in `notation.pest`.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// The separator delimited word around byte `position`, with its offset.
fn token_at(input: &str, position: usize) -> (usize, &str) {
    let position = position.min(input.len());
    // Errors reported on the gap before a word belong to that word
    let position = input[position..]
        .char_indices()
        .find(|&(_, c)| !is_separator(c))
        .map_or(position, |(i, _)| position + i);

    let start = input[..position]
        .char_indices()
        .rev()
        .find(|&(_, c)| is_separator(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let end = input[start..]
        .char_indices()
        .find(|&(_, c)| is_separator(c))
        .map_or(input.len(), |(i, _)| start + i);

    (start, &input[start..end])
}

/// Parse a notation string and apply it to the solved cube.
///
/// # Errors
///
/// See [`parse`].
pub fn apply_algorithm(notation: &str) -> Result<Cube, NotationError> {
    Ok(parse(notation)?.to_cube())
}

/// Name a path of single-move cubes, or `None` if some cube is not a catalog
/// move.
#[must_use]
pub fn to_algorithm(path: &[Cube]) -> Option<Algorithm> {
    path.iter()
        .map(|cube| {
            MOVES
                .find_cube(cube)
                .map(|move_| MoveToken::new(move_.face, move_.turn))
        })
        .collect()
}

use crate::chess::{ParseSquareError, Square};
use derive_more::{DebugCustom, Display, Error, From};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A chess move in [pure coordinate notation].
///
/// A move carries no information about the piece moved or captured,
/// that is derived from the [`Board`][`crate::chess::Board`] it is played on.
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move, {_0}")]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "failed to parse move, expected exactly four characters")]
    #[from(ignore)]
    InvalidLength,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = match s.char_indices().nth(2) {
            Some((i, _)) if s.chars().count() == 4 => i,
            _ => return Err(ParseMoveError::InvalidLength),
        };

        Ok(Move(s[..i].parse()?, s[i..].parse()?))
    }
}

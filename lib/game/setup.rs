use crate::chess::{Board, Color};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// The configuration a [`Game`][`crate::game::Game`] starts from.
///
/// Parsed from and printed as [RON], e.g. `(board: "8/8/8/8/8/8/8/K6k", turn: black)`.
/// Omitted fields take their default value.
///
/// [RON]: https://github.com/ron-rs/ron
#[derive(Debug, Clone, Eq, PartialEq, Hash, Arbitrary, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Setup {
    /// The initial piece placement.
    pub board: Board,

    /// The side to move first.
    pub turn: Color,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            board: Board::initial(),
            turn: Color::White,
        }
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Setup`] failed.
#[derive(Debug, Display, Clone, PartialEq, Error, From)]
#[display(fmt = "failed to parse setup")]
pub struct ParseSetupError(ron::error::SpannedError);

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

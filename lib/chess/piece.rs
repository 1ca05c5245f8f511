use crate::chess::{Color, ParseRoleError, Role};
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Pieces are values, moving one places a copy on the destination
/// [`Square`][`crate::chess::Square`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub struct Piece {
    role: Role,
    color: Color,
    moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    pub fn new(role: Role, color: Color) -> Self {
        Piece {
            role,
            color,
            moved: false,
        }
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this piece has moved since the start of the game.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// A copy of this piece flagged as having moved.
    pub fn moved(self) -> Self {
        Piece {
            moved: true,
            ..self
        }
    }

    /// A copy of this piece with another [`Role`].
    pub fn promoted(self, role: Role) -> Self {
        Piece { role, ..self }
    }

    fn glyph(&self) -> char {
        use Color::*;
        use Role::*;
        match (self.role, self.color) {
            (Pawn, White) => '♙',
            (Knight, White) => '♘',
            (Bishop, White) => '♗',
            (Rook, White) => '♖',
            (Queen, White) => '♕',
            (King, White) => '♔',
            (Pawn, Black) => '♟',
            (Knight, Black) => '♞',
            (Bishop, Black) => '♝',
            (Rook, Black) => '♜',
            (Queen, Black) => '♛',
            (King, Black) => '♚',
        }
    }
}

/// Prints the FEN letter, or the unicode glyph in alternate form.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return write!(f, "{}", self.glyph());
        }

        match self.color {
            Color::White => write!(f, "{}", self.role.to_string().to_uppercase()),
            Color::Black => write!(f, "{}", self.role),
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse piece")]
pub struct ParsePieceError(ParseRoleError);

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ParseRoleError.into());
        };

        let mut buffer = [0; 4];
        let role = c.to_ascii_lowercase().encode_utf8(&mut buffer).parse()?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Piece::new(role, color))
    }
}

use crate::chess::{Color, ParsePieceError, Piece, Role, Square};
use crate::game::Game;
use derive_more::{DebugCustom, Display, Error, From};
use proptest::{prelude::*, strategy::Map};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// The chess board.
///
/// This type does not validate whether the placement it holds is reachable
/// under the rules of chess, boards may hold any number of kings.
#[derive(DebugCustom, Copy, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Board({self})")]
pub struct Board([Option<Piece>; 64]);

impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = Map<<Game as Arbitrary>::Strategy, fn(Game) -> Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        any::<Game>().prop_map(|g| *g.board())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board([None; 64])
    }

    /// The standard initial setup, where no piece has moved yet.
    pub fn initial() -> Self {
        use Role::*;
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Self::empty();
        for c in Color::iter() {
            for (col, &r) in (0..8).zip(&back) {
                board.0[(c.back_row() * 8 + col) as usize] = Some(Piece::new(r, c));
                board.0[(c.pawn_row() * 8 + col) as usize] = Some(Piece::new(Pawn, c));
            }
        }

        board
    }

    /// An iterator over all pieces on the board in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self[sq]?)))
    }

    /// [`Square`]s occupied by a [`Color`].
    pub fn by_color(&self, c: Color) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |(_, p)| p.color() == c)
            .map(|(sq, _)| sq)
    }

    /// [`Square`] occupied by the king of a [`Color`], if any.
    ///
    /// If there are several, the first one in row-major order.
    pub fn king(&self, c: Color) -> Option<Square> {
        self.iter()
            .find(|(_, p)| p.role() == Role::King && p.color() == c)
            .map(|(sq, _)| sq)
    }

    /// Whether there is no piece on the given [`Square`].
    pub fn is_empty(&self, sq: Square) -> bool {
        self[sq].is_none()
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.index()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.0[sq.index()]
    }
}

/// Prints the piece placement field of the [FEN], or an 8x8 grid in alternate form.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.grid(f);
        }

        let mut skip = 0;
        for sq in Square::iter() {
            match self[sq] {
                None => skip += 1,
                Some(p) => {
                    if skip > 0 {
                        write!(f, "{skip}")?;
                        skip = 0;
                    }

                    write!(f, "{p}")?;
                }
            }

            if sq.col() == 7 {
                if skip > 0 {
                    write!(f, "{skip}")?;
                    skip = 0;
                }

                if sq.row() < 7 {
                    f.write_char('/')?;
                }
            }
        }

        Ok(())
    }
}

impl Board {
    fn grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "     a   b   c   d   e   f   g   h";
        const RULE: &str = "   +---+---+---+---+---+---+---+---+";

        writeln!(f, "{FILES}")?;
        writeln!(f, "{RULE}")?;
        for row in 0..8u8 {
            let rank = 8 - row;
            write!(f, " {rank} |")?;

            for sq in Square::iter().skip(row as usize * 8).take(8) {
                match self[sq] {
                    Some(p) => write!(f, " {p:#} |")?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {rank}")?;
            writeln!(f, "{RULE}")?;
        }

        write!(f, "{FILES}")
    }
}

/// The reason why parsing the piece placement failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "failed to parse piece placement, expected 8 rows")]
    #[from(ignore)]
    InvalidRowCount,
    #[display(fmt = "failed to parse piece placement, expected 8 squares in every row")]
    #[from(ignore)]
    InvalidRowLength,
    #[display(fmt = "failed to parse piece placement, {_0}")]
    InvalidPiece(ParsePieceError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.split('/').collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::InvalidRowCount);
        }

        let mut board = Board::empty();
        for (row, segment) in (0u8..).zip(rows) {
            let mut col = 0u32;
            for c in segment.chars() {
                if let Some(skip @ 1..=8) = c.to_digit(10) {
                    col += skip;
                } else {
                    let mut buffer = [0; 4];
                    let p = c.encode_utf8(&mut buffer).parse()?;
                    let sq = u8::try_from(col).ok().and_then(|c| Square::new(row, c).ok());
                    board[sq.ok_or(ParseBoardError::InvalidRowLength)?] = Some(p);
                    col += 1;
                }

                if col > 8 {
                    return Err(ParseBoardError::InvalidRowLength);
                }
            }

            if col != 8 {
                return Err(ParseBoardError::InvalidRowLength);
            }
        }

        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

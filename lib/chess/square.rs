use derive_more::{Display, Error};
use std::{fmt, str::FromStr};
use test_strategy::Arbitrary;

/// A square on the chess board.
///
/// Squares are addressed by zero-based `(row, col)` coordinates, where row 0 is
/// black's back rank and row 7 is white's, so `(0, 0)` is `a8` and `(7, 4)` is `e1`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub struct Square(#[strategy(0u8..64)] u8);

/// The reason why constructing a [`Square`] from coordinates failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "coordinates `({row}, {col})` are out of range `(0..=7)`")]
pub struct OutOfRange {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column coordinates.
    pub fn new(row: u8, col: u8) -> Result<Self, OutOfRange> {
        if row < 8 && col < 8 {
            Ok(Square(row * 8 + col))
        } else {
            Err(OutOfRange { row, col })
        }
    }

    /// This square's row in the range `(0..=7)`.
    pub fn row(&self) -> u8 {
        self.0 / 8
    }

    /// This square's column in the range `(0..=7)`.
    pub fn col(&self) -> u8 {
        self.0 % 8
    }

    /// This square's index in the range `(0..=63)`, in row-major order.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns an iterator over all squares in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(Square)
    }

    /// The square displaced by `(rows, cols)`, if it is still on the board.
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Self> {
        let row = u8::try_from((self.row() as i8).checked_add(rows)?).ok()?;
        let col = u8::try_from((self.col() as i8).checked_add(cols)?).ok()?;
        Square::new(row, col).ok()
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

/// Prints the square in algebraic notation, e.g. `e4`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col());
        let rank = char::from(b'8' - self.row());
        write!(f, "{file}{rank}")
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square, expected file in the range `('a'..='h')`")]
    InvalidFile,
    #[display(fmt = "failed to parse square, expected rank in the range `('1'..='8')`")]
    InvalidRank,
    #[display(fmt = "failed to parse square, expected exactly two characters")]
    InvalidLength,
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::InvalidLength);
        };

        if !('a'..='h').contains(&file) {
            return Err(ParseSquareError::InvalidFile);
        }

        if !('1'..='8').contains(&rank) {
            return Err(ParseSquareError::InvalidRank);
        }

        let col = file as u8 - b'a';
        let row = b'8' - rank as u8;

        Square::new(row, col).map_err(|_| ParseSquareError::InvalidRank)
    }
}

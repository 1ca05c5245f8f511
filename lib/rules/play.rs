use crate::chess::{Board, Color, Move, Role};
use derive_more::{Display, Error};
use test_strategy::Arbitrary;

/// Represents an illegal [`Move`] on a given [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error)]
#[display(fmt = "move `{_0}` is illegal in this position")]
pub struct IllegalMove(#[error(not(source))] pub Move);

impl Board {
    /// Plays a move without checking whether it is legal and returns the resulting board.
    ///
    /// The piece on the source square, if any, is lifted and placed on the
    /// destination square flagged as having moved. Pawns that reach either
    /// back row are promoted to queens.
    pub fn play(&self, m: Move) -> Board {
        let mut next = *self;

        if let Some(piece) = next[m.whence()].take() {
            let promotion = piece.role() == Role::Pawn && matches!(m.whither().row(), 0 | 7);

            next[m.whither()] = if promotion {
                Some(piece.promoted(Role::Queen).moved())
            } else {
                Some(piece.moved())
            };
        }

        next
    }

    /// Plays a move if it is legal for the side `turn`, otherwise returns the reason why not.
    pub fn try_play(&self, m: Move, turn: Color) -> Result<Board, IllegalMove> {
        if self.is_legal(m, turn) {
            Ok(self.play(m))
        } else {
            Err(IllegalMove(m))
        }
    }
}

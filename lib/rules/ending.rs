use crate::chess::{Board, Color, Outcome};

impl Board {
    /// Whether the side `turn` has at least one legal move.
    pub fn has_legal_move(&self, turn: Color) -> bool {
        self.moves(turn).next().is_some()
    }

    /// Whether the side `turn` is in check and has no legal move.
    pub fn is_checkmate(&self, turn: Color) -> bool {
        self.is_check(turn) && !self.has_legal_move(turn)
    }

    /// Whether the side `turn` is not in check but has no legal move.
    pub fn is_stalemate(&self, turn: Color) -> bool {
        !self.is_check(turn) && !self.has_legal_move(turn)
    }

    /// The [`Outcome`] of the game if it has ended with the side `turn` to move.
    pub fn outcome(&self, turn: Color) -> Option<Outcome> {
        if self.has_legal_move(turn) {
            None
        } else if self.is_check(turn) {
            Some(Outcome::Checkmate(!turn))
        } else {
            Some(Outcome::Stalemate)
        }
    }
}

use crate::chess::{Board, Color, Move, Square};

impl Board {
    /// Whether `m` is a legal move for the side `turn`.
    ///
    /// A move is legal if it moves a piece of the side to move, does not capture
    /// a piece of the same color, is geometrically [reachable](`Board::can_reach`),
    /// and does not leave the mover's own king in check.
    pub fn is_legal(&self, m: Move, turn: Color) -> bool {
        let (whence, whither) = (m.whence(), m.whither());

        let Some(piece) = self[whence] else {
            return false;
        };

        if piece.color() != turn || whence == whither {
            return false;
        }

        if self[whither].is_some_and(|p| p.color() == turn) {
            return false;
        }

        self.can_reach(piece, whence, whither) && !self.play(m).is_check(turn)
    }

    /// Whether the king of the given [`Color`] is attacked.
    ///
    /// Attacks are tested with the geometric movement rules only, since the
    /// legality of a move itself depends on this test. A side without a king
    /// is never in check.
    pub fn is_check(&self, c: Color) -> bool {
        let Some(king) = self.king(c) else {
            return false;
        };

        self.iter()
            .filter(|(_, p)| p.color() != c)
            .any(|(sq, p)| self.can_reach(p, sq, king))
    }

    /// An iterator over all legal moves of the side `turn`.
    pub fn moves(&self, turn: Color) -> impl Iterator<Item = Move> + '_ {
        self.by_color(turn)
            .flat_map(|whence| Square::iter().map(move |whither| Move(whence, whither)))
            .filter(move |&m| self.is_legal(m, turn))
    }

    /// An iterator over the squares the piece on `whence` can legally move to.
    ///
    /// Empty if there is no piece of the side `turn` on `whence`.
    pub fn moves_from(&self, whence: Square, turn: Color) -> impl Iterator<Item = Square> + '_ {
        Square::iter().filter(move |&whither| self.is_legal(Move(whence, whither), turn))
    }
}

use crate::chess::{Board, Color, Piece, Role, Square};

impl Board {
    /// Whether `piece` standing on `whence` could geometrically move to `whither`.
    ///
    /// This accounts for pieces blocking the way of sliders and for the peculiar
    /// movement of pawns, but not for captures of pieces of the same color, nor for
    /// whether the move would leave the mover's king in check.
    pub fn can_reach(&self, piece: Piece, whence: Square, whither: Square) -> bool {
        let rows = whither.row() as i8 - whence.row() as i8;
        let cols = whither.col() as i8 - whence.col() as i8;

        match piece.role() {
            Role::King => rows.abs().max(cols.abs()) == 1,
            Role::Knight => matches!((rows.abs(), cols.abs()), (1, 2) | (2, 1)),
            Role::Rook => self.can_slide_straight(whence, whither, rows, cols),
            Role::Bishop => self.can_slide_diagonally(whence, whither, rows, cols),
            Role::Queen => {
                self.can_slide_straight(whence, whither, rows, cols)
                    || self.can_slide_diagonally(whence, whither, rows, cols)
            }
            Role::Pawn => self.can_push_or_capture(piece.color(), whence, whither, rows, cols),
        }
    }

    fn can_slide_straight(&self, whence: Square, whither: Square, rows: i8, cols: i8) -> bool {
        (rows == 0) != (cols == 0) && self.is_path_clear(whence, whither)
    }

    fn can_slide_diagonally(&self, whence: Square, whither: Square, rows: i8, cols: i8) -> bool {
        rows != 0 && rows.abs() == cols.abs() && self.is_path_clear(whence, whither)
    }

    fn can_push_or_capture(
        &self,
        color: Color,
        whence: Square,
        whither: Square,
        rows: i8,
        cols: i8,
    ) -> bool {
        let forward = color.forward();

        if cols == 0 && rows == forward {
            self.is_empty(whither)
        } else if cols == 0 && rows == 2 * forward {
            whence.row() == color.pawn_row()
                && self.is_empty(whither)
                && whence
                    .offset(forward, 0)
                    .is_some_and(|sq| self.is_empty(sq))
        } else if cols.abs() == 1 && rows == forward {
            self[whither].is_some_and(|p| p.color() != color)
        } else {
            false
        }
    }

    /// Whether every square strictly between `whence` and `whither` is empty.
    ///
    /// Steps along the direction given by the signs of the row and column
    /// differences, the squares must therefore be aligned.
    fn is_path_clear(&self, whence: Square, whither: Square) -> bool {
        let rows = (whither.row() as i8 - whence.row() as i8).signum();
        let cols = (whither.col() as i8 - whence.col() as i8).signum();

        let mut sq = whence;
        while let Some(next) = sq.offset(rows, cols) {
            if next == whither {
                return true;
            } else if !self.is_empty(next) {
                return false;
            }

            sq = next;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    fn reach(b: &Board, whence: &str, whither: &str) -> bool {
        let p = b[sq(whence)].unwrap();
        b.can_reach(p, sq(whence), sq(whither))
    }

    fn distance(a: Square, b: Square) -> (i8, i8) {
        (
            (a.row() as i8 - b.row() as i8).abs(),
            (a.col() as i8 - b.col() as i8).abs(),
        )
    }

    #[proptest]
    fn king_reaches_exactly_the_adjacent_squares(
        b: Board,
        c: Color,
        whence: Square,
        whither: Square,
    ) {
        let (rows, cols) = distance(whence, whither);
        let king = Piece::new(Role::King, c);
        assert_eq!(b.can_reach(king, whence, whither), rows.max(cols) == 1);
    }

    #[proptest]
    fn knight_reaches_in_an_l_shape_regardless_of_blockers(
        b: Board,
        c: Color,
        whence: Square,
        whither: Square,
    ) {
        let (rows, cols) = distance(whence, whither);
        let knight = Piece::new(Role::Knight, c);
        assert_eq!(b.can_reach(knight, whence, whither), rows * cols == 2);
    }

    #[proptest]
    fn no_piece_reaches_its_own_square(b: Board, p: Piece, sq: Square) {
        assert!(!b.can_reach(p, sq, sq));
    }

    #[proptest]
    fn sliders_reach_along_lines_on_an_empty_board(c: Color, whence: Square, whither: Square) {
        let b = Board::empty();
        let (rows, cols) = distance(whence, whither);
        let straight = (rows == 0) != (cols == 0);
        let diagonal = rows != 0 && rows == cols;

        assert_eq!(b.can_reach(Piece::new(Role::Rook, c), whence, whither), straight);
        assert_eq!(b.can_reach(Piece::new(Role::Bishop, c), whence, whither), diagonal);
        assert_eq!(
            b.can_reach(Piece::new(Role::Queen, c), whence, whither),
            straight || diagonal
        );
    }

    #[proptest]
    fn queen_reaches_wherever_rook_or_bishop_reach(
        b: Board,
        c: Color,
        whence: Square,
        whither: Square,
    ) {
        let rook = b.can_reach(Piece::new(Role::Rook, c), whence, whither);
        let bishop = b.can_reach(Piece::new(Role::Bishop, c), whence, whither);
        let queen = b.can_reach(Piece::new(Role::Queen, c), whence, whither);
        assert_eq!(queen, rook || bishop);
    }

    #[test]
    fn sliders_are_blocked_by_pieces_in_between() {
        let b = board("8/8/8/8/R2p3r/8/8/B7");
        assert!(reach(&b, "a4", "c4"));
        assert!(reach(&b, "a4", "d4"));
        assert!(!reach(&b, "a4", "e4"));
        assert!(!reach(&b, "a4", "h4"));
        assert!(reach(&b, "h4", "d4"));
        assert!(!reach(&b, "h4", "c4"));
        assert!(reach(&b, "a1", "d4"));
        assert!(!reach(&b, "a1", "e5"));
    }

    #[test]
    fn destination_occupancy_is_not_checked_for_sliders() {
        let b = board("8/8/8/8/R2P4/8/8/8");
        assert!(reach(&b, "a4", "d4"));
    }

    #[test]
    fn white_pawn_moves_one_square_towards_row_zero() {
        let b = board("8/8/8/8/8/4P3/8/8");
        assert!(reach(&b, "e3", "e4"));
        assert!(!reach(&b, "e3", "e2"));
        assert!(!reach(&b, "e3", "e5"));
    }

    #[test]
    fn black_pawn_moves_one_square_towards_row_seven() {
        let b = board("8/8/4p3/8/8/8/8/8");
        assert!(reach(&b, "e6", "e5"));
        assert!(!reach(&b, "e6", "e7"));
        assert!(!reach(&b, "e6", "e4"));
    }

    #[test]
    fn pawn_moves_two_squares_only_from_its_starting_row() {
        let b = board("8/3p4/8/8/8/4P3/2P5/8");
        assert!(reach(&b, "c2", "c4"));
        assert!(reach(&b, "d7", "d5"));
        assert!(!reach(&b, "e3", "e5"));
    }

    #[test]
    fn pawn_double_step_is_blocked_by_piece_on_intermediate_square() {
        let b = board("8/8/8/8/8/2n5/2P5/8");
        assert!(!reach(&b, "c2", "c4"));
        assert!(!reach(&b, "c2", "c3"));
    }

    #[test]
    fn pawn_double_step_is_blocked_by_piece_on_destination() {
        let b = board("8/8/8/8/2N5/8/2P5/8");
        assert!(!reach(&b, "c2", "c4"));
        assert!(reach(&b, "c2", "c3"));
    }

    #[test]
    fn pawn_captures_diagonally_forward_only_opposite_color() {
        let b = board("8/8/8/8/3p1P2/4P3/8/8");
        assert!(reach(&b, "e3", "d4"));
        assert!(!reach(&b, "e3", "f4"));
        assert!(!reach(&b, "e3", "f2"));
        assert!(reach(&b, "d4", "e3"));
    }

    #[test]
    fn pawn_does_not_capture_straight_ahead() {
        let b = board("8/8/8/8/4p3/4P3/8/8");
        assert!(!reach(&b, "e3", "e4"));
        assert!(!reach(&b, "e4", "e3"));
    }

    #[test]
    fn pawn_does_not_move_diagonally_into_empty_square() {
        let b = board("8/8/8/8/8/4P3/8/8");
        assert!(!reach(&b, "e3", "d4"));
        assert!(!reach(&b, "e3", "f4"));
    }
}

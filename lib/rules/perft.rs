use crate::chess::{Board, Color};
use rayon::prelude::*;

impl Board {
    /// Counts the leaf nodes of the tree of legal moves `depth` plies deep, also known as [perft].
    ///
    /// Subtrees are expanded in parallel.
    ///
    /// [perft]: https://www.chessprogramming.org/Perft
    pub fn perft(&self, turn: Color, depth: u8) -> usize {
        match depth {
            0 => 1,
            1 => self.moves(turn).count(),
            d => self
                .moves(turn)
                .par_bridge()
                .map(|m| self.play(m).perft(!turn, d - 1))
                .sum(),
        }
    }
}

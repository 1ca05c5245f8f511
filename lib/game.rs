use crate::chess::{Board, Color, Move, Outcome, Square};
use crate::rules::IllegalMove;
use derive_more::{Display, Error, From};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::ops::Range;
use tracing::{debug, instrument};

mod setup;

pub use setup::*;

/// The reason why a [`Move`] was rejected by the [`Game`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error, From)]
#[error(ignore)]
pub enum InvalidAction {
    #[display(fmt = "the game has already ended in a {_0}")]
    GameHasEnded(Outcome),

    #[display(fmt = "{_0}")]
    PlayerAttemptedIllegalMove(IllegalMove),
}

/// Holds the state of a game of chess.
///
/// The [`Board`] is only ever replaced by the result of a legal move,
/// and the side to move alternates after every move.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Setup::default())
    }
}

impl From<Setup> for Game {
    fn from(setup: Setup) -> Self {
        Game::new(setup)
    }
}

impl Arbitrary for Game {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Game>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..80, any::<Selector>()).prop_map(|(moves, selector)| {
            let mut game = Game::default();

            for _ in 0..moves {
                match selector.try_select(game.board.moves(game.turn)) {
                    None => break,
                    Some(m) => game.advance(m),
                }
            }

            game
        })
    }
}

impl Game {
    /// Starts a game from the given [`Setup`].
    pub fn new(setup: Setup) -> Self {
        Game {
            board: setup.board,
            turn: setup.turn,
            history: Vec::new(),
        }
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.is_check(self.turn)
    }

    /// The [`Outcome`] of the game if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome(self.turn)
    }

    /// An iterator over the legal moves of the side to move.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.board.moves(self.turn)
    }

    /// An iterator over the squares the piece on `whence` can legally move to.
    pub fn moves_from(&self, whence: Square) -> impl Iterator<Item = Square> + '_ {
        self.board.moves_from(whence, self.turn)
    }

    /// Plays a move if valid, otherwise returns the reason why not.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), err)]
    pub fn execute(&mut self, m: Move) -> Result<(), InvalidAction> {
        if let Some(o) = self.outcome() {
            return Err(o.into());
        }

        self.board = self.board.try_play(m, self.turn)?;
        self.turn = !self.turn;
        self.history.push(m);

        debug!(board = %self.board, "move `{m}` played");

        Ok(())
    }

    fn advance(&mut self, m: Move) {
        self.board = self.board.play(m);
        self.turn = !self.turn;
        self.history.push(m);
    }
}

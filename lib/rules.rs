//! The rules of chess, as operations on a [`Board`][`crate::chess::Board`].
//!
//! Every query takes the side to move explicitly, boards are never mutated.
//! Castling, en passant and draws other than stalemate are not part of these rules,
//! and pawns are always promoted to queens.

mod ending;
mod legality;
mod movement;
mod perft;
mod play;

pub use play::*;

/// Chess domain types.
pub mod chess;
/// A game of chess between two sides taking turns.
pub mod game;
/// The rules of chess.
pub mod rules;

use lib::chess::{Board, Color};
use lib::game::Game;
use proptest::prop_assume;
use shakmaty as sm;
use sm::{fen::Fen, CastlingMode, Chess, Position};
use std::collections::BTreeSet;
use test_strategy::proptest;

fn reference(board: &Board, turn: Color) -> Option<Chess> {
    let side = match turn {
        Color::White => 'w',
        Color::Black => 'b',
    };

    let fen: Fen = format!("{board} {side} - - 0 1").parse().ok()?;
    fen.into_position(CastlingMode::Standard).ok()
}

#[proptest]
fn legal_moves_agree_with_shakmaty(game: Game) {
    let pos = reference(game.board(), game.turn());
    prop_assume!(pos.is_some());
    let pos = pos.unwrap();

    let ours: BTreeSet<_> = game.moves().map(|m| m.to_string()).collect();

    let theirs: BTreeSet<_> = pos
        .legal_moves()
        .iter()
        .filter_map(|m| Some(format!("{}{}", m.from()?, m.to())))
        .collect();

    assert_eq!(ours, theirs);
}

#[proptest]
fn game_end_agrees_with_shakmaty(game: Game) {
    let pos = reference(game.board(), game.turn());
    prop_assume!(pos.is_some());
    let pos = pos.unwrap();

    assert_eq!(game.is_check(), pos.is_check());
    assert_eq!(game.board().is_checkmate(game.turn()), pos.is_checkmate());
    assert_eq!(game.board().is_stalemate(game.turn()), pos.is_stalemate());
}

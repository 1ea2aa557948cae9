//! Position classification: whether the side to move is in check, mated or
//! stalemated, and whether a position is fit to search from.

pub mod piece_values;

use std::fmt;

use crate::board::piece::Piece;
use crate::board::Board;
use crate::check::is_in_check;
use crate::move_generator::{generate_moves, has_legal_move};

pub use piece_values::board_material_score;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PositionStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl PositionStatus {
    /// Checkmate and stalemate end the game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, PositionStatus::Checkmate | PositionStatus::Stalemate)
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            PositionStatus::Normal => "normal",
            PositionStatus::Check => "check",
            PositionStatus::Checkmate => "checkmate",
            PositionStatus::Stalemate => "stalemate",
        };
        write!(f, "{}", status)
    }
}

/// Classifies the position for the side to move.
pub fn classify(board: &mut Board) -> PositionStatus {
    let check = is_in_check(board);
    let can_move = has_legal_move(board);

    match (check, can_move) {
        (true, false) => PositionStatus::Checkmate,
        (true, true) => PositionStatus::Check,
        (false, false) => PositionStatus::Stalemate,
        (false, true) => PositionStatus::Normal,
    }
}

/// Whether the game can continue from this position: it is neither mate nor
/// stalemate, and the side to move cannot take the opposing king. A king
/// capture is never a legal outcome, so being able to make one means the
/// position was reached illegally.
pub fn is_position_valid(board: &Board) -> bool {
    let mut copy = board.clone();

    if classify(&mut copy).is_game_over() {
        return false;
    }

    let color = copy.turn();
    let king_capturable = generate_moves(&mut copy, color)
        .iter()
        .any(|chess_move| matches!(copy.get(chess_move.to_square()), Some((Piece::King, _))));

    !king_capturable
}

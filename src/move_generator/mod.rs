//! Move generation: pseudo-legal moves per piece and per side, capture-first
//! ordering, and the legality filter built on the check oracle.

pub mod generator;
pub mod targets;


use common::Square;
use log::trace;

use crate::board::color::Color;
use crate::board::move_guard::MoveGuard;
use crate::board::Board;
use crate::check::would_expose_check;
use crate::chess_move::ChessMove;

pub use generator::generate_piece_moves;

/// All pseudo-legal moves for `color`, gathered square by square from a1 to
/// h8 and then ordered captures first.
pub fn generate_moves(board: &mut Board, color: Color) -> Vec<ChessMove> {
    // typical number of moves is under 60
    let mut moves = Vec::with_capacity(60);

    for square in Square::all() {
        if board.code(square) * color.sign() > 0 {
            moves.append(&mut generate_piece_moves(board, square));
        }
    }

    sort_captures_first(&mut moves);
    moves
}

/// Stable ordering: captures before quiet moves, bigger captures first.
/// Alpha-beta gets most of its cutoffs from this ordering.
pub fn sort_captures_first(moves: &mut [ChessMove]) {
    moves.sort_by(|a, b| b.captured_value().cmp(&a.captured_value()));
}

/// The side to move's moves that do not leave its own king attacked, in
/// generator order.
pub fn legal_moves(board: &mut Board) -> Vec<ChessMove> {
    let color = board.turn();
    let mut moves = generate_moves(board, color);
    moves.retain(|chess_move| !would_expose_check(board, chess_move));
    moves
}

/// Whether the side to move has at least one legal move. Stops at the first
/// one found instead of generating the whole list.
pub fn has_legal_move(board: &mut Board) -> bool {
    let color = board.turn();

    for square in Square::all() {
        if board.code(square) * color.sign() <= 0 {
            continue;
        }
        let candidates = generate_piece_moves(board, square);
        if candidates
            .iter()
            .any(|chess_move| !would_expose_check(board, chess_move))
        {
            return true;
        }
    }

    false
}

/// Counts the leaves of the legal move tree `depth` plies deep.
pub fn count_positions(board: &mut Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let candidates = legal_moves(board);
    if depth == 1 {
        return candidates.len();
    }

    let mut count = 0;
    for chess_move in candidates.iter() {
        let mut guard = MoveGuard::apply(board, chess_move);
        count += count_positions(&mut guard, depth - 1);
    }
    trace!("counted {} positions at depth {}", count, depth);

    count
}

//! Check detection from the cached king squares.

use common::Square;

use crate::board::color::Color;
use crate::board::move_guard::MoveGuard;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::move_generator::targets::{
    Offset, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, PAWN_CAPTURE_FILES, ROOK_DIRECTIONS,
};

/// Whether the king of `color` is attacked by any enemy piece. A side without
/// a king on the board is never attacked.
pub fn attacks_king(board: &Board, color: Color) -> bool {
    let king = match board.king_square(color) {
        Some(square) => square,
        None => return false,
    };

    let is_enemy = |square: Square, kinds: &[Piece]| match board.get(square) {
        Some((piece, piece_color)) => piece_color != color && kinds.contains(&piece),
        None => false,
    };

    let ray_hits = |directions: &[Offset], kinds: &[Piece]| {
        directions.iter().any(|&(file_delta, rank_delta)| {
            first_occupied(board, king, file_delta, rank_delta)
                .map_or(false, |square| is_enemy(square, kinds))
        })
    };

    let offset_hits = |offsets: &[Offset], kinds: &[Piece]| {
        offsets.iter().any(|&(file_delta, rank_delta)| {
            king.offset(file_delta, rank_delta)
                .map_or(false, |square| is_enemy(square, kinds))
        })
    };

    if ray_hits(&ROOK_DIRECTIONS, &[Piece::Rook, Piece::Queen]) {
        return true;
    }
    if ray_hits(&BISHOP_DIRECTIONS, &[Piece::Bishop, Piece::Queen]) {
        return true;
    }
    if offset_hits(&KNIGHT_OFFSETS, &[Piece::Knight]) {
        return true;
    }

    // enemy pawns capture toward this king from the rank in front of it
    let forward = color.sign();
    let pawn_hits = PAWN_CAPTURE_FILES.iter().any(|&file_delta| {
        king.offset(file_delta, forward)
            .map_or(false, |square| is_enemy(square, &[Piece::Pawn]))
    });
    if pawn_hits {
        return true;
    }

    offset_hits(&KING_OFFSETS, &[Piece::King])
}

fn first_occupied(board: &Board, from: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let mut current = from.offset(file_delta, rank_delta);
    while let Some(square) = current {
        if board.is_occupied(square) {
            return Some(square);
        }
        current = square.offset(file_delta, rank_delta);
    }
    None
}

/// Whether the side to move is in check.
pub fn is_in_check(board: &Board) -> bool {
    attacks_king(board, board.turn())
}

/// Tries `chess_move` and reports whether it leaves the mover's own king
/// attacked. The board is always restored before returning.
pub fn would_expose_check(board: &mut Board, chess_move: &ChessMove) -> bool {
    let guard = MoveGuard::apply(board, chess_move);
    attacks_king(&guard, chess_move.player())
}

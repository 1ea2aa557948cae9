use common::Square;

use crate::board::color::Color;
use crate::board::move_guard::MoveGuard;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::check::attacks_king;
use crate::chess_move::ChessMove;
use crate::evaluate::piece_values::code_material_value;

use super::targets::{
    Offset, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, PAWN_CAPTURE_FILES, QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS,
};

/// Generates the pseudo-legal moves of the piece on `from`, which moves for
/// its own color. Returns nothing for an empty square.
///
/// Moves are not checked for leaving the mover's king attacked, except king
/// steps: each of those is tried on the board and dropped if the king would
/// stand in check. That is why the board is borrowed mutably; it is always
/// restored before returning.
pub fn generate_piece_moves(board: &mut Board, from: Square) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    let (piece, color) = match board.get(from) {
        Some(piece_and_color) => piece_and_color,
        None => return moves,
    };

    match piece {
        Piece::Rook => generate_sliding_moves(&mut moves, board, from, color, &ROOK_DIRECTIONS),
        Piece::Bishop => {
            generate_sliding_moves(&mut moves, board, from, color, &BISHOP_DIRECTIONS)
        }
        Piece::Queen => generate_sliding_moves(&mut moves, board, from, color, &QUEEN_DIRECTIONS),
        Piece::Knight => generate_knight_moves(&mut moves, board, from, color),
        Piece::Pawn => generate_pawn_moves(&mut moves, board, from, color),
        Piece::King => generate_king_moves(&mut moves, board, from, color),
    }

    moves
}

#[inline]
fn is_friendly(board: &Board, square: Square, color: Color) -> bool {
    board.code(square) * color.sign() > 0
}

#[inline]
fn is_enemy(board: &Board, square: Square, color: Color) -> bool {
    board.code(square) * color.sign() < 0
}

#[inline]
fn target_move(board: &Board, color: Color, from: Square, to: Square) -> ChessMove {
    ChessMove::new(color, from, to, code_material_value(board.code(to)))
}

fn generate_sliding_moves(
    moves: &mut Vec<ChessMove>,
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Offset],
) {
    for &(file_delta, rank_delta) in directions {
        let mut current = from.offset(file_delta, rank_delta);
        while let Some(to) = current {
            if is_friendly(board, to, color) {
                break;
            }
            moves.push(target_move(board, color, from, to));
            if board.is_occupied(to) {
                break;
            }
            current = to.offset(file_delta, rank_delta);
        }
    }
}

fn generate_knight_moves(moves: &mut Vec<ChessMove>, board: &Board, from: Square, color: Color) {
    for &(file_delta, rank_delta) in KNIGHT_OFFSETS.iter() {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            if !is_friendly(board, to, color) {
                moves.push(target_move(board, color, from, to));
            }
        }
    }
}

fn generate_pawn_moves(moves: &mut Vec<ChessMove>, board: &Board, from: Square, color: Color) {
    let forward = color.sign();

    if let Some(single) = from.offset(0, forward) {
        if !board.is_occupied(single) {
            moves.push(ChessMove::new(color, from, single, 0));

            if from.rank() == color.pawn_home_rank() {
                if let Some(double) = from.offset(0, 2 * forward) {
                    if !board.is_occupied(double) {
                        moves.push(ChessMove::new(color, from, double, 0));
                    }
                }
            }
        }
    }

    for &file_delta in PAWN_CAPTURE_FILES.iter() {
        if let Some(to) = from.offset(file_delta, forward) {
            if is_enemy(board, to, color) {
                moves.push(target_move(board, color, from, to));
            }
        }
    }
}

fn generate_king_moves(moves: &mut Vec<ChessMove>, board: &mut Board, from: Square, color: Color) {
    for &(file_delta, rank_delta) in KING_OFFSETS.iter() {
        let to = match from.offset(file_delta, rank_delta) {
            Some(to) if !is_friendly(board, to, color) => to,
            _ => continue,
        };

        let candidate = target_move(board, color, from, to);
        let lands_in_check = {
            let guard = MoveGuard::apply(board, &candidate);
            attacks_king(&guard, color)
        };
        if !lands_in_check {
            moves.push(candidate);
        }
    }
}

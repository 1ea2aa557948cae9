//! Static material evaluation.

use log::trace;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::move_generator::generate_moves;

pub fn material_value(piece: Piece) -> u8 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight => 3,
        Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 0,
    }
}

/// Material value of a raw board code; 0 for an empty square.
#[inline]
pub fn code_material_value(code: i8) -> u8 {
    Piece::from_code(code).map_or(0, |(piece, _)| material_value(piece))
}

pub fn player_material(board: &Board, color: Color) -> i32 {
    board
        .pieces(color)
        .map(|(_, piece)| material_value(piece) as i32)
        .sum()
}

/// White's material minus black's. Positive scores favor white.
pub fn board_material_score(board: &Board) -> i32 {
    player_material(board, Color::White) - player_material(board, Color::Black)
}

/// Material of the side to move that the opponent could capture, or with
/// `threatening_material` set, the opponent's material the side to move
/// could capture.
///
/// The candidate captures are generated but their values are never summed,
/// so the result is always 0. Search nodes record it for later refinement.
pub fn material_under_threat(board: &mut Board, threatening_material: bool) -> i32 {
    let attacker = if threatening_material {
        board.turn()
    } else {
        board.turn().opposite()
    };

    let capturable_value = 0;
    let attacker_moves = generate_moves(board, attacker);
    trace!(
        "{} has {} candidate moves against {} material under threat",
        attacker,
        attacker_moves.len(),
        capturable_value
    );

    capturable_value
}

use std::ops::{Deref, DerefMut};

use crate::chess_move::ChessMove;

use super::Board;

/// Applies a move for the lifetime of the guard and undoes it on drop, so the
/// board is restored on every exit path, including early `break`/`continue`.
///
/// Guards nest: a guard may be applied on top of another guard's board, and
/// the inner one is undone first.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    captured_value: u8,
}

impl<'a> MoveGuard<'a> {
    pub fn apply(board: &'a mut Board, chess_move: &ChessMove) -> Self {
        let captured_value = board.apply_move(chess_move);
        Self {
            board,
            captured_value,
        }
    }

    /// Material value of the piece taken by the guarded move.
    pub fn captured_value(&self) -> u8 {
        self.captured_value
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_last_move();
    }
}

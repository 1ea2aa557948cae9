//! Mailbox board state with an incremental, reversible move history.

pub mod color;
pub mod error;
pub mod history;
pub mod move_guard;
pub mod piece;

mod display;


use common::Square;

use crate::chess_move::ChessMove;
use crate::evaluate::piece_values::code_material_value;

use self::color::Color;
use self::error::BoardError;
use self::history::{HistoryEntry, MoveHistory};
use self::piece::Piece;

const KING_CODE: i8 = Piece::King as i8;

/// Represents the state of a chess board: an 8x8 grid of signed piece codes,
/// the cached king squares, the side to move and the stack of applied moves.
///
/// The king cache is the only place the check oracle looks for kings, so every
/// mutation below keeps it in step with the grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: [[i8; 8]; 8],
    kings: [Option<Square>; 2],
    turn: Color,
    history: MoveHistory,
}

impl Default for Board {
    fn default() -> Self {
        crate::chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }
}

impl Board {
    /// An empty board with white to move.
    pub fn new() -> Self {
        Self {
            grid: [[0; 8]; 8],
            kings: [None; 2],
            turn: Color::White,
            history: MoveHistory::new(),
        }
    }

    pub fn starting_position() -> Self {
        Self::default()
    }

    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let squares: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != 64 {
            return Err(BoardError::InvalidDiagramLength { len: squares.len() });
        }

        let mut board = Self::new();
        for (i, &c) in squares.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let (piece, color) =
                Piece::from_fen(c).ok_or(BoardError::InvalidDiagramCharacter { character: c })?;
            // the first row of the diagram is rank 8
            let rank = 7 - (i / 8) as u8;
            let file = (i % 8) as u8;
            board.put(Square::new(file, rank), piece, color)?;
        }
        Ok(board)
    }

    /// Raw signed code on `square`; 0 when empty.
    #[inline]
    pub fn code(&self, square: Square) -> i8 {
        self.grid[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    fn set_code(&mut self, square: Square, code: i8) {
        self.grid[square.rank() as usize][square.file() as usize] = code;
    }

    pub fn get(&self, square: Square) -> Option<(Piece, Color)> {
        Piece::from_code(self.code(square))
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.code(square) != 0
    }

    #[must_use = "placing a piece may fail if the square is occupied"]
    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError);
        }
        self.set_code(square, piece.code(color));
        if piece == Piece::King {
            self.kings[color.index()] = Some(square);
        }
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<(Piece, Color)> {
        let (piece, color) = self.get(square)?;
        self.set_code(square, 0);
        if piece == Piece::King && self.kings[color.index()] == Some(square) {
            self.kings[color.index()] = None;
        }
        Some((piece, color))
    }

    /// Every occupied square of `color`, a1 through h8.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.get(square) {
            Some((piece, piece_color)) if piece_color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.history.peek().map(|entry| entry.chess_move)
    }

    /// Moves a piece, records the move and passes the turn. Returns the
    /// material value of whatever stood on the destination square.
    pub fn apply_move(&mut self, chess_move: &ChessMove) -> u8 {
        let from = chess_move.from_square();
        let to = chess_move.to_square();
        let moving = self.code(from);

        if moving.abs() == KING_CODE {
            self.kings[Color::from_code(moving).index()] = Some(to);
        }

        let displaced = self.code(to);
        self.history.push(HistoryEntry {
            chess_move: *chess_move,
            displaced,
        });
        self.set_code(to, moving);
        self.set_code(from, 0);
        self.toggle_turn();

        code_material_value(displaced)
    }

    /// Reverts the most recent move. Does nothing and returns `None` when no
    /// move has been applied.
    pub fn undo_last_move(&mut self) -> Option<ChessMove> {
        let HistoryEntry {
            chess_move,
            displaced,
        } = self.history.pop()?;
        let from = chess_move.from_square();
        let to = chess_move.to_square();
        let moved = self.code(to);

        if moved.abs() == KING_CODE {
            self.kings[Color::from_code(moved).index()] = Some(from);
        }

        self.set_code(from, moved);
        self.set_code(to, displaced);
        self.toggle_turn();

        Some(chess_move)
    }

    /// Undoes every recorded move.
    pub fn reset(&mut self) {
        while self.undo_last_move().is_some() {}
    }

    /// The same position seen from the other side: ranks flipped, colors
    /// swapped and the turn passed over. History is not carried across.
    pub fn mirrored(&self) -> Self {
        let mut mirrored = Self::new();
        for square in Square::all() {
            if let Some((piece, color)) = self.get(square) {
                let target = Square::new(square.file(), 7 - square.rank());
                // the target is empty since every source square is distinct
                let _ = mirrored.put(target, piece, color.opposite());
            }
        }
        mirrored.set_turn(self.turn.opposite());
        mirrored
    }
}

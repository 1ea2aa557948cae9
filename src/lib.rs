pub mod alpha_beta_searcher;
pub mod board;
pub mod check;
pub mod chess_move;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod move_generator;

pub use alpha_beta_searcher::best_move;
pub use board::Board;
pub use chess_move::ChessMove;
pub use common::Square;
pub use evaluate::{classify, is_position_valid, PositionStatus};
pub use move_generator::legal_moves;

/// The standard starting position, white to move.
pub fn new_board() -> Board {
    Board::starting_position()
}

use common::Square;
use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{
    SearchContext, SearchStats, DEFAULT_NODE_BUDGET, DEFAULT_SEARCH_DEPTH,
};
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::{self, PositionStatus};
use crate::input_handler::{InputError, MoveInput};
use crate::move_generator;

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub node_budget: usize,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            node_budget: DEFAULT_NODE_BUDGET,
            starting_position: Board::default(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid move: {from}{to}")]
    InvalidMove { from: Square, to: Square },
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("input error: {error}")]
    InputError { error: InputError },
}

/// Owns a game board and a search context, and only lets legal moves through.
pub struct Engine {
    board: Board,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            search_context: SearchContext::new(config.search_depth, config.node_budget),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        move_generator::legal_moves(&mut self.board)
    }

    pub fn classify(&mut self) -> PositionStatus {
        evaluate::classify(&mut self.board)
    }

    pub fn is_position_valid(&self) -> bool {
        evaluate::is_position_valid(&self.board)
    }

    pub fn make_move(&mut self, from: Square, to: Square) -> Result<ChessMove, EngineError> {
        let chess_move = self
            .legal_moves()
            .into_iter()
            .find(|m| m.same_squares(from, to))
            .ok_or(EngineError::InvalidMove { from, to })?;

        self.board.apply_move(&chess_move);
        Ok(chess_move)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<ChessMove, EngineError> {
        match input {
            MoveInput::Coordinate { from, to } => self.make_move(from, to),
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    /// Parses `input` and plays it.
    pub fn make_move_from_str(&mut self, input: &str) -> Result<ChessMove, EngineError> {
        let move_input = input
            .parse::<MoveInput>()
            .map_err(|error| EngineError::InputError { error })?;
        self.make_move_from_input(move_input)
    }

    /// Takes back the last move played; `None` at the start of the game.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        self.board.undo_last_move()
    }

    pub fn best_move(&mut self) -> Result<ChessMove, EngineError> {
        let best_move = self
            .search_context
            .best_move(&self.board)
            .ok_or(EngineError::NoAvailableMoves)?;

        info!(
            "{} best move: {:?} (score {:?})",
            self.board.turn(),
            best_move,
            self.search_context.stats().last_score
        );
        Ok(best_move)
    }

    pub fn make_best_move(&mut self) -> Result<ChessMove, EngineError> {
        let best_move = self.best_move()?;
        self.board.apply_move(&best_move);
        Ok(best_move)
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.board.last_move()
    }

    pub fn search_stats(&self) -> &SearchStats {
        self.search_context.stats()
    }
}

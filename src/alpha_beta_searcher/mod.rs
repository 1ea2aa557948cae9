//! Depth- and node-budget-limited alpha-beta search with a root selector that
//! keeps the best few root moves.

pub mod search;
pub mod search_tree;
pub mod top_candidates;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::board::Board;
use crate::chess_move::ChessMove;

pub use search::EvalResult;
pub use search_tree::{NodeId, SearchNode, SearchTree};
pub use top_candidates::{TopCandidates, TOP_CANDIDATE_COUNT};

pub const DEFAULT_SEARCH_DEPTH: u8 = 5;
pub const DEFAULT_NODE_BUDGET: usize = 500_000;

/// Summary of the most recent root search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub searched_position_count: usize,
    pub root_moves_available: usize,
    pub root_moves_searched: usize,
    pub last_score: Option<i32>,
    pub last_duration: Duration,
    /// Moves leading to the position behind `last_score`, root move first.
    pub best_line: Vec<ChessMove>,
}

/// Owns everything a search mutates besides the board: the limits, the node
/// counter and the tree of explored nodes.
pub struct SearchContext {
    search_depth: u8,
    node_budget: usize,
    searched_position_count: usize,
    tree: SearchTree,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(search_depth: u8, node_budget: usize) -> Self {
        Self {
            search_depth,
            node_budget,
            searched_position_count: 0,
            tree: SearchTree::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn node_budget(&self) -> usize {
        self.node_budget
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.stats = SearchStats::default();
    }

    fn budget_exhausted(&self) -> bool {
        self.searched_position_count > self.node_budget
    }
}

/// Picks a move for the side to move on `board`, searching `max_depth` plies
/// and stopping early once more than `node_budget` nodes were visited.
/// Returns `None` when the side to move has no acceptable move.
pub fn best_move(board: &Board, max_depth: u8, node_budget: usize) -> Option<ChessMove> {
    SearchContext::new(max_depth, node_budget).best_move(board)
}

//! Minimax with alpha-beta pruning over a shared board.
//!
//! The maximizing side is read from the side to move at every node: white
//! maximizes and black minimizes, so the two branches compare in opposite
//! directions instead of negating scores. Moves are tried in generator order
//! (captures first), each one applied through a `MoveGuard` so the board is
//! restored on every exit path, cutoffs included.
//!
//! Children whose position is already checkmate or stalemate are skipped
//! rather than scored. Only the root looks for an immediate mate. Nodes are
//! counted against the budget as they are created below the root; the root
//! moves themselves are not counted.

use std::time::Instant;

use log::{debug, info, trace};

use crate::board::move_guard::MoveGuard;
use crate::board::Board;
use crate::check::attacks_king;
use crate::chess_move::ChessMove;
use crate::evaluate::piece_values::{board_material_score, material_under_threat};
use crate::evaluate::{classify, is_position_valid, PositionStatus};
use crate::move_generator::generate_moves;

use super::search_tree::NodeId;
use super::top_candidates::TopCandidates;
use super::SearchContext;

/// A score and the node whose move chain reaches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalResult {
    pub score: i32,
    pub node: NodeId,
}

impl SearchContext {
    /// Searches every root move of the side to move and returns the best
    /// retained one. A move that mates on the spot is returned immediately,
    /// flagged as giving check.
    pub fn best_move(&mut self, board: &Board) -> Option<ChessMove> {
        let started = Instant::now();
        self.reset_stats();
        self.tree.clear();

        let mover = board.turn();
        let root = self.tree.root();
        let mut top_candidates = TopCandidates::new(mover.maximize_score());

        let mut scratch = board.clone();
        let candidates = generate_moves(&mut scratch, mover);
        self.stats.root_moves_available = candidates.len();

        for chess_move in candidates.iter() {
            let mut child_board = board.clone();
            child_board.apply_move(chess_move);

            if attacks_king(&child_board, mover) {
                trace!("skipping {:?}: leaves own king attacked", chess_move);
                continue;
            }

            if classify(&mut child_board) == PositionStatus::Checkmate {
                let mut mating_move = *chess_move;
                mating_move.set_gives_check(true);
                info!("mate in 1: {:?}", mating_move);
                self.stats.root_moves_searched += 1;
                self.finish_search(started, None);
                return Some(mating_move);
            }

            if !is_position_valid(&child_board) {
                trace!("skipping {:?}: resulting position is invalid", chess_move);
                continue;
            }

            let child = self.tree.add_child(root, *chess_move, 0);
            let own_threat = material_under_threat(&mut child_board, false);
            let threatening = material_under_threat(&mut child_board, true);
            {
                let node = self.tree.get_mut(child);
                node.own_material_under_threat = own_threat;
                node.threatening_material = threatening;
            }

            let remaining_depth = self.search_depth as i32 - 1;
            let result = self.alpha_beta(
                &mut child_board,
                child,
                remaining_depth,
                i32::MIN,
                i32::MAX,
            );
            {
                let node = self.tree.get_mut(child);
                node.evaluation = result.score;
                node.last_analyzed = Some(result.node);
            }
            debug!(
                "root move {:?} scored {} ({} nodes so far)",
                chess_move, result.score, self.searched_position_count
            );

            top_candidates.insert(result.score, child);
            self.stats.root_moves_searched += 1;

            if self.budget_exhausted() {
                debug!(
                    "node budget {} exhausted after {} root moves",
                    self.node_budget, self.stats.root_moves_searched
                );
                break;
            }
        }

        let best = top_candidates.best();
        let chosen = best.and_then(|(_, node)| self.tree.get(node).chess_move);
        self.finish_search(started, best);

        chosen
    }

    /// Records the statistics of the search that just ended and frees the tree.
    fn finish_search(&mut self, started: Instant, best: Option<(i32, NodeId)>) {
        self.stats.searched_position_count = self.searched_position_count;
        self.stats.last_duration = started.elapsed();

        if let Some((score, node)) = best {
            let analyzed = self.tree.get(node).last_analyzed.unwrap_or(node);
            self.stats.last_score = Some(score);
            self.stats.best_line = self.tree.line(analyzed);
        }

        info!(
            "searched {} nodes, {} of {} root moves, best evaluation {:?} in {:?}",
            self.stats.searched_position_count,
            self.stats.root_moves_searched,
            self.stats.root_moves_available,
            self.stats.last_score,
            self.stats.last_duration
        );
        debug!("best line: {:?}", self.stats.best_line);

        self.tree.clear();
    }

    /// Scores the position on `board` reached through `node`, searching
    /// `depth` more plies within the `[alpha, beta]` window. The board is
    /// unchanged on return.
    ///
    /// If every move at this node is skipped, the score is the side's sentinel
    /// (`i32::MIN` for white, `i32::MAX` for black) and the node is `node`.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        node: NodeId,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> EvalResult {
        if depth <= 0 || self.budget_exhausted() {
            return Self::leaf(board, node);
        }

        let color = board.turn();
        let candidates = generate_moves(board, color);
        // Only a side without moves can be mated or stalemated.
        if candidates.is_empty() && classify(board).is_game_over() {
            return Self::leaf(board, node);
        }

        let maximize = color.maximize_score();
        let child_depth = self.tree.get(node).depth + 1;

        let mut best_score = if maximize { i32::MIN } else { i32::MAX };
        let mut best_node = node;

        for chess_move in candidates.iter() {
            let child = {
                let mut guard = MoveGuard::apply(board, chess_move);
                if classify(&mut guard).is_game_over() {
                    continue;
                }

                let child = self.tree.add_child(node, *chess_move, child_depth);
                self.searched_position_count += 1;

                let result = self.alpha_beta(&mut guard, child, depth - 1, alpha, beta);
                {
                    let child_node = self.tree.get_mut(child);
                    child_node.evaluation = result.score;
                    child_node.last_analyzed = Some(result.node);
                }

                if maximize {
                    if result.score > best_score {
                        best_score = result.score;
                        best_node = result.node;
                    }
                    alpha = alpha.max(result.score);
                } else {
                    if result.score < best_score {
                        best_score = result.score;
                        best_node = result.node;
                    }
                    beta = beta.min(result.score);
                }

                child
            };

            if beta <= alpha {
                trace!("cutoff after {:?} at depth {}", chess_move, child_depth);
                self.tree.get_mut(child).terminated_search = true;
                break;
            }
        }

        EvalResult {
            score: best_score,
            node: best_node,
        }
    }

    fn leaf(board: &Board, node: NodeId) -> EvalResult {
        EvalResult {
            score: board_material_score(board),
            node,
        }
    }
}

use super::search_tree::NodeId;

pub const TOP_CANDIDATE_COUNT: usize = 5;

/// The best few root nodes seen so far, kept sorted best first. Ties keep
/// insertion order, so among equal scores the earlier root move wins.
#[derive(Clone, Debug)]
pub struct TopCandidates {
    maximize: bool,
    candidates: Vec<(i32, NodeId)>,
}

impl TopCandidates {
    pub fn new(maximize: bool) -> Self {
        Self {
            maximize,
            candidates: Vec::with_capacity(TOP_CANDIDATE_COUNT + 1),
        }
    }

    pub fn insert(&mut self, score: i32, node: NodeId) {
        self.candidates.push((score, node));
        if self.maximize {
            self.candidates.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            self.candidates.sort_by(|a, b| a.0.cmp(&b.0));
        }
        self.candidates.truncate(TOP_CANDIDATE_COUNT);
    }

    pub fn best(&self) -> Option<(i32, NodeId)> {
        self.candidates.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(i32, NodeId)> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha_beta_searcher::search_tree::SearchTree;
    use crate::board::color::Color;
    use crate::std_move;
    use common::square::*;

    fn nodes(count: usize) -> Vec<NodeId> {
        let mut tree = SearchTree::new();
        let root = tree.root();
        (0..count)
            .map(|_| tree.add_child(root, std_move!(Color::White, A2, A3), 0))
            .collect()
    }

    #[test]
    fn test_keeps_highest_scores_when_maximizing() {
        let ids = nodes(7);
        let mut top = TopCandidates::new(true);
        for (score, id) in [3, -1, 8, 0, 5, 2, 7].iter().zip(ids.iter()) {
            top.insert(*score, *id);
        }

        let scores: Vec<i32> = top.iter().map(|(score, _)| *score).collect();
        assert_eq!(scores, vec![8, 7, 5, 3, 2]);
        assert_eq!(top.best(), Some((8, ids[2])));
    }

    #[test]
    fn test_keeps_lowest_scores_when_minimizing() {
        let ids = nodes(6);
        let mut top = TopCandidates::new(false);
        for (score, id) in [3, -1, 8, 0, 5, -4].iter().zip(ids.iter()) {
            top.insert(*score, *id);
        }

        let scores: Vec<i32> = top.iter().map(|(score, _)| *score).collect();
        assert_eq!(scores, vec![-4, -1, 0, 3, 5]);
        assert_eq!(top.len(), TOP_CANDIDATE_COUNT);
    }

    #[test]
    fn test_ties_keep_first_inserted() {
        let ids = nodes(3);
        let mut top = TopCandidates::new(true);
        top.insert(1, ids[0]);
        top.insert(1, ids[1]);
        top.insert(1, ids[2]);

        assert_eq!(top.best(), Some((1, ids[0])));
    }

    #[test]
    fn test_empty() {
        let top = TopCandidates::new(true);
        assert!(top.is_empty());
        assert_eq!(top.best(), None);
    }
}

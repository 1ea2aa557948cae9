//! Arena of the nodes explored by a search. Nodes refer to each other through
//! `NodeId` handles; clearing the arena frees the whole tree at once.

use crate::chess_move::ChessMove;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct SearchNode {
    /// `None` only for the root sentinel.
    pub chess_move: Option<ChessMove>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// -1 for the root, 0 for the moves available at the root.
    pub depth: i32,
    /// Ordinal path code: the parent's value times 100 plus the child index.
    pub value: u64,
    pub evaluation: i32,
    pub refined_evaluation: i32,
    /// Node whose move chain produced `evaluation`.
    pub last_analyzed: Option<NodeId>,
    /// Set when a cutoff stopped the search of this node's later siblings.
    pub terminated_search: bool,

    // Bookkeeping for score refinement. Carried on every node but not read by
    // the search itself.
    pub best_replies: Vec<NodeId>,
    pub has_capture: bool,
    pub chain_has_captures: bool,
    pub own_material_under_threat: i32,
    pub threatening_material: i32,
}

impl SearchNode {
    fn new(chess_move: Option<ChessMove>, parent: Option<NodeId>, depth: i32, value: u64) -> Self {
        let has_capture = chess_move.map_or(false, |m| m.is_capture());
        Self {
            chess_move,
            parent,
            children: Vec::new(),
            depth,
            value,
            evaluation: 0,
            refined_evaluation: 0,
            last_analyzed: None,
            terminated_search: false,
            best_replies: Vec::new(),
            has_capture,
            chain_has_captures: has_capture,
            own_material_under_threat: 0,
            threatening_material: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl Default for SearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTree {
    /// A tree holding only the root sentinel.
    pub fn new() -> Self {
        Self {
            nodes: vec![SearchNode::new(None, None, -1, 0)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a child for `chess_move` under `parent` and returns its handle.
    pub fn add_child(&mut self, parent: NodeId, chess_move: ChessMove, depth: i32) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent_node = &self.nodes[parent.0];
        let ordinal = parent_node.children.len() as u64
            + if parent_node.parent.is_none() { 1 } else { 0 };
        let value = parent_node.value.wrapping_mul(100).wrapping_add(ordinal);

        let mut node = SearchNode::new(Some(chess_move), Some(parent), depth, value);
        node.chain_has_captures |= parent_node.chain_has_captures;

        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// The moves leading from the root to `id`, first move first.
    pub fn line(&self, id: NodeId) -> Vec<ChessMove> {
        let mut line = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(chess_move) = node.chess_move {
                line.push(chess_move);
            }
            current = node.parent;
        }
        line.reverse();
        line
    }

    /// The depth-0 ancestor of `id`, i.e. the root move its line starts with.
    /// `None` for the root itself.
    pub fn root_child(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let node = self.get(current);
            match node.parent {
                None => return None,
                Some(parent) if self.get(parent).parent.is_none() => return Some(current),
                Some(parent) => current = parent,
            }
        }
    }

    /// Number of nodes, the root sentinel included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }

    /// Frees every node and leaves a fresh root sentinel.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(SearchNode::new(None, None, -1, 0));
    }
}

use crate::chess_move::ChessMove;

/// One applied move and the raw code that sat on its destination square
/// beforehand (0 when the destination was empty).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HistoryEntry {
    pub chess_move: ChessMove,
    pub displaced: i8,
}

/// LIFO record of applied moves. Only the top entry is ever read.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MoveHistory {
    stack: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.stack.push(entry);
    }

    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.stack.last()
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

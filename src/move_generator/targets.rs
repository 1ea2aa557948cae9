//! Direction and offset tables shared by move generation and the check oracle.
//! Each entry is a `(file_delta, rank_delta)` pair.

pub type Offset = (i8, i8);

pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_OFFSETS: [Offset; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// File deltas of the two squares a pawn captures on.
pub const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];

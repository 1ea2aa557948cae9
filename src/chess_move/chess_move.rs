use core::fmt;

use common::Square;

use crate::board::color::Color;

/// A move of one piece from one square to another. Captures carry the
/// material value of the captured piece, which is what move ordering sorts on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChessMove {
    player: Color,
    from_square: Square,
    to_square: Square,
    captured_value: u8,
    gives_check: bool,
}

impl ChessMove {
    pub fn new(player: Color, from_square: Square, to_square: Square, captured_value: u8) -> Self {
        Self {
            player,
            from_square,
            to_square,
            captured_value,
            gives_check: false,
        }
    }

    pub fn player(&self) -> Color {
        self.player
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn captured_value(&self) -> u8 {
        self.captured_value
    }

    pub fn is_capture(&self) -> bool {
        self.captured_value > 0
    }

    pub fn gives_check(&self) -> bool {
        self.gives_check
    }

    pub fn set_gives_check(&mut self, gives_check: bool) {
        self.gives_check = gives_check;
    }

    /// Ranks gained toward the opponent's side of the board.
    pub fn progress(&self) -> i8 {
        let delta = self.to_square.rank() as i8 - self.from_square.rank() as i8;
        delta * self.player.sign()
    }

    pub fn same_squares(&self, from_square: Square, to_square: Square) -> bool {
        self.from_square == from_square && self.to_square == to_square
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from_square, self.to_square)
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capture_msg = if self.is_capture() {
            format!(" (captures {})", self.captured_value)
        } else {
            "".to_string()
        };
        let check_msg = if self.gives_check { "+" } else { "" };
        write!(f, "{} {}{}{}", self.player, self, check_msg, capture_msg)
    }
}

#[macro_export]
macro_rules! std_move {
    ($player:expr, $from:expr, $to:expr, $captured_value:expr) => {
        $crate::chess_move::ChessMove::new($player, $from, $to, $captured_value)
    };
    ($player:expr, $from:expr, $to:expr) => {
        $crate::chess_move::ChessMove::new($player, $from, $to, 0)
    };
}

#[macro_export]
macro_rules! checkmate_move {
    ($chess_move:expr) => {{
        let mut chess_move = $chess_move;
        chess_move.set_gives_check(true);
        chess_move
    }};
}

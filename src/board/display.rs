use super::Board;
use common::Square;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = match self.get(Square::new(file, rank)) {
                    Some((piece, color)) => piece.to_fen(color),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "Turn: {}", self.turn())
    }
}

/// Builds a board from an 8x8 diagram of FEN piece letters and `.` for empty
/// squares. The diagram is read from white's perspective: the first row is
/// rank 8 and the bottom left character is a1. White is to move.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        $crate::board::Board::from_diagram(stringify!($($piece)*))
            .expect("chess_position! needs 64 squares of FEN letters or '.'")
    }};
}

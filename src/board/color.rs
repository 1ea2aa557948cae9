use std::fmt;
use std::str::FromStr;

/// The two sides. White is the maximizing side and is encoded with positive
/// piece codes on the board grid; Black is minimizing and negative.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Color::White => true,
            Color::Black => false,
        }
    }

    /// +1 for White, -1 for Black. Multiplying a piece code by the sign of its
    /// owner yields a positive value.
    pub fn sign(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Color owning a non-zero piece code.
    pub fn from_code(code: i8) -> Self {
        if code > 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Slot in per-side tables such as the king cache.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rank on which this side's pawns start.
    pub fn pawn_home_rank(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => Err("invalid color; options are: black, white"),
        }
    }
}

use super::color::Color;

/// Piece kinds. The discriminant is the magnitude of the piece's code on the
/// board grid; the sign of the code carries the color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Piece {
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    King = 5,
    Queen = 6,
}

pub const ALL_PIECES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::King,
    Piece::Queen,
];

impl Piece {
    pub fn code(&self, color: Color) -> i8 {
        *self as i8 * color.sign()
    }

    pub fn from_code(code: i8) -> Option<(Piece, Color)> {
        let piece = match code.abs() {
            1 => Piece::Pawn,
            2 => Piece::Rook,
            3 => Piece::Knight,
            4 => Piece::Bishop,
            5 => Piece::King,
            6 => Piece::Queen,
            _ => return None,
        };
        Some((piece, Color::from_code(code)))
    }

    pub fn to_fen(&self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Rook => 'r',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::King => 'k',
            Piece::Queen => 'q',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'r' => Piece::Rook,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'k' => Piece::King,
            'q' => Piece::Queen,
            _ => return None,
        };
        Some((piece, color))
    }
}

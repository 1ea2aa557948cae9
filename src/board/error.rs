use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a piece on a square that is already occupied")]
    SquareOccupiedBoardPutError,
    #[error("A position diagram needs exactly 64 squares, got {len}")]
    InvalidDiagramLength { len: usize },
    #[error("Unexpected character {character:?} in position diagram")]
    InvalidDiagramCharacter { character: char },
}

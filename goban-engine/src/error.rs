use std::fmt;

/// Why a placement was refused. The board is untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    Occupied,
    KoViolation,
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "out of bounds"),
            MoveError::Occupied => write!(f, "occupied"),
            MoveError::KoViolation => write!(f, "ko violation"),
            MoveError::Suicide => write!(f, "suicide"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Misuse of the grid or group queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    OutOfRange,
    EmptyCell,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange => write!(f, "point out of range"),
            BoardError::EmptyCell => write!(f, "no stone at point"),
        }
    }
}

impl std::error::Error for BoardError {}

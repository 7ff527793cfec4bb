//! Error types for the Tic-Tac-Toe engine

use thiserror::Error;

/// Why a move was rejected by [`Board::apply_action`](crate::tictactoe::Board::apply_action)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    /// Row or column outside 0-2
    OutOfBounds,
    /// Target cell already holds a mark
    Occupied,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::OutOfBounds => write!(f, "out of bounds (must be 0-2)"),
            MoveRejection::Occupied => write!(f, "already occupied"),
        }
    }
}

/// Main error type for the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: MoveRejection,
    },

    #[error("game already over")]
    GameOver,

    #[error("no legal actions available on a terminal board")]
    NoLegalActions,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (X moves first, so X must equal O or lead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },
}

impl Error {
    /// True for the move-rejection error of the core contract
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

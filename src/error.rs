//! Error taxonomy
//!
//! Configuration errors abort setup. Protocol errors reject a single input
//! event and leave the board untouched.

use thiserror::Error;

use crate::board::PieceId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("{rows}x{cols} grid exceeds the piece id range")]
    GridTooLarge { rows: usize, cols: usize },
    #[error("workspace {width}x{height} is outside 1..={max} pixels")]
    WorkspaceOutOfRange { width: i32, height: i32, max: i32 },
    #[error("workspace rings hold {available} pieces, {needed} needed")]
    WorkspaceTooSmall { needed: usize, available: usize },
    #[error("expected {expected} {what}, got {actual}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("{event} received with no active drag")]
    NoActiveDrag { event: &'static str },
    #[error("drag start for piece {requested} while piece {active} is still dragging")]
    DragInProgress { active: PieceId, requested: PieceId },
    #[error("unknown piece {id}")]
    UnknownPiece { id: PieceId },
    #[error("moving the group of piece {piece} leaves the pixel coordinate range")]
    OutOfRange { piece: PieceId },
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

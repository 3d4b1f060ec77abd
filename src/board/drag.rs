//! Drag gestures
//!
//! A two-state machine driven by the caller's event pump. A gesture is
//! Start, any number of Moves, then End; End runs the binding pass. Events
//! out of sequence are rejected before anything is touched.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::binding::{BindReport, try_bind_on_release};
use super::collision::narrow;
use super::piece::PieceId;
use super::state::Board;
use crate::error::ProtocolError;

/// Pointer input for one gesture step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    DragStart { piece: PieceId, x: i32, y: i32 },
    DragMove { x: i32, y: i32 },
    DragEnd,
}

/// Current gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        piece: PieceId,
        /// Pointer position at DragStart
        pointer_origin: IVec2,
        /// Grabbed piece position at DragStart
        piece_origin: IVec2,
    },
}

/// Turns pointer events into group moves and release binds
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Grabbed piece, if a gesture is active
    pub fn active_piece(&self) -> Option<PieceId> {
        match self.state {
            DragState::Dragging { piece, .. } => Some(piece),
            DragState::Idle => None,
        }
    }

    /// Dispatch one event. Returns the bind report for `DragEnd`.
    pub fn apply(
        &mut self,
        board: &mut Board,
        event: DragEvent,
    ) -> Result<Option<BindReport>, ProtocolError> {
        let result = match event {
            DragEvent::DragStart { piece, x, y } => {
                self.drag_start(board, piece, IVec2::new(x, y)).map(|_| None)
            }
            DragEvent::DragMove { x, y } => self.drag_move(board, IVec2::new(x, y)).map(|_| None),
            DragEvent::DragEnd => self.drag_end(board).map(Some),
        };
        if let Err(err) = &result {
            log::warn!("Rejected {:?}: {}", event, err);
        }
        result
    }

    pub fn drag_start(
        &mut self,
        board: &Board,
        piece: PieceId,
        pointer: IVec2,
    ) -> Result<(), ProtocolError> {
        if let DragState::Dragging { piece: active, .. } = self.state {
            return Err(ProtocolError::DragInProgress {
                active,
                requested: piece,
            });
        }
        let Some(grabbed) = board.piece(piece) else {
            return Err(ProtocolError::UnknownPiece { id: piece });
        };

        self.state = DragState::Dragging {
            piece,
            pointer_origin: pointer,
            piece_origin: grabbed.pos(),
        };
        Ok(())
    }

    /// Move the grabbed piece with the pointer; its group follows step by step.
    ///
    /// A move that would push any group member outside the pixel range is
    /// rejected and the gesture stays active at its last accepted position.
    pub fn drag_move(&mut self, board: &mut Board, pointer: IVec2) -> Result<(), ProtocolError> {
        let DragState::Dragging {
            piece,
            pointer_origin,
            piece_origin,
        } = self.state
        else {
            return Err(ProtocolError::NoActiveDrag { event: "drag move" });
        };
        let Some(current) = board.piece(piece).map(|p| p.pos()) else {
            return Err(ProtocolError::UnknownPiece { id: piece });
        };

        let target = piece_origin.as_i64vec2() + pointer.as_i64vec2() - pointer_origin.as_i64vec2();
        let delta = narrow(target - current.as_i64vec2())
            .ok_or(ProtocolError::OutOfRange { piece })?;
        board.translate_group(piece, delta)
    }

    /// Release the grabbed piece and bind it to overlapping neighbours
    pub fn drag_end(&mut self, board: &mut Board) -> Result<BindReport, ProtocolError> {
        let DragState::Dragging { piece, .. } = self.state else {
            return Err(ProtocolError::NoActiveDrag { event: "drag end" });
        };
        self.state = DragState::Idle;
        Ok(try_bind_on_release(board, piece))
    }
}

//! Piece entities
//!
//! One piece per grid slot, stored in the board arena and addressed by a
//! small integer id equal to the slot's row-major index.

use std::collections::BTreeSet;
use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Bounds;
use super::grid::Slot;
use crate::tiles::TileImage;

/// Arena index of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

impl PieceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A draggable tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    /// Logical grid coordinate, fixed at construction
    pub slot: Slot,
    /// Top-left corner in workspace pixels
    pos: IVec2,
    pub tile: TileImage,
    /// Other members of this piece's rigid group (self excluded)
    pub(crate) peers: BTreeSet<PieceId>,
}

impl Piece {
    pub fn new(id: PieceId, slot: Slot, pos: IVec2, tile: TileImage) -> Self {
        Self {
            id,
            slot,
            pos,
            tile,
            peers: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    /// The single write path for piece geometry
    #[inline]
    pub fn set_position(&mut self, pos: IVec2) {
        self.pos = pos;
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        self.tile.size
    }

    /// Hit box at the current position, sized by this piece's own tile
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.tile.size)
    }

    pub fn peers(&self) -> &BTreeSet<PieceId> {
        &self.peers
    }

    /// True when bound to at least one other piece
    pub fn is_grouped(&self) -> bool {
        !self.peers.is_empty()
    }
}

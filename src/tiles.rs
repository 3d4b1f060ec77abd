//! Tile image provider
//!
//! Image decoding and alpha masking live outside the core. The board only
//! needs, per slot, an opaque handle the renderer understands and the real
//! pixel size of that slot's tile.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::board::Slot;
use crate::consts::{TILE_BLEED, TILE_SIZE};

/// A slot's bitmap as seen by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileImage {
    /// Renderer-side texture key
    pub handle: u64,
    /// Actual width/height in pixels
    pub size: IVec2,
}

/// Source of per-slot tile bitmaps
pub trait PieceImageProvider {
    fn tile(&self, slot: Slot) -> TileImage;
}

/// Size-only provider matching the buffered tile split.
///
/// Every tile is `TILE_SIZE` square plus `TILE_BLEED` pixels on each side
/// that borders another tile, so corner, edge and interior tiles all differ.
/// Handles are the row-major slot index.
#[derive(Debug, Clone)]
pub struct BufferedTileProvider {
    rows: usize,
    cols: usize,
}

impl BufferedTileProvider {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl PieceImageProvider for BufferedTileProvider {
    fn tile(&self, slot: Slot) -> TileImage {
        let bleed = |has_neighbor: bool| if has_neighbor { TILE_BLEED } else { 0 };
        let width = TILE_SIZE + bleed(slot.col > 0) + bleed(slot.col + 1 < self.cols);
        let height = TILE_SIZE + bleed(slot.row > 0) + bleed(slot.row + 1 < self.rows);
        TileImage {
            handle: (slot.row * self.cols + slot.col) as u64,
            size: IVec2::new(width, height),
        }
    }
}

/// Provider with one fixed size for every tile
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct UniformTileProvider {
    pub cols: usize,
    pub size: IVec2,
}

#[cfg(test)]
impl PieceImageProvider for UniformTileProvider {
    fn tile(&self, slot: Slot) -> TileImage {
        TileImage {
            handle: (slot.row * self.cols + slot.col) as u64,
            size: self.size,
        }
    }
}

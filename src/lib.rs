//! Jigsaw Bind - rectangular jigsaw puzzle core
//!
//! Core modules:
//! - `board`: Deterministic puzzle state (grid, layout, binding, dragging)
//! - `tiles`: Tile image provider seam (per-slot bitmap sizes)
//! - `settings`: Puzzle configuration
//! - `error`: Configuration and input protocol errors

pub mod board;
pub mod error;
pub mod settings;
pub mod tiles;

pub use board::{
    BindReport, Board, BoardSnapshot, DragController, DragEvent, DragState, GridModel, PieceId,
    Slot,
};
pub use error::{ConfigurationError, ProtocolError, PuzzleError};
pub use settings::Settings;
pub use tiles::{BufferedTileProvider, PieceImageProvider, TileImage};

/// Fixed pixel geometry
pub mod consts {
    /// Layout footprint of one piece in the scatter rings
    pub const PIECE_FOOTPRINT: i32 = 35;
    /// Gap between neighbouring layout cells
    pub const PIECE_GAP: i32 = 10;
    /// Distance between two concentric layout rings
    pub const RING_PITCH: i32 = 50;
    /// Rings packed along each workspace edge
    pub const RING_COUNT: i32 = 3;
    /// First top ring offset from the workspace top edge
    pub const TOP_INSET: i32 = 15;
    /// Bottom ring offset from the workspace bottom edge
    pub const BOTTOM_INSET: i32 = 20;
    /// Side columns start below the top rings
    pub const SIDE_BAND_TOP: i32 = 160;
    /// Side columns stop above the bottom rings
    pub const SIDE_BAND_BOTTOM_INSET: i32 = 170;

    /// Largest workspace width or height accepted from settings
    pub const MAX_WORKSPACE_EXTENT: i32 = 1 << 16;

    /// Overlap between two interlocked pieces
    pub const INTERLOCK_MARGIN: i32 = 10;

    /// Nominal tile edge before bleed
    pub const TILE_SIZE: i32 = 35;
    /// Extra pixels on each side of a tile that faces another tile
    pub const TILE_BLEED: i32 = 5;
}

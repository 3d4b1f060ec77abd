//! Deterministic puzzle core
//!
//! All piece state lives here. This module must stay pure and deterministic:
//! - Seeded RNG only (scatter)
//! - Stable iteration order (by piece id)
//! - No rendering, image decoding or platform dependencies

pub mod binding;
pub mod collision;
pub mod drag;
pub mod grid;
pub mod layout;
pub mod piece;
pub mod snapshot;
pub mod state;

pub use binding::{BindReport, Merge, merge, snap_target, try_bind_on_release};
pub use collision::Bounds;
pub use drag::{DragController, DragEvent, DragState};
pub use grid::{Direction, GridModel, Slot};
pub use layout::{generate, ring_positions, scatter};
pub use piece::{Piece, PieceId};
pub use snapshot::{BoardSnapshot, PieceView};
pub use state::Board;

//! Initial layout and scatter
//!
//! Pieces start packed around the workspace perimeter: up to three rings
//! along the top and bottom edges, then up to three columns down each side
//! between them. Positions come out in generation order and are then
//! shuffled onto slots so grid neighbours do not start next to each other.

use glam::IVec2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::consts::*;
use crate::error::ConfigurationError;

/// Horizontal distance between two layout cells
const CELL_PITCH: i32 = PIECE_FOOTPRINT + PIECE_GAP;

/// Every perimeter cell the workspace can hold, in generation order.
///
/// The workspace is clamped to `0..=MAX_WORKSPACE_EXTENT` on both axes.
pub fn ring_positions(workspace: IVec2) -> Vec<IVec2> {
    let workspace = workspace.clamp(IVec2::ZERO, IVec2::splat(MAX_WORKSPACE_EXTENT));
    let mut positions = Vec::new();
    let row_limit = workspace.x - (PIECE_FOOTPRINT + PIECE_GAP / 2);
    let top_band_end = TOP_INSET + RING_COUNT * RING_PITCH;

    let push_row = |positions: &mut Vec<IVec2>, y: i32| {
        let mut col = 0;
        while col * CELL_PITCH < row_limit {
            positions.push(IVec2::new(PIECE_GAP + col * CELL_PITCH, y));
            col += 1;
        }
    };

    // Top rings
    for ring in 0..RING_COUNT {
        push_row(&mut positions, TOP_INSET + ring * RING_PITCH);
    }

    // Bottom rings, only where they clear the top band
    for ring in 0..RING_COUNT {
        let y = workspace.y - BOTTOM_INSET - (ring + 1) * RING_PITCH;
        if y >= top_band_end {
            push_row(&mut positions, y);
        }
    }

    // Side columns between the bands
    let side_end = workspace.y - SIDE_BAND_BOTTOM_INSET;
    let right_start = workspace.x - RING_COUNT * CELL_PITCH;
    if right_start >= PIECE_GAP + RING_COUNT * CELL_PITCH {
        for left_side in [true, false] {
            let mut y = SIDE_BAND_TOP;
            while y < side_end {
                for col in 0..RING_COUNT {
                    let x = if left_side {
                        PIECE_GAP + col * CELL_PITCH
                    } else {
                        right_start + col * CELL_PITCH
                    };
                    positions.push(IVec2::new(x, y));
                }
                y += RING_PITCH;
            }
        }
    }

    positions
}

/// Exactly `count` initial positions in generation order
pub fn generate(workspace: IVec2, count: usize) -> Result<Vec<IVec2>, ConfigurationError> {
    let mut positions = ring_positions(workspace);
    if positions.len() < count {
        return Err(ConfigurationError::WorkspaceTooSmall {
            needed: count,
            available: positions.len(),
        });
    }
    positions.truncate(count);
    log::info!(
        "Layout: {} positions in {}x{} workspace",
        count,
        workspace.x,
        workspace.y
    );
    Ok(positions)
}

/// Assign positions to slots by an unbiased random permutation.
///
/// Entry `i` of the result belongs to the slot with row-major index `i`.
pub fn scatter<R: Rng + ?Sized>(mut positions: Vec<IVec2>, rng: &mut R) -> Vec<IVec2> {
    positions.shuffle(rng);
    positions
}

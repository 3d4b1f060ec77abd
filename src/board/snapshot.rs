//! Read-only board view for renderers

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::Slot;
use super::piece::PieceId;
use super::state::Board;
use crate::tiles::TileImage;

/// What a renderer needs to draw one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub id: PieceId,
    pub slot: Slot,
    pub position: IVec2,
    pub tile: TileImage,
}

/// Every piece in id (draw) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pieces: Vec<PieceView>,
    /// Number of rigid groups on the board
    pub group_count: usize,
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            pieces: self
                .pieces()
                .iter()
                .map(|p| PieceView {
                    id: p.id,
                    slot: p.slot,
                    position: p.pos(),
                    tile: p.tile,
                })
                .collect(),
            group_count: self.groups().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::binding::merge;
    use crate::board::grid::GridModel;
    use crate::tiles::BufferedTileProvider;

    #[test]
    fn test_snapshot_mirrors_board() {
        let grid = GridModel::build(1, 3).unwrap();
        let provider = BufferedTileProvider::new(grid.rows(), grid.cols());
        let positions = vec![IVec2::new(1, 2), IVec2::new(3, 4), IVec2::new(5, 6)];
        let mut board = Board::from_positions(grid, &provider, positions).unwrap();
        merge(&mut board, PieceId(0), PieceId(1));

        let snapshot = board.snapshot();
        assert_eq!(snapshot.pieces.len(), 3);
        assert_eq!(snapshot.group_count, 2);
        assert_eq!(snapshot.pieces[2].position, IVec2::new(5, 6));
        assert_eq!(snapshot.pieces[2].slot, Slot::new(0, 2));
        assert_eq!(snapshot.pieces[1].tile.size, IVec2::new(45, 35));
    }

    #[test]
    fn test_snapshot_serializes() {
        let grid = GridModel::build(1, 1).unwrap();
        let provider = BufferedTileProvider::new(grid.rows(), grid.cols());
        let board = Board::from_positions(grid, &provider, vec![IVec2::new(7, 8)]).unwrap();
        let json = serde_json::to_value(board.snapshot()).unwrap();
        assert_eq!(json["pieces"][0]["id"], 0);
        assert_eq!(json["pieces"][0]["position"], serde_json::json!([7, 8]));
        assert_eq!(json["group_count"], 1);
    }
}

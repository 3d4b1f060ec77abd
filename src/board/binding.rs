//! Group binding
//!
//! When a piece is dropped it snaps to every logical neighbour it overlaps
//! and joins that neighbour's group. Groups are stored per piece as a peer
//! set; each merge rewrites the peer set of every member of the union in one
//! pass, so the relation is symmetric and every group is a clique after
//! every merge. Bindings are permanent.

use std::collections::BTreeSet;

use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};

use super::collision::narrow;
use super::grid::Direction;
use super::piece::{Piece, PieceId};
use super::state::Board;
use crate::consts::INTERLOCK_MARGIN;

/// One snap performed during a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merge {
    /// Neighbour the dropped piece snapped to
    pub with: PieceId,
    /// Side of the dropped piece the neighbour sits on
    pub direction: Direction,
    /// Translation applied to the dropped piece's group
    pub delta: IVec2,
}

/// Outcome of releasing a piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindReport {
    pub piece: PieceId,
    pub merges: Vec<Merge>,
}

impl BindReport {
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }
}

/// Where `moved` must sit to interlock with `anchor` lying on side `dir`.
///
/// `None` if that spot is outside the pixel range.
pub fn snap_target(dir: Direction, moved_size: IVec2, anchor: &Piece) -> Option<IVec2> {
    let p = anchor.pos().as_i64vec2();
    let s = anchor.size().as_i64vec2();
    let m = moved_size.as_i64vec2();
    let margin = i64::from(INTERLOCK_MARGIN);
    narrow(match dir {
        Direction::Up => I64Vec2::new(p.x, p.y + s.y - margin),
        Direction::Right => I64Vec2::new(p.x - m.x + margin, p.y),
        Direction::Down => I64Vec2::new(p.x, p.y - m.y + margin),
        Direction::Left => I64Vec2::new(p.x + s.x - margin, p.y),
    })
}

/// Join the groups of `a` and `b` into one clique
pub fn merge(board: &mut Board, a: PieceId, b: PieceId) {
    if !board.contains(a) || !board.contains(b) {
        return;
    }

    let mut members = BTreeSet::new();
    for id in [a, b] {
        members.insert(id);
        members.extend(board.pieces[id.index()].peers.iter().copied());
    }

    for &member in &members {
        let peers = &mut board.pieces[member.index()].peers;
        peers.clone_from(&members);
        peers.remove(&member);
    }
}

/// Snap and bind a piece at its drop position.
///
/// Every piece overlapping the dropped hit box is a candidate, in id order.
/// Candidates that are not grid neighbours, already share the dropped
/// piece's group, or would need a snap outside the pixel range are ignored.
/// Each valid neighbour moves the dropped piece's whole group into interlock
/// and is merged before the next candidate.
pub fn try_bind_on_release(board: &mut Board, moved: PieceId) -> BindReport {
    let mut report = BindReport {
        piece: moved,
        merges: Vec::new(),
    };
    let Some(dropped) = board.piece(moved).map(Piece::bounds) else {
        return report;
    };

    let candidates: Vec<PieceId> = board
        .pieces()
        .iter()
        .filter(|p| p.id != moved && p.bounds().intersects(&dropped))
        .map(|p| p.id)
        .collect();

    for other in candidates {
        let moved_piece = &board.pieces[moved.index()];
        let anchor = &board.pieces[other.index()];
        if moved_piece.peers.contains(&other) {
            continue;
        }
        let Some(direction) = board.grid().direction_to(moved_piece.slot, anchor.slot) else {
            continue;
        };

        let delta = snap_target(direction, moved_piece.size(), anchor)
            .and_then(|target| narrow(target.as_i64vec2() - moved_piece.pos().as_i64vec2()));
        let Some(delta) = delta else {
            log::warn!("Snap of {moved} to {other} is out of range, skipped");
            continue;
        };
        if let Err(err) = board.translate_group(moved, delta) {
            log::warn!("Snap of {moved} to {other} skipped: {err}");
            continue;
        }
        merge(board, moved, other);

        log::debug!(
            "Bound {} to {} ({:?}), group size {}",
            moved,
            other,
            direction,
            board.pieces[moved.index()].peers.len() + 1
        );
        report.merges.push(Merge {
            with: other,
            direction,
            delta,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::grid::{GridModel, Slot};
    use crate::tiles::{BufferedTileProvider, TileImage, UniformTileProvider};

    fn ids(raw: &[u32]) -> BTreeSet<PieceId> {
        raw.iter().map(|&i| PieceId(i)).collect()
    }

    fn peers(board: &Board, id: u32) -> BTreeSet<PieceId> {
        board.piece(PieceId(id)).unwrap().peers().clone()
    }

    fn board_2x2(positions: [(i32, i32); 4]) -> Board {
        let grid = GridModel::build(2, 2).unwrap();
        let provider = BufferedTileProvider::new(2, 2);
        let positions = positions.iter().map(|&(x, y)| IVec2::new(x, y)).collect();
        Board::from_positions(grid, &provider, positions).unwrap()
    }

    fn drop_at(board: &mut Board, id: u32, pos: (i32, i32)) -> BindReport {
        let delta = IVec2::new(pos.0, pos.1) - board.piece(PieceId(id)).unwrap().pos();
        board.translate_group(PieceId(id), delta).unwrap();
        try_bind_on_release(board, PieceId(id))
    }

    #[test]
    fn test_snap_targets() {
        let anchor = Piece::new(
            PieceId(0),
            Slot::new(0, 0),
            IVec2::new(100, 200),
            TileImage {
                handle: 0,
                size: IVec2::new(40, 45),
            },
        );
        let moved = IVec2::new(50, 55);
        let target = |dir| snap_target(dir, moved, &anchor).unwrap();
        assert_eq!(target(Direction::Up), IVec2::new(100, 235));
        assert_eq!(target(Direction::Right), IVec2::new(60, 200));
        assert_eq!(target(Direction::Down), IVec2::new(100, 155));
        assert_eq!(target(Direction::Left), IVec2::new(130, 200));
    }

    #[test]
    fn test_merge_singletons() {
        let mut board = board_2x2([(0, 0); 4]);
        merge(&mut board, PieceId(0), PieceId(1));
        assert_eq!(peers(&board, 0), ids(&[1]));
        assert_eq!(peers(&board, 1), ids(&[0]));
        assert!(peers(&board, 2).is_empty());
    }

    #[test]
    fn test_merge_two_groups_forms_clique() {
        let mut board = board_2x2([(0, 0); 4]);
        merge(&mut board, PieceId(0), PieceId(1));
        merge(&mut board, PieceId(2), PieceId(3));
        merge(&mut board, PieceId(1), PieceId(3));
        for id in 0..4 {
            let expected: BTreeSet<_> = (0..4).filter(|&i| i != id).map(PieceId).collect();
            assert_eq!(peers(&board, id), expected);
        }
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut board = board_2x2([(0, 0); 4]);
        merge(&mut board, PieceId(0), PieceId(2));
        let once = board.clone();
        merge(&mut board, PieceId(0), PieceId(2));
        assert_eq!(board, once);
        merge(&mut board, PieceId(2), PieceId(0));
        assert_eq!(board, once);
    }

    #[test]
    fn test_merge_with_self_is_noop() {
        let mut board = board_2x2([(0, 0); 4]);
        merge(&mut board, PieceId(1), PieceId(1));
        assert!(peers(&board, 1).is_empty());
    }

    #[test]
    fn test_horizontal_snap() {
        let mut board = board_2x2([(100, 100), (300, 100), (100, 300), (500, 500)]);
        let report = drop_at(&mut board, 1, (130, 105));

        assert_eq!(report.merges.len(), 1);
        assert_eq!(report.merges[0].with, PieceId(0));
        assert_eq!(report.merges[0].direction, Direction::Left);
        assert_eq!(peers(&board, 0), ids(&[1]));
        assert_eq!(peers(&board, 1), ids(&[0]));

        let anchor = board.piece(PieceId(0)).unwrap();
        let moved = board.piece(PieceId(1)).unwrap();
        assert_eq!(moved.pos().x, anchor.pos().x + anchor.size().x - INTERLOCK_MARGIN);
        assert_eq!(moved.pos().y, anchor.pos().y);
    }

    #[test]
    fn test_vertical_snap_joins_existing_group() {
        let mut board = board_2x2([(100, 100), (300, 100), (100, 300), (500, 500)]);
        drop_at(&mut board, 1, (130, 100));
        // Also overlaps (0,1), which is diagonal and ignored
        let report = drop_at(&mut board, 2, (105, 125));

        assert_eq!(report.merges.len(), 1);
        assert_eq!(report.merges[0].direction, Direction::Up);
        assert_eq!(board.piece(PieceId(2)).unwrap().pos(), IVec2::new(100, 130));
        assert_eq!(peers(&board, 0), ids(&[1, 2]));
        assert_eq!(peers(&board, 1), ids(&[0, 2]));
        assert_eq!(peers(&board, 2), ids(&[0, 1]));
        assert!(peers(&board, 3).is_empty());
    }

    #[test]
    fn test_non_neighbor_overlap_is_noop() {
        let mut board = board_2x2([(100, 100), (300, 100), (100, 300), (500, 500)]);
        let before = board.clone();
        let report = drop_at(&mut board, 3, (110, 110));

        assert!(report.is_empty());
        assert_eq!(board.piece(PieceId(3)).unwrap().pos(), IVec2::new(110, 110));
        for id in 0..4 {
            assert!(peers(&board, id).is_empty());
        }
        assert_eq!(board.grid(), before.grid());
    }

    #[test]
    fn test_grouped_piece_snap_carries_group() {
        let mut board = board_2x2([(100, 100), (300, 100), (100, 300), (500, 500)]);
        // Build {1, 3}: (1,1) below (0,1)
        drop_at(&mut board, 3, (305, 125));
        assert_eq!(peers(&board, 1), ids(&[3]));
        let offset =
            board.piece(PieceId(3)).unwrap().pos() - board.piece(PieceId(1)).unwrap().pos();

        // Drop 1 beside 0: 3 must follow
        let report = drop_at(&mut board, 1, (128, 102));
        assert_eq!(report.merges.len(), 1);
        let p1 = board.piece(PieceId(1)).unwrap().pos();
        let p3 = board.piece(PieceId(3)).unwrap().pos();
        assert_eq!(p1, IVec2::new(130, 100));
        assert_eq!(p3 - p1, offset);
        assert_eq!(peers(&board, 0), ids(&[1, 3]));
    }

    #[test]
    fn test_corner_drop_binds_two_neighbors() {
        let grid = GridModel::build(2, 2).unwrap();
        let provider = UniformTileProvider {
            cols: 2,
            size: IVec2::splat(40),
        };
        // (0,1) and (1,0) already placed around an empty corner at (130, 130)
        let positions = vec![
            IVec2::new(600, 600),
            IVec2::new(130, 100),
            IVec2::new(100, 130),
            IVec2::new(400, 400),
        ];
        let mut board = Board::from_positions(grid, &provider, positions).unwrap();

        // (1,1) dropped into the corner overlaps both
        let report = drop_at(&mut board, 3, (132, 132));
        assert_eq!(report.merges.len(), 2);
        assert_eq!(report.merges[0].with, PieceId(1));
        assert_eq!(report.merges[0].direction, Direction::Up);
        assert_eq!(report.merges[1].with, PieceId(2));
        assert_eq!(report.merges[1].direction, Direction::Left);

        assert_eq!(peers(&board, 1), ids(&[2, 3]));
        assert_eq!(peers(&board, 2), ids(&[1, 3]));
        assert_eq!(peers(&board, 3), ids(&[1, 2]));
        assert!(peers(&board, 0).is_empty());
    }

    #[test]
    fn test_drop_on_own_group_member_is_ignored() {
        let mut board = board_2x2([(100, 100), (300, 100), (100, 300), (500, 500)]);
        drop_at(&mut board, 1, (130, 100));
        let before = board.clone();
        let report = try_bind_on_release(&mut board, PieceId(0));
        assert!(report.is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_snap_past_range_limit_is_skipped() {
        let edge = i32::MAX - 20;
        let mut board = board_2x2([(edge, 0), (edge - 10, 5), (0, 300), (500, 500)]);
        let before = board.clone();
        // (0,1) overlaps (0,0), but interlocking would put it past i32::MAX
        let report = try_bind_on_release(&mut board, PieceId(1));
        assert!(report.is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_unknown_piece_release() {
        let mut board = board_2x2([(0, 0); 4]);
        let report = try_bind_on_release(&mut board, PieceId(99));
        assert!(report.is_empty());
    }
}

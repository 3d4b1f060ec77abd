//! Logical grid and 4-neighbourhood adjacency
//!
//! Built once per puzzle and never mutated afterwards. Slots are addressed
//! by (row, col) and by row-major index; neighbour lists follow the
//! clockwise order up, right, down, left.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A fixed logical coordinate in the R×C grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
}

impl Slot {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Side of a slot, clockwise from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise order used by every neighbour list
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }
}

/// Static R×C adjacency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    /// Per slot (row-major), neighbour in each clockwise direction
    neighbors: Vec<[Option<Slot>; 4]>,
}

impl GridModel {
    /// Slot count of a `rows` × `cols` grid, which must be non-empty and
    /// addressable by a `PieceId`
    pub fn slot_count(rows: usize, cols: usize) -> Result<usize, ConfigurationError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigurationError::EmptyGrid { rows, cols });
        }
        rows.checked_mul(cols)
            .filter(|&count| u32::try_from(count).is_ok())
            .ok_or(ConfigurationError::GridTooLarge { rows, cols })
    }

    /// Build the adjacency table for a `rows` × `cols` grid
    pub fn build(rows: usize, cols: usize) -> Result<Self, ConfigurationError> {
        let mut neighbors = Vec::with_capacity(Self::slot_count(rows, cols)?);
        for row in 0..rows {
            for col in 0..cols {
                let up = (row > 0).then(|| Slot::new(row - 1, col));
                let right = (col + 1 < cols).then(|| Slot::new(row, col + 1));
                let down = (row + 1 < rows).then(|| Slot::new(row + 1, col));
                let left = (col > 0).then(|| Slot::new(row, col - 1));
                neighbors.push([up, right, down, left]);
            }
        }

        Ok(Self {
            rows,
            cols,
            neighbors,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total slot count (rows × cols)
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        slot.row < self.rows && slot.col < self.cols
    }

    /// Row-major index of a slot
    #[inline]
    pub fn index_of(&self, slot: Slot) -> usize {
        slot.row * self.cols + slot.col
    }

    /// Slot at a row-major index
    #[inline]
    pub fn slot_at(&self, index: usize) -> Slot {
        Slot::new(index / self.cols, index % self.cols)
    }

    /// All slots in row-major order
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.len()).map(|i| self.slot_at(i))
    }

    /// Neighbour of `slot` on side `dir`, if any
    pub fn neighbor(&self, slot: Slot, dir: Direction) -> Option<Slot> {
        if !self.contains(slot) {
            return None;
        }
        self.neighbors[self.index_of(slot)][dir.index()]
    }

    /// Existing neighbours of `slot` in clockwise order
    pub fn neighbors(&self, slot: Slot) -> impl Iterator<Item = (Direction, Slot)> + '_ {
        let edges = if self.contains(slot) {
            self.neighbors[self.index_of(slot)]
        } else {
            [None; 4]
        };
        Direction::CLOCKWISE
            .into_iter()
            .zip(edges)
            .filter_map(|(dir, neighbor)| neighbor.map(|n| (dir, n)))
    }

    /// Side of `from` on which `to` sits, if they are logical neighbours
    pub fn direction_to(&self, from: Slot, to: Slot) -> Option<Direction> {
        self.neighbors(from)
            .find(|&(_, neighbor)| neighbor == to)
            .map(|(dir, _)| dir)
    }
}

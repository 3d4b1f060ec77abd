//! Board state
//!
//! The arena that owns the grid and every piece. All gameplay mutation goes
//! through the binding engine and the drag controller.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::checked_offset;
use super::grid::{GridModel, Slot};
use super::layout;
use super::piece::{Piece, PieceId};
use crate::error::{ConfigurationError, ProtocolError};
use crate::settings::Settings;
use crate::tiles::PieceImageProvider;

/// Complete puzzle state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: GridModel,
    /// Indexed by `PieceId`, which equals the slot's row-major index
    pub(crate) pieces: Vec<Piece>,
    /// Scatter seed, when the layout was randomized
    seed: Option<u64>,
}

impl Board {
    /// Build a scattered board from settings
    pub fn new<P>(settings: &Settings, provider: &P) -> Result<Self, ConfigurationError>
    where
        P: PieceImageProvider + ?Sized,
    {
        settings.validate()?;
        // Capacity first: the adjacency table is only built once it fits
        let count = settings.piece_count()?;
        let positions = layout::generate(settings.workspace(), count)?;
        let grid = GridModel::build(settings.rows, settings.cols)?;
        log::info!(
            "Building {}x{} puzzle ({} pieces)",
            grid.rows(),
            grid.cols(),
            grid.len()
        );

        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Scatter seed: {seed}");
        let mut rng = Pcg32::seed_from_u64(seed);
        let positions = layout::scatter(positions, &mut rng);

        let mut board = Self::from_positions(grid, provider, positions)?;
        board.seed = Some(seed);
        Ok(board)
    }

    /// Build a board with explicit per-slot positions (row-major)
    pub fn from_positions<P>(
        grid: GridModel,
        provider: &P,
        positions: Vec<IVec2>,
    ) -> Result<Self, ConfigurationError>
    where
        P: PieceImageProvider + ?Sized,
    {
        if positions.len() != grid.len() {
            return Err(ConfigurationError::CountMismatch {
                what: "positions",
                expected: grid.len(),
                actual: positions.len(),
            });
        }

        let pieces = positions
            .into_iter()
            .enumerate()
            .map(|(index, pos)| {
                let slot = grid.slot_at(index);
                Piece::new(PieceId(index as u32), slot, pos, provider.tile(slot))
            })
            .collect();

        Ok(Self {
            grid,
            pieces,
            seed: None,
        })
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub fn contains(&self, id: PieceId) -> bool {
        id.index() < self.pieces.len()
    }

    /// Piece owning a grid slot
    pub fn piece_at_slot(&self, slot: Slot) -> Option<&Piece> {
        if !self.grid.contains(slot) {
            return None;
        }
        self.pieces.get(self.grid.index_of(slot))
    }

    /// Topmost piece under a workspace point (highest id draws last)
    pub fn piece_at(&self, point: IVec2) -> Option<PieceId> {
        self.pieces
            .iter()
            .rev()
            .find(|p| p.bounds().contains_point(point))
            .map(|p| p.id)
    }

    /// Peers of a piece (empty for unknown ids)
    pub fn peers(&self, id: PieceId) -> impl Iterator<Item = PieceId> + '_ {
        self.piece(id).into_iter().flat_map(|p| p.peers.iter().copied())
    }

    /// The piece and its peers, ascending
    pub fn group_of(&self, id: PieceId) -> Vec<PieceId> {
        let Some(piece) = self.piece(id) else {
            return Vec::new();
        };
        let mut group: Vec<PieceId> = piece.peers.iter().copied().collect();
        let at = group.partition_point(|&p| p < id);
        group.insert(at, id);
        group
    }

    /// Partition of all pieces into rigid groups, ordered by smallest member
    pub fn groups(&self) -> Vec<Vec<PieceId>> {
        self.pieces
            .iter()
            .filter(|p| p.peers.first().is_none_or(|&first| p.id < first))
            .map(|p| self.group_of(p.id))
            .collect()
    }

    /// Move a piece and every current peer by the same offset.
    ///
    /// All-or-nothing: if any member would leave the pixel range, nothing moves.
    pub(crate) fn translate_group(
        &mut self,
        id: PieceId,
        delta: IVec2,
    ) -> Result<(), ProtocolError> {
        if !self.contains(id) {
            return Err(ProtocolError::UnknownPiece { id });
        }
        if delta == IVec2::ZERO {
            return Ok(());
        }

        let moves = self
            .group_of(id)
            .into_iter()
            .map(|member| {
                checked_offset(self.pieces[member.index()].pos(), delta)
                    .map(|pos| (member, pos))
                    .ok_or(ProtocolError::OutOfRange { piece: id })
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (member, pos) in moves {
            self.pieces[member.index()].set_position(pos);
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

/// Canonical visibility of a tile. A matched tile is always face up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    Hidden,
    Revealed,
    Matched,
}

impl TileState {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    identity: Identity,
    state: TileState,
}

impl Tile {
    pub(crate) const fn new(identity: Identity) -> Self {
        Self {
            identity,
            state: TileState::Hidden,
        }
    }

    pub const fn identity(&self) -> Identity {
        self.identity
    }

    pub const fn state(&self) -> TileState {
        self.state
    }

    pub const fn is_revealed(&self) -> bool {
        self.state.is_face_up()
    }

    pub const fn is_matched(&self) -> bool {
        matches!(self.state, TileState::Matched)
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }
}

/// Presentation-facing copy of a single tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub row: Coord,
    pub col: Coord,
    pub identity: Identity,
    pub revealed: bool,
    pub matched: bool,
}

impl TileSnapshot {
    pub fn new((row, col): Coord2, tile: &Tile) -> Self {
        Self {
            row,
            col,
            identity: tile.identity(),
            revealed: tile.is_revealed(),
            matched: tile.is_matched(),
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }
}

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use level::*;
pub use tile::*;
pub use types::*;

mod catalog;
mod engine;
mod error;
mod generator;
mod level;
mod tile;
mod types;

/// Grid of identities in which every identity appears exactly twice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedTileLayout")]
pub struct TileLayout {
    identities: Array2<Identity>,
}

/// Wire form of [`TileLayout`], pairing not yet checked.
#[derive(Deserialize)]
struct UncheckedTileLayout {
    identities: Array2<Identity>,
}

impl TryFrom<UncheckedTileLayout> for TileLayout {
    type Error = GameError;

    fn try_from(unchecked: UncheckedTileLayout) -> Result<Self> {
        let layout = Self {
            identities: unchecked.identities,
        };
        layout.validate()?;
        Ok(layout)
    }
}

impl TileLayout {
    /// Builds a layout from identities listed in row-major order.
    pub fn from_identities(size: Coord2, identities: Vec<Identity>) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        let identities = Array2::from_shape_vec(size.to_nd_index(), identities)
            .map_err(|_| ConfigError::UnpairedLayout)?;
        let layout = Self { identities };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.identities.dim();
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }

        let mut seen: Vec<(Identity, usize)> = Vec::with_capacity(self.identities.len() / 2);
        for &identity in self.identities.iter() {
            match seen.iter_mut().find(|(other, _)| *other == identity) {
                Some((_, count)) => *count += 1,
                None => seen.push((identity, 1)),
            }
        }

        if seen.iter().all(|&(_, count)| count == 2) {
            Ok(())
        } else {
            Err(ConfigError::UnpairedLayout.into())
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.identities.dim();
        types::from_nd_index(dim)
    }

    pub fn total_tiles(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn pairs(&self) -> CellCount {
        self.total_tiles() / 2
    }

    pub(crate) fn identities(&self) -> &Array2<Identity> {
        &self.identities
    }

    /// Identities with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Identity)> + '_ {
        self.identities
            .indexed_iter()
            .map(|(index, &identity)| (types::from_nd_index(index), identity))
    }
}

impl Index<Coord2> for TileLayout {
    type Output = Identity;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.identities[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The tile was already face up, nothing happened.
    NoChange,
    /// First tile of a turn, waiting for its partner.
    FirstSelected(Coord2),
    Matched(Coord2, Coord2),
    /// Both tiles stay face up until [`Board::hide_unmatched`] is called with them.
    Mismatched(Coord2, Coord2),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn first(self) -> Option<Coord2> {
        use RevealOutcome::*;
        match self {
            NoChange => None,
            FirstSelected(first) | Matched(first, _) | Mismatched(first, _) => Some(first),
        }
    }

    pub const fn second(self) -> Option<Coord2> {
        use RevealOutcome::*;
        match self {
            NoChange | FirstSelected(_) => None,
            Matched(_, second) | Mismatched(_, second) => Some(second),
        }
    }

    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched(..))
    }

    /// Whether this reveal finished a turn, matched or not.
    pub const fn completes_turn(self) -> bool {
        matches!(self, Self::Matched(..) | Self::Mismatched(..))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HideOutcome {
    NoChange,
    Hidden,
}

impl HideOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Hidden => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    Idle,
    AwaitingSecond(Coord2),
}

impl Default for TurnPhase {
    fn default() -> Self {
        Self::Idle
    }
}

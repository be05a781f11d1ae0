use alloc::borrow::Cow;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Tile grid together with the turn state of a single game.
///
/// Reveal and hide are total for every in-bounds position: clicks on tiles that are already face up, or hides
/// for tiles that have since been matched, are reported as no-ops rather than errors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    level: LevelConfig,
    seed: Option<u64>,
    tiles: Array2<Tile>,
    moves: u32,
    matched_pairs: CellCount,
    phase: TurnPhase,
}

impl Board {
    /// Generates a fresh board for `level`.
    ///
    /// Without a seed one is drawn from system randomness; either way the seed used is kept and reported by
    /// [`Board::seed`], so any board can be regenerated.
    pub fn new(level: LevelConfig, seed: Option<u64>) -> Result<Self> {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        let layout = RandomLayoutGenerator::new(seed).generate(&level)?;

        let mut board = Self::from_layout(level.name, layout);
        board.seed = Some(seed);
        log::debug!("New {} board, seed {}", board.level.name, seed);
        Ok(board)
    }

    pub fn from_layout(name: impl Into<Cow<'static, str>>, layout: TileLayout) -> Self {
        let (rows, cols) = layout.size();
        Self {
            level: LevelConfig::new(name, rows, cols),
            seed: None,
            tiles: layout.identities().map(|&identity| Tile::new(identity)),
            moves: 0,
            matched_pairs: 0,
            phase: TurnPhase::Idle,
        }
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn size(&self) -> Coord2 {
        self.level.size()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> CellCount {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> CellCount {
        self.level.pairs()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The face-up tile waiting for its partner, if a turn is in progress.
    pub fn pending(&self) -> Option<Coord2> {
        match self.phase {
            TurnPhase::Idle => None,
            TurnPhase::AwaitingSecond(coords) => Some(coords),
        }
    }

    pub fn all_matched(&self) -> bool {
        u32::from(self.matched_pairs) * 2 == u32::from(self.level.total_tiles())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords(coords))
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    /// All tiles in row-major order. Call again to restart.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord2, &Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|(index, tile)| (types::from_nd_index(index), tile))
    }

    pub fn snapshots(&self) -> impl Iterator<Item = TileSnapshot> + '_ {
        self.tiles()
            .map(|(coords, tile)| TileSnapshot::new(coords, tile))
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        if self[coords].is_revealed() {
            log::trace!("Ignoring reveal of face-up tile {coords:?}");
            return Ok(NoChange);
        }

        self.tile_mut(coords).set_state(TileState::Revealed);

        let TurnPhase::AwaitingSecond(first) = self.phase else {
            self.phase = TurnPhase::AwaitingSecond(coords);
            return Ok(FirstSelected(coords));
        };

        self.phase = TurnPhase::Idle;
        self.moves = self.moves.saturating_add(1);

        if self[first].identity() != self[coords].identity() {
            log::trace!("Mismatch {first:?} / {coords:?}");
            return Ok(Mismatched(first, coords));
        }

        self.tile_mut(first).set_state(TileState::Matched);
        self.tile_mut(coords).set_state(TileState::Matched);
        self.matched_pairs += 1;
        log::trace!("Match {first:?} / {coords:?}");

        if self.all_matched() {
            log::debug!("All {} pairs matched in {} moves", self.matched_pairs, self.moves);
        }
        Ok(Matched(first, coords))
    }

    /// Turns a mismatched pair face down again.
    ///
    /// Does nothing when either tile is matched. Hiding the pending first selection also cancels it.
    pub fn hide_unmatched(&mut self, a: Coord2, b: Coord2) -> Result<HideOutcome> {
        let a = self.validate_coords(a)?;
        let b = self.validate_coords(b)?;

        if self[a].is_matched() || self[b].is_matched() {
            return Ok(HideOutcome::NoChange);
        }

        let mut hidden = false;
        for coords in [a, b] {
            if self[coords].state() == TileState::Revealed {
                self.tile_mut(coords).set_state(TileState::Hidden);
                hidden = true;
            }
            if self.phase == TurnPhase::AwaitingSecond(coords) {
                self.phase = TurnPhase::Idle;
            }
        }

        Ok(if hidden {
            HideOutcome::Hidden
        } else {
            HideOutcome::NoChange
        })
    }

    fn tile_mut(&mut self, coords: Coord2) -> &mut Tile {
        &mut self.tiles[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

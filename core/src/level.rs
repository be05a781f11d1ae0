use alloc::borrow::Cow;
use serde::{Deserialize, Serialize};

use crate::*;

/// Named board size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: Cow<'static, str>,
    pub rows: Coord,
    pub cols: Coord,
}

impl LevelConfig {
    pub const EASY: Self = Self::preset_unchecked("Easy", 4, 4);
    pub const MEDIUM: Self = Self::preset_unchecked("Medium", 4, 6);
    pub const HARD: Self = Self::preset_unchecked("Hard", 6, 6);

    pub const PRESETS: [Self; 3] = [Self::EASY, Self::MEDIUM, Self::HARD];

    const fn preset_unchecked(name: &'static str, rows: Coord, cols: Coord) -> Self {
        Self {
            name: Cow::Borrowed(name),
            rows,
            cols,
        }
    }

    pub fn new(name: impl Into<Cow<'static, str>>, rows: Coord, cols: Coord) -> Self {
        Self {
            name: name.into(),
            rows,
            cols,
        }
    }

    /// Looks up a preset by case-insensitive name.
    pub fn preset(name: &str) -> Option<Self> {
        Self::PRESETS
            .into_iter()
            .find(|level| level.name.eq_ignore_ascii_case(name))
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn pairs(&self) -> CellCount {
        self.total_tiles() / 2
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }

        if self.total_tiles() % 2 != 0 {
            return Err(ConfigError::OddTileCount {
                rows: self.rows.into(),
                cols: self.cols.into(),
            }
            .into());
        }

        let needed = usize::from(self.pairs());
        if needed > IDENTITY_COUNT {
            return Err(ConfigError::InsufficientIdentities {
                needed,
                available: IDENTITY_COUNT,
            }
            .into());
        }

        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::EASY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for level in LevelConfig::PRESETS {
            assert_eq!(level.validate(), Ok(()), "{}", level.name);
        }
        assert_eq!(LevelConfig::MEDIUM.size(), (4, 6));
        assert_eq!(LevelConfig::HARD.pairs(), 18);
    }

    #[test]
    fn preset_lookup_ignores_case() {
        assert_eq!(LevelConfig::preset("hard"), Some(LevelConfig::HARD));
        assert_eq!(LevelConfig::preset("MeDiUm"), Some(LevelConfig::MEDIUM));
        assert_eq!(LevelConfig::preset("nightmare"), None);
    }

    #[test]
    fn validate_rejects_odd_tile_count() {
        let level = LevelConfig::new("Odd", 3, 3);

        assert_eq!(
            level.validate(),
            Err(GameError::Configuration(ConfigError::OddTileCount {
                rows: 3,
                cols: 3
            }))
        );
    }

    #[test]
    fn validate_rejects_empty_board() {
        assert_eq!(
            LevelConfig::new("Empty", 0, 4).validate(),
            Err(ConfigError::EmptyBoard.into())
        );
    }

    #[test]
    fn validate_rejects_boards_larger_than_catalog() {
        // 12x12 needs 72 pairs, exactly the catalog size.
        assert_eq!(LevelConfig::new("Max", 12, 12).validate(), Ok(()));
        assert_eq!(
            LevelConfig::new("Huge", 12, 14).validate(),
            Err(ConfigError::InsufficientIdentities {
                needed: 84,
                available: IDENTITY_COUNT
            }
            .into())
        );
    }
}

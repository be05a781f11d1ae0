use alloc::vec::Vec;

use super::*;

/// Generation strategy that draws the pairing set and its placement from a single seeded RNG stream.
///
/// The stream is consumed in a fixed order: the identities are sampled first, then the doubled pool is shuffled.
/// Placement for a given seed is therefore stable for this build.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, level: &LevelConfig) -> Result<TileLayout> {
        use rand::prelude::*;

        level.validate()?;
        let pairs = usize::from(level.pairs());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let chosen = sample_identities(&mut rng, pairs)?;

        let mut pool: Vec<Identity> = Vec::with_capacity(pairs * 2);
        pool.extend_from_slice(&chosen);
        pool.extend_from_slice(&chosen);
        pool.shuffle(&mut rng);

        log::debug!(
            "Generated {}x{} layout with {} pairs from seed {}",
            level.rows,
            level.cols,
            pairs,
            self.seed
        );
        TileLayout::from_identities(level.size(), pool)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::collections::HashMap;

    fn counts(layout: &TileLayout) -> HashMap<Identity, usize> {
        let mut counts = HashMap::new();
        for (_, identity) in layout.iter() {
            *counts.entry(identity).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn every_preset_pairs_each_identity_twice() {
        for level in LevelConfig::PRESETS {
            for seed in [0, 7, 42, 123, u64::MAX] {
                let layout = RandomLayoutGenerator::new(seed).generate(&level).unwrap();

                assert_eq!(layout.total_tiles(), level.total_tiles());
                let counts = counts(&layout);
                assert_eq!(counts.len(), usize::from(level.pairs()));
                assert!(counts.values().all(|&count| count == 2));
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let first = RandomLayoutGenerator::new(42).generate(&LevelConfig::HARD).unwrap();
        let second = RandomLayoutGenerator::new(42).generate(&LevelConfig::HARD).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let layouts: std::vec::Vec<_> = (0..8)
            .map(|seed| RandomLayoutGenerator::new(seed).generate(&LevelConfig::HARD).unwrap())
            .collect();

        assert!(layouts.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn odd_level_fails_before_generation() {
        let result = RandomLayoutGenerator::new(1).generate(&LevelConfig::new("Odd", 3, 3));

        assert_eq!(
            result,
            Err(GameError::Configuration(ConfigError::OddTileCount {
                rows: 3,
                cols: 3
            }))
        );
    }
}

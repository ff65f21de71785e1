use rand::{rngs::StdRng, SeedableRng};

use crate::constants::DEFAULT_TARGET_POINTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Cumulative points that end the match.
    pub target_points: u32,
    /// Seed for shuffles and random color picks. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            target_points: DEFAULT_TARGET_POINTS,
            seed: None,
        }
    }
}

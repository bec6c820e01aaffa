//! Shared configuration types for CLI commands

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress indicators
    pub progress: bool,
}

impl CommonConfig {
    pub fn new(seed: Option<u64>, progress: bool) -> Self {
        Self { seed, progress }
    }

    /// Build an RNG from the configured seed, falling back to OS entropy
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = CommonConfig::new(Some(99), true);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}

use anyhow::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;

use crate::provider::{DigitFrequency, StatisticsProvider};

/// Générateur local de statistiques décoratives : tirages pondérés avec un
/// léger biais pour produire des chiffres « chauds » crédibles. Déterministe
/// par identifiant de tirage, ou par seed explicite.
pub struct LocalStatistics {
    pub samples: usize,
    pub seed: Option<u64>,
}

impl LocalStatistics {
    pub fn new(samples: usize) -> Self {
        Self { samples, seed: None }
    }

    pub fn with_seed(samples: usize, seed: u64) -> Self {
        Self { samples, seed: Some(seed) }
    }
}

/// Replie l'identifiant du tirage en seed stable (FNV-1a).
fn draw_seed(draw_id: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in draw_id.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

impl StatisticsProvider for LocalStatistics {
    fn name(&self) -> &str {
        "local"
    }

    fn fetch(&self, draw_id: &str) -> Result<DigitFrequency> {
        let seed = self.seed.unwrap_or_else(|| draw_seed(draw_id));
        let mut rng = StdRng::seed_from_u64(seed);

        let weights: Vec<f64> = (0..10).map(|_| rng.random_range(0.5..1.5)).collect();
        let dist = WeightedIndex::new(&weights)?;

        let mut counts = [0u32; 10];
        for _ in 0..self.samples {
            counts[dist.sample(&mut rng)] += 1;
        }
        Ok(DigitFrequency { counts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_per_draw_id() {
        let provider = LocalStatistics::new(1000);
        let a = provider.fetch("2026-05-02").unwrap();
        let b = provider.fetch("2026-05-02").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_draws_diverge() {
        let provider = LocalStatistics::new(1000);
        let a = provider.fetch("2026-05-02").unwrap();
        let b = provider.fetch("2026-05-16").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_explicit_seed_overrides_draw_id() {
        let provider = LocalStatistics::with_seed(1000, 42);
        let a = provider.fetch("2026-05-02").unwrap();
        let b = provider.fetch("2026-05-16").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_count_preserved() {
        let provider = LocalStatistics::new(500);
        let freq = provider.fetch("2026-01-01").unwrap();
        assert_eq!(freq.total(), 500);
    }

    #[test]
    fn test_zero_samples() {
        let provider = LocalStatistics::new(0);
        let freq = provider.fetch("2026-01-01").unwrap();
        assert_eq!(freq.total(), 0);
    }
}

use anyhow::Result;

/// Fréquences simulées par chiffre 0-9 pour un tirage donné.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitFrequency {
    pub counts: [u32; 10],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyTag {
    Hot,
    Cold,
    Normal,
}

impl std::fmt::Display for FrequencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrequencyTag::Hot => write!(f, "HOT"),
            FrequencyTag::Cold => write!(f, "COLD"),
            FrequencyTag::Normal => write!(f, "-"),
        }
    }
}

impl DigitFrequency {
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Distribution normalisée ; uniforme si aucun échantillon.
    pub fn probabilities(&self) -> [f64; 10] {
        let total = self.total();
        if total == 0 {
            return [0.1; 10];
        }
        let mut probs = [0.0; 10];
        for (digit, &count) in self.counts.iter().enumerate() {
            probs[digit] = count as f64 / total as f64;
        }
        probs
    }

    /// Les `count` chiffres les plus fréquents, à égalité le plus petit
    /// chiffre d'abord.
    pub fn hot_digits(&self, count: usize) -> Vec<u8> {
        let mut digits: Vec<u8> = (0..10).collect();
        digits.sort_by(|&a, &b| {
            self.counts[b as usize]
                .cmp(&self.counts[a as usize])
                .then(a.cmp(&b))
        });
        digits.truncate(count.min(10));
        digits
    }

    /// Écart à l'uniforme supérieur à 30 % : chaud ou froid.
    pub fn tag(&self, digit: u8) -> FrequencyTag {
        let probs = self.probabilities();
        let uniform = 0.1;
        let threshold = 0.3;
        let deviation = (probs[digit as usize] - uniform) / uniform;
        if deviation > threshold {
            FrequencyTag::Hot
        } else if deviation < -threshold {
            FrequencyTag::Cold
        } else {
            FrequencyTag::Normal
        }
    }
}

/// Source de statistiques décoratives par tirage. La disponibilité ou la
/// latence d'une source distante ne concerne jamais le cœur : seul le
/// résultat, injecté comme sélection supplémentaire, compte.
pub trait StatisticsProvider: Send + Sync {
    fn name(&self) -> &str;
    fn fetch(&self, draw_id: &str) -> Result<DigitFrequency>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(counts: [u32; 10]) -> DigitFrequency {
        DigitFrequency { counts }
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let f = freq([5, 3, 0, 7, 1, 9, 2, 4, 6, 8]);
        let sum: f64 = f.probabilities().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_uniform_when_empty() {
        let f = freq([0; 10]);
        assert!(f.probabilities().iter().all(|&p| (p - 0.1).abs() < 1e-12));
    }

    #[test]
    fn test_hot_digits_order_and_ties() {
        let f = freq([1, 5, 5, 0, 9, 0, 0, 2, 0, 0]);
        assert_eq!(f.hot_digits(4), vec![4, 1, 2, 7]);
    }

    #[test]
    fn test_hot_digits_capped_at_ten() {
        let f = freq([1; 10]);
        assert_eq!(f.hot_digits(20).len(), 10);
    }

    #[test]
    fn test_tags() {
        // 100 échantillons : uniforme = 10 par chiffre.
        let f = freq([20, 5, 10, 10, 10, 10, 10, 10, 10, 5]);
        assert_eq!(f.tag(0), FrequencyTag::Hot);
        assert_eq!(f.tag(1), FrequencyTag::Cold);
        assert_eq!(f.tag(2), FrequencyTag::Normal);
    }
}

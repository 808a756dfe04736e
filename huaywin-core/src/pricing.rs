/// Catégories de mise activables indépendamment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetCategory {
    /// 2 chiffres « haut » (2 ตัวบน).
    Top2,
    /// 2 chiffres « bas » (2 ตัวล่าง) — même liste que le haut.
    Bottom2,
    /// 3 chiffres en combinaisons triées (3 ตัวชุด).
    Sets3,
    /// 3 chiffres, 6 permutations (6 กลับ).
    Back6,
    /// 3 chiffres sans les numéros croisés.
    Crossing3,
    /// 3 chiffres, numéros croisés uniquement.
    OnlyCrossing3,
}

impl BetCategory {
    pub const ALL: [BetCategory; 6] = [
        BetCategory::Top2,
        BetCategory::Bottom2,
        BetCategory::Sets3,
        BetCategory::Back6,
        BetCategory::Crossing3,
        BetCategory::OnlyCrossing3,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BetCategory::Top2 => "2 haut",
            BetCategory::Bottom2 => "2 bas",
            BetCategory::Sets3 => "3 en série",
            BetCategory::Back6 => "3 (6 retournés)",
            BetCategory::Crossing3 => "3 sans croisés",
            BetCategory::OnlyCrossing3 => "3 croisés seuls",
        }
    }
}

/// Tailles des listes générées, une par catégorie sous-jacente.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub pairs: usize,
    pub sets: usize,
    pub six_back: usize,
    pub crossing: usize,
    pub only_crossing: usize,
}

impl CategoryCounts {
    pub fn count(&self, category: BetCategory) -> usize {
        match category {
            // Haut et bas se misent sur la même liste de paires.
            BetCategory::Top2 | BetCategory::Bottom2 => self.pairs,
            BetCategory::Sets3 => self.sets,
            BetCategory::Back6 => self.six_back,
            BetCategory::Crossing3 => self.crossing,
            BetCategory::OnlyCrossing3 => self.only_crossing,
        }
    }
}

/// Montant saisi en texte libre. Toute valeur vide, non numérique, infinie
/// ou négative vaut 0 : le total se dégrade en zéro au lieu d'échouer.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Coût total : somme de `taille × montant` sur les catégories activées.
pub fn compute_total(amount: &str, enabled: &[BetCategory], counts: &CategoryCounts) -> f64 {
    let unit = parse_amount(amount);
    enabled
        .iter()
        .map(|&category| counts.count(category) as f64 * unit)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTS: CategoryCounts = CategoryCounts {
        pairs: 6,
        sets: 1,
        six_back: 6,
        crossing: 4,
        only_crossing: 2,
    };

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("2"), 2.0);
        assert_eq!(parse_amount(" 12.50 "), 12.5);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn test_parse_amount_invalid_coerces_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-5"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_total_unparseable_amount_is_zero() {
        let total = compute_total("abc", &BetCategory::ALL, &COUNTS);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn test_total_sums_enabled_categories() {
        let enabled = [BetCategory::Top2, BetCategory::Bottom2, BetCategory::Back6];
        // (6 + 6 + 6) × 2
        assert_eq!(compute_total("2", &enabled, &COUNTS), 36.0);
    }

    #[test]
    fn test_top_and_bottom_share_pair_list() {
        assert_eq!(COUNTS.count(BetCategory::Top2), COUNTS.count(BetCategory::Bottom2));
    }

    #[test]
    fn test_total_no_categories() {
        assert_eq!(compute_total("10", &[], &COUNTS), 0.0);
    }

    #[test]
    fn test_total_decimal_amount() {
        let enabled = [BetCategory::Sets3];
        assert_eq!(compute_total("2.5", &enabled, &COUNTS), 2.5);
    }
}

use crate::classify::{Highlight, classify};
use crate::generator::{
    Win2Mode, Win3Mode, filter_by_pool, generate_pairs, generate_permutations,
    generate_triple_sets, is_crossing_cut,
};
use crate::pool::DigitPool;
use crate::pricing::{BetCategory, CategoryCounts, compute_total};
use crate::resolver::{PoolSet, SelectionMode, resolve_active_digits};

/// Instantané des entrées : sélections, modes, montant, catégories misées et
/// filtre du jour éventuel. Recalculé intégralement à chaque changement.
#[derive(Debug, Clone)]
pub struct WinRequest {
    pub selection: SelectionMode,
    pub pools: PoolSet,
    pub win2: Win2Mode,
    pub win3: Win3Mode,
    pub amount: String,
    pub bets: Vec<BetCategory>,
    pub day_filter: Option<DigitPool>,
}

impl WinRequest {
    pub fn single(pool: DigitPool) -> Self {
        Self {
            selection: SelectionMode::Single,
            pools: PoolSet { single: pool, ..Default::default() },
            win2: Win2Mode::Reverse,
            win3: Win3Mode::SixBack,
            amount: "1".to_string(),
            bets: vec![BetCategory::Top2, BetCategory::Bottom2, BetCategory::Back6],
            day_filter: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WinOutcome {
    pub active: DigitPool,
    pub pairs: Vec<String>,
    pub pair_highlights: Vec<Highlight>,
    pub win3: Vec<String>,
    pub win3_highlights: Vec<Highlight>,
    pub counts: CategoryCounts,
    pub total: f64,
}

/// Point d'entrée unique : résolution, génération, classification, coût.
/// Toutes les tailles de listes sont calculées même hors du mode affiché,
/// car chaque catégorie misée contribue au total.
pub fn evaluate(request: &WinRequest) -> WinOutcome {
    let active = resolve_active_digits(request.selection, &request.pools);

    let apply_filter = |nums: Vec<String>| -> Vec<String> {
        match &request.day_filter {
            Some(day) => filter_by_pool(&nums, day),
            None => nums,
        }
    };

    let pairs = apply_filter(generate_pairs(&active, request.win2));
    let sets = apply_filter(generate_triple_sets(&active));
    // Le filtre du jour porte sur les chiffres : filtrer les combinaisons
    // puis permuter équivaut à permuter puis filtrer.
    let six_back = generate_permutations(&sets);
    let (only_crossing, crossing): (Vec<String>, Vec<String>) =
        six_back.iter().cloned().partition(|n| is_crossing_cut(n));

    let counts = CategoryCounts {
        pairs: pairs.len(),
        sets: sets.len(),
        six_back: six_back.len(),
        crossing: crossing.len(),
        only_crossing: only_crossing.len(),
    };
    let total = compute_total(&request.amount, &request.bets, &counts);

    let win3 = match request.win3 {
        Win3Mode::Sets => sets,
        Win3Mode::SixBack => six_back,
        Win3Mode::Crossing => crossing,
        Win3Mode::OnlyCrossing => only_crossing,
    };

    let pair_highlights = pairs.iter().map(|n| classify(n, &request.pools)).collect();
    let win3_highlights = win3.iter().map(|n| classify(n, &request.pools)).collect();

    WinOutcome {
        active,
        pairs,
        pair_highlights,
        win3,
        win3_highlights,
        counts,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DigitPool;

    fn pool(digits: &[u8]) -> DigitPool {
        DigitPool::from_digits(digits).unwrap()
    }

    #[test]
    fn test_scenario_one_two_three() {
        // Sélection {1,2,3}, montant 2, mise sur les séries uniquement.
        let mut request = WinRequest::single(pool(&[1, 2, 3]));
        request.amount = "2".to_string();
        request.bets = vec![BetCategory::Sets3];

        let outcome = evaluate(&request);
        assert_eq!(outcome.pairs, vec!["12", "13", "21", "23", "31", "32"]);
        assert_eq!(outcome.win3.len(), 6);
        assert_eq!(outcome.counts.sets, 1);
        assert_eq!(outcome.total, 2.0);

        request.win3 = Win3Mode::Sets;
        assert_eq!(evaluate(&request).win3, vec!["123"]);
    }

    #[test]
    fn test_crossing_partition_preserves_six_back() {
        let request = WinRequest::single(pool(&[1, 2, 3, 5]));
        let outcome = evaluate(&request);
        assert_eq!(
            outcome.counts.crossing + outcome.counts.only_crossing,
            outcome.counts.six_back
        );
    }

    #[test]
    fn test_day_filter_restricts_everything() {
        let mut request = WinRequest::single(pool(&[1, 3, 5]));
        request.day_filter = Some(pool(&[3, 4, 5, 6, 9]));
        let outcome = evaluate(&request);
        assert_eq!(outcome.pairs, vec!["35", "53"]);
        assert_eq!(outcome.counts.sets, 0);
        assert_eq!(outcome.counts.six_back, 0);
    }

    #[test]
    fn test_cross_mode_highlights() {
        let request = WinRequest {
            selection: SelectionMode::Cross,
            pools: PoolSet {
                opt1: pool(&[1, 2]),
                opt2: pool(&[1, 2]),
                opt3: pool(&[1, 2]),
                ..Default::default()
            },
            win2: Win2Mode::Reverse,
            win3: Win3Mode::SixBack,
            amount: "1".to_string(),
            bets: vec![BetCategory::Top2],
            day_filter: None,
        };
        let outcome = evaluate(&request);
        assert_eq!(outcome.pairs, vec!["12", "21"]);
        assert!(outcome
            .pair_highlights
            .iter()
            .all(|&h| h == Highlight::Diamond));
    }

    #[test]
    fn test_single_mode_highlights_are_none() {
        let request = WinRequest::single(pool(&[1, 2, 3]));
        let outcome = evaluate(&request);
        assert!(outcome.pair_highlights.iter().all(|&h| h == Highlight::None));
    }

    #[test]
    fn test_empty_selection_yields_empty_outcome() {
        let request = WinRequest::single(DigitPool::new());
        let outcome = evaluate(&request);
        assert!(outcome.pairs.is_empty());
        assert!(outcome.win3.is_empty());
        assert_eq!(outcome.total, 0.0);
    }

    #[test]
    fn test_highlights_parallel_to_lists() {
        let mut request = WinRequest::single(pool(&[0, 4, 7, 9]));
        request.win3 = Win3Mode::Crossing;
        let outcome = evaluate(&request);
        assert_eq!(outcome.pairs.len(), outcome.pair_highlights.len());
        assert_eq!(outcome.win3.len(), outcome.win3_highlights.len());
    }
}

use std::collections::BTreeSet;

use crate::pool::DigitPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Win2Mode {
    /// Paires croissantes uniquement (ชุดตรง).
    Straight,
    /// Paires dans les deux sens (กลับเลข).
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Win3Mode {
    /// Combinaisons triées, sans permutations (ชุด).
    Sets,
    /// Les 6 permutations de chaque combinaison (6 กลับ).
    SixBack,
    /// Permutations moins les numéros « croisés » (ตัดข้ามเศียร).
    Crossing,
    /// Uniquement les numéros « croisés ».
    OnlyCrossing,
}

// Groupes fixes du filtre croisé. Règle numérologique figée, trois groupes.
const GROUP_A: [u8; 4] = [0, 1, 4, 7];
const GROUP_B: [u8; 3] = [2, 5, 8];
const GROUP_C: [u8; 3] = [3, 6, 9];

/// Toutes les paires de positions distinctes de l'ensemble. Les doubles
/// (« 11 ») sont exclus par construction : jamais deux fois la même position.
pub fn generate_pairs(pool: &DigitPool, mode: Win2Mode) -> Vec<String> {
    let digits = pool.digits();
    if digits.len() < 2 {
        return Vec::new();
    }
    let mut results = BTreeSet::new();
    for i in 0..digits.len() {
        for j in (i + 1)..digits.len() {
            results.insert(format!("{}{}", digits[i], digits[j]));
            if mode == Win2Mode::Reverse {
                results.insert(format!("{}{}", digits[j], digits[i]));
            }
        }
    }
    results.into_iter().collect()
}

/// Tous les triplets de positions strictement croissantes, concaténés en
/// chaînes de 3 caractères déjà triées.
pub fn generate_triple_sets(pool: &DigitPool) -> Vec<String> {
    let digits = pool.digits();
    if digits.len() < 3 {
        return Vec::new();
    }
    let mut results = BTreeSet::new();
    for i in 0..digits.len() {
        for j in (i + 1)..digits.len() {
            for k in (j + 1)..digits.len() {
                results.insert(format!("{}{}{}", digits[i], digits[j], digits[k]));
            }
        }
    }
    results.into_iter().collect()
}

/// Étend chaque combinaison triée « abc » en ses 6 permutations
/// (abc, acb, bac, bca, cab, cba), puis dédoublonne l'ensemble.
pub fn generate_permutations(sets: &[String]) -> Vec<String> {
    let mut results = BTreeSet::new();
    for set in sets {
        let chars: Vec<char> = set.chars().collect();
        if chars.len() != 3 {
            continue;
        }
        let (a, b, c) = (chars[0], chars[1], chars[2]);
        for perm in [[a, b, c], [a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            results.insert(perm.iter().collect::<String>());
        }
    }
    results.into_iter().collect()
}

/// Vrai si le chiffre du milieu appartient au groupe B et que les chiffres
/// extérieurs enjambent les groupes A et C (dans un sens ou dans l'autre).
pub fn is_crossing_cut(num: &str) -> bool {
    let digits: Vec<u8> = num
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    if digits.len() != 3 {
        return false;
    }
    let (d1, d2, d3) = (digits[0], digits[1], digits[2]);
    if !GROUP_B.contains(&d2) {
        return false;
    }
    (GROUP_A.contains(&d1) && GROUP_C.contains(&d3))
        || (GROUP_C.contains(&d1) && GROUP_A.contains(&d3))
}

/// Liste à 3 chiffres selon le mode demandé.
pub fn generate_win3(pool: &DigitPool, mode: Win3Mode) -> Vec<String> {
    let sets = generate_triple_sets(pool);
    match mode {
        Win3Mode::Sets => sets,
        Win3Mode::SixBack => generate_permutations(&sets),
        Win3Mode::Crossing => generate_permutations(&sets)
            .into_iter()
            .filter(|n| !is_crossing_cut(n))
            .collect(),
        Win3Mode::OnlyCrossing => generate_permutations(&sets)
            .into_iter()
            .filter(|n| is_crossing_cut(n))
            .collect(),
    }
}

/// Restreint une liste aux numéros entièrement couverts par un ensemble
/// (filtre « chiffres du jour »).
pub fn filter_by_pool(nums: &[String], pool: &DigitPool) -> Vec<String> {
    nums.iter().filter(|n| pool.covers(n)).cloned().collect()
}

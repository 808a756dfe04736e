use anyhow::{Result, bail};

/// Ensemble de chiffres 0-9, trié par ordre croissant et sans doublons.
/// L'invariant est rétabli après chaque mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitPool {
    digits: Vec<u8>,
}

impl DigitPool {
    pub fn new() -> Self {
        Self { digits: Vec::new() }
    }

    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        let mut pool = Self::new();
        for &d in digits {
            pool.insert(d)?;
        }
        Ok(pool)
    }

    /// Ensemble complet 0-9 (bouton « tout sélectionner »).
    pub fn full() -> Self {
        Self { digits: (0..=9).collect() }
    }

    pub fn insert(&mut self, digit: u8) -> Result<()> {
        validate_digit(digit)?;
        if !self.digits.contains(&digit) {
            self.digits.push(digit);
            self.digits.sort_unstable();
        }
        Ok(())
    }

    pub fn remove(&mut self, digit: u8) {
        self.digits.retain(|&d| d != digit);
    }

    pub fn toggle(&mut self, digit: u8) -> Result<()> {
        if self.digits.contains(&digit) {
            self.remove(digit);
            Ok(())
        } else {
            self.insert(digit)
        }
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn union(&self, other: &DigitPool) -> DigitPool {
        let mut merged = self.clone();
        for &d in &other.digits {
            if !merged.digits.contains(&d) {
                merged.digits.push(d);
            }
        }
        merged.digits.sort_unstable();
        merged
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    /// Vrai si chaque caractère de `num` est un chiffre présent dans
    /// l'ensemble. Un ensemble vide ne couvre rien.
    pub fn covers(&self, num: &str) -> bool {
        if self.digits.is_empty() {
            return false;
        }
        num.chars()
            .all(|c| c.to_digit(10).map_or(false, |d| self.contains(d as u8)))
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl std::fmt::Display for DigitPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", joined)
    }
}

pub fn validate_digit(digit: u8) -> Result<()> {
    if digit > 9 {
        bail!("Chiffre {} hors limites (0-9)", digit);
    }
    Ok(())
}

/// Saisie libre d'une sélection : « 4 7 9 », « 4,7,9 » et le raccourci
/// compact « 479 » sont acceptés.
pub fn parse_digits(input: &str) -> Result<DigitPool> {
    let mut pool = DigitPool::new();
    for part in input.split(|c: char| c == ',' || c.is_whitespace()) {
        for c in part.chars() {
            match c.to_digit(10) {
                Some(d) => pool.insert(d as u8)?,
                None => bail!("Caractère invalide dans la sélection : {}", c),
            }
        }
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sorts_and_dedups() {
        let mut pool = DigitPool::new();
        pool.insert(7).unwrap();
        pool.insert(2).unwrap();
        pool.insert(7).unwrap();
        pool.insert(0).unwrap();
        assert_eq!(pool.digits(), &[0, 2, 7]);
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut pool = DigitPool::new();
        assert!(pool.insert(10).is_err());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut pool = DigitPool::from_digits(&[1, 2, 3]).unwrap();
        pool.toggle(2).unwrap();
        assert_eq!(pool.digits(), &[1, 3]);
        pool.toggle(2).unwrap();
        assert_eq!(pool.digits(), &[1, 2, 3]);
    }

    #[test]
    fn test_union_sorted_without_doubles() {
        let a = DigitPool::from_digits(&[5, 1, 9]).unwrap();
        let b = DigitPool::from_digits(&[9, 0, 5, 3]).unwrap();
        assert_eq!(a.union(&b).digits(), &[0, 1, 3, 5, 9]);
    }

    #[test]
    fn test_union_with_empty() {
        let a = DigitPool::from_digits(&[4, 2]).unwrap();
        let empty = DigitPool::new();
        assert_eq!(a.union(&empty).digits(), &[2, 4]);
        assert_eq!(empty.union(&a).digits(), &[2, 4]);
    }

    #[test]
    fn test_covers() {
        let pool = DigitPool::from_digits(&[1, 2, 3]).unwrap();
        assert!(pool.covers("123"));
        assert!(pool.covers("21"));
        assert!(!pool.covers("14"));
    }

    #[test]
    fn test_empty_pool_covers_nothing() {
        let pool = DigitPool::new();
        assert!(!pool.covers("1"));
    }

    #[test]
    fn test_parse_digits_formats() {
        assert_eq!(parse_digits("4 7 9").unwrap().digits(), &[4, 7, 9]);
        assert_eq!(parse_digits("4,7,9").unwrap().digits(), &[4, 7, 9]);
        assert_eq!(parse_digits("974").unwrap().digits(), &[4, 7, 9]);
        assert_eq!(parse_digits("").unwrap().digits(), &[] as &[u8]);
    }

    #[test]
    fn test_parse_digits_invalid() {
        assert!(parse_digits("1 x 3").is_err());
    }

    #[test]
    fn test_full_pool() {
        assert_eq!(DigitPool::full().len(), 10);
    }
}

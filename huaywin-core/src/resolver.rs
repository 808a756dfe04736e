use crate::pool::DigitPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Une seule sélection de chiffres.
    Single,
    /// Union des trois sélections indépendantes (option 1/2/3).
    Cross,
}

/// Les sélections nommées éditées par l'utilisateur. En mode simple seule
/// `single` compte ; en mode croisé seules les options comptent.
#[derive(Debug, Clone, Default)]
pub struct PoolSet {
    pub single: DigitPool,
    pub opt1: DigitPool,
    pub opt2: DigitPool,
    pub opt3: DigitPool,
}

impl PoolSet {
    pub fn options(&self) -> [&DigitPool; 3] {
        [&self.opt1, &self.opt2, &self.opt3]
    }
}

/// Résout l'ensemble actif de chiffres à combiner.
pub fn resolve_active_digits(mode: SelectionMode, pools: &PoolSet) -> DigitPool {
    match mode {
        SelectionMode::Single => pools.single.clone(),
        SelectionMode::Cross => pools.opt1.union(&pools.opt2).union(&pools.opt3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DigitPool;

    #[test]
    fn test_single_passes_through() {
        let pools = PoolSet {
            single: DigitPool::from_digits(&[3, 1, 2]).unwrap(),
            opt1: DigitPool::from_digits(&[9]).unwrap(),
            ..Default::default()
        };
        let active = resolve_active_digits(SelectionMode::Single, &pools);
        assert_eq!(active.digits(), &[1, 2, 3]);
    }

    #[test]
    fn test_cross_unions_options() {
        let pools = PoolSet {
            opt1: DigitPool::from_digits(&[1, 2]).unwrap(),
            opt2: DigitPool::from_digits(&[2, 5]).unwrap(),
            opt3: DigitPool::from_digits(&[0, 5, 9]).unwrap(),
            ..Default::default()
        };
        let active = resolve_active_digits(SelectionMode::Cross, &pools);
        assert_eq!(active.digits(), &[0, 1, 2, 5, 9]);
    }

    #[test]
    fn test_cross_ignores_single() {
        let pools = PoolSet {
            single: DigitPool::from_digits(&[7, 8]).unwrap(),
            opt1: DigitPool::from_digits(&[1]).unwrap(),
            ..Default::default()
        };
        let active = resolve_active_digits(SelectionMode::Cross, &pools);
        assert_eq!(active.digits(), &[1]);
    }

    #[test]
    fn test_empty_pools_yield_empty() {
        let pools = PoolSet::default();
        assert!(resolve_active_digits(SelectionMode::Single, &pools).is_empty());
        assert!(resolve_active_digits(SelectionMode::Cross, &pools).is_empty());
    }
}

use crate::resolver::PoolSet;

/// Mise en évidence d'un numéro selon les options qui le couvrent.
/// Purement décoratif : ne change jamais la composition des listes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Opt1,
    Silver,
    Gold,
    Diamond,
}

impl std::fmt::Display for Highlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Highlight::None => write!(f, "-"),
            Highlight::Opt1 => write!(f, "OPTION 1"),
            Highlight::Silver => write!(f, "ARGENT"),
            Highlight::Gold => write!(f, "OR"),
            Highlight::Diamond => write!(f, "DIAMANT"),
        }
    }
}

/// Priorité stricte, première règle gagnante : diamant (1∧2∧3), or (1∧2),
/// argent ((1∧3) ∨ (2∧3)), option 1 seule, sinon rien. Une option vide ne
/// couvre aucun numéro.
pub fn classify(num: &str, pools: &PoolSet) -> Highlight {
    let m1 = pools.opt1.covers(num);
    let m2 = pools.opt2.covers(num);
    let m3 = pools.opt3.covers(num);

    if m1 && m2 && m3 {
        Highlight::Diamond
    } else if m1 && m2 {
        Highlight::Gold
    } else if (m1 && m3) || (m2 && m3) {
        Highlight::Silver
    } else if m1 {
        Highlight::Opt1
    } else {
        Highlight::None
    }
}

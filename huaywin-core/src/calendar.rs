use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::pool::DigitPool;

pub const WEEKDAYS_FR: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
    "septembre", "octobre", "novembre", "décembre",
];

/// Chiffres porte-bonheur par jour de la semaine (เลขกำลังวัน).
/// Données injectées : la table intégrée peut être remplacée par un JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayTable {
    pub days: Vec<DayEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub label: String,
    /// 0 = dimanche … 6 = samedi.
    pub day_idx: u8,
    pub digits: Vec<u8>,
}

impl Default for DayTable {
    fn default() -> Self {
        let days = [
            ("dimanche", 0, vec![3, 5, 6, 9, 4]),
            ("lundi", 1, vec![5, 3, 9, 1, 6, 7]),
            ("mardi", 2, vec![7, 4, 2, 8, 5, 6]),
            ("mercredi", 3, vec![4, 8, 5, 7, 1, 6]),
            ("jeudi", 4, vec![7, 2, 1, 9, 6, 5]),
            ("vendredi", 5, vec![2, 0, 4, 1, 5, 7]),
            ("samedi", 6, vec![8, 3, 2, 0, 1, 9]),
        ];
        Self {
            days: days
                .into_iter()
                .map(|(label, day_idx, digits)| DayEntry {
                    label: label.to_string(),
                    day_idx,
                    digits,
                })
                .collect(),
        }
    }
}

impl DayTable {
    pub fn entry(&self, day_idx: u8) -> Option<&DayEntry> {
        self.days.iter().find(|d| d.day_idx == day_idx)
    }

    /// Ensemble des chiffres du jour, validé (une table JSON peut contenir
    /// n'importe quoi).
    pub fn lucky_pool(&self, day_idx: u8) -> Result<DigitPool> {
        let entry = self
            .entry(day_idx)
            .ok_or_else(|| anyhow!("Jour inconnu : {}", day_idx))?;
        DigitPool::from_digits(&entry.digits)
            .with_context(|| format!("Table du jour invalide pour {}", entry.label))
    }
}

/// Chiffres associés aux phases lunaires, même mécanique de table injectée.
/// Purement décoratif, consommé comme n'importe quelle autre sélection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonTable {
    pub phases: Vec<MoonEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonEntry {
    pub phase: MoonPhase,
    pub digits: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoonPhase {
    /// Lune croissante (ข้างขึ้น).
    Waxing,
    /// Pleine lune.
    Full,
    /// Lune décroissante (ข้างแรม).
    Waning,
    /// Nouvelle lune.
    New,
}

impl MoonPhase {
    pub fn label(&self) -> &'static str {
        match self {
            MoonPhase::Waxing => "lune croissante",
            MoonPhase::Full => "pleine lune",
            MoonPhase::Waning => "lune décroissante",
            MoonPhase::New => "nouvelle lune",
        }
    }
}

impl Default for MoonTable {
    fn default() -> Self {
        let phases = [
            (MoonPhase::Waxing, vec![1, 2, 4, 7]),
            (MoonPhase::Full, vec![5, 6, 8, 9]),
            (MoonPhase::Waning, vec![0, 3, 6, 8]),
            (MoonPhase::New, vec![0, 1, 3, 5]),
        ];
        Self {
            phases: phases
                .into_iter()
                .map(|(phase, digits)| MoonEntry { phase, digits })
                .collect(),
        }
    }
}

impl MoonTable {
    pub fn lucky_pool(&self, phase: MoonPhase) -> Result<DigitPool> {
        let entry = self
            .phases
            .iter()
            .find(|p| p.phase == phase)
            .ok_or_else(|| anyhow!("Phase lunaire absente de la table : {}", phase.label()))?;
        DigitPool::from_digits(&entry.digits)
            .with_context(|| format!("Table lunaire invalide pour {}", phase.label()))
    }
}

/// Un tirage du calendrier officiel.
#[derive(Debug, Clone)]
pub struct DrawDate {
    /// Identifiant stable « AAAA-MM-JJ ».
    pub id: String,
    pub date: NaiveDate,
    /// 0 = dimanche … 6 = samedi.
    pub day_idx: u8,
    /// Libellé avec l'année bouddhique (année civile + 543).
    pub label: String,
}

/// Tirages les 1er et 16 de chaque mois. Le tirage du 1er mai est décalé
/// au 2 (fête du travail).
pub fn lottery_draws(year: i32) -> Vec<DrawDate> {
    let mut draws = Vec::with_capacity(24);
    for month in 1..=12u32 {
        for day in [1u32, 16] {
            let actual = if month == 5 && day == 1 { 2 } else { day };
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, actual) {
                let day_idx = date.weekday().num_days_from_sunday() as u8;
                draws.push(DrawDate {
                    id: date.format("%Y-%m-%d").to_string(),
                    date,
                    day_idx,
                    label: draw_label(&date),
                });
            }
        }
    }
    draws
}

pub fn find_draw(draws: &[DrawDate], id: &str) -> Option<DrawDate> {
    draws.iter().find(|d| d.id == id).cloned()
}

fn draw_label(date: &NaiveDate) -> String {
    let weekday = WEEKDAYS_FR[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS_FR[date.month0() as usize];
    format!("{} {} {} ({})", date.day(), month, date.year() + 543, weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_day_table_complete() {
        let table = DayTable::default();
        for day_idx in 0..7 {
            assert!(table.entry(day_idx).is_some());
            assert!(!table.lucky_pool(day_idx).unwrap().is_empty());
        }
    }

    #[test]
    fn test_sunday_lucky_pool_sorted() {
        let table = DayTable::default();
        assert_eq!(table.lucky_pool(0).unwrap().digits(), &[3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_unknown_day_fails() {
        assert!(DayTable::default().lucky_pool(7).is_err());
    }

    #[test]
    fn test_day_table_serde_round_trip() {
        let table = DayTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let restored: DayTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.days.len(), 7);
        assert_eq!(
            restored.lucky_pool(5).unwrap().digits(),
            table.lucky_pool(5).unwrap().digits()
        );
    }

    #[test]
    fn test_invalid_injected_table_rejected() {
        let table = DayTable {
            days: vec![DayEntry {
                label: "dimanche".to_string(),
                day_idx: 0,
                digits: vec![3, 12],
            }],
        };
        assert!(table.lucky_pool(0).is_err());
    }

    #[test]
    fn test_moon_table_pools() {
        let table = MoonTable::default();
        assert_eq!(table.lucky_pool(MoonPhase::Waxing).unwrap().digits(), &[1, 2, 4, 7]);
        assert_eq!(table.lucky_pool(MoonPhase::Waning).unwrap().digits(), &[0, 3, 6, 8]);
    }

    #[test]
    fn test_twenty_four_draws_per_year() {
        let draws = lottery_draws(2026);
        assert_eq!(draws.len(), 24);
    }

    #[test]
    fn test_may_first_postponed() {
        let draws = lottery_draws(2026);
        assert!(find_draw(&draws, "2026-05-01").is_none());
        let may = find_draw(&draws, "2026-05-02").unwrap();
        // Le 2 mai 2026 tombe un samedi.
        assert_eq!(may.day_idx, 6);
        assert_eq!(may.label, "2 mai 2569 (samedi)");
    }

    #[test]
    fn test_known_weekdays() {
        let draws = lottery_draws(2026);
        // Le 1er janvier 2026 est un jeudi, le 16 un vendredi.
        assert_eq!(find_draw(&draws, "2026-01-01").unwrap().day_idx, 4);
        assert_eq!(find_draw(&draws, "2026-01-16").unwrap().day_idx, 5);
    }

    #[test]
    fn test_buddhist_year_in_label() {
        let draws = lottery_draws(2026);
        assert_eq!(draws[0].label, "1 janvier 2569 (jeudi)");
    }
}

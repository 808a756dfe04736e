use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use huaywin_core::calendar::{DayTable, DrawDate};
use huaywin_core::classify::Highlight;
use huaywin_core::pool::DigitPool;
use huaywin_core::pricing::{BetCategory, CategoryCounts, parse_amount};
use huaywin_core::resolver::PoolSet;
use huaywin_stats::provider::{DigitFrequency, FrequencyTag};

const GRID_WIDTH: usize = 10;

/// Ligne prête à copier, comme le presse-papier de l'application d'origine.
pub fn copy_line(nums: &[String]) -> String {
    nums.join(", ")
}

pub fn display_selection(pool: &DigitPool) {
    println!("\n── Sélection active ({} chiffres) ──", pool.len());
    println!("{}", pool);
}

pub fn display_option_pools(pools: &PoolSet) {
    println!("\n── Options croisées ──");
    for (i, option) in pools.options().iter().enumerate() {
        if option.is_empty() {
            println!("  Option {} : (vide)", i + 1);
        } else {
            println!("  Option {} : {}", i + 1, option);
        }
    }
}

pub fn display_numbers(title: &str, nums: &[String]) {
    println!("\n── {} ({} combinaisons) ──", title, nums.len());
    if nums.is_empty() {
        println!("Aucune combinaison à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for chunk in nums.chunks(GRID_WIDTH) {
        table.add_row(chunk.to_vec());
    }
    println!("{table}");
    println!("Copie : {}", copy_line(nums));
}

fn highlight_color(highlight: Highlight) -> Color {
    match highlight {
        Highlight::Diamond => Color::Magenta,
        Highlight::Gold => Color::Yellow,
        Highlight::Silver => Color::Grey,
        Highlight::Opt1 => Color::Green,
        Highlight::None => Color::White,
    }
}

pub fn display_classified(title: &str, nums: &[String], highlights: &[Highlight]) {
    println!("\n── {} ({} combinaisons) ──", title, nums.len());
    if nums.is_empty() {
        println!("Aucune combinaison à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Statut"]);
    for (num, highlight) in nums.iter().zip(highlights) {
        table.add_row(vec![
            Cell::new(num),
            Cell::new(highlight.to_string()).fg(highlight_color(*highlight)),
        ]);
    }
    println!("{table}");
    println!("Copie : {}", copy_line(nums));
}

pub fn display_cost_summary(
    counts: &CategoryCounts,
    enabled: &[BetCategory],
    amount: &str,
    total: f64,
) {
    let unit = parse_amount(amount);
    println!("\n── Calcul du coût (mise {} bahts par combinaison) ──", unit);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Catégorie", "Combinaisons", "Coût"]);

    for category in BetCategory::ALL {
        let active = enabled.contains(&category);
        let count = counts.count(category);
        let marker = if active { "✓" } else { " " };
        let cost = if active { count as f64 * unit } else { 0.0 };
        let color = if active { Color::White } else { Color::DarkGrey };
        table.add_row(vec![
            Cell::new(format!("{} {}", marker, category.label())).fg(color),
            Cell::new(count.to_string()).fg(color),
            Cell::new(format!("{:.2}", cost)).fg(color),
        ]);
    }
    println!("{table}");
    println!("Total : {:.2} bahts", total);
}

pub fn display_day_table(day_table: &DayTable) {
    println!("\n── Chiffres du jour (เลขกำลังวัน) ──");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Jour", "Chiffres"]);

    for day in &day_table.days {
        let digits = day
            .digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![day.label.clone(), digits]);
    }
    println!("{table}");
}

pub fn display_draws(draws: &[DrawDate], day_table: &DayTable) {
    println!("\n── Calendrier des tirages ──");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Identifiant", "Tirage", "Chiffres du jour"]);

    for draw in draws {
        let digits = match day_table.entry(draw.day_idx) {
            Some(entry) => entry
                .digits
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            None => "—".to_string(),
        };
        table.add_row(vec![draw.id.clone(), draw.label.clone(), digits]);
    }
    println!("{table}");
}

pub fn display_statistics(freq: &DigitFrequency, provider_name: &str, draw_id: &str) {
    println!("\n🎯 Statistiques simulées ({}) — tirage {}\n", provider_name, draw_id);

    let probs = freq.probabilities();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Chiffre", "Fréquence", "Probabilité", "Tag"]);

    for digit in freq.hot_digits(10) {
        let tag = freq.tag(digit);
        let color = match tag {
            FrequencyTag::Hot => Color::Green,
            FrequencyTag::Cold => Color::Red,
            FrequencyTag::Normal => Color::White,
        };
        table.add_row(vec![
            Cell::new(digit.to_string()),
            Cell::new(freq.counts[digit as usize].to_string()),
            Cell::new(format!("{:.4}", probs[digit as usize])),
            Cell::new(tag.to_string()).fg(color),
        ]);
    }
    println!("{table}");
    println!("Ces statistiques sont purement décoratives.");
}

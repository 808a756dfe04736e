mod display;
mod interactive;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};

use huaywin_core::calendar::{DayTable, find_draw, lottery_draws};
use huaywin_core::engine::{WinRequest, evaluate};
use huaywin_core::generator::{Win2Mode, Win3Mode};
use huaywin_core::pool::{DigitPool, parse_digits};
use huaywin_core::pricing::BetCategory;
use huaywin_core::resolver::{PoolSet, SelectionMode};
use huaywin_stats::local::LocalStatistics;
use huaywin_stats::provider::StatisticsProvider;
use huaywin_stats::suggest_pool;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Win2Arg {
    Straight,
    #[default]
    Reverse,
}

impl From<Win2Arg> for Win2Mode {
    fn from(arg: Win2Arg) -> Self {
        match arg {
            Win2Arg::Straight => Win2Mode::Straight,
            Win2Arg::Reverse => Win2Mode::Reverse,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Win3Arg {
    Sets,
    #[default]
    SixBack,
    Crossing,
    OnlyCrossing,
}

impl From<Win3Arg> for Win3Mode {
    fn from(arg: Win3Arg) -> Self {
        match arg {
            Win3Arg::Sets => Win3Mode::Sets,
            Win3Arg::SixBack => Win3Mode::SixBack,
            Win3Arg::Crossing => Win3Mode::Crossing,
            Win3Arg::OnlyCrossing => Win3Mode::OnlyCrossing,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BetArg {
    Top2,
    Bottom2,
    Sets3,
    Back6,
    Crossing3,
    OnlyCrossing3,
}

impl From<BetArg> for BetCategory {
    fn from(arg: BetArg) -> Self {
        match arg {
            BetArg::Top2 => BetCategory::Top2,
            BetArg::Bottom2 => BetCategory::Bottom2,
            BetArg::Sets3 => BetCategory::Sets3,
            BetArg::Back6 => BetCategory::Back6,
            BetArg::Crossing3 => BetCategory::Crossing3,
            BetArg::OnlyCrossing3 => BetCategory::OnlyCrossing3,
        }
    }
}

#[derive(Parser)]
#[command(name = "huaywin", about = "Générateur de combinaisons pour la loterie thaïlandaise")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Générer les combinaisons d'une sélection
    Win(WinArgs),

    /// Croiser trois sélections indépendantes (option 1/2/3)
    Cross(CrossArgs),

    /// Afficher la table des chiffres du jour
    Days {
        /// Table des jours au format JSON (sinon table intégrée)
        #[arg(long)]
        day_table: Option<PathBuf>,
    },

    /// Afficher le calendrier des tirages d'une année
    Draws {
        /// Année civile
        #[arg(short, long, default_value = "2026")]
        year: i32,
    },

    /// Statistiques décoratives d'un tirage
    Stats {
        /// Identifiant du tirage (AAAA-MM-JJ, défaut : prochain tirage)
        #[arg(short, long)]
        draw: Option<String>,

        /// Seed pour la reproductibilité
        #[arg(short, long)]
        seed: Option<u64>,

        /// Nombre d'échantillons simulés
        #[arg(long, default_value = "1000")]
        samples: usize,

        /// Nombre de chiffres suggérés
        #[arg(short, long, default_value = "6")]
        top: usize,
    },

    /// Mode interactif
    Interactive,
}

#[derive(Args)]
struct WinArgs {
    /// Chiffres sélectionnés (ex : "1 2 3", "1,2,3" ou "123")
    #[arg(short, long)]
    numbers: Option<String>,

    /// Pré-remplir depuis un tirage du calendrier (AAAA-MM-JJ)
    #[arg(short, long)]
    draw: Option<String>,

    /// Pré-remplir depuis un jour de semaine (0 = dimanche)
    #[arg(long)]
    day: Option<u8>,

    /// Mode 2 chiffres
    #[arg(long, value_enum, default_value = "reverse")]
    win2: Win2Arg,

    /// Mode 3 chiffres
    #[arg(long, value_enum, default_value = "six-back")]
    win3: Win3Arg,

    /// Montant par combinaison (bahts, texte libre)
    #[arg(short, long, default_value = "1")]
    amount: String,

    /// Catégories misées (séparées par des virgules)
    #[arg(short, long, value_enum, value_delimiter = ',', default_value = "top2,bottom2,back6")]
    bets: Vec<BetArg>,

    /// Restreindre aux chiffres du jour actif
    #[arg(long)]
    filter_day: bool,

    /// Fusionner les chiffres suggérés par les statistiques
    #[arg(long)]
    with_stats: bool,

    /// Table des jours au format JSON (sinon table intégrée)
    #[arg(long)]
    day_table: Option<PathBuf>,

    /// Année du calendrier des tirages
    #[arg(long, default_value = "2026")]
    year: i32,
}

#[derive(Args)]
struct CrossArgs {
    /// Option 1
    #[arg(long, default_value = "")]
    opt1: String,

    /// Option 2
    #[arg(long, default_value = "")]
    opt2: String,

    /// Option 3
    #[arg(long, default_value = "")]
    opt3: String,

    /// Mode 2 chiffres
    #[arg(long, value_enum, default_value = "reverse")]
    win2: Win2Arg,

    /// Mode 3 chiffres
    #[arg(long, value_enum, default_value = "six-back")]
    win3: Win3Arg,

    /// Montant par combinaison (bahts, texte libre)
    #[arg(short, long, default_value = "1")]
    amount: String,

    /// Catégories misées (séparées par des virgules)
    #[arg(short, long, value_enum, value_delimiter = ',', default_value = "top2,bottom2,back6")]
    bets: Vec<BetArg>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Win(args) => cmd_win(args),
        Command::Cross(args) => cmd_cross(args),
        Command::Days { day_table } => cmd_days(day_table.as_deref()),
        Command::Draws { year } => cmd_draws(year),
        Command::Stats { draw, seed, samples, top } => cmd_stats(draw, seed, samples, top),
        Command::Interactive => interactive::run(DayTable::default()),
    }
}

fn load_day_table(path: Option<&Path>) -> Result<DayTable> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Impossible de lire {:?}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Table des jours invalide : {:?}", path))
        }
        None => Ok(DayTable::default()),
    }
}

/// Prochain tirage du calendrier, ou la date du jour à défaut.
fn next_draw_id() -> String {
    let today = chrono::Local::now().date_naive();
    lottery_draws(today.year())
        .into_iter()
        .find(|d| d.date >= today)
        .map(|d| d.id)
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string())
}

fn win2_title(mode: Win2Mode) -> &'static str {
    match mode {
        Win2Mode::Straight => "Vin 2 chiffres, paires droites",
        Win2Mode::Reverse => "Vin 2 chiffres, aller-retour",
    }
}

fn win3_title(mode: Win3Mode) -> &'static str {
    match mode {
        Win3Mode::Sets => "Vin 3 chiffres, en série",
        Win3Mode::SixBack => "Vin 3 chiffres, 6 retournés",
        Win3Mode::Crossing => "Vin 3 chiffres, sans croisés",
        Win3Mode::OnlyCrossing => "Vin 3 chiffres, croisés seuls",
    }
}

fn cmd_win(args: WinArgs) -> Result<()> {
    let table = load_day_table(args.day_table.as_deref())?;
    let draws = lottery_draws(args.year);

    let mut day_idx: Option<u8> = None;
    let mut pool = DigitPool::new();

    if let Some(id) = &args.draw {
        let draw = find_draw(&draws, id)
            .ok_or_else(|| anyhow!("Tirage inconnu : {} (voir huaywin draws)", id))?;
        day_idx = Some(draw.day_idx);
        pool = table.lucky_pool(draw.day_idx)?;
        println!("Tirage du {}", draw.label);
    } else if let Some(day) = args.day {
        let entry = table
            .entry(day)
            .ok_or_else(|| anyhow!("Jour inconnu : {} (0 = dimanche … 6 = samedi)", day))?;
        day_idx = Some(day);
        println!("Chiffres du {}", entry.label);
        pool = table.lucky_pool(day)?;
    }

    // Une sélection explicite remplace le pré-remplissage, le jour actif
    // reste disponible pour le filtre.
    if let Some(numbers) = &args.numbers {
        pool = parse_digits(numbers)?;
    }

    if args.with_stats {
        let provider = LocalStatistics::new(1000);
        let draw_id = args.draw.clone().unwrap_or_else(next_draw_id);
        let suggested = suggest_pool(&provider, &draw_id, 4)?;
        println!("Chiffres suggérés ({}, tirage {}) : {}", provider.name(), draw_id, suggested);
        pool = pool.union(&suggested);
    }

    if pool.is_empty() {
        println!("Aucun chiffre sélectionné. Essayez : huaywin win --numbers \"1 2 3\"");
        return Ok(());
    }

    let day_filter = if args.filter_day {
        let day = day_idx
            .ok_or_else(|| anyhow!("--filter-day demande un jour actif (--draw ou --day)"))?;
        Some(table.lucky_pool(day)?)
    } else {
        None
    };

    let request = WinRequest {
        selection: SelectionMode::Single,
        pools: PoolSet { single: pool, ..Default::default() },
        win2: args.win2.into(),
        win3: args.win3.into(),
        amount: args.amount.clone(),
        bets: args.bets.iter().map(|&b| b.into()).collect(),
        day_filter,
    };
    let outcome = evaluate(&request);

    display::display_selection(&outcome.active);
    display::display_cost_summary(&outcome.counts, &request.bets, &request.amount, outcome.total);
    display::display_numbers(win2_title(request.win2), &outcome.pairs);
    display::display_numbers(win3_title(request.win3), &outcome.win3);
    Ok(())
}

fn cmd_cross(args: CrossArgs) -> Result<()> {
    let pools = PoolSet {
        opt1: parse_digits(&args.opt1)?,
        opt2: parse_digits(&args.opt2)?,
        opt3: parse_digits(&args.opt3)?,
        ..Default::default()
    };

    if pools.options().iter().all(|p| p.is_empty()) {
        println!("Aucune option remplie. Essayez : huaywin cross --opt1 \"1 2 3\"");
        return Ok(());
    }

    let request = WinRequest {
        selection: SelectionMode::Cross,
        pools,
        win2: args.win2.into(),
        win3: args.win3.into(),
        amount: args.amount.clone(),
        bets: args.bets.iter().map(|&b| b.into()).collect(),
        day_filter: None,
    };
    let outcome = evaluate(&request);

    display::display_option_pools(&request.pools);
    display::display_selection(&outcome.active);
    display::display_cost_summary(&outcome.counts, &request.bets, &request.amount, outcome.total);
    display::display_classified(win2_title(request.win2), &outcome.pairs, &outcome.pair_highlights);
    display::display_classified(win3_title(request.win3), &outcome.win3, &outcome.win3_highlights);
    Ok(())
}

fn cmd_days(day_table: Option<&Path>) -> Result<()> {
    let table = load_day_table(day_table)?;
    display::display_day_table(&table);
    Ok(())
}

fn cmd_draws(year: i32) -> Result<()> {
    let draws = lottery_draws(year);
    if draws.is_empty() {
        println!("Aucun tirage pour l'année {}.", year);
        return Ok(());
    }
    display::display_draws(&draws, &DayTable::default());
    Ok(())
}

fn cmd_stats(draw: Option<String>, seed: Option<u64>, samples: usize, top: usize) -> Result<()> {
    let draw_id = draw.unwrap_or_else(next_draw_id);
    let provider = match seed {
        Some(seed) => LocalStatistics::with_seed(samples, seed),
        None => LocalStatistics::new(samples),
    };

    let freq = provider.fetch(&draw_id)?;
    display::display_statistics(&freq, provider.name(), &draw_id);

    let suggested = suggest_pool(&provider, &draw_id, top)?;
    println!("Sélection suggérée : {}", suggested);
    println!("Réutilisable avec : huaywin win --numbers \"{}\"", suggested);
    Ok(())
}

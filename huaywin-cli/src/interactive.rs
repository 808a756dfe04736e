use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::display;
use crate::next_draw_id;
use huaywin_core::calendar::DayTable;
use huaywin_core::engine::{WinRequest, evaluate};
use huaywin_core::generator::{Win2Mode, Win3Mode};
use huaywin_core::pool::parse_digits;
use huaywin_core::pricing::BetCategory;
use huaywin_core::resolver::{PoolSet, SelectionMode};
use huaywin_stats::local::LocalStatistics;
use huaywin_stats::provider::StatisticsProvider;
use huaywin_stats::suggest_pool;

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Numbers,
    Day,
    Options,
    Modes,
    Amount,
    Bets,
    Generate,
    Stats,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "chiffres" | "numeros" | "numéros" => Some(InteractiveCommand::Numbers),
        "2" | "jour" => Some(InteractiveCommand::Day),
        "3" | "options" | "croiser" => Some(InteractiveCommand::Options),
        "4" | "modes" | "mode" => Some(InteractiveCommand::Modes),
        "5" | "montant" => Some(InteractiveCommand::Amount),
        "6" | "mises" | "paris" => Some(InteractiveCommand::Bets),
        "7" | "generer" | "générer" | "gen" => Some(InteractiveCommand::Generate),
        "8" | "stats" | "statistiques" => Some(InteractiveCommand::Stats),
        "9" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Mode interactif ──");
    println!("  1. chiffres   Saisir la sélection");
    println!("  2. jour       Chiffres du jour");
    println!("  3. options    Croiser trois sélections");
    println!("  4. modes      Modes 2 et 3 chiffres");
    println!("  5. montant    Montant par combinaison");
    println!("  6. mises      Catégories misées");
    println!("  7. generer    Générer les combinaisons");
    println!("  8. stats      Statistiques décoratives");
    println!("  9. quitter    Quitter");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    Ok(input.trim().to_string())
}

fn prompt_with_default(msg: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}] : ", msg, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

struct Session {
    pools: PoolSet,
    selection: SelectionMode,
    win2: Win2Mode,
    win3: Win3Mode,
    amount: String,
    bets: Vec<BetCategory>,
    day_idx: Option<u8>,
    filtering: bool,
    table: DayTable,
}

impl Session {
    fn new(table: DayTable) -> Self {
        Self {
            pools: PoolSet::default(),
            selection: SelectionMode::Single,
            win2: Win2Mode::Reverse,
            win3: Win3Mode::SixBack,
            amount: "1".to_string(),
            bets: vec![BetCategory::Top2, BetCategory::Bottom2, BetCategory::Back6],
            day_idx: None,
            filtering: false,
            table,
        }
    }
}

pub fn run(table: DayTable) -> Result<()> {
    let mut session = Session::new(table);
    println!("huaywin — générateur de combinaisons");

    loop {
        display_menu();
        let input = prompt("Commande : ")?;
        match parse_command(&input) {
            Some(InteractiveCommand::Numbers) => cmd_numbers(&mut session)?,
            Some(InteractiveCommand::Day) => cmd_day(&mut session)?,
            Some(InteractiveCommand::Options) => cmd_options(&mut session)?,
            Some(InteractiveCommand::Modes) => cmd_modes(&mut session)?,
            Some(InteractiveCommand::Amount) => cmd_amount(&mut session)?,
            Some(InteractiveCommand::Bets) => cmd_bets(&mut session)?,
            Some(InteractiveCommand::Generate) => cmd_generate(&session),
            Some(InteractiveCommand::Stats) => cmd_stats(&mut session)?,
            Some(InteractiveCommand::Quit) => break,
            None => println!("Commande inconnue. Réessayez."),
        }
    }
    Ok(())
}

fn cmd_numbers(session: &mut Session) -> Result<()> {
    loop {
        let input = prompt("Chiffres (ex : \"1 2 3\" ou \"123\", vide pour annuler) : ")?;
        if input.is_empty() {
            return Ok(());
        }
        match parse_digits(&input) {
            Ok(pool) => {
                session.pools.single = pool;
                session.selection = SelectionMode::Single;
                println!("Sélection : {}", session.pools.single);
                return Ok(());
            }
            Err(e) => println!("{}. Réessayez.", e),
        }
    }
}

fn cmd_day(session: &mut Session) -> Result<()> {
    for day in &session.table.days {
        let digits = day
            .digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}. {} : {}", day.day_idx, day.label, digits);
    }

    loop {
        let input = prompt("Jour (0-6, vide pour annuler) : ")?;
        if input.is_empty() {
            return Ok(());
        }
        if let Ok(day) = input.parse::<u8>() {
            if let Ok(pool) = session.table.lucky_pool(day) {
                session.pools.single = pool;
                session.selection = SelectionMode::Single;
                session.day_idx = Some(day);
                println!("Sélection : {}", session.pools.single);

                let filter = prompt("Restreindre aux chiffres du jour ? (o/n) : ")?;
                session.filtering = filter.to_lowercase() == "o";
                return Ok(());
            }
        }
        println!("Jour invalide. Réessayez.");
    }
}

fn cmd_options(session: &mut Session) -> Result<()> {
    for (i, option) in [&mut session.pools.opt1, &mut session.pools.opt2, &mut session.pools.opt3]
        .into_iter()
        .enumerate()
    {
        loop {
            let current = option.to_string();
            let input = prompt_with_default(&format!("Option {}", i + 1), &current)?;
            match parse_digits(&input) {
                Ok(pool) => {
                    *option = pool;
                    break;
                }
                Err(e) => println!("{}. Réessayez.", e),
            }
        }
    }
    session.selection = SelectionMode::Cross;
    println!("Mode croisé actif.");
    Ok(())
}

fn cmd_modes(session: &mut Session) -> Result<()> {
    println!("Mode 2 chiffres : 1. paires droites  2. aller-retour");
    let input = prompt_with_default(
        "Choix",
        if session.win2 == Win2Mode::Straight { "1" } else { "2" },
    )?;
    session.win2 = match input.as_str() {
        "1" => Win2Mode::Straight,
        _ => Win2Mode::Reverse,
    };

    println!("Mode 3 chiffres : 1. en série  2. 6 retournés  3. sans croisés  4. croisés seuls");
    let current = match session.win3 {
        Win3Mode::Sets => "1",
        Win3Mode::SixBack => "2",
        Win3Mode::Crossing => "3",
        Win3Mode::OnlyCrossing => "4",
    };
    let input = prompt_with_default("Choix", current)?;
    session.win3 = match input.as_str() {
        "1" => Win3Mode::Sets,
        "3" => Win3Mode::Crossing,
        "4" => Win3Mode::OnlyCrossing,
        _ => Win3Mode::SixBack,
    };
    Ok(())
}

fn cmd_amount(session: &mut Session) -> Result<()> {
    session.amount = prompt_with_default("Montant par combinaison (bahts)", &session.amount)?;
    Ok(())
}

fn cmd_bets(session: &mut Session) -> Result<()> {
    for (i, category) in BetCategory::ALL.iter().enumerate() {
        let marker = if session.bets.contains(category) { "✓" } else { " " };
        println!("  {}. [{}] {}", i + 1, marker, category.label());
    }

    let input = prompt("Catégories à activer (ex : \"1 2 4\", vide pour annuler) : ")?;
    if input.is_empty() {
        return Ok(());
    }

    let mut bets = Vec::new();
    for part in input.split_whitespace() {
        match part.parse::<usize>() {
            Ok(n) if (1..=BetCategory::ALL.len()).contains(&n) => {
                let category = BetCategory::ALL[n - 1];
                if !bets.contains(&category) {
                    bets.push(category);
                }
            }
            _ => println!("Catégorie ignorée : {}", part),
        }
    }
    session.bets = bets;
    Ok(())
}

fn cmd_generate(session: &Session) {
    let day_filter = match (session.filtering, session.day_idx) {
        (true, Some(day)) => session.table.lucky_pool(day).ok(),
        _ => None,
    };

    let request = WinRequest {
        selection: session.selection,
        pools: session.pools.clone(),
        win2: session.win2,
        win3: session.win3,
        amount: session.amount.clone(),
        bets: session.bets.clone(),
        day_filter,
    };
    let outcome = evaluate(&request);

    if outcome.active.is_empty() {
        println!("Aucun chiffre sélectionné (commandes 1, 2 ou 3).");
        return;
    }

    display::display_selection(&outcome.active);
    display::display_cost_summary(&outcome.counts, &request.bets, &request.amount, outcome.total);
    match session.selection {
        SelectionMode::Single => {
            display::display_numbers(crate::win2_title(request.win2), &outcome.pairs);
            display::display_numbers(crate::win3_title(request.win3), &outcome.win3);
        }
        SelectionMode::Cross => {
            display::display_option_pools(&request.pools);
            display::display_classified(
                crate::win2_title(request.win2),
                &outcome.pairs,
                &outcome.pair_highlights,
            );
            display::display_classified(
                crate::win3_title(request.win3),
                &outcome.win3,
                &outcome.win3_highlights,
            );
        }
    }
}

fn cmd_stats(session: &mut Session) -> Result<()> {
    let draw_id = prompt_with_default("Tirage (AAAA-MM-JJ)", &next_draw_id())?;
    let provider = LocalStatistics::new(1000);

    let freq = provider.fetch(&draw_id)?;
    display::display_statistics(&freq, provider.name(), &draw_id);

    let suggested = suggest_pool(&provider, &draw_id, 6)?;
    println!("Sélection suggérée : {}", suggested);

    let merge = prompt("Fusionner dans la sélection ? (o/n) : ")?;
    if merge.to_lowercase() == "o" {
        session.pools.single = session.pools.single.union(&suggested);
        session.selection = SelectionMode::Single;
        println!("Sélection : {}", session.pools.single);
    }
    Ok(())
}

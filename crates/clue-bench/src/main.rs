#![deny(warnings)]

use anyhow::Result;
use clap::Parser;
use clue_bot::{BotParams, BotPlanner};
use clue_core::game::engine::GameState;
use clue_core::game::interface::{NoPacing, NullObserver, TurnPolicy};
use clue_core::game::setup::PlayerSpec;
use clue_core::model::catalog::CardCatalog;
use serde::Serialize;

/// Batch simulator: plays bots-only deduction games and reports how they
/// ended.
#[derive(Parser, Debug)]
#[command(name = "clue-bench")]
struct Args {
    /// Number of games to simulate.
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Seats per game (3-6).
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Base seed; game i uses seed + i.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Bot risk-accusation probability.
    #[arg(long, default_value_t = BotParams::DEFAULT_RISK)]
    risk: f64,

    /// Emit the summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    games: u32,
    players: usize,
    risk: f64,
    wins_by_seat: Vec<u32>,
    draws: u32,
    eliminations: u32,
    average_rounds: f64,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let summary = simulate(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_table(&summary);
    }
    Ok(())
}

fn simulate(args: &Args) -> Result<Summary> {
    let params = BotParams::with_risk(args.risk);
    let mut wins_by_seat = vec![0u32; args.players];
    let mut draws = 0u32;
    let mut eliminations = 0u32;
    let mut rounds_total = 0u64;

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game as u64);
        let specs: Vec<PlayerSpec> = (0..args.players)
            .map(|seat| PlayerSpec::bot(format!("Bot {seat}")))
            .collect();
        let mut state = GameState::with_seed(CardCatalog::classic(), specs, seed)?;
        let mut policies: Vec<Box<dyn TurnPolicy>> = (0..args.players)
            .map(|_| Box::new(BotPlanner::new(params)) as Box<dyn TurnPolicy>)
            .collect();

        let outcome = state.run(&mut policies, &mut NullObserver, &mut NoPacing);
        match outcome.winner {
            Some(seat) => wins_by_seat[seat] += 1,
            None => draws += 1,
        }
        eliminations += (args.players - state.active_count()) as u32;
        rounds_total += u64::from(outcome.rounds);
        tracing::debug!(game, seed, winner = ?outcome.winner, rounds = outcome.rounds, "game finished");
    }

    let average_rounds = if args.games == 0 {
        0.0
    } else {
        rounds_total as f64 / f64::from(args.games)
    };
    Ok(Summary {
        games: args.games,
        players: args.players,
        risk: params.risk(),
        wins_by_seat,
        draws,
        eliminations,
        average_rounds,
    })
}

fn print_table(summary: &Summary) {
    println!(
        "{} games, {} players, risk {:.2}",
        summary.games, summary.players, summary.risk
    );
    println!("{:<8} {:>6} {:>8}", "seat", "wins", "share");
    for (seat, wins) in summary.wins_by_seat.iter().enumerate() {
        let share = if summary.games == 0 {
            0.0
        } else {
            f64::from(*wins) / f64::from(summary.games) * 100.0
        };
        println!("{:<8} {:>6} {:>7.1}%", format!("Bot {seat}"), wins, share);
    }
    println!();
    println!("draws:          {}", summary.draws);
    println!("eliminations:   {}", summary.eliminations);
    println!("average rounds: {:.2}", summary.average_rounds);
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MDCLUE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

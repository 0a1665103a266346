use crate::cli::CliError;
use crate::console::{ConsoleObserver, ConsolePrompt, SleepPacer, read_player_count};
use clue_bot::{BotParams, BotPlanner};
use clue_core::game::engine::{GameOutcome, GameState};
use clue_core::game::interface::TurnPolicy;
use clue_core::game::prompt::PromptPolicy;
use clue_core::game::serialization::GameSnapshot;
use clue_core::game::setup::{SetupError, build_specs, validate_player_count};
use clue_core::model::catalog::CardCatalog;
use clue_core::model::player::PlayerRole;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Duration;

/// The built-in name pool, assigned to seats in order.
pub const DEFAULT_ROSTER: [&str; 6] = [
    "Miss Scarlett",
    "Professor Plum",
    "Mrs. Peacock",
    "Colonel Mustard",
    "Reverend Green",
    "Dr. Orchid",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PlayConfig {
    pub players: Option<usize>,
    pub seed: Option<u64>,
    pub bots_only: bool,
    pub delay_ms: u64,
    pub risk: Option<f64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            players: None,
            seed: None,
            bots_only: false,
            delay_ms: 3000,
            risk: None,
        }
    }
}

pub fn run_game(config: &PlayConfig) -> Result<GameOutcome, SetupError> {
    let players = match config.players {
        Some(count) => count,
        None => {
            let mut input = BufReader::new(io::stdin());
            let mut output = io::stdout();
            read_player_count(&mut input, &mut output)
        }
    };
    validate_player_count(players)?;
    let specs = build_specs(&DEFAULT_ROSTER, players, config.bots_only)?;

    let catalog = CardCatalog::classic();
    let mut state = match config.seed {
        Some(seed) => GameState::with_seed(catalog, specs, seed)?,
        None => GameState::new(catalog, specs)?,
    };
    tracing::info!(
        seed = state.seed(),
        players,
        bots_only = config.bots_only,
        "starting game"
    );

    let params = config
        .risk
        .map(BotParams::with_risk)
        .unwrap_or_else(BotParams::from_env);
    let mut policies: Vec<Box<dyn TurnPolicy>> = state
        .players()
        .iter()
        .map(|player| match player.role() {
            PlayerRole::Human => {
                Box::new(PromptPolicy::new(ConsolePrompt::stdio())) as Box<dyn TurnPolicy>
            }
            PlayerRole::Bot => Box::new(BotPlanner::new(params)) as Box<dyn TurnPolicy>,
        })
        .collect();

    let mut observer = ConsoleObserver::new();
    let mut pacer = SleepPacer::new(Duration::from_millis(config.delay_ms));
    let outcome = state.run(&mut policies, &mut observer, &mut pacer);
    tracing::info!(winner = ?outcome.winner, rounds = outcome.rounds, "game over");
    Ok(outcome)
}

/// Builds a bots-only game for the given seed and writes its snapshot JSON.
pub fn export_snapshot(path: &Path, seed: u64, players: usize) -> Result<(), CliError> {
    validate_player_count(players)?;
    let specs = build_specs(&DEFAULT_ROSTER, players, true)?;
    let state = GameState::with_seed(CardCatalog::classic(), specs, seed)?;
    let json = GameSnapshot::to_json(&state)?;
    std::fs::write(path, json)?;
    println!("Snapshot written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ROSTER, PlayConfig, run_game};
    use clue_core::game::setup::SetupError;

    #[test]
    fn roster_matches_the_supported_maximum() {
        assert_eq!(DEFAULT_ROSTER.len(), clue_core::game::setup::MAX_PLAYERS);
    }

    #[test]
    fn out_of_range_count_fails_setup() {
        let config = PlayConfig {
            players: Some(9),
            seed: Some(1),
            bots_only: true,
            delay_ms: 0,
            risk: Some(1.0),
        };
        assert_eq!(run_game(&config).unwrap_err(), SetupError::PlayerCount(9));
    }

    #[test]
    fn seeded_bots_only_game_completes() {
        let config = PlayConfig {
            players: Some(4),
            seed: Some(11),
            bots_only: true,
            delay_ms: 0,
            risk: Some(1.0),
        };
        let outcome = run_game(&config).unwrap();
        // Risk 1.0 forces an accusation every turn, so the game cannot
        // outlive the first rotation plus the closing accusation.
        assert!(outcome.rounds <= 1);
    }
}

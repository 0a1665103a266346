use crate::controller::{self, PlayConfig};
use clue_core::game::setup::SetupError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(PlayConfig),
    ExportSnapshot {
        path: PathBuf,
        seed: u64,
        players: usize,
    },
    Help,
}

#[derive(Debug)]
pub enum CliError {
    UnknownFlag(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    Setup(SetupError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::UnknownFlag(flag) => write!(f, "Unknown flag: {flag}"),
            CliError::MissingArgument(arg) => write!(f, "Missing argument: {arg}"),
            CliError::InvalidNumber(value) => write!(f, "Invalid number: {value}"),
            CliError::Setup(err) => write!(f, "Setup failed: {err}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<SetupError> for CliError {
    fn from(value: SetupError) -> Self {
        CliError::Setup(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        CliError::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        CliError::Json(value)
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse(&args)? {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::ExportSnapshot {
            path,
            seed,
            players,
        } => controller::export_snapshot(&path, seed, players),
        Command::Play(config) => {
            controller::run_game(&config)?;
            Ok(())
        }
    }
}

pub fn parse(args: &[String]) -> Result<Command, CliError> {
    let mut iter = args.iter();
    let mut config = PlayConfig::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--export-snapshot" => {
                let path = iter
                    .next()
                    .map(PathBuf::from)
                    .ok_or(CliError::MissingArgument("--export-snapshot <path> [seed] [players]"))?;
                let seed = match iter.next() {
                    Some(raw) => parse_number(raw)?,
                    None => 0,
                };
                let players = match iter.next() {
                    Some(raw) => parse_number::<usize>(raw)?,
                    None => 4,
                };
                return Ok(Command::ExportSnapshot {
                    path,
                    seed,
                    players,
                });
            }
            "--players" => {
                let raw = iter.next().ok_or(CliError::MissingArgument("--players <3-6>"))?;
                config.players = Some(parse_number(raw)?);
            }
            "--seed" => {
                let raw = iter.next().ok_or(CliError::MissingArgument("--seed <u64>"))?;
                config.seed = Some(parse_number(raw)?);
            }
            "--delay-ms" => {
                let raw = iter
                    .next()
                    .ok_or(CliError::MissingArgument("--delay-ms <millis>"))?;
                config.delay_ms = parse_number(raw)?;
            }
            "--risk" => {
                let raw = iter.next().ok_or(CliError::MissingArgument("--risk <0.0-1.0>"))?;
                config.risk = Some(
                    raw.parse::<f64>()
                        .map_err(|_| CliError::InvalidNumber(raw.clone()))?,
                );
            }
            "--bots-only" => config.bots_only = true,
            other => return Err(CliError::UnknownFlag(other.to_string())),
        }
    }

    Ok(Command::Play(config))
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, CliError> {
    raw.parse::<T>()
        .map_err(|_| CliError::InvalidNumber(raw.to_string()))
}

fn print_usage() {
    println!("Usage: mdclue [options]");
    println!();
    println!("Options:");
    println!("  --players <3-6>                   number of seats (asked interactively if omitted)");
    println!("  --seed <u64>                      deterministic setup seed");
    println!("  --bots-only                       no human seat; every player is automated");
    println!("  --delay-ms <millis>               pause between turns (default 3000)");
    println!("  --risk <0.0-1.0>                  bot risk-accusation probability (default 0.1)");
    println!("  --export-snapshot <path> [seed] [players]");
    println!("                                    write a game snapshot as JSON and exit");
    println!("  --help                            show this message");
}

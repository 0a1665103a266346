use crate::model::player::PlayerRole;
use core::fmt;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Name and role of one seat, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub name: String,
    pub role: PlayerRole,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, role: PlayerRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerRole::Human)
    }

    pub fn bot(name: impl Into<String>) -> Self {
        Self::new(name, PlayerRole::Bot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    PlayerCount(usize),
    NotEnoughNames { requested: usize, available: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::PlayerCount(count) => {
                write!(
                    f,
                    "player count {count} is outside the supported range {MIN_PLAYERS}-{MAX_PLAYERS}"
                )
            }
            SetupError::NotEnoughNames {
                requested,
                available,
            } => {
                write!(
                    f,
                    "requested {requested} players but only {available} names are available"
                )
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Builds the seat list from a name pool: the pool must cover the requested
/// count, and the first seat is human unless `bots_only` is set.
pub fn build_specs(
    roster: &[&str],
    requested: usize,
    bots_only: bool,
) -> Result<Vec<PlayerSpec>, SetupError> {
    if requested > roster.len() {
        return Err(SetupError::NotEnoughNames {
            requested,
            available: roster.len(),
        });
    }
    Ok(roster
        .iter()
        .take(requested)
        .enumerate()
        .map(|(seat, name)| {
            if seat == 0 && !bots_only {
                PlayerSpec::human(*name)
            } else {
                PlayerSpec::bot(*name)
            }
        })
        .collect())
}

pub fn validate_player_count(count: usize) -> Result<(), SetupError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(SetupError::PlayerCount(count))
    }
}

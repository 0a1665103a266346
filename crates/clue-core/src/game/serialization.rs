use crate::game::engine::GameState;
use crate::game::setup::{PlayerSpec, SetupError};
use crate::model::catalog::{CardCatalog, EmptyCategoryError};
use crate::model::player::PlayerRole;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Reconstructible game parameters: the seed plus everything setup needs.
/// Restoring replays setup deterministically; mid-game ledger state is not
/// captured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub seed: u64,
    pub suspects: Vec<String>,
    pub weapons: Vec<String>,
    pub rooms: Vec<String>,
    pub players: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerEntry {
    pub name: String,
    pub role: String,
}

#[derive(Debug)]
pub enum RestoreError {
    Catalog(EmptyCategoryError),
    Setup(SetupError),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreError::Catalog(err) => write!(f, "invalid catalog: {err}"),
            RestoreError::Setup(err) => write!(f, "invalid setup: {err}"),
        }
    }
}

impl std::error::Error for RestoreError {}

impl From<EmptyCategoryError> for RestoreError {
    fn from(value: EmptyCategoryError) -> Self {
        RestoreError::Catalog(value)
    }
}

impl From<SetupError> for RestoreError {
    fn from(value: SetupError) -> Self {
        RestoreError::Setup(value)
    }
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let catalog = state.catalog();
        GameSnapshot {
            seed: state.seed(),
            suspects: catalog.suspect_names().to_vec(),
            weapons: catalog.weapon_names().to_vec(),
            rooms: catalog.room_names().to_vec(),
            players: state
                .players()
                .iter()
                .map(|player| PlayerEntry {
                    name: player.name().to_string(),
                    role: player.role().as_str().to_string(),
                })
                .collect(),
        }
    }

    pub fn restore(self) -> Result<GameState, RestoreError> {
        let catalog = CardCatalog::new(self.suspects, self.weapons, self.rooms)?;
        let specs = self
            .players
            .into_iter()
            .map(|entry| {
                let role = PlayerRole::from_str(&entry.role).unwrap_or(PlayerRole::Bot);
                PlayerSpec::new(entry.name, role)
            })
            .collect();
        Ok(GameState::with_seed(catalog, specs, self.seed)?)
    }

    pub fn to_json(state: &GameState) -> serde_json::Result<String> {
        let snapshot = Self::capture(state);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::GameSnapshot;
    use crate::game::engine::GameState;
    use crate::game::setup::PlayerSpec;
    use crate::model::catalog::CardCatalog;
    use crate::model::player::PlayerRole;

    fn sample_state(seed: u64) -> GameState {
        let specs = vec![
            PlayerSpec::human("Miss Scarlett"),
            PlayerSpec::bot("Professor Plum"),
            PlayerSpec::bot("Mrs. Peacock"),
        ];
        GameState::with_seed(CardCatalog::classic(), specs, seed).unwrap()
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let state = sample_state(99);
        let json = GameSnapshot::to_json(&state).unwrap();
        assert!(json.contains("\"seed\": 99"));
        assert!(json.contains("Miss Scarlett"));
        assert!(json.contains("\"role\": \"human\""));
    }

    #[test]
    fn snapshot_roundtrip_restores_an_identical_deal() {
        let state = sample_state(123);
        let snapshot = GameSnapshot::capture(&state);
        let restored = snapshot.restore().unwrap();
        assert_eq!(restored.seed(), 123);
        assert_eq!(restored.solution().reveal(), state.solution().reveal());
        for (a, b) in state.players().iter().zip(restored.players()) {
            assert_eq!(a.name(), b.name());
            assert_eq!(a.role(), b.role());
            assert_eq!(a.hand().cards(), b.hand().cards());
        }
    }

    #[test]
    fn unknown_role_falls_back_to_bot() {
        let state = sample_state(7);
        let mut snapshot = GameSnapshot::capture(&state);
        snapshot.players[0].role = "wizard".to_string();
        let restored = snapshot.restore().unwrap();
        assert_eq!(restored.player(0).role(), PlayerRole::Bot);
    }

    #[test]
    fn snapshot_json_roundtrip() {
        let state = sample_state(55);
        let json = GameSnapshot::to_json(&state).unwrap();
        let parsed = GameSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, GameSnapshot::capture(&state));
    }
}

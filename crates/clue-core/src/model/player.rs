use crate::ledger::history::SuggestionLog;
use crate::ledger::sheet::ClueSheet;
use crate::model::card::Card;
use crate::model::catalog::CardCatalog;
use crate::model::hand::Hand;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRole {
    Human,
    Bot,
}

impl PlayerRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerRole::Human => "human",
            PlayerRole::Bot => "bot",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "human" => Some(PlayerRole::Human),
            "bot" => Some(PlayerRole::Bot),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Active -> Eliminated` is the only transition and it is permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Active,
    Eliminated,
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    role: PlayerRole,
    status: PlayerStatus,
    hand: Hand,
    sheet: ClueSheet,
    log: SuggestionLog,
}

impl Player {
    pub fn new(name: impl Into<String>, role: PlayerRole, catalog: &CardCatalog) -> Self {
        Self {
            name: name.into(),
            role,
            status: PlayerStatus::Active,
            hand: Hand::new(),
            sheet: ClueSheet::new(catalog),
            log: SuggestionLog::new(catalog),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    pub fn is_human(&self) -> bool {
        matches!(self.role, PlayerRole::Human)
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    /// Adds a dealt card to the hand and marks it seen on the clue sheet.
    pub fn deal_card(&mut self, card: Card) {
        self.hand.add(card);
        self.sheet.record_seen(card);
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn sheet(&self) -> &ClueSheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut ClueSheet {
        &mut self.sheet
    }

    pub fn log(&self) -> &SuggestionLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut SuggestionLog {
        &mut self.log
    }

    pub fn eliminate(&mut self) {
        self.status = PlayerStatus::Eliminated;
    }
}

#[cfg(test)]
mod tests {
    use super::{Player, PlayerRole, PlayerStatus};
    use crate::ledger::sheet::CardFact;
    use crate::model::card::{Card, Category};
    use crate::model::catalog::CardCatalog;

    #[test]
    fn new_player_starts_active_with_empty_hand() {
        let catalog = CardCatalog::classic();
        let player = Player::new("Professor Plum", PlayerRole::Bot, &catalog);
        assert_eq!(player.status(), PlayerStatus::Active);
        assert!(player.is_active());
        assert!(player.hand().is_empty());
        assert_eq!(player.name(), "Professor Plum");
    }

    #[test]
    fn dealing_marks_the_card_seen() {
        let catalog = CardCatalog::classic();
        let mut player = Player::new("Mrs. Peacock", PlayerRole::Bot, &catalog);
        let rope = Card::new(Category::Weapon, 3);
        player.deal_card(rope);
        assert!(player.hand().contains(rope));
        assert_eq!(player.sheet().fact(rope), CardFact::Seen);
    }

    #[test]
    fn elimination_is_permanent() {
        let catalog = CardCatalog::classic();
        let mut player = Player::new("Miss Scarlett", PlayerRole::Human, &catalog);
        player.eliminate();
        assert_eq!(player.status(), PlayerStatus::Eliminated);
        assert!(!player.is_active());
    }

    #[test]
    fn role_string_roundtrip() {
        assert_eq!(PlayerRole::from_str("Human"), Some(PlayerRole::Human));
        assert_eq!(PlayerRole::from_str("bot"), Some(PlayerRole::Bot));
        assert_eq!(PlayerRole::from_str("alien"), None);
        assert_eq!(PlayerRole::Bot.as_str(), "bot");
    }
}

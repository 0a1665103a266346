use crate::model::card::{Card, Category};
use crate::model::catalog::CardCatalog;
use crate::model::triple::Triple;
use core::fmt;

/// What a player privately knows about a single card.
///
/// Facts only ever strengthen: `Unknown -> PossiblyInEnvelope -> Seen` or
/// `Unknown -> Seen`. `Seen` is permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFact {
    Unknown,
    PossiblyInEnvelope,
    Seen,
}

impl CardFact {
    pub const fn as_str(self) -> &'static str {
        match self {
            CardFact::Unknown => "Unknown",
            CardFact::PossiblyInEnvelope => "Maybe in Envelope",
            CardFact::Seen => "Seen",
        }
    }
}

impl fmt::Display for CardFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player's private clue sheet: one fact slot per card in the universe,
/// laid out as fixed-size per-category tables.
#[derive(Debug, Clone)]
pub struct ClueSheet {
    facts: [Vec<CardFact>; 3],
}

impl ClueSheet {
    pub fn new(catalog: &CardCatalog) -> Self {
        let table = |category| vec![CardFact::Unknown; catalog.count(category)];
        Self {
            facts: [
                table(Category::Suspect),
                table(Category::Weapon),
                table(Category::Room),
            ],
        }
    }

    pub fn fact(&self, card: Card) -> CardFact {
        self.facts[card.category.index()][card.index as usize]
    }

    pub fn is_seen(&self, card: Card) -> bool {
        matches!(self.fact(card), CardFact::Seen)
    }

    /// Marks a card as directly observed. Idempotent; never downgraded.
    pub fn record_seen(&mut self, card: Card) {
        self.facts[card.category.index()][card.index as usize] = CardFact::Seen;
    }

    /// Records the outcome of one of this player's own suggestions: every
    /// suggested card that is not already seen and was not the revealed
    /// card becomes a soft envelope candidate.
    pub fn note_suggestion(&mut self, suggestion: &Triple, revealed: Option<Card>) {
        for card in suggestion.cards() {
            if Some(card) == revealed || self.is_seen(card) {
                continue;
            }
            self.facts[card.category.index()][card.index as usize] = CardFact::PossiblyInEnvelope;
        }
    }

    /// Cards in a category not ruled out by direct evidence, i.e. still
    /// `Unknown` or `PossiblyInEnvelope`.
    pub fn unseen(&self, category: Category) -> Vec<Card> {
        self.facts[category.index()]
            .iter()
            .enumerate()
            .filter(|(_, fact)| !matches!(fact, CardFact::Seen))
            .map(|(index, _)| Card::new(category, index as u8))
            .collect()
    }

    pub fn seen_count(&self, category: Category) -> usize {
        self.facts[category.index()]
            .iter()
            .filter(|fact| matches!(fact, CardFact::Seen))
            .count()
    }

    /// Every (card, fact) pair in catalog order, for display collaborators.
    pub fn entries(&self) -> impl Iterator<Item = (Card, CardFact)> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.facts[category.index()]
                .iter()
                .enumerate()
                .map(move |(index, fact)| (Card::new(category, index as u8), *fact))
        })
    }
}

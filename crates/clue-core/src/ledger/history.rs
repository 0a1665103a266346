use crate::model::card::{Card, Category};
use crate::model::catalog::CardCatalog;
use crate::model::triple::Triple;
use std::collections::HashSet;

/// Per-player suggestion record: the set of triples already proposed (used
/// to bias novelty) plus per-card frequency counters.
#[derive(Debug, Clone)]
pub struct SuggestionLog {
    suggested: HashSet<Triple>,
    counts: CardCounts,
}

impl SuggestionLog {
    pub fn new(catalog: &CardCatalog) -> Self {
        Self {
            suggested: HashSet::new(),
            counts: CardCounts::new(catalog),
        }
    }

    pub fn record(&mut self, suggestion: &Triple) {
        self.suggested.insert(*suggestion);
        self.counts.record(suggestion);
    }

    pub fn contains(&self, suggestion: &Triple) -> bool {
        self.suggested.contains(suggestion)
    }

    pub fn len(&self) -> usize {
        self.suggested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggested.is_empty()
    }

    pub fn times_suggested(&self, card: Card) -> u32 {
        self.counts.count(card)
    }
}

/// Global per-card suggestion counters, owned by the turn orchestrator and
/// passed into recording sites explicitly.
#[derive(Debug, Clone)]
pub struct SuggestionTally {
    counts: CardCounts,
}

impl SuggestionTally {
    pub fn new(catalog: &CardCatalog) -> Self {
        Self {
            counts: CardCounts::new(catalog),
        }
    }

    pub fn record(&mut self, suggestion: &Triple) {
        self.counts.record(suggestion);
    }

    pub fn count(&self, card: Card) -> u32 {
        self.counts.count(card)
    }

    /// (card, count) pairs for one category, in catalog order.
    pub fn counts(&self, category: Category) -> impl Iterator<Item = (Card, u32)> + '_ {
        self.counts.iter(category)
    }

    pub fn total(&self) -> u32 {
        Category::ALL
            .into_iter()
            .flat_map(|category| self.counts.iter(category))
            .map(|(_, count)| count)
            .sum()
    }
}

#[derive(Debug, Clone)]
struct CardCounts {
    counts: [Vec<u32>; 3],
}

impl CardCounts {
    fn new(catalog: &CardCatalog) -> Self {
        let table = |category| vec![0; catalog.count(category)];
        Self {
            counts: [
                table(Category::Suspect),
                table(Category::Weapon),
                table(Category::Room),
            ],
        }
    }

    fn record(&mut self, suggestion: &Triple) {
        for card in suggestion.cards() {
            self.counts[card.category.index()][card.index as usize] += 1;
        }
    }

    fn count(&self, card: Card) -> u32 {
        self.counts[card.category.index()][card.index as usize]
    }

    fn iter(&self, category: Category) -> impl Iterator<Item = (Card, u32)> + '_ {
        self.counts[category.index()]
            .iter()
            .enumerate()
            .map(move |(index, count)| (Card::new(category, index as u8), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::{SuggestionLog, SuggestionTally};
    use crate::model::card::{Card, Category};
    use crate::model::catalog::CardCatalog;
    use crate::model::triple::Triple;

    fn triple(suspect: u8, weapon: u8, room: u8) -> Triple {
        Triple::new(
            Card::new(Category::Suspect, suspect),
            Card::new(Category::Weapon, weapon),
            Card::new(Category::Room, room),
        )
    }

    #[test]
    fn log_remembers_triples_and_counts() {
        let catalog = CardCatalog::classic();
        let mut log = SuggestionLog::new(&catalog);
        let first = triple(0, 1, 2);
        assert!(log.is_empty());
        log.record(&first);
        log.record(&triple(0, 2, 3));
        assert!(log.contains(&first));
        assert!(!log.contains(&triple(1, 1, 2)));
        assert_eq!(log.len(), 2);
        assert_eq!(log.times_suggested(Card::new(Category::Suspect, 0)), 2);
        assert_eq!(log.times_suggested(Card::new(Category::Weapon, 1)), 1);
    }

    #[test]
    fn recording_the_same_triple_twice_still_counts_cards() {
        let catalog = CardCatalog::classic();
        let mut log = SuggestionLog::new(&catalog);
        let repeat = triple(2, 2, 2);
        log.record(&repeat);
        log.record(&repeat);
        assert_eq!(log.len(), 1);
        assert_eq!(log.times_suggested(Card::new(Category::Room, 2)), 2);
    }

    #[test]
    fn tally_accumulates_across_players() {
        let catalog = CardCatalog::classic();
        let mut tally = SuggestionTally::new(&catalog);
        tally.record(&triple(0, 0, 0));
        tally.record(&triple(0, 1, 0));
        assert_eq!(tally.count(Card::new(Category::Suspect, 0)), 2);
        assert_eq!(tally.count(Card::new(Category::Room, 0)), 2);
        assert_eq!(tally.count(Card::new(Category::Weapon, 1)), 1);
        assert_eq!(tally.total(), 6);
        let nonzero: Vec<_> = tally
            .counts(Category::Weapon)
            .filter(|(_, count)| *count > 0)
            .collect();
        assert_eq!(nonzero.len(), 2);
    }
}

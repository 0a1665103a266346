use crate::model::card::Card;
use crate::model::triple::Triple;

#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of this hand that appear in the suggested triple.
    pub fn matching(&self, suggestion: &Triple) -> Vec<Card> {
        suggestion
            .cards()
            .into_iter()
            .filter(|card| self.contains(*card))
            .collect()
    }

    fn sort(&mut self) {
        self.cards.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::{Card, Category};
    use crate::model::triple::Triple;

    #[test]
    fn add_and_query_cards() {
        let mut hand = Hand::new();
        let rope = Card::new(Category::Weapon, 3);
        hand.add(rope);
        assert!(hand.contains(rope));
        assert_eq!(hand.len(), 1);
        assert!(!hand.contains(Card::new(Category::Weapon, 0)));
    }

    #[test]
    fn cards_are_sorted_by_category_then_index() {
        let hand = Hand::with_cards(vec![
            Card::new(Category::Room, 2),
            Card::new(Category::Suspect, 4),
            Card::new(Category::Suspect, 1),
        ]);
        let ordered = hand.cards();
        assert_eq!(ordered[0], Card::new(Category::Suspect, 1));
        assert_eq!(ordered[1], Card::new(Category::Suspect, 4));
        assert_eq!(ordered[2], Card::new(Category::Room, 2));
    }

    #[test]
    fn matching_picks_out_suggested_cards() {
        let rope = Card::new(Category::Weapon, 3);
        let study = Card::new(Category::Room, 0);
        let hand = Hand::with_cards(vec![rope, Card::new(Category::Suspect, 5)]);
        let suggestion = Triple::new(Card::new(Category::Suspect, 0), rope, study);
        assert_eq!(hand.matching(&suggestion), vec![rope]);
    }
}

use crate::model::card::Card;
use crate::model::catalog::CardCatalog;
use crate::model::solution::Solution;
use rand::seq::SliceRandom;

/// Every card in the universe except the three in the envelope.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn remainder(catalog: &CardCatalog, solution: &Solution) -> Self {
        let cards = catalog
            .all_cards()
            .filter(|card| !solution.contains(*card))
            .collect();
        Self { cards }
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Splits the deck across `seats` hands in round-robin order by index.
    /// Hand sizes may differ by one when the deck does not divide evenly.
    pub fn deal(&self, seats: usize) -> Vec<Vec<Card>> {
        let mut hands = vec![Vec::new(); seats];
        for (index, card) in self.cards.iter().enumerate() {
            hands[index % seats].push(*card);
        }
        hands
    }
}

#[cfg(test)]
mod tests {
    use super::Deck;
    use crate::model::catalog::CardCatalog;
    use crate::model::solution::Solution;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_deck(seed: u64) -> Deck {
        let catalog = CardCatalog::classic();
        let mut rng = StdRng::seed_from_u64(seed);
        let solution = Solution::draw(&catalog, &mut rng);
        Deck::remainder(&catalog, &solution)
    }

    #[test]
    fn remainder_excludes_the_solution() {
        let catalog = CardCatalog::classic();
        let mut rng = StdRng::seed_from_u64(11);
        let solution = Solution::draw(&catalog, &mut rng);
        let deck = Deck::remainder(&catalog, &solution);
        assert_eq!(deck.len(), catalog.total() - 3);
        assert!(deck.cards().iter().all(|card| !solution.contains(*card)));
    }

    #[test]
    fn deal_round_robin_balances_hands() {
        let deck = sample_deck(5);
        let hands = deck.deal(3);
        assert_eq!(hands.len(), 3);
        assert_eq!(hands[0].len(), 6);
        assert_eq!(hands[1].len(), 6);
        assert_eq!(hands[2].len(), 5);
    }

    #[test]
    fn deal_covers_every_card_exactly_once() {
        let deck = sample_deck(9);
        let hands = deck.deal(4);
        let dealt: usize = hands.iter().map(|hand| hand.len()).sum();
        assert_eq!(dealt, deck.len());
        for card in deck.cards() {
            let holders = hands.iter().filter(|hand| hand.contains(card)).count();
            assert_eq!(holders, 1);
        }
    }

    #[test]
    fn shuffle_with_same_seed_is_deterministic() {
        let mut deck_a = sample_deck(21);
        let mut deck_b = sample_deck(21);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(1);
        deck_a.shuffle_in_place(&mut rng_a);
        deck_b.shuffle_in_place(&mut rng_b);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }
}

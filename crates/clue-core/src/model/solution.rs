use crate::model::card::{Card, Category};
use crate::model::catalog::CardCatalog;
use crate::model::triple::Triple;
use rand::Rng;

/// The hidden envelope triple. Drawn once at setup and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution(Triple);

impl Solution {
    /// Draws one card per category, uniformly and independently.
    pub fn draw<R: Rng + ?Sized>(catalog: &CardCatalog, rng: &mut R) -> Self {
        let suspect = pick_from(catalog, Category::Suspect, rng);
        let weapon = pick_from(catalog, Category::Weapon, rng);
        let room = pick_from(catalog, Category::Room, rng);
        Self(Triple::new(suspect, weapon, room))
    }

    pub const fn from_triple(triple: Triple) -> Self {
        Self(triple)
    }

    /// Category-wise equality on all three fields.
    pub fn matches(&self, accusation: &Triple) -> bool {
        self.0 == *accusation
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(card)
    }

    pub const fn reveal(&self) -> Triple {
        self.0
    }
}

fn pick_from<R: Rng + ?Sized>(catalog: &CardCatalog, category: Category, rng: &mut R) -> Card {
    // Catalog construction guarantees a non-empty category.
    let index = rng.gen_range(0..catalog.count(category));
    Card::new(category, index as u8)
}

#[cfg(test)]
mod tests {
    use super::Solution;
    use crate::model::card::Category;
    use crate::model::catalog::CardCatalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draw_takes_one_card_per_category() {
        let catalog = CardCatalog::classic();
        let mut rng = StdRng::seed_from_u64(7);
        let solution = Solution::draw(&catalog, &mut rng);
        let triple = solution.reveal();
        assert_eq!(triple.suspect.category, Category::Suspect);
        assert_eq!(triple.weapon.category, Category::Weapon);
        assert_eq!(triple.room.category, Category::Room);
    }

    #[test]
    fn draw_with_same_seed_is_deterministic() {
        let catalog = CardCatalog::classic();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        assert_eq!(
            Solution::draw(&catalog, &mut rng_a).reveal(),
            Solution::draw(&catalog, &mut rng_b).reveal()
        );
    }

    #[test]
    fn matches_requires_all_three_fields() {
        let catalog = CardCatalog::classic();
        let mut rng = StdRng::seed_from_u64(3);
        let solution = Solution::draw(&catalog, &mut rng);
        let mut wrong = solution.reveal();
        assert!(solution.matches(&wrong));
        wrong.room = catalog
            .cards(Category::Room)
            .find(|room| *room != wrong.room)
            .expect("another room exists");
        assert!(!solution.matches(&wrong));
    }
}

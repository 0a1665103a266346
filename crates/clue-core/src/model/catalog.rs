use crate::model::card::{Card, Category};
use crate::model::triple::Triple;
use core::fmt;

/// The card universe: one name list per category. Immutable once built.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    names: [Vec<String>; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCategoryError(pub Category);

impl fmt::Display for EmptyCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category {} has no cards", self.0)
    }
}

impl std::error::Error for EmptyCategoryError {}

impl CardCatalog {
    pub fn new(
        suspects: Vec<String>,
        weapons: Vec<String>,
        rooms: Vec<String>,
    ) -> Result<Self, EmptyCategoryError> {
        let names = [suspects, weapons, rooms];
        for category in Category::ALL {
            if names[category.index()].is_empty() {
                return Err(EmptyCategoryError(category));
            }
        }
        Ok(Self { names })
    }

    /// The standard board set: six suspects, six weapons, nine rooms.
    pub fn classic() -> Self {
        let suspects = [
            "Miss Scarlett",
            "Professor Plum",
            "Mrs. Peacock",
            "Colonel Mustard",
            "Reverend Green",
            "Dr. Orchid",
        ];
        let weapons = ["Knife", "Candlestick", "Revolver", "Rope", "Lead Pipe", "Wrench"];
        let rooms = [
            "Study",
            "Hall",
            "Lounge",
            "Library",
            "Billiard Room",
            "Dining Room",
            "Kitchen",
            "Ballroom",
            "Conservatory",
        ];
        let to_names = |list: &[&str]| list.iter().map(|name| name.to_string()).collect();
        Self {
            names: [to_names(&suspects), to_names(&weapons), to_names(&rooms)],
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.names[category.index()].len()
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn name(&self, card: Card) -> &str {
        &self.names[card.category.index()][card.index as usize]
    }

    pub fn cards(&self, category: Category) -> impl Iterator<Item = Card> + '_ {
        (0..self.count(category)).map(move |index| Card::new(category, index as u8))
    }

    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        Category::ALL.into_iter().flat_map(|category| self.cards(category))
    }

    pub fn find(&self, name: &str) -> Option<Card> {
        for category in Category::ALL {
            if let Some(index) = self.names[category.index()]
                .iter()
                .position(|candidate| candidate.eq_ignore_ascii_case(name))
            {
                return Some(Card::new(category, index as u8));
            }
        }
        None
    }

    /// Renders a triple as "suspect, weapon, room" for narration and logs.
    pub fn describe(&self, triple: &Triple) -> String {
        format!(
            "{}, {}, {}",
            self.name(triple.suspect),
            self.name(triple.weapon),
            self.name(triple.room)
        )
    }

    pub fn suspect_names(&self) -> &[String] {
        &self.names[Category::Suspect.index()]
    }

    pub fn weapon_names(&self) -> &[String] {
        &self.names[Category::Weapon.index()]
    }

    pub fn room_names(&self) -> &[String] {
        &self.names[Category::Room.index()]
    }
}

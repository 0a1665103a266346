use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    Suspect = 0,
    Weapon = 1,
    Room = 2,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Room];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Category::Suspect),
            1 => Some(Category::Weapon),
            2 => Some(Category::Room),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Suspect => "suspect",
            Category::Weapon => "weapon",
            Category::Room => "room",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card identity: which category it belongs to and its slot in the
/// catalog's name list for that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub category: Category,
    pub index: u8,
}

impl Card {
    pub const fn new(category: Category, index: u8) -> Self {
        Self { category, index }
    }

    pub const fn is_suspect(self) -> bool {
        matches!(self.category, Category::Suspect)
    }

    pub const fn is_weapon(self) -> bool {
        matches!(self.category, Category::Weapon)
    }

    pub const fn is_room(self) -> bool {
        matches!(self.category, Category::Room)
    }
}

use crate::ledger::sheet::ClueSheet;
use crate::model::card::Category;
use crate::model::triple::Triple;

/// Deduces the solution from direct evidence alone.
///
/// Fires only when every category has exactly one card not yet seen.
/// Sound but incomplete: soft `PossiblyInEnvelope` inference never counts
/// as proof, so the remainder may include such cards without firing early.
pub fn deduce_solution(sheet: &ClueSheet) -> Option<Triple> {
    let last = |category| {
        let remaining = sheet.unseen(category);
        match remaining[..] {
            [card] => Some(card),
            _ => None,
        }
    };
    let suspect = last(Category::Suspect)?;
    let weapon = last(Category::Weapon)?;
    let room = last(Category::Room)?;
    Some(Triple::new(suspect, weapon, room))
}

use crate::ledger::history::SuggestionLog;
use crate::ledger::sheet::ClueSheet;
use crate::model::card::{Card, Category};
use crate::model::catalog::CardCatalog;
use crate::model::triple::Triple;
use rand::Rng;
use rand::seq::SliceRandom;

/// Candidate cards for one category of a suggestion: everything not yet
/// seen, falling back to the whole category once all of it is seen so a
/// player is never left without options.
pub fn candidates(catalog: &CardCatalog, sheet: &ClueSheet, category: Category) -> Vec<Card> {
    let unseen = sheet.unseen(category);
    if unseen.is_empty() {
        catalog.cards(category).collect()
    } else {
        unseen
    }
}

/// Picks the next suggestion for a player.
///
/// Builds the cross-product of per-category candidates, removes triples the
/// player has already proposed (dropping the exclusion when it would empty
/// the pool), and selects uniformly at random. Pure with respect to the
/// log: the caller records the pick.
pub fn pick_suggestion<R: Rng + ?Sized>(
    catalog: &CardCatalog,
    sheet: &ClueSheet,
    log: &SuggestionLog,
    rng: &mut R,
) -> Triple {
    let suspects = candidates(catalog, sheet, Category::Suspect);
    let weapons = candidates(catalog, sheet, Category::Weapon);
    let rooms = candidates(catalog, sheet, Category::Room);

    let mut pool = Vec::with_capacity(suspects.len() * weapons.len() * rooms.len());
    for suspect in &suspects {
        for weapon in &weapons {
            for room in &rooms {
                let triple = Triple::new(*suspect, *weapon, *room);
                if !log.contains(&triple) {
                    pool.push(triple);
                }
            }
        }
    }

    if pool.is_empty() {
        // Every combination has been tried; repeats become allowed again.
        for suspect in &suspects {
            for weapon in &weapons {
                for room in &rooms {
                    pool.push(Triple::new(*suspect, *weapon, *room));
                }
            }
        }
    }

    // Non-empty by construction: each category has at least one candidate.
    *pool.choose(rng).expect("candidate pool is non-empty")
}

#[cfg(test)]
mod tests {
    use super::{candidates, pick_suggestion};
    use crate::ledger::history::SuggestionLog;
    use crate::ledger::sheet::ClueSheet;
    use crate::model::card::{Card, Category};
    use crate::model::catalog::CardCatalog;
    use crate::model::triple::Triple;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_catalog() -> CardCatalog {
        CardCatalog::new(
            vec!["Plum".to_string(), "Scarlett".to_string()],
            vec!["Rope".to_string()],
            vec!["Study".to_string(), "Hall".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn candidates_skip_seen_cards() {
        let catalog = CardCatalog::classic();
        let mut sheet = ClueSheet::new(&catalog);
        sheet.record_seen(Card::new(Category::Weapon, 0));
        let weapons = candidates(&catalog, &sheet, Category::Weapon);
        assert_eq!(weapons.len(), 5);
        assert!(!weapons.contains(&Card::new(Category::Weapon, 0)));
    }

    #[test]
    fn candidates_fall_back_to_the_full_category() {
        let catalog = small_catalog();
        let mut sheet = ClueSheet::new(&catalog);
        sheet.record_seen(Card::new(Category::Weapon, 0));
        let weapons = candidates(&catalog, &sheet, Category::Weapon);
        assert_eq!(weapons, vec![Card::new(Category::Weapon, 0)]);
    }

    #[test]
    fn pick_respects_category_membership() {
        let catalog = CardCatalog::classic();
        let sheet = ClueSheet::new(&catalog);
        let log = SuggestionLog::new(&catalog);
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..32 {
            let triple = pick_suggestion(&catalog, &sheet, &log, &mut rng);
            assert_eq!(triple.suspect.category, Category::Suspect);
            assert_eq!(triple.weapon.category, Category::Weapon);
            assert_eq!(triple.room.category, Category::Room);
        }
    }

    #[test]
    fn pick_avoids_previous_triples_until_exhausted() {
        let catalog = small_catalog();
        let sheet = ClueSheet::new(&catalog);
        let mut log = SuggestionLog::new(&catalog);
        let mut rng = StdRng::seed_from_u64(5);

        // 2 suspects x 1 weapon x 2 rooms = 4 possible triples.
        let mut seen = Vec::new();
        for _ in 0..4 {
            let triple = pick_suggestion(&catalog, &sheet, &log, &mut rng);
            assert!(!seen.contains(&triple), "novelty exclusion violated");
            seen.push(triple);
            log.record(&triple);
        }

        // Pool exhausted: repeats are allowed again, still a valid triple.
        let repeat = pick_suggestion(&catalog, &sheet, &log, &mut rng);
        assert!(seen.contains(&repeat));
    }

    #[test]
    fn pick_is_deterministic_per_seed() {
        let catalog = CardCatalog::classic();
        let sheet = ClueSheet::new(&catalog);
        let log = SuggestionLog::new(&catalog);
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);
        let a = pick_suggestion(&catalog, &sheet, &log, &mut rng_a);
        let b = pick_suggestion(&catalog, &sheet, &log, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn all_seen_still_yields_a_triple() {
        let catalog = small_catalog();
        let mut sheet = ClueSheet::new(&catalog);
        for card in catalog.all_cards() {
            sheet.record_seen(card);
        }
        let log = SuggestionLog::new(&catalog);
        let mut rng = StdRng::seed_from_u64(8);
        let triple = pick_suggestion(&catalog, &sheet, &log, &mut rng);
        assert_eq!(triple.weapon, Card::new(Category::Weapon, 0));
    }

    #[test]
    fn never_proposes_a_card_outside_candidates() {
        let catalog = CardCatalog::classic();
        let mut sheet = ClueSheet::new(&catalog);
        // See everything except one card per category.
        for card in catalog.all_cards() {
            if card.index != 2 {
                sheet.record_seen(card);
            }
        }
        let log = SuggestionLog::new(&catalog);
        let mut rng = StdRng::seed_from_u64(77);
        let triple = pick_suggestion(&catalog, &sheet, &log, &mut rng);
        assert_eq!(
            triple,
            Triple::new(
                Card::new(Category::Suspect, 2),
                Card::new(Category::Weapon, 2),
                Card::new(Category::Room, 2),
            )
        );
    }
}

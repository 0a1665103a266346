use crate::params::BotParams;
use clue_core::game::deduce::deduce_solution;
use clue_core::game::interface::{TurnPolicy, TurnView};
use clue_core::game::suggest::pick_suggestion;
use clue_core::model::card::{Card, Category};
use clue_core::model::triple::Triple;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::{Level, event};

/// Automated turn policy: suggestions come from the core generator;
/// accusations fire on a completed deduction, or with probability
/// `BotParams::risk` per turn on a random guess over not-yet-seen cards.
#[derive(Debug, Clone)]
pub struct BotPlanner {
    params: BotParams,
}

impl BotPlanner {
    pub fn new(params: BotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> BotParams {
        self.params
    }

    /// One uniformly random not-yet-seen card per category, falling back to
    /// the whole category once everything in it has been seen. Deliberately
    /// ignores the soft envelope inference.
    fn risky_triple(&self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Triple {
        let pick = |category: Category, rng: &mut dyn RngCore| -> Card {
            let unseen = view.sheet.unseen(category);
            let pool: Vec<Card> = if unseen.is_empty() {
                view.catalog.cards(category).collect()
            } else {
                unseen
            };
            *pool.choose(rng).expect("category is never empty")
        };
        Triple::new(
            pick(Category::Suspect, rng),
            pick(Category::Weapon, rng),
            pick(Category::Room, rng),
        )
    }

    /// End-of-game fallback when no deduction exists: the first unseen card
    /// per category, or a random one if the category is exhausted.
    fn closing_triple(&self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Triple {
        let pick = |category: Category, rng: &mut dyn RngCore| -> Card {
            view.sheet
                .unseen(category)
                .first()
                .copied()
                .unwrap_or_else(|| {
                    let pool: Vec<Card> = view.catalog.cards(category).collect();
                    *pool.choose(rng).expect("category is never empty")
                })
        };
        Triple::new(
            pick(Category::Suspect, rng),
            pick(Category::Weapon, rng),
            pick(Category::Room, rng),
        )
    }
}

impl Default for BotPlanner {
    fn default() -> Self {
        Self::new(BotParams::default())
    }
}

impl TurnPolicy for BotPlanner {
    fn propose_suggestion(&mut self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Triple {
        let suggestion = pick_suggestion(view.catalog, view.sheet, view.log, rng);
        log_decision(view, "suggest", &suggestion);
        suggestion
    }

    fn consider_accusation(
        &mut self,
        view: &TurnView<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<Triple> {
        if let Some(deduced) = deduce_solution(view.sheet) {
            log_decision(view, "accuse_deduced", &deduced);
            return Some(deduced);
        }
        if rng.gen_bool(self.params.risk()) {
            let guess = self.risky_triple(view, rng);
            log_decision(view, "accuse_risk", &guess);
            return Some(guess);
        }
        None
    }

    fn closing_accusation(&mut self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Triple {
        let accusation = deduce_solution(view.sheet)
            .unwrap_or_else(|| self.closing_triple(view, rng));
        log_decision(view, "accuse_closing", &accusation);
        accusation
    }
}

fn log_decision(view: &TurnView<'_>, reason: &str, triple: &Triple) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    event!(
        target: "clue_bot::planner",
        Level::DEBUG,
        seat = view.seat,
        reason,
        triple = %view.catalog.describe(triple)
    );
}

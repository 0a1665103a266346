use crate::game::interface::{ChoicePrompt, TurnPolicy, TurnView};
use crate::game::suggest;
use crate::model::card::{Card, Category};
use crate::model::catalog::CardCatalog;
use crate::model::triple::Triple;
use rand::RngCore;

/// Turn policy for a human-controlled seat: every decision is routed
/// through a [`ChoicePrompt`] collaborator. Suggestion menus are narrowed
/// to cards the player has not seen (with the usual full-category
/// fallback); accusation menus always offer the whole category.
pub struct PromptPolicy<P: ChoicePrompt> {
    prompt: P,
}

impl<P: ChoicePrompt> PromptPolicy<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    fn choose_card(&mut self, label: &str, options: &[Card], catalog: &CardCatalog) -> Card {
        let names: Vec<&str> = options.iter().map(|card| catalog.name(*card)).collect();
        let index = self.prompt.choose(label, &names);
        options[index]
    }

    fn choose_from_category(
        &mut self,
        label: &str,
        category: Category,
        catalog: &CardCatalog,
    ) -> Card {
        let options: Vec<Card> = catalog.cards(category).collect();
        self.choose_card(label, &options, catalog)
    }

    fn accusation_triple(&mut self, catalog: &CardCatalog) -> Triple {
        Triple::new(
            self.choose_from_category("Accuse: Choose a suspect:", Category::Suspect, catalog),
            self.choose_from_category("Accuse: Choose a weapon:", Category::Weapon, catalog),
            self.choose_from_category("Accuse: Choose a room:", Category::Room, catalog),
        )
    }
}

impl<P: ChoicePrompt> TurnPolicy for PromptPolicy<P> {
    fn propose_suggestion(&mut self, view: &TurnView<'_>, _rng: &mut dyn RngCore) -> Triple {
        let suspects = suggest::candidates(view.catalog, view.sheet, Category::Suspect);
        let weapons = suggest::candidates(view.catalog, view.sheet, Category::Weapon);
        let rooms = suggest::candidates(view.catalog, view.sheet, Category::Room);
        Triple::new(
            self.choose_card("Choose a suspect:", &suspects, view.catalog),
            self.choose_card("Choose a weapon:", &weapons, view.catalog),
            self.choose_card("Choose a room:", &rooms, view.catalog),
        )
    }

    fn consider_accusation(
        &mut self,
        view: &TurnView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Option<Triple> {
        if !self.prompt.confirm("Do you want to make an accusation?") {
            return None;
        }
        Some(self.accusation_triple(view.catalog))
    }

    fn closing_accusation(&mut self, view: &TurnView<'_>, _rng: &mut dyn RngCore) -> Triple {
        self.accusation_triple(view.catalog)
    }
}

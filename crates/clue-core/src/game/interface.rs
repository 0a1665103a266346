//! Collaborator seams the engine stays decoupled from: player policies,
//! interactive prompts, display sinks and turn pacing.

use crate::ledger::history::{SuggestionLog, SuggestionTally};
use crate::ledger::sheet::ClueSheet;
use crate::model::card::Card;
use crate::model::catalog::CardCatalog;
use crate::model::hand::Hand;
use crate::model::triple::Triple;
use rand::RngCore;

/// Read-only view of everything a policy may consult on its turn.
#[derive(Clone, Copy)]
pub struct TurnView<'a> {
    pub seat: usize,
    pub catalog: &'a CardCatalog,
    pub sheet: &'a ClueSheet,
    pub log: &'a SuggestionLog,
    pub tally: &'a SuggestionTally,
}

/// Decision-making interface for one seat. The engine owns all recording
/// and resolution; policies only pick triples.
pub trait TurnPolicy {
    /// Proposes the (suspect, weapon, room) suggestion for this turn.
    fn propose_suggestion(&mut self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Triple;

    /// Optionally accuses after the suggestion resolves.
    fn consider_accusation(&mut self, view: &TurnView<'_>, rng: &mut dyn RngCore)
    -> Option<Triple>;

    /// The forced accusation when this seat is the last one standing.
    fn closing_accusation(&mut self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Triple;
}

/// Synchronous selection surface for human-controlled seats.
pub trait ChoicePrompt {
    /// Returns the index of the chosen option. `options` is never empty.
    fn choose(&mut self, label: &str, options: &[&str]) -> usize;

    fn confirm(&mut self, label: &str) -> bool;
}

/// One-way notification sinks. Every method is fire-and-forget and
/// defaults to a no-op.
pub trait GameObserver {
    fn turn_started(&mut self, _name: &str) {}

    fn hand_shown(&mut self, _name: &str, _hand: &Hand, _catalog: &CardCatalog) {}

    fn suggestion_made(&mut self, _name: &str, _suggestion: &Triple, _catalog: &CardCatalog) {}

    /// `revealed` carries the shown card only when the proposer is entitled
    /// to see it (their own refutation); spectator sinks never get it.
    fn suggestion_refuted(
        &mut self,
        _proposer: &str,
        _refuter: &str,
        _revealed: Option<Card>,
        _catalog: &CardCatalog,
    ) {
    }

    fn suggestion_unrefuted(&mut self, _proposer: &str) {}

    fn clue_sheet_shown(&mut self, _name: &str, _sheet: &ClueSheet, _catalog: &CardCatalog) {}

    fn accusation_made(&mut self, _name: &str, _accusation: &Triple, _catalog: &CardCatalog) {}

    fn player_won(&mut self, _name: &str, _solution: &Triple, _catalog: &CardCatalog) {}

    fn player_eliminated(&mut self, _name: &str) {}

    fn tally_reported(&mut self, _tally: &SuggestionTally, _catalog: &CardCatalog) {}

    fn game_drawn(&mut self, _solution: &Triple, _catalog: &CardCatalog) {}
}

/// Observer that swallows everything; used by tests and batch runs.
#[derive(Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Cosmetic delay between turns.
pub trait TurnPacer {
    fn pause(&mut self);
}

/// No delay at all.
#[derive(Debug, Default)]
pub struct NoPacing;

impl TurnPacer for NoPacing {
    fn pause(&mut self) {}
}

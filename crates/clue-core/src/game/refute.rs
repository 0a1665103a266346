use crate::model::card::Card;
use crate::model::player::Player;
use crate::model::triple::Triple;
use rand::Rng;
use rand::seq::SliceRandom;

/// Who disproved a suggestion and with which card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refutation {
    pub refuter: usize,
    pub card: Card,
}

/// Finds the refuter for a suggestion, scanning seats in table order
/// starting immediately after the proposer and wrapping the full table.
/// Eliminated players still refute. When the refuter holds more than one
/// suggested card the revealed card is chosen uniformly among them.
///
/// Pure with respect to the players: ledger side effects are the caller's.
pub fn resolve<R: Rng + ?Sized>(
    players: &[Player],
    proposer: usize,
    suggestion: &Triple,
    rng: &mut R,
) -> Option<Refutation> {
    let seats = players.len();
    for offset in 1..seats {
        let seat = (proposer + offset) % seats;
        let matching = players[seat].hand().matching(suggestion);
        if let Some(card) = matching.choose(rng).copied() {
            return Some(Refutation { refuter: seat, card });
        }
    }
    None
}

use crate::game::accuse::{self, AccusationOutcome};
use crate::game::interface::{GameObserver, TurnPacer, TurnPolicy, TurnView};
use crate::game::refute::{self, Refutation};
use crate::game::setup::{PlayerSpec, SetupError, validate_player_count};
use crate::ledger::history::SuggestionTally;
use crate::model::catalog::CardCatalog;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::player::Player;
use crate::model::solution::Solution;
use crate::model::triple::Triple;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How a finished game ended. The solution is always revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Option<usize>,
    pub rounds: u32,
    pub solution: Triple,
}

/// Whole-game state: the fixed seat order, the hidden solution, the global
/// suggestion tally and the single source of randomness.
#[derive(Debug, Clone)]
pub struct GameState {
    catalog: CardCatalog,
    players: Vec<Player>,
    solution: Solution,
    tally: SuggestionTally,
    rng: StdRng,
    seed: u64,
}

impl GameState {
    pub fn new(catalog: CardCatalog, specs: Vec<PlayerSpec>) -> Result<Self, SetupError> {
        let seed: u64 = rand::random();
        Self::with_seed(catalog, specs, seed)
    }

    /// Deterministic setup: draws the solution, shuffles the remainder deck
    /// and deals it round-robin, seeding every clue sheet with the owner's
    /// own cards.
    pub fn with_seed(
        catalog: CardCatalog,
        specs: Vec<PlayerSpec>,
        seed: u64,
    ) -> Result<Self, SetupError> {
        validate_player_count(specs.len())?;

        let mut rng = StdRng::seed_from_u64(seed);
        let solution = Solution::draw(&catalog, &mut rng);
        let mut deck = Deck::remainder(&catalog, &solution);
        deck.shuffle_in_place(&mut rng);
        let dealt = deck.deal(specs.len());

        let mut players: Vec<Player> = specs
            .into_iter()
            .map(|spec| Player::new(spec.name, spec.role, &catalog))
            .collect();
        for (player, cards) in players.iter_mut().zip(dealt) {
            for card in cards {
                player.deal_card(card);
            }
        }

        let tally = SuggestionTally::new(&catalog);
        Ok(Self {
            catalog,
            players,
            solution,
            tally,
            rng,
            seed,
        })
    }

    /// Constructs a game from explicit hands and a fixed solution. Used by
    /// tests that need full control over the deal; sheets are seeded from
    /// the given hands exactly as regular dealing would.
    pub fn from_hands(
        catalog: CardCatalog,
        specs: Vec<PlayerSpec>,
        solution: Triple,
        hands: Vec<Hand>,
        seed: u64,
    ) -> Result<Self, SetupError> {
        validate_player_count(specs.len())?;

        let mut players: Vec<Player> = specs
            .into_iter()
            .map(|spec| Player::new(spec.name, spec.role, &catalog))
            .collect();
        for (player, hand) in players.iter_mut().zip(hands) {
            for card in hand.iter() {
                player.deal_card(*card);
            }
        }

        let tally = SuggestionTally::new(&catalog);
        Ok(Self {
            catalog,
            players,
            solution: Solution::from_triple(solution),
            tally,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn tally(&self) -> &SuggestionTally {
        &self.tally
    }

    pub fn active_players(&self) -> Vec<usize> {
        (0..self.players.len())
            .filter(|seat| self.players[*seat].is_active())
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Records a suggestion for its proposer, resolves the refutation and
    /// applies the ledger side effects: the revealed card becomes `Seen`
    /// for the proposer, everything else in the triple becomes a soft
    /// envelope candidate unless already seen.
    pub fn apply_suggestion(&mut self, seat: usize, suggestion: Triple) -> Option<Refutation> {
        self.players[seat].log_mut().record(&suggestion);
        self.tally.record(&suggestion);

        let refutation = refute::resolve(&self.players, seat, &suggestion, &mut self.rng);
        let sheet = self.players[seat].sheet_mut();
        match refutation {
            Some(refutation) => {
                sheet.record_seen(refutation.card);
                sheet.note_suggestion(&suggestion, Some(refutation.card));
            }
            None => sheet.note_suggestion(&suggestion, None),
        }
        refutation
    }

    /// Resolves an accusation; an incorrect one permanently eliminates the
    /// accuser from suggesting and accusing.
    pub fn apply_accusation(&mut self, seat: usize, accusation: &Triple) -> AccusationOutcome {
        let outcome = accuse::resolve_accusation(&self.solution, accusation);
        if !outcome.is_correct() {
            self.players[seat].eliminate();
        }
        outcome
    }

    /// Runs the game to completion. `policies` supplies the decision-maker
    /// for each seat in table order.
    pub fn run(
        &mut self,
        policies: &mut [Box<dyn TurnPolicy>],
        observer: &mut dyn GameObserver,
        pacer: &mut dyn TurnPacer,
    ) -> GameOutcome {
        debug_assert_eq!(policies.len(), self.players.len());

        let mut rounds = 0;
        while self.active_count() > 1 {
            rounds += 1;
            for seat in 0..self.players.len() {
                if !self.players[seat].is_active() {
                    continue;
                }
                if let Some(winner) = self.take_turn(seat, policies[seat].as_mut(), observer) {
                    return GameOutcome {
                        winner: Some(winner),
                        rounds,
                        solution: self.solution.reveal(),
                    };
                }
                pacer.pause();
            }
            observer.tally_reported(&self.tally, &self.catalog);
        }

        self.resolve_endgame(policies, observer, rounds)
    }

    fn take_turn(
        &mut self,
        seat: usize,
        policy: &mut dyn TurnPolicy,
        observer: &mut dyn GameObserver,
    ) -> Option<usize> {
        observer.turn_started(self.players[seat].name());
        if self.players[seat].is_human() {
            observer.hand_shown(
                self.players[seat].name(),
                self.players[seat].hand(),
                &self.catalog,
            );
        }

        let suggestion = {
            let player = &self.players[seat];
            let view = TurnView {
                seat,
                catalog: &self.catalog,
                sheet: player.sheet(),
                log: player.log(),
                tally: &self.tally,
            };
            policy.propose_suggestion(&view, &mut self.rng)
        };
        observer.suggestion_made(self.players[seat].name(), &suggestion, &self.catalog);

        let refutation = self.apply_suggestion(seat, suggestion);
        match refutation {
            Some(refutation) => {
                // Only the proposer is entitled to learn the revealed card.
                let revealed = self.players[seat].is_human().then_some(refutation.card);
                observer.suggestion_refuted(
                    self.players[seat].name(),
                    self.players[refutation.refuter].name(),
                    revealed,
                    &self.catalog,
                );
            }
            None => observer.suggestion_unrefuted(self.players[seat].name()),
        }

        if self.players[seat].is_human() {
            observer.clue_sheet_shown(
                self.players[seat].name(),
                self.players[seat].sheet(),
                &self.catalog,
            );
        }

        let accusation = {
            let player = &self.players[seat];
            let view = TurnView {
                seat,
                catalog: &self.catalog,
                sheet: player.sheet(),
                log: player.log(),
                tally: &self.tally,
            };
            policy.consider_accusation(&view, &mut self.rng)
        };
        if let Some(accusation) = accusation {
            observer.accusation_made(self.players[seat].name(), &accusation, &self.catalog);
            match self.apply_accusation(seat, &accusation) {
                AccusationOutcome::Correct => {
                    observer.player_won(
                        self.players[seat].name(),
                        &self.solution.reveal(),
                        &self.catalog,
                    );
                    return Some(seat);
                }
                AccusationOutcome::Incorrect => {
                    observer.player_eliminated(self.players[seat].name());
                }
            }
        }
        None
    }

    /// One active player must make a final accusation; zero active players
    /// is a draw. Either way the solution is revealed.
    fn resolve_endgame(
        &mut self,
        policies: &mut [Box<dyn TurnPolicy>],
        observer: &mut dyn GameObserver,
        rounds: u32,
    ) -> GameOutcome {
        let active = self.active_players();
        if active.len() == 1 {
            let seat = active[0];
            let accusation = {
                let player = &self.players[seat];
                let view = TurnView {
                    seat,
                    catalog: &self.catalog,
                    sheet: player.sheet(),
                    log: player.log(),
                    tally: &self.tally,
                };
                policies[seat].closing_accusation(&view, &mut self.rng)
            };
            observer.accusation_made(self.players[seat].name(), &accusation, &self.catalog);
            if self.apply_accusation(seat, &accusation).is_correct() {
                observer.player_won(
                    self.players[seat].name(),
                    &self.solution.reveal(),
                    &self.catalog,
                );
                return GameOutcome {
                    winner: Some(seat),
                    rounds,
                    solution: self.solution.reveal(),
                };
            }
            observer.player_eliminated(self.players[seat].name());
        }
        observer.game_drawn(&self.solution.reveal(), &self.catalog);
        GameOutcome {
            winner: None,
            rounds,
            solution: self.solution.reveal(),
        }
    }
}

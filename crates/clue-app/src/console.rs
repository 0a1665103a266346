use clue_core::game::interface::{ChoicePrompt, GameObserver, TurnPacer};
use clue_core::ledger::history::SuggestionTally;
use clue_core::ledger::sheet::ClueSheet;
use clue_core::model::card::{Card, Category};
use clue_core::model::catalog::CardCatalog;
use clue_core::model::hand::Hand;
use clue_core::model::triple::Triple;
use colored::Colorize;
use std::io::{self, BufRead, BufReader, Write};
use std::thread;
use std::time::Duration;

/// Numbered stdin selection. Re-asks on invalid input; on EOF it falls
/// back to the first option (the dialog-default behavior).
pub struct ConsolePrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl ConsolePrompt<BufReader<io::Stdin>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl<R: BufRead, W: Write> ChoicePrompt for ConsolePrompt<R, W> {
    fn choose(&mut self, label: &str, options: &[&str]) -> usize {
        loop {
            let _ = writeln!(self.output, "{label}");
            for (index, option) in options.iter().enumerate() {
                let _ = writeln!(self.output, "  {}. {option}", index + 1);
            }
            let _ = write!(self.output, "> ");
            let _ = self.output.flush();

            let Some(line) = self.read_line() else {
                return 0;
            };
            match line.parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return choice - 1,
                _ => {
                    let _ = writeln!(
                        self.output,
                        "Please enter a number between 1 and {}.",
                        options.len()
                    );
                }
            }
        }
    }

    fn confirm(&mut self, label: &str) -> bool {
        loop {
            let _ = write!(self.output, "{label} (yes/no): ");
            let _ = self.output.flush();
            let Some(line) = self.read_line() else {
                return false;
            };
            match line.to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {}
            }
        }
    }
}

/// Asks for the seat count until a value in the supported range arrives.
/// EOF falls back to the minimum.
pub fn read_player_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> usize {
    use clue_core::game::setup::{MAX_PLAYERS, MIN_PLAYERS};
    loop {
        let _ = write!(output, "Enter the number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): ");
        let _ = output.flush();
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return MIN_PLAYERS,
            Ok(_) => {}
        }
        match line.trim().parse::<usize>() {
            Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => return count,
            _ => {
                let _ = writeln!(output, "Please enter a number between {MIN_PLAYERS} and {MAX_PLAYERS}.");
            }
        }
    }
}

/// Prints the narration the game emits: turns, suggestions, refutations,
/// clue sheets, tallies and the ending.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        Self
    }
}

impl GameObserver for ConsoleObserver {
    fn turn_started(&mut self, name: &str) {
        println!();
        println!("{}", "-".repeat(30));
        println!("{name}'s turn!");
    }

    fn hand_shown(&mut self, _name: &str, hand: &Hand, catalog: &CardCatalog) {
        let cards: Vec<&str> = hand.iter().map(|card| catalog.name(*card)).collect();
        println!("Your cards: {}", cards.join(", "));
    }

    fn suggestion_made(&mut self, name: &str, suggestion: &Triple, catalog: &CardCatalog) {
        println!("{name} suggests: {}", catalog.describe(suggestion));
    }

    fn suggestion_refuted(
        &mut self,
        proposer: &str,
        refuter: &str,
        revealed: Option<Card>,
        catalog: &CardCatalog,
    ) {
        match revealed {
            Some(card) => println!(
                "{refuter} refuted your suggestion by showing: {}",
                catalog.name(card)
            ),
            None => println!("{refuter} refuted {proposer}'s suggestion."),
        }
    }

    fn suggestion_unrefuted(&mut self, proposer: &str) {
        println!("No one could refute {proposer}'s suggestion.");
    }

    fn clue_sheet_shown(&mut self, name: &str, sheet: &ClueSheet, catalog: &CardCatalog) {
        println!();
        println!("--- {name}'s Clue Sheet ---");
        let width = catalog
            .all_cards()
            .map(|card| catalog.name(card).len())
            .max()
            .unwrap_or(4)
            .max("Card".len());
        println!("{:<width$} | Status", "Card");
        println!("{}-+-{}", "-".repeat(width), "-".repeat(17));
        for (card, fact) in sheet.entries() {
            println!("{:<width$} | {fact}", catalog.name(card));
        }
    }

    fn accusation_made(&mut self, name: &str, accusation: &Triple, catalog: &CardCatalog) {
        println!("{name} accuses: {}", catalog.describe(accusation));
    }

    fn player_won(&mut self, name: &str, solution: &Triple, catalog: &CardCatalog) {
        println!(
            "{}",
            format!("{name} wins! The solution was: {}", catalog.describe(solution))
                .green()
                .bold()
        );
    }

    fn player_eliminated(&mut self, name: &str) {
        println!("{}", format!("{name}'s accusation was incorrect!").red());
        println!(
            "{name} is eliminated. They can no longer suggest or accuse but can still refute suggestions."
        );
    }

    fn tally_reported(&mut self, tally: &SuggestionTally, catalog: &CardCatalog) {
        println!();
        println!("--- Global Suggestion Counts ---");
        for category in Category::ALL {
            println!("{}s:", capitalize(category.as_str()));
            for (card, count) in tally.counts(category) {
                if count > 0 {
                    println!("  {}: {count} times", catalog.name(card));
                }
            }
        }
    }

    fn game_drawn(&mut self, solution: &Triple, catalog: &CardCatalog) {
        println!("{}", "No one wins the game!".red());
        println!("The solution was: {}", catalog.describe(solution));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Cosmetic pause between turns.
#[derive(Debug)]
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl TurnPacer for SleepPacer {
    fn pause(&mut self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

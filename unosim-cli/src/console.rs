use std::io::{self, BufRead, Write};

use strum::IntoEnumIterator;
use unosim::{
    CardColor, CardRequest, InputError, InputProvider, MatchSummary, PlayerTurn, Reporter,
    RoundStart, RoundSummary, TurnResult,
};

/// Reads answers for the human seat from standard input.
pub struct ConsoleInput;

impl ConsoleInput {
    fn read_line(&self) -> String {
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => {
                println!("\nInput closed, leaving the game.");
                std::process::exit(0);
            }
            Ok(_) => input,
            Err(err) => {
                eprintln!("failed to read input: {err}");
                String::new()
            }
        }
    }
}

impl InputProvider for ConsoleInput {
    fn request_card(&mut self, request: &CardRequest<'_>) -> String {
        println!("\nThe current top card is: {}", request.current.card);
        if request.current.card.is_wild() {
            println!("The color in play is {}.", request.current.declared_color);
        }
        println!("Your hand:");
        let listing = request
            .hand
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{}) {card}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{listing}");
        print!("Enter the number of the card to play or 'draw' to draw a card: ");
        self.read_line()
    }

    fn request_color(&mut self) -> String {
        let colors = CardColor::iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        print!("Choose a new color ({colors}): ");
        self.read_line()
    }

    fn rejected(&mut self, error: &InputError) {
        println!("Invalid input: {error}.");
    }
}

/// Prints the game as it happens.
pub struct ConsoleReporter {
    /// Show every hand at the start of a round.
    pub show_hands: bool,
}

impl Reporter for ConsoleReporter {
    fn round_started(&mut self, start: &RoundStart) {
        println!("\nStarting round {}...", start.round);
        if self.show_hands {
            for (position, hand) in &start.hands {
                let cards = hand
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Player {position}'s hand: {cards}");
            }
        }
        println!("First card is a {}.", start.first_card);
    }

    fn turn_played(&mut self, position: usize, turn: &PlayerTurn, cards_left: usize) {
        match turn.result {
            TurnResult::Attacked => match turn.card.value() {
                unosim::CardValue::DrawTwo => println!("Player {position} must draw two cards!"),
                unosim::CardValue::DrawFour => {
                    println!("Player {position} must draw four cards!")
                }
                _ => println!("Player {position} was skipped!"),
            },
            TurnResult::ForceDraw => println!("Player {position} is forced to draw."),
            TurnResult::GameStart => {}
            result => {
                if result == TurnResult::ForceDrawPlay {
                    println!("Player {position} is forced to draw AND can play the drawn card!");
                }
                println!("Player {position} plays a {}.", turn.card);
                if turn.card.is_wild() {
                    println!(
                        "Player {position} declares {} as the new color.",
                        turn.declared_color
                    );
                }
                if result == TurnResult::Reversed {
                    println!("Turn order reversed!");
                }
            }
        }

        if cards_left == 1 {
            println!("Player {position} shouts Uno!");
        }
    }

    fn reshuffled(&mut self, _draw_pile_len: usize) {
        println!("Shuffling cards!");
    }

    fn round_over(&mut self, summary: &RoundSummary) {
        println!("\nTHE ROUND IS OVER!!");
        println!(
            "Player {} won {} points this round!!",
            summary.winner, summary.points_earned
        );
        println!("\n----- TOTAL SCORE -----");
        for standing in &summary.standings {
            println!("{}: {} points", standing.position, standing.points);
        }
    }

    fn match_over(&mut self, summary: &MatchSummary) {
        println!("\nGAME OVER!!");
        println!(
            "Player {} wins the game after {} rounds!",
            summary.winner, summary.rounds
        );
    }
}

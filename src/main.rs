//! Text-mode blackjack: plays exactly one round against the dealer.

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Action, Outcome, Round, RoundState};

fn main() -> ExitCode {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(seed);

    match play(&mut round) {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("round aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

fn play(round: &mut Round) -> Result<Outcome, Box<dyn Error>> {
    println!("Let's play blackjack!");

    round.deal()?;
    print_table(round);

    while round.state() == RoundState::PlayerTurn {
        match prompt_action()? {
            Action::Hit => {
                round.hit()?;
                print_table(round);
            }
            Action::Stand => round.stand()?,
        }
    }

    if round.state() == RoundState::DealerTurn {
        println!("Dealer's turn.");
        print_table(round);

        let drawn = round.dealer_play()?;
        for card in &drawn {
            println!("Dealer draws {card}.");
        }
        if !drawn.is_empty() {
            print_table(round);
        }
    }

    Ok(round.settle()?)
}

/// Prompts until the input parses as an action.
///
/// Unrecognized input re-prompts; a closed stdin aborts the round.
fn prompt_action() -> io::Result<Action> {
    loop {
        print!("Your turn. (H)it or (S)tand? ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        match input.trim().parse::<Action>() {
            Ok(action) => return Ok(action),
            Err(_) => println!("Unknown action."),
        }
    }
}

fn print_table(round: &Round) {
    println!("\nYour hand:");
    for card in round.player_hand().cards() {
        println!("  {card}");
    }
    println!("Total value: {}", round.player_hand().value());

    println!("\nDealer's hand:");
    if round.dealer_revealed() {
        for card in round.dealer_hand().cards() {
            println!("  {card}");
        }
        println!("Total value: {}\n", round.dealer_hand().value());
    } else {
        if let Some(card) = round.dealer_upcard() {
            println!("  {card}");
        }
        println!("  <hidden>\n");
    }
}

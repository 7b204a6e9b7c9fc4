use std::io::Cursor;

use tictactoe::console::Console;
use tictactoe::{Match, MatchConfig, RoundState};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
}

/// Answers every square prompt with the lowest open square.
fn lowest_square_answers(rounds: usize) -> String {
    let mut input = String::from("\n");
    for round in 0..rounds {
        if round > 0 {
            input.push_str("y\n");
        }
        // more answers than a round can use; leftovers are rejected and re-asked
        for _ in 0..5 {
            input.push_str("1\n2\n3\n4\n5\n6\n7\n8\n9\n");
        }
    }
    input
}

#[test]
fn human_against_seeded_computer() {
    let config = MatchConfig {
        seed: Some(2024),
        clear_screen: false,
        ..MatchConfig::default()
    };
    let mut game = Match::new(&config);
    let mut ui = console("\n1\n2\n3\n4\n5\n6\n7\n8\n9\nn\n");

    game.run(&mut ui).unwrap();

    assert!(game.history().len() == 1);
    let total: u32 = game.players().iter().map(|p| p.score()).sum();
    match game.history()[0] {
        RoundState::Tied => assert!(total == 0),
        RoundState::Won(_) => assert!(total == 1),
        RoundState::InProgress => panic!("unfinished round in history"),
    }

    let output = String::from_utf8(ui.into_output()).unwrap();
    assert!(output.contains("Welcome to Tic Tac Toe!"));
    assert!(output.contains("Choose a square (1, 2, 3, 4, 5, 6, 7, 8, or 9): "));
    assert!(output.contains("Thanks for playing Tic Tac Toe! Goodbye!"));
}

#[test]
fn computer_opens_when_human_plays_o() {
    let config = MatchConfig {
        human_mark: tictactoe::Mark::O,
        seed: Some(5),
        clear_screen: false,
        ..MatchConfig::default()
    };
    let mut game = Match::new(&config);
    let mut ui = console("\n1\n2\n3\n4\n5\n6\n7\n8\n9\nn\n");

    game.run(&mut ui).unwrap();

    let output = String::from_utf8(ui.into_output()).unwrap();
    // the computer already took a square before the first prompt
    assert!(!output.contains("Choose a square (1, 2, 3, 4, 5, 6, 7, 8, or 9): "));
}

#[test]
fn threshold_ends_the_match() {
    let config = MatchConfig {
        seed: Some(11),
        first_to: Some(1),
        clear_screen: false,
        ..MatchConfig::default()
    };
    let mut game = Match::new(&config);
    let mut ui = console(&lowest_square_answers(20));

    game.run(&mut ui).unwrap();

    let champion = game.champion().expect("someone reached one win");
    assert!(champion.score() == 1);
    let ties = game.history().iter().filter(|s| **s == RoundState::Tied).count();
    assert!(ties == game.history().len() - 1);
}

#[test]
fn closed_input_is_fatal() {
    let mut game = Match::new(&MatchConfig {
        seed: Some(1),
        clear_screen: false,
        ..MatchConfig::default()
    });
    let mut ui = console("\n");
    assert!(matches!(game.run(&mut ui), Err(tictactoe::Error::InputClosed)));
}

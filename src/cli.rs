/// Command-line interface for the tictactoe binary.
use clap::{Parser, ValueEnum};

use tictactoe::{Mark, MatchConfig};

/// Play tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mark to play as; X always moves first
    #[arg(long, value_enum, default_value_t = Side::X)]
    pub play_as: Side,

    /// Seed the computer's moves for a reproducible match
    #[arg(long)]
    pub seed: Option<u64>,

    /// End the match when a player has won this many rounds
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub first_to: Option<u32>,

    /// Don't clear the terminal between turns
    #[arg(long)]
    pub no_clear: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Mark {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

impl Cli {
    pub fn config(&self) -> MatchConfig {
        MatchConfig {
            human_mark: self.play_as.into(),
            seed: self.seed,
            first_to: self.first_to,
            clear_screen: !self.no_clear,
        }
    }
}

#[test]
fn test_defaults() {
    let cli = Cli::parse_from(["tictactoe"]);
    assert!(cli.config() == MatchConfig::default());
}

#[test]
fn test_flags() {
    let cli = Cli::parse_from([
        "tictactoe",
        "--play-as",
        "o",
        "--seed",
        "9",
        "--first-to",
        "3",
        "--no-clear",
    ]);
    let config = cli.config();
    assert!(config.human_mark == Mark::O);
    assert!(config.seed == Some(9));
    assert!(config.first_to == Some(3));
    assert!(!config.clear_screen);
}

#[test]
fn test_first_to_must_be_positive() {
    assert!(Cli::try_parse_from(["tictactoe", "--first-to", "0"]).is_err());
}

//! Console tic-tac-toe: a human against a random computer opponent, scored across rounds.
pub mod agents;
pub mod board_game;
pub mod config;
pub mod console;
pub mod error;
pub mod game_match;
pub mod player;
pub mod round;
pub mod tic_tac_toe;

pub use board_game::{Cell, Mark, RoundState};
pub use config::MatchConfig;
pub use error::{Error, Result};
pub use game_match::Match;
pub use player::Player;
pub use round::Round;
pub use tic_tac_toe::{Board, WINNING_LINES};

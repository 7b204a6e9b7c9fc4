/// Shared tic-tac-toe vocabulary: marks, cells and round states.
use std::fmt;

use Mark::{O, X};

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 9;

/// Squares are numbered 1 to 9 in row-major order.
pub const POSITIONS: [usize; NUM_SQUARES] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// The mark that always makes the first move of a round.
pub const FIRST_MOVER: Mark = X;

/// Symbol a player claims squares with. X goes first.
#[derive(Eq, Hash, Clone, Copy, Debug, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            X => O,
            O => X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            X => write!(f, "X"),
            O => write!(f, "O"),
        }
    }
}

/// Represents a single square of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Full(Mark),
}

/// Where a round stands after the latest move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won(Mark),
    Tied,
}

impl RoundState {
    pub fn is_over(self) -> bool {
        self != RoundState::InProgress
    }
}

#[test]
fn test_opponent() {
    assert!(X.opponent() == O);
    assert!(O.opponent() == X);
    assert!(X.opponent().opponent() == X);
}

#[test]
fn test_round_state_is_over() {
    assert!(!RoundState::InProgress.is_over());
    assert!(RoundState::Won(O).is_over());
    assert!(RoundState::Tied.is_over());
}

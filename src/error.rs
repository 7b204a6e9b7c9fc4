/// Errors surfaced by the game engine and the console front end.
use std::io;

use crate::board_game::Mark;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("square {0} is out of range")]
    OutOfRange(usize),
    #[error("square {0} is taken")]
    SquareTaken(usize),
    #[error("no moves left on the board")]
    NoMovesLeft,
    #[error("no player holds mark {0}")]
    UnseatedMark(Mark),
    #[error("the round is already over")]
    RoundOver,
    #[error("input closed before an answer was given")]
    InputClosed,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

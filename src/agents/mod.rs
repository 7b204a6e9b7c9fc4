/// Agents for TicTacToe.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::board_game::Mark;
use crate::console::InputProvider;
use crate::error::{Error, Result};
use crate::tic_tac_toe::Board;

/// An agent that will choose an open position given the state of the board. Self is mutable
/// because agents may carry state between moves, like a random number generator.
pub trait TicTacToeAgent {
    fn choose_move(&mut self, board: &Board, input: &mut dyn InputProvider) -> Result<usize>;

    /// Does a person have to see the board before this agent moves?
    fn is_interactive(&self) -> bool {
        false
    }
}

/*
 * -----------
 * Human Agent
 * -----------
 */

/// An agent controlled by the user running the program.
pub struct HumanAgent {
    pub mark: Mark,
}

impl HumanAgent {
    pub fn new(mark: Mark) -> HumanAgent {
        HumanAgent { mark }
    }
}

impl TicTacToeAgent for HumanAgent {
    fn choose_move(&mut self, board: &Board, input: &mut dyn InputProvider) -> Result<usize> {
        let valid_moves = board.unmarked_keys();
        if valid_moves.is_empty() {
            return Err(Error::NoMovesLeft);
        }
        let position = input.prompt_square_choice(&valid_moves)?;
        debug!(mark = %self.mark, position, "human chose square");
        Ok(position)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/*
 * ------------
 * Random Agent
 * ------------
 */

/// Agent that picks uniformly among the open squares.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    pub mark: Mark,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(mark: Mark) -> RandomAgent {
        RandomAgent {
            mark,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same moves for the same seed and board sequence.
    pub fn with_seed(mark: Mark, seed: u64) -> RandomAgent {
        RandomAgent {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn get_random_move_choice(&mut self, board: &Board) -> Result<usize> {
        board
            .unmarked_keys()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoMovesLeft)
    }
}

impl TicTacToeAgent for RandomAgent {
    fn choose_move(&mut self, board: &Board, _input: &mut dyn InputProvider) -> Result<usize> {
        let position = self.get_random_move_choice(board)?;
        debug!(mark = %self.mark, position, "computer chose square");
        Ok(position)
    }
}

#[cfg(test)]
struct NoInput;

#[cfg(test)]
impl InputProvider for NoInput {
    fn prompt_square_choice(&mut self, _valid_choices: &[usize]) -> Result<usize> {
        Err(Error::InputClosed)
    }
    fn prompt_play_again(&mut self) -> Result<bool> {
        Err(Error::InputClosed)
    }
    fn prompt_continue(&mut self) -> Result<()> {
        Err(Error::InputClosed)
    }
}

#[test]
fn test_random_agent_picks_open_squares() {
    let mut board = Board::new();
    let mut agent = RandomAgent::with_seed(Mark::O, 7);
    for mark in [Mark::X, Mark::O].iter().cycle().take(9) {
        let position = agent.choose_move(&board, &mut NoInput).unwrap();
        assert!(board.unmarked_keys().contains(&position));
        board.place(position, *mark).unwrap();
    }
    assert!(matches!(
        agent.choose_move(&board, &mut NoInput),
        Err(Error::NoMovesLeft)
    ));
}

#[test]
fn test_random_agent_seed_is_reproducible() {
    let board = Board::new();
    let mut first = RandomAgent::with_seed(Mark::O, 42);
    let mut second = RandomAgent::with_seed(Mark::O, 42);
    for _ in 0..20 {
        let expected = first.get_random_move_choice(&board).unwrap();
        assert!(second.get_random_move_choice(&board).unwrap() == expected);
    }
}

#[test]
fn test_random_agent_reaches_every_square() {
    let board = Board::new();
    let mut agent = RandomAgent::with_seed(Mark::O, 1);
    let mut seen = [false; 9];
    for _ in 0..500 {
        seen[agent.get_random_move_choice(&board).unwrap() - 1] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn test_human_agent_uses_input() {
    use std::io::Cursor;

    use crate::console::Console;

    let mut board = Board::new();
    board.place(1, Mark::X).unwrap();
    let mut console = Console::new(Cursor::new(b"1\n2\n".to_vec()), Vec::<u8>::new(), false);
    let mut agent = HumanAgent::new(Mark::O);
    assert!(agent.is_interactive());
    // square 1 is taken so the console asks again
    assert!(agent.choose_move(&board, &mut console).unwrap() == 2);
}

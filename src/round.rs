/// One game from an empty board to a win or a tie.
use tracing::{debug, info};

use crate::agents::TicTacToeAgent;
use crate::board_game::{Mark, RoundState, FIRST_MOVER};
use crate::console::{InputProvider, Renderer};
use crate::error::{Error, Result};
use crate::player::Player;
use crate::tic_tac_toe::Board;

use RoundState::{InProgress, Tied, Won};

/// A round borrows the match's board and players so scores carry over between rounds.
pub struct Round<'a> {
    board: &'a mut Board,
    players: &'a mut [Player; 2],
    // whose mark goes down next
    turn: Mark,
    state: RoundState,
    // the first draw of a round keeps whatever the match printed above it
    drawn: bool,
}

impl<'a> Round<'a> {
    /// Start on a cleared board with the first mover to play.
    pub fn new(board: &'a mut Board, players: &'a mut [Player; 2]) -> Round<'a> {
        board.reset();
        Round {
            board,
            players,
            turn: FIRST_MOVER,
            state: InProgress,
            drawn: false,
        }
    }

    pub fn board(&self) -> &Board {
        &*self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &*self.players
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Put the current mark on position, pass the turn and settle the round if it just ended.
    /// The winner's score goes up by one, a tie changes nothing.
    pub fn take_turn(&mut self, position: usize) -> Result<RoundState> {
        if self.state.is_over() {
            return Err(Error::RoundOver);
        }
        self.board.place(position, self.turn)?;
        debug!(mark = %self.turn, position, "turn taken");
        self.turn = self.turn.opponent();

        self.state = match self.board.winning_mark() {
            Some(mark) => Won(mark),
            None if self.board.full() => Tied,
            None => InProgress,
        };

        if let Won(mark) = self.state {
            if let Some(winner) = self.players.iter_mut().find(|p| p.mark() == mark) {
                winner.record_win();
            }
        }
        if self.state.is_over() {
            info!(state = ?self.state, "round over");
        }
        Ok(self.state)
    }

    /// Alternate agents until the board is won or full. `agents[i]` moves for `players[i]`.
    pub fn play<U>(
        &mut self,
        agents: &mut [Box<dyn TicTacToeAgent>; 2],
        ui: &mut U,
    ) -> Result<RoundState>
    where
        U: Renderer + InputProvider,
    {
        while !self.state.is_over() {
            let seat = self.seat_of(self.turn)?;
            let agent = &mut agents[seat];
            if agent.is_interactive() {
                self.show(ui)?;
            }
            let position = agent.choose_move(&*self.board, &mut *ui)?;
            self.take_turn(position)?;
        }

        self.show(ui)?;
        ui.display_outcome(self.state, &self.players[..])?;
        Ok(self.state)
    }

    fn seat_of(&self, mark: Mark) -> Result<usize> {
        self.players
            .iter()
            .position(|player| player.mark() == mark)
            .ok_or(Error::UnseatedMark(mark))
    }

    fn show(&mut self, ui: &mut impl Renderer) -> Result<()> {
        if self.drawn {
            ui.clear_screen()?;
        }
        self.drawn = true;
        ui.display_score(&self.players[0], &self.players[1])?;
        ui.draw(&*self.board)
    }
}

#[cfg(test)]
use crate::board_game::Mark::{O, X};

/// Plays a fixed list of positions, in order.
#[cfg(test)]
pub(crate) struct ScriptedAgent {
    pub moves: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedAgent {
    pub fn boxed(moves: &[usize]) -> Box<dyn TicTacToeAgent> {
        Box::new(ScriptedAgent {
            moves: moves.iter().copied().collect(),
        })
    }
}

#[cfg(test)]
impl TicTacToeAgent for ScriptedAgent {
    fn choose_move(&mut self, _board: &Board, _input: &mut dyn InputProvider) -> Result<usize> {
        self.moves.pop_front().ok_or(Error::NoMovesLeft)
    }
}

#[cfg(test)]
fn test_players() -> [Player; 2] {
    [Player::new("You", X), Player::new("Computer", O)]
}

#[test]
fn test_take_turn_alternates() {
    let mut board = Board::new();
    let mut players = test_players();
    let mut round = Round::new(&mut board, &mut players);
    assert!(round.turn() == X);
    assert!(round.state() == InProgress);

    assert!(round.take_turn(5).unwrap() == InProgress);
    assert!(round.turn() == O);
    assert!(round.take_turn(1).unwrap() == InProgress);
    assert!(round.turn() == X);
    assert!(round.board().unmarked_keys().len() == 7);

    // a rejected move keeps the turn
    assert!(matches!(round.take_turn(5), Err(Error::SquareTaken(5))));
    assert!(round.turn() == X);
}

#[test]
fn test_win_awards_one_point() {
    let mut board = Board::new();
    let mut players = test_players();
    {
        let mut round = Round::new(&mut board, &mut players);
        // X: 1 2 3, O: 4 5
        for position in [1, 4, 2, 5] {
            assert!(round.take_turn(position).unwrap() == InProgress);
        }
        assert!(round.take_turn(3).unwrap() == Won(X));
        assert!(matches!(round.take_turn(9), Err(Error::RoundOver)));
    }
    assert!(players[0].score() == 1);
    assert!(players[1].score() == 0);
}

#[test]
fn test_tie_awards_nothing() {
    let mut board = Board::new();
    let mut players = test_players();
    {
        let mut round = Round::new(&mut board, &mut players);
        let moves = [1, 2, 3, 5, 4, 6, 8, 7];
        for position in moves {
            assert!(round.take_turn(position).unwrap() == InProgress);
        }
        assert!(round.take_turn(9).unwrap() == Tied);
    }
    assert!(players.iter().all(|p| p.score() == 0));
}

#[test]
fn test_new_round_clears_board() {
    let mut board = Board::new();
    board.place(5, O).unwrap();
    let mut players = test_players();
    let round = Round::new(&mut board, &mut players);
    assert!(round.board().unmarked_keys().len() == 9);
}

#[test]
fn test_play_needs_a_player_for_each_mark() {
    use std::io::Cursor;

    use crate::console::Console;

    let mut board = Board::new();
    let mut players = [Player::new("You", X), Player::new("Computer", X)];
    let mut agents = [ScriptedAgent::boxed(&[1, 2]), ScriptedAgent::boxed(&[4, 5])];
    let mut console = Console::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new(), false);

    let result = Round::new(&mut board, &mut players).play(&mut agents, &mut console);
    assert!(matches!(result, Err(Error::UnseatedMark(O))));
    // only the first X move went down, nobody played O's turn
    assert!(board.unmarked_keys().len() == 8);
    assert!(board.cell(4).unwrap() == crate::board_game::Cell::Empty);
}

#[test]
fn test_play_with_computer_opening() {
    use std::io::Cursor;

    use crate::console::Console;

    let mut board = Board::new();
    // the computer holds X and so opens
    let mut players = [Player::new("You", O), Player::new("Computer", X)];
    let mut agents = [ScriptedAgent::boxed(&[4, 5]), ScriptedAgent::boxed(&[1, 2, 3])];
    let mut console = Console::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new(), false);

    let state = Round::new(&mut board, &mut players)
        .play(&mut agents, &mut console)
        .unwrap();
    assert!(state == Won(X));
    assert!(players[1].score() == 1);
    assert!(players[0].score() == 0);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Computer won!"));
    assert!(output.contains("You (O): 0  Computer (X): 1"));
}

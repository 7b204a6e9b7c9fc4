/// A series of rounds between the human and the computer with a running score.
use tracing::info;

use crate::agents::{HumanAgent, RandomAgent, TicTacToeAgent};
use crate::board_game::RoundState;
use crate::config::MatchConfig;
use crate::console::{InputProvider, Renderer};
use crate::error::{Error, Result};
use crate::player::Player;
use crate::round::Round;
use crate::tic_tac_toe::Board;

pub const HUMAN_NAME: &str = "You";
pub const COMPUTER_NAME: &str = "Computer";

/// Owns the players for its whole lifetime; every round borrows them.
pub struct Match {
    board: Board,
    players: [Player; 2],
    // agents[i] chooses the moves of players[i]
    agents: [Box<dyn TicTacToeAgent>; 2],
    history: Vec<RoundState>,
    first_to: Option<u32>,
}

impl Match {
    /// Human in the first seat, random computer in the second.
    pub fn new(config: &MatchConfig) -> Match {
        let human_mark = config.human_mark;
        let computer_mark = human_mark.opponent();
        let computer = match config.seed {
            Some(seed) => RandomAgent::with_seed(computer_mark, seed),
            None => RandomAgent::new(computer_mark),
        };
        Match::seated(
            [
                Player::new(HUMAN_NAME, human_mark),
                Player::new(COMPUTER_NAME, computer_mark),
            ],
            [Box::new(HumanAgent::new(human_mark)), Box::new(computer)],
            config.first_to,
        )
    }

    /// Seat arbitrary agents. The players must hold different marks.
    pub fn with_agents(
        players: [Player; 2],
        agents: [Box<dyn TicTacToeAgent>; 2],
        first_to: Option<u32>,
    ) -> Result<Match> {
        let shared = players[0].mark();
        if players[1].mark() == shared {
            return Err(Error::UnseatedMark(shared.opponent()));
        }
        Ok(Match::seated(players, agents, first_to))
    }

    fn seated(
        players: [Player; 2],
        agents: [Box<dyn TicTacToeAgent>; 2],
        first_to: Option<u32>,
    ) -> Match {
        Match {
            board: Board::new(),
            players,
            agents,
            history: vec![],
            first_to,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Finished rounds, oldest first.
    pub fn history(&self) -> &[RoundState] {
        &self.history
    }

    /// The player who reached the win threshold, if one is set and reached.
    pub fn champion(&self) -> Option<&Player> {
        let target = self.first_to?;
        self.players.iter().find(|player| player.score() >= target)
    }

    /// Play one round on a cleared board and record how it ended.
    pub fn play_round<U>(&mut self, ui: &mut U) -> Result<RoundState>
    where
        U: Renderer + InputProvider,
    {
        info!(round = self.history.len() + 1, "round starting");
        let state = Round::new(&mut self.board, &mut self.players).play(&mut self.agents, ui)?;
        self.history.push(state);
        Ok(state)
    }

    /// Keep playing rounds until the user declines to continue or someone reaches the threshold.
    pub fn run<U>(&mut self, ui: &mut U) -> Result<()>
    where
        U: Renderer + InputProvider,
    {
        ui.clear_screen()?;
        ui.display_welcome()?;
        ui.prompt_continue()?;

        loop {
            self.play_round(ui)?;

            if let Some(champion) = self.champion() {
                ui.display_champion(champion)?;
                break;
            }
            if !ui.prompt_play_again()? {
                break;
            }
            ui.clear_screen()?;
            ui.display_play_again()?;
        }

        info!(
            rounds = self.history.len(),
            human = self.players[0].score(),
            computer = self.players[1].score(),
            "match over"
        );
        ui.display_goodbye()
    }
}

#[cfg(test)]
use crate::board_game::Mark::{O, X};
#[cfg(test)]
use crate::console::Console;
#[cfg(test)]
use crate::round::ScriptedAgent;
#[cfg(test)]
use std::io::Cursor;

#[cfg(test)]
fn scripted_match(x_moves: &[usize], o_moves: &[usize], first_to: Option<u32>) -> Match {
    Match::with_agents(
        [Player::new(HUMAN_NAME, X), Player::new(COMPUTER_NAME, O)],
        [ScriptedAgent::boxed(x_moves), ScriptedAgent::boxed(o_moves)],
        first_to,
    )
    .unwrap()
}

#[cfg(test)]
fn test_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
}

#[test]
fn test_scores_accumulate_across_rounds() {
    // round 1: X takes the top row, round 2: tie, round 3: O takes the middle column
    let x_moves = [1, 2, 3, 1, 3, 4, 8, 9, 1, 4, 3];
    let o_moves = [4, 5, 2, 5, 6, 7, 2, 5, 8];
    let mut game = scripted_match(&x_moves, &o_moves, None);
    let mut console = test_console("");

    assert!(game.play_round(&mut console).unwrap() == RoundState::Won(X));
    assert!(game.play_round(&mut console).unwrap() == RoundState::Tied);
    assert!(game.play_round(&mut console).unwrap() == RoundState::Won(O));

    assert!(game.players()[0].score() == 1);
    assert!(game.players()[1].score() == 1);
    let expected = vec![RoundState::Won(X), RoundState::Tied, RoundState::Won(O)];
    assert!(game.history().to_vec() == expected);
    assert!(game.champion().is_none());
}

#[test]
fn test_run_stops_when_user_declines() {
    let x_moves = [1, 2, 3, 1, 2, 3];
    let o_moves = [4, 5, 4, 5];
    let mut game = scripted_match(&x_moves, &o_moves, None);
    let mut console = test_console("\nx\ny\nN\n");

    game.run(&mut console).unwrap();
    assert!(game.history().len() == 2);
    assert!(game.players()[0].score() == 2);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.starts_with("Welcome to Tic Tac Toe!"));
    assert!(output.contains("Let's play again!"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_run_stops_at_threshold() {
    let x_moves = [1, 2, 3, 1, 2, 3];
    let o_moves = [4, 5, 4, 5];
    let mut game = scripted_match(&x_moves, &o_moves, Some(2));
    // one answer to keep going, no second play-again prompt is reached
    let mut console = test_console("\ny\n");

    game.run(&mut console).unwrap();
    assert!(game.history().len() == 2);
    assert!(game.champion().map(|p| p.name()) == Some(HUMAN_NAME));

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("You won the match with 2 rounds!"));
    assert!(output.matches("Would you like to play again?").count() == 1);
}

#[test]
fn test_threshold_is_ignored_when_unset() {
    let x_moves = [1, 2, 3, 1, 2, 3, 1, 2, 3];
    let o_moves = [4, 5, 4, 5, 4, 5];
    let mut game = scripted_match(&x_moves, &o_moves, None);
    let mut console = test_console("\ny\ny\nn\n");

    game.run(&mut console).unwrap();
    assert!(game.players()[0].score() == 3);
    assert!(game.history().len() == 3);
}

#[test]
fn test_new_seats_human_first() {
    let config = MatchConfig {
        human_mark: O,
        seed: Some(3),
        ..MatchConfig::default()
    };
    let game = Match::new(&config);
    assert!(game.players()[0].name() == HUMAN_NAME);
    assert!(game.players()[0].mark() == O);
    assert!(game.players()[1].mark() == X);
    assert!(game.agents[0].is_interactive());
    assert!(!game.agents[1].is_interactive());
}

#[test]
fn test_with_agents_rejects_shared_mark() {
    let result = Match::with_agents(
        [Player::new(HUMAN_NAME, O), Player::new(COMPUTER_NAME, O)],
        [ScriptedAgent::boxed(&[1]), ScriptedAgent::boxed(&[2])],
        None,
    );
    assert!(matches!(result, Err(Error::UnseatedMark(X))));
}

#[test]
fn test_play_again_message_stays_above_the_board() {
    use crate::agents::HumanAgent;
    use crate::console::CLEAR_SCREEN;

    let mut game = Match::with_agents(
        [Player::new(HUMAN_NAME, X), Player::new(COMPUTER_NAME, O)],
        [Box::new(HumanAgent::new(X)), ScriptedAgent::boxed(&[4, 5, 4, 5])],
        None,
    )
    .unwrap();
    let mut console = Console::new(
        Cursor::new(b"\n1\n2\n3\ny\n1\n2\n3\nn\n".to_vec()),
        Vec::<u8>::new(),
        true,
    );

    game.run(&mut console).unwrap();
    assert!(game.players()[0].score() == 2);

    let output = String::from_utf8(console.into_output()).unwrap();
    let screen = output
        .split(CLEAR_SCREEN)
        .find(|screen| screen.contains("Let's play again!"))
        .unwrap();
    // the second round's first board and prompt share the screen with the message
    assert!(screen.contains("Choose a square (1, 2, 3, 4, 5, 6, 7, 8, or 9): "));
}

/// Text front end: what the player sees and how their answers are read.
use std::io::{BufRead, Write};

use crate::board_game::RoundState;
use crate::error::{Error, Result};
use crate::player::Player;
use crate::tic_tac_toe::Board;

pub(crate) const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Everything the game shows to the user.
pub trait Renderer {
    fn clear_screen(&mut self) -> Result<()>;
    fn draw(&mut self, board: &Board) -> Result<()>;
    fn display_score(&mut self, first: &Player, second: &Player) -> Result<()>;
    fn display_outcome(&mut self, state: RoundState, players: &[Player]) -> Result<()>;
    fn display_champion(&mut self, champion: &Player) -> Result<()>;
    fn display_welcome(&mut self) -> Result<()>;
    fn display_play_again(&mut self) -> Result<()>;
    fn display_goodbye(&mut self) -> Result<()>;
}

/// Everything the game asks of the user. Invalid answers are asked again, only a closed input is
/// an error.
pub trait InputProvider {
    /// Block until the user picks one of `valid_choices`. Err(NoMovesLeft) if there are none.
    fn prompt_square_choice(&mut self, valid_choices: &[usize]) -> Result<usize>;
    /// Block until the user answers y or n (either case).
    fn prompt_play_again(&mut self) -> Result<bool>;
    /// Block until the user presses enter.
    fn prompt_continue(&mut self) -> Result<()>;
}

/// Format a list of choices for a prompt: "1", "1 or 2", "1, 2, or 3".
pub fn joinor(items: &[usize], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first, word, second),
        [init @ .., last] => {
            let mut joined: Vec<String> = init.iter().map(|item| item.to_string()).collect();
            joined.push(format!("{} {}", word, last));
            joined.join(delimiter)
        }
    }
}

/// Line-based console over any reader and writer, stdin/stdout in the binary.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear: bool) -> Console<R, W> {
        Console {
            input,
            output,
            clear,
        }
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one trimmed line. Err(InputClosed) at end of input.
    fn read_answer(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        // bytes that are not UTF-8 become U+FFFD and fail validation like any other bad answer
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}

impl<R: BufRead, W: Write> Renderer for Console<R, W> {
    fn clear_screen(&mut self) -> Result<()> {
        if self.clear {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn draw(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", board)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn display_score(&mut self, first: &Player, second: &Player) -> Result<()> {
        writeln!(
            self.output,
            "{} ({}): {}  {} ({}): {}",
            first.name(),
            first.mark(),
            first.score(),
            second.name(),
            second.mark(),
            second.score()
        )?;
        Ok(())
    }

    fn display_outcome(&mut self, state: RoundState, players: &[Player]) -> Result<()> {
        match state {
            RoundState::Won(mark) => {
                let name = players
                    .iter()
                    .find(|player| player.mark() == mark)
                    .map(|player| player.name().to_string())
                    .unwrap_or_else(|| mark.to_string());
                writeln!(self.output, "{} won!", name)?;
            }
            RoundState::Tied => writeln!(self.output, "It's a tie!")?,
            RoundState::InProgress => {}
        }
        Ok(())
    }

    fn display_champion(&mut self, champion: &Player) -> Result<()> {
        writeln!(
            self.output,
            "{} won the match with {} rounds!",
            champion.name(),
            champion.score()
        )?;
        Ok(())
    }

    fn display_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Tic Tac Toe!")?;
        Ok(())
    }

    fn display_play_again(&mut self) -> Result<()> {
        writeln!(self.output, "Let's play again!")?;
        Ok(())
    }

    fn display_goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "Thanks for playing Tic Tac Toe! Goodbye!")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> InputProvider for Console<R, W> {
    fn prompt_square_choice(&mut self, valid_choices: &[usize]) -> Result<usize> {
        if valid_choices.is_empty() {
            return Err(Error::NoMovesLeft);
        }
        loop {
            write!(
                self.output,
                "Choose a square ({}): ",
                joinor(valid_choices, ", ", "or")
            )?;
            let answer = self.read_answer()?;
            if let Ok(choice) = answer.parse::<usize>() {
                if valid_choices.contains(&choice) {
                    return Ok(choice);
                }
            }
            writeln!(self.output, "Sorry, that's not a valid choice.")?;
        }
    }

    fn prompt_play_again(&mut self) -> Result<bool> {
        loop {
            write!(self.output, "Would you like to play again? (y/n) ")?;
            match self.read_answer()?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Sorry, must be y or n.")?,
            }
        }
    }

    fn prompt_continue(&mut self) -> Result<()> {
        write!(self.output, "Press Enter to continue...")?;
        self.read_answer()?;
        Ok(())
    }
}

#[cfg(test)]
use std::io::Cursor;

#[cfg(test)]
fn test_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
}

#[cfg(test)]
fn shown(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_joinor() {
    assert!(joinor(&[], ", ", "or") == "");
    assert!(joinor(&[7], ", ", "or") == "7");
    assert!(joinor(&[1, 2], ", ", "or") == "1 or 2");
    assert!(joinor(&[1, 2, 3], ", ", "or") == "1, 2, or 3");
    assert!(joinor(&[1, 2, 3], "; ", "and") == "1; 2; and 3");
}

#[test]
fn test_prompt_square_choice_reprompts() {
    let mut console = test_console("abc\n4\n\n 9 \n");
    let choice = console.prompt_square_choice(&[1, 2, 9]).unwrap();
    assert!(choice == 9);

    let output = shown(console);
    assert!(output.matches("Choose a square (1, 2, or 9): ").count() == 4);
    assert!(output.matches("Sorry, that's not a valid choice.").count() == 3);
}

#[test]
fn test_non_utf8_answer_is_asked_again() {
    let mut console = Console::new(Cursor::new(b"\xff\xfe\n5\n".to_vec()), Vec::new(), false);
    assert!(console.prompt_square_choice(&[5]).unwrap() == 5);
    assert!(shown(console).contains("Sorry, that's not a valid choice."));

    let mut console = Console::new(Cursor::new(b"\xc3\n\x80y\ny\n".to_vec()), Vec::new(), false);
    assert!(console.prompt_play_again().unwrap());
    assert!(shown(console).matches("Sorry, must be y or n.").count() == 2);
}

#[test]
fn test_prompt_square_choice_without_choices() {
    let mut console = test_console("1\n");
    assert!(matches!(
        console.prompt_square_choice(&[]),
        Err(Error::NoMovesLeft)
    ));
    // nothing was asked or read
    assert!(console.prompt_square_choice(&[1]).unwrap() == 1);
    assert!(!shown(console).contains("Choose a square ()"));
}

#[test]
fn test_prompt_play_again() {
    let mut console = test_console("maybe\nY\nn\n");
    assert!(console.prompt_play_again().unwrap());
    assert!(!console.prompt_play_again().unwrap());
    assert!(shown(console).contains("Sorry, must be y or n."));
}

#[test]
fn test_closed_input() {
    let mut console = test_console("");
    assert!(matches!(
        console.prompt_square_choice(&[1]),
        Err(Error::InputClosed)
    ));
    assert!(matches!(console.prompt_play_again(), Err(Error::InputClosed)));
    assert!(matches!(console.prompt_continue(), Err(Error::InputClosed)));
}

#[test]
fn test_display_outcome_and_score() {
    use crate::board_game::Mark::{O, X};

    let players = [Player::new("You", X), Player::new("Computer", O)];
    let mut console = test_console("");
    console
        .display_outcome(RoundState::Won(O), &players)
        .unwrap();
    console.display_outcome(RoundState::Tied, &players).unwrap();
    console.display_score(&players[0], &players[1]).unwrap();

    let output = shown(console);
    assert!(output.contains("Computer won!"));
    assert!(output.contains("It's a tie!"));
    assert!(output.contains("You (X): 0  Computer (O): 0"));
}

#[test]
fn test_clear_screen_toggle() {
    let mut quiet = test_console("");
    quiet.clear_screen().unwrap();
    assert!(shown(quiet).is_empty());

    let mut loud = Console::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new(), true);
    loud.clear_screen().unwrap();
    assert!(String::from_utf8(loud.into_output()).unwrap() == CLEAR_SCREEN);
}

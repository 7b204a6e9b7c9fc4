/// Tic Tac Toe board.
use std::fmt;

use tracing::debug;

use crate::board_game::{Cell, Mark, NUM_SQUARES, POSITIONS};
use crate::error::{Error, Result};

use Cell::{Empty, Full};

/// Every triple of positions that wins when marked uniformly: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Store the state of the 3x3 board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    // index i holds the square at position i + 1
    cells: [Cell; NUM_SQUARES],
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut board_repr = String::with_capacity(NUM_SQUARES);
        for cell in self.cells.iter() {
            board_repr.push(match cell {
                Empty => '.',
                Full(Mark::X) => 'x',
                Full(Mark::O) => 'o',
            });
        }
        write!(f, "Board {{ cells: [{}] }}", board_repr)
    }
}

/// Draws the grid:
///
/// ```text
///  X | O |
/// ---+---+---
///    | X |
/// ---+---+---
///  O |   | X
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, squares) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = squares
                .iter()
                .map(|cell| match cell {
                    Empty => " ".to_string(),
                    Full(mark) => mark.to_string(),
                })
                .collect();
            writeln!(f, " {} | {} | {}", symbols[0], symbols[1], symbols[2])?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Return an empty board.
    pub fn new() -> Board {
        Board {
            cells: [Empty; NUM_SQUARES],
        }
    }

    fn index(position: usize) -> Result<usize> {
        if position == 0 || position > NUM_SQUARES {
            return Err(Error::OutOfRange(position));
        }
        Ok(position - 1)
    }

    /// The square at a position, or Err if the position is not on the board.
    pub fn cell(&self, position: usize) -> Result<Cell> {
        Ok(self.cells[Self::index(position)?])
    }

    /// Claim an empty square for mark. Err if the position is off the board or already marked.
    pub fn place(&mut self, position: usize, mark: Mark) -> Result<()> {
        let idx = Self::index(position)?;
        match self.cells[idx] {
            Empty => self.cells[idx] = Full(mark),
            Full(_) => return Err(Error::SquareTaken(position)),
        }
        debug!(position, %mark, "placed mark");
        Ok(())
    }

    /// Return the empty positions in ascending order.
    pub fn unmarked_keys(&self) -> Vec<usize> {
        POSITIONS
            .iter()
            .zip(self.cells.iter())
            .filter(|(_, cell)| **cell == Empty)
            .map(|(position, _)| *position)
            .collect()
    }

    pub fn full(&self) -> bool {
        self.unmarked_keys().is_empty()
    }

    /// The mark filling any winning line, checked in `WINNING_LINES` order.
    pub fn winning_mark(&self) -> Option<Mark> {
        for line in WINNING_LINES.iter() {
            if let Some(mark) = self.line_owner(line) {
                return Some(mark);
            }
        }
        None
    }

    pub fn someone_won(&self) -> bool {
        self.winning_mark().is_some()
    }

    /// Clear every square for the next round.
    pub fn reset(&mut self) {
        self.cells = [Empty; NUM_SQUARES];
    }

    /// Return the mark if all three squares of the line are marked by it.
    fn line_owner(&self, line: &[usize; 3]) -> Option<Mark> {
        let marks: Vec<Mark> = line
            .iter()
            .filter_map(|position| match self.cells[position - 1] {
                Full(mark) => Some(mark),
                Empty => None,
            })
            .collect();

        if marks.len() != line.len() {
            return None;
        }
        let first = marks[0];
        if marks.iter().all(|mark| *mark == first) {
            Some(first)
        } else {
            None
        }
    }
}

#[cfg(test)]
use Mark::{O, X};

#[test]
fn test_place() {
    let mut board = Board::new();
    assert!(board.unmarked_keys() == POSITIONS.to_vec());

    assert!(board.place(5, X).is_ok());
    assert!(board.cell(5).unwrap() == Full(X));
    assert!(board.unmarked_keys() == vec![1, 2, 3, 4, 6, 7, 8, 9]);

    assert!(board.place(1, O).is_ok());
    assert!(board.unmarked_keys().len() == NUM_SQUARES - 2);

    assert!(matches!(board.place(5, O), Err(Error::SquareTaken(5))));
    assert!(matches!(board.place(0, O), Err(Error::OutOfRange(0))));
    assert!(matches!(board.place(10, O), Err(Error::OutOfRange(10))));
    // failed placements leave the board alone
    assert!(board.cell(5).unwrap() == Full(X));
    assert!(board.unmarked_keys().len() == NUM_SQUARES - 2);
}

#[test]
fn test_every_line_wins() {
    for line in WINNING_LINES.iter() {
        for mark in [X, O] {
            let mut board = Board::new();
            for position in line {
                board.place(*position, mark).unwrap();
            }
            assert!(board.someone_won(), "line {:?} did not win", line);
            assert!(board.winning_mark() == Some(mark));
            assert!(!board.full());
        }
    }
}

#[test]
fn test_top_row_win() {
    let mut board = Board::new();
    for position in [1, 2, 3] {
        board.place(position, X).unwrap();
    }
    assert!(board.someone_won());
    assert!(board.winning_mark() == Some(X));
    assert!(!board.full());
}

#[test]
fn test_partial_or_mixed_lines_do_not_win() {
    let mut board = Board::new();
    board.place(1, X).unwrap();
    board.place(2, X).unwrap();
    assert!(!board.someone_won());

    board.place(3, O).unwrap();
    assert!(board.winning_mark().is_none());
}

#[test]
fn test_full_board_tie() {
    // X O X
    // X O O
    // O X X
    let mut board = Board::new();
    let moves = [
        (1, X),
        (2, O),
        (3, X),
        (5, O),
        (4, X),
        (6, O),
        (8, X),
        (7, O),
        (9, X),
    ];
    for (position, mark) in moves.iter() {
        assert!(!board.full());
        board.place(*position, *mark).unwrap();
    }
    assert!(board.full());
    assert!(!board.someone_won());
    assert!(board.winning_mark().is_none());
    assert!(board.unmarked_keys().is_empty());
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    for position in [3, 5, 7] {
        board.place(position, O).unwrap();
    }
    assert!(board.winning_mark() == Some(O));

    board.reset();
    assert!(board.unmarked_keys() == POSITIONS.to_vec());
    assert!(board.winning_mark().is_none());
    assert!(board == Board::new());
}

#[test]
fn test_display_and_debug() {
    let mut board = Board::new();
    board.place(1, X).unwrap();
    board.place(5, O).unwrap();
    board.place(9, X).unwrap();

    let expected = " X |   |  \n---+---+---\n   | O |  \n---+---+---\n   |   | X\n";
    assert!(board.to_string() == expected, "got {:?}", board.to_string());
    assert!(format!("{:?}", board) == "Board { cells: [x...o...x] }");
}

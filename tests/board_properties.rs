use proptest::prelude::*;
use proptest::sample::subsequence;

use tictactoe::{Board, Mark, WINNING_LINES};

fn placement_order() -> impl Strategy<Value = Vec<usize>> {
    Just((1..=9).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn unmarked_keys_shrink_by_one(order in placement_order()) {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for (placed, position) in order.iter().enumerate() {
            prop_assert_eq!(board.unmarked_keys().len(), 9 - placed);
            board.place(*position, mark).unwrap();
            let open = board.unmarked_keys();
            prop_assert_eq!(open.len(), 8 - placed);
            prop_assert!(!open.contains(position));
            prop_assert!(open.windows(2).all(|pair| pair[0] < pair[1]));
            mark = mark.opponent();
        }
        prop_assert!(board.full());
    }

    #[test]
    fn uniform_line_wins_regardless_of_other_squares(
        line in 0..WINNING_LINES.len(),
        mark in prop_oneof![Just(Mark::X), Just(Mark::O)],
        others in subsequence((1..=9).collect::<Vec<usize>>(), 0..=9),
    ) {
        let mut board = Board::new();
        let line = WINNING_LINES[line];
        for position in line.iter() {
            board.place(*position, mark).unwrap();
        }
        // the opponent may hold any of the remaining squares
        for position in others.iter().filter(|p| !line.contains(*p)) {
            board.place(*position, mark.opponent()).unwrap();
        }
        prop_assert!(board.someone_won());
        prop_assert_eq!(board.winning_mark(), Some(mark));
    }

    #[test]
    fn full_board_without_a_line_is_a_tie(order in placement_order()) {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for position in order.iter() {
            board.place(*position, mark).unwrap();
            mark = mark.opponent();
        }
        let has_line = WINNING_LINES.iter().any(|line| {
            let first = board.cell(line[0]).unwrap();
            line.iter().all(|p| board.cell(*p).unwrap() == first)
        });
        prop_assert!(board.full());
        prop_assert_eq!(board.someone_won(), has_line);
        if !has_line {
            prop_assert_eq!(board.winning_mark(), None);
        }
    }

    #[test]
    fn reset_restores_an_empty_board(order in placement_order(), count in 0usize..=9) {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for position in order.iter().take(count) {
            board.place(*position, mark).unwrap();
            mark = mark.opponent();
        }
        board.reset();
        prop_assert_eq!(board.unmarked_keys(), (1..=9).collect::<Vec<usize>>());
        prop_assert_eq!(board.winning_mark(), None);
    }
}

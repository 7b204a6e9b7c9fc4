/// A participant in the match and the rounds they have won.
use crate::board_game::Mark;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Player {
        Player {
            name: name.into(),
            mark,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Only a finished round awards points.
    pub(crate) fn record_win(&mut self) {
        self.score += 1;
    }
}

#[test]
fn test_record_win() {
    let mut player = Player::new("You", Mark::X);
    assert!(player.score() == 0);
    player.record_win();
    player.record_win();
    assert!(player.score() == 2);
    assert!(player.mark() == Mark::X);
    assert!(player.name() == "You");
}

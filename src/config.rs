/// Settings for a match, filled in from the command line by the binary.
use crate::board_game::Mark;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Mark the human plays. X always opens, so O lets the computer start.
    pub human_mark: Mark,
    /// Seed for the computer's moves, entropy if unset.
    pub seed: Option<u64>,
    /// End the match once a player has won this many rounds. Unset means play until the user
    /// declines another round.
    pub first_to: Option<u32>,
    pub clear_screen: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            human_mark: Mark::X,
            seed: None,
            first_to: None,
            clear_screen: true,
        }
    }
}

use strum::Display;

/// Where a game is in its lifecycle. `Won` and `Lost` are terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    #[default]
    #[strum(serialize = "in progress")]
    InProgress,
    #[strum(serialize = "won")]
    Won,
    #[strum(serialize = "lost")]
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Closing message shown to the player, if the game has ended.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won => Some("Congratulations! You found all the connections!"),
            GameStatus::Lost => Some("Better luck next time!"),
        }
    }
}

/// The error type for [`Board::new()`](crate::Board::new), i.e. for an unusable board layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidConfiguration {
    EmptyBoard,
    BridgeOutOfBounds { index: usize, last_index: usize },
    GooseOutOfBounds { index: usize, last_index: usize },
}

impl std::error::Error for InvalidConfiguration {}

impl std::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidConfiguration::EmptyBoard => write!(f, "The board must have at least one space"),
            InvalidConfiguration::BridgeOutOfBounds { index, last_index } => write!(
                f,
                "A bridge was placed on space {}, but bridges must come before the finish space {}",
                index, last_index
            ),
            InvalidConfiguration::GooseOutOfBounds { index, last_index } => write!(
                f,
                "A goose was placed on space {}, but geese must come before the finish space {}",
                index, last_index
            ),
        }
    }
}

/// The error type for adding a player to a [`Roster`](crate::Roster).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterError {
    EmptyName,
    DuplicatePlayer { name: String },
}

impl std::error::Error for RosterError {}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "Player's name is required"),
            RosterError::DuplicatePlayer { name } => write!(f, "{}: already existing player", name),
        }
    }
}

/// A game needs at least one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoPlayers;

impl std::error::Error for NoPlayers {}

impl std::fmt::Display for NoPlayers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No players for the game")
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) and [`TryFrom`] instances of [`DieValue`](crate::DieValue).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidDieValue {
    pub input: String,
}

impl std::error::Error for InvalidDieValue {}

impl std::fmt::Display for InvalidDieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid dice argument: {}", self.input)
    }
}

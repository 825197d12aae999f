use goose::InvalidDieValue;

#[derive(Debug, PartialEq, Eq)]
/// Error type for one line of user input.
pub enum CommandError {
    UnknownCommand,
    MovePlayerNameRequired,
    InvalidMoveArguments,
    InvalidDice(InvalidDieValue),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidDice(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::UnknownCommand => write!(f, "Unknown command"),
            CommandError::MovePlayerNameRequired => {
                write!(f, "Command Move: Player's name is required")
            }
            CommandError::InvalidMoveArguments => write!(f, "Command Move: Invalid arguments"),
            CommandError::InvalidDice(err) => write!(f, "{}", err),
        }
    }
}

impl From<InvalidDieValue> for CommandError {
    fn from(err: InvalidDieValue) -> Self {
        CommandError::InvalidDice(err)
    }
}

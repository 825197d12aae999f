use goose::DieValue;

use crate::error::CommandError;

/// A command typed into the application menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppCommand {
    /// The name is passed on as typed, validation is up to the roster.
    AddPlayer(String),
    ListPlayers,
    Play,
    Exit,
}

/// A command typed while a game is running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Move(MoveArgs),
    Show,
    Exit,
}

/// The arguments of `move <player> [<die>, <die>]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveArgs {
    pub player: String,
    /// `None` means the dice should be thrown.
    pub dice: Option<(DieValue, DieValue)>,
}

impl AppCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if let Some(name) = line.strip_prefix("add player") {
            return Ok(AppCommand::AddPlayer(String::from(name)));
        }
        match line {
            "players" => Ok(AppCommand::ListPlayers),
            "play" => Ok(AppCommand::Play),
            "exit" => Ok(AppCommand::Exit),
            _ => Err(CommandError::UnknownCommand),
        }
    }
}

impl GameCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if let Some(args) = line.strip_prefix("move") {
            return Ok(GameCommand::Move(MoveArgs::parse(args)?));
        }
        match line {
            "show" => Ok(GameCommand::Show),
            "exit" => Ok(GameCommand::Exit),
            _ => Err(CommandError::UnknownCommand),
        }
    }
}

impl MoveArgs {
    /// Parses `<player> [<die>, <die>]`, e.g. `Pippo 4, 2` or just `Pippo`.
    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let args = args.trim_start();
        let (player, dice) = match args.split_once(char::is_whitespace) {
            Some((player, dice)) => (player, dice.trim()),
            None => (args, ""),
        };
        if player.is_empty() {
            return Err(CommandError::MovePlayerNameRequired);
        }

        let dice = if dice.is_empty() {
            None
        } else {
            let values: Vec<&str> = dice.split(',').map(str::trim).collect();
            let [first, second] = values.as_slice() else {
                return Err(CommandError::InvalidMoveArguments);
            };
            Some((first.parse::<DieValue>()?, second.parse::<DieValue>()?))
        };

        Ok(Self {
            player: String::from(player),
            dice,
        })
    }
}

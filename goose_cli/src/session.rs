use std::io::{BufRead, Write};

use goose::{visualize_track, Board, Game, MoveOutcome, Roster};
use tracing::{debug, info, trace};

use crate::command::{AppCommand, GameCommand, MoveArgs};
use crate::Config;

const APP_MENU: &str = "\n\
==Goose Game App Commands==\n \
add player <player-name>\n \
players\n \
play\n \
exit\n\
Please input your command";

const GAME_MENU: &str = "\n\
============ Game Commands ============\n \
move <player-name> [<dice1>, <dice2>]\n \
show\n \
exit\n\
Please input your command";

/// How a game session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Quitted,
    /// The input ran out.
    EndOfInput,
}

/// The interactive application: a roster of players, and games played with it.
pub struct App {
    roster: Roster,
    config: Config,
    // A re-usable buffer for reading input lines.
    buf: String,
}

impl App {
    pub fn new(roster: Roster, config: Config) -> Self {
        Self {
            roster,
            config,
            buf: String::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Runs the application menu until `exit` or the end of the input.
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
        loop {
            writeln!(output, "{}", APP_MENU)?;
            let Some(line) = self.read_line(input)? else {
                return Ok(());
            };
            match AppCommand::parse(&line) {
                Ok(AppCommand::AddPlayer(name)) => {
                    let message = self.add_player(&name);
                    writeln!(output, "{}", message)?;
                }
                Ok(AppCommand::ListPlayers) => {
                    writeln!(output, "players: {}", self.roster.names())?;
                }
                Ok(AppCommand::Play) => {
                    if self.play(input, output)? == SessionEnd::EndOfInput {
                        return Ok(());
                    }
                }
                Ok(AppCommand::Exit) => {
                    writeln!(output, "Bye Bye")?;
                    return Ok(());
                }
                Err(err) => writeln!(output, "{}", err)?,
            }
        }
    }

    /// Registers a player and describes the result.
    pub fn add_player(&mut self, name: &str) -> String {
        match self.roster.add(name) {
            Ok(player) => {
                let name = String::from(player.name());
                info!(player = %name, "Player added");
                format!(
                    "Player {} successfully added\nplayers: {}",
                    name,
                    self.roster.names()
                )
            }
            Err(err) => {
                debug!(%err, "Player rejected");
                err.to_string()
            }
        }
    }

    /// Plays one game with the current roster.
    pub fn play(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<SessionEnd> {
        let board = Board::new(&self.config.board)?;
        let mut game = match Game::new(&self.roster, board, &mut self.config.rng) {
            Ok(game) => game,
            Err(err) => {
                writeln!(output, "{}", err)?;
                return Ok(SessionEnd::Quitted);
            }
        };
        info!(players = self.roster.names(), "New game");

        let end = loop {
            if game.has_winner() {
                break SessionEnd::Won;
            }
            writeln!(output, "{}", GAME_MENU)?;
            let Some(line) = self.read_line(input)? else {
                break SessionEnd::EndOfInput;
            };
            match GameCommand::parse(&line) {
                Ok(GameCommand::Move(MoveArgs { player, dice })) => {
                    let outcome = match dice {
                        Some((first, second)) => game.move_player(&player, first, second),
                        None => game.move_throwing_dice(&player),
                    };
                    if let (MoveOutcome::Moved(report), Some(recorder)) =
                        (&outcome, &mut self.config.recorder)
                    {
                        recorder.store_move(report);
                    }
                    debug!(player, outcome = %outcome);
                    writeln!(output, "{}", outcome)?;
                }
                Ok(GameCommand::Show) => writeln!(output, "{}", visualize_track(&game))?,
                Ok(GameCommand::Exit) => {
                    writeln!(output, "Game quitted")?;
                    break SessionEnd::Quitted;
                }
                Err(err) => writeln!(output, "{}", err)?,
            }
        };

        if let Some(winner) = game.winner() {
            info!(winner = winner.name(), "Game won");
        }
        if let Some(recorder) = &mut self.config.recorder {
            let path = recorder.write_game_recording(&game)?;
            debug!(path = %path.display(), "Game recorded");
        }
        Ok(end)
    }

    /// Returns `None` at the end of the input.
    fn read_line(&mut self, input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
        self.buf.clear();
        if input.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = self.buf.trim_end_matches(['\r', '\n']);
        trace!(line, "Read input");
        Ok(Some(String::from(line)))
    }
}

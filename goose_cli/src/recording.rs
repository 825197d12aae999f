use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use goose::{Game, GamePlayer, MoveReport};
use serde::{Deserialize, Serialize};

/// Collects the moves of the current game and writes them to one JSON file per game.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    moves: Vec<MoveReport>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            moves: Vec::new(),
        })
    }

    pub fn store_move(&mut self, report: &MoveReport) {
        self.moves.push(report.clone());
    }

    /// Writes `game_NNNNNN.json` and starts over for the next game.
    pub fn write_game_recording(&mut self, game: &Game) -> anyhow::Result<PathBuf> {
        let recording = GameRecording {
            players: game
                .players()
                .iter()
                .map(|gp| PlayerRecording {
                    name: String::from(gp.name()),
                    position: gp.position(),
                })
                .collect(),
            winner: game.winner().map(GamePlayer::name).map(String::from),
            moves: std::mem::take(&mut self.moves),
        };
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(filepath)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    /// Final positions.
    pub players: Vec<PlayerRecording>,
    pub winner: Option<String>,
    pub moves: Vec<MoveReport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerRecording {
    pub name: String,
    pub position: usize,
}

#[cfg(test)]
mod tests {
    use goose::{DieValue, MoveEvent, Roster};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn missing_directory_is_rejected() {
        let dir = std::env::temp_dir().join("goose_cli_recording_does_not_exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn writes_numbered_files() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("goose_cli_recording_{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let mut recorder = Recorder::new(dir.clone())?;

        let mut roster = Roster::new();
        roster.add("Pippo")?;
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = Game::standard(&roster, &mut rng)?;
        let three = DieValue::new(3).unwrap();
        let outcome = game.move_player("Pippo", three, three);
        recorder.store_move(outcome.report().unwrap());

        let first = recorder.write_game_recording(&game)?;
        let second = recorder.write_game_recording(&game)?;
        assert_eq!(first, dir.join("game_000001.json"));
        assert_eq!(second, dir.join("game_000002.json"));

        let recording: GameRecording = serde_json::from_reader(File::open(&first)?)?;
        assert_eq!(recording.players.len(), 1);
        assert_eq!(recording.players[0].position, 12);
        assert_eq!(recording.winner, None);
        assert!(matches!(
            recording.moves[0].events.last(),
            Some(MoveEvent::Bridged { to: 12, .. })
        ));

        let raw: serde_json::Value = serde_json::from_reader(File::open(&first)?)?;
        assert_eq!(raw["players"][0]["name"], "Pippo");
        assert!(raw["winner"].is_null());
        assert_eq!(raw["moves"][0][0]["type"], "Rolled");

        let recording: GameRecording = serde_json::from_reader(File::open(&second)?)?;
        assert!(recording.moves.is_empty());

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use goose::{Board, BoardConfig};

/// Reads a board layout from a JSON file and checks that a board can be built from it.
///
/// Missing fields take the classic values, e.g. `{ "geese": [4, 8] }` only moves the geese.
pub fn load_board_config(path: &Path) -> anyhow::Result<BoardConfig> {
    let file = File::open(path)
        .with_context(|| format!("Could not open board layout '{}'", path.display()))?;
    let config: BoardConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse board layout '{}'", path.display()))?;
    Board::new(&config)
        .with_context(|| format!("Invalid board layout '{}'", path.display()))?;
    Ok(config)
}

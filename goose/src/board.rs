use serde::{Deserialize, Serialize};

use crate::InvalidConfiguration;

pub const STANDARD_SPACE_COUNT: usize = 64;
pub const STANDARD_BRIDGES: [usize; 1] = [6];
pub const STANDARD_GEESE: [usize; 6] = [5, 9, 14, 18, 23, 27];
pub const STANDARD_BRIDGE_JUMP: usize = 6;

/// What happens to a player landing on a space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    Normal,
    /// Jumps the player forward by the board's bridge distance.
    Bridge,
    /// Moves the player forward again by the sum of the same dice.
    Goose,
    /// The last space. Reaching it exactly wins the game.
    Finish,
}

/// The layout a [`Board`] is built from.
///
/// The default is the classic 64-space board. Fields missing from a
/// serialized layout fall back to the classic values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of spaces, including the finish space.
    pub spaces: usize,
    pub bridges: Vec<usize>,
    pub geese: Vec<usize>,
    /// How far a bridge carries a player.
    pub bridge_jump: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            spaces: STANDARD_SPACE_COUNT,
            bridges: Vec::from(STANDARD_BRIDGES),
            geese: Vec::from(STANDARD_GEESE),
            bridge_jump: STANDARD_BRIDGE_JUMP,
        }
    }
}

/// The linear track. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The last entry is always [`SpaceType::Finish`], and it is the only finish space.
    spaces: Vec<SpaceType>,
    bridge_jump: usize,
}

impl Board {
    /// Builds a board from a layout.
    ///
    /// Bridges and geese must lie strictly before the last space, which is
    /// always the finish. A space listed both as a bridge and as a goose
    /// becomes a goose.
    pub fn new(config: &BoardConfig) -> Result<Self, InvalidConfiguration> {
        if config.spaces == 0 {
            return Err(InvalidConfiguration::EmptyBoard);
        }
        let last_index = config.spaces - 1;
        let mut spaces = vec![SpaceType::Normal; config.spaces];

        for &index in &config.bridges {
            if index >= last_index {
                return Err(InvalidConfiguration::BridgeOutOfBounds { index, last_index });
            }
            spaces[index] = SpaceType::Bridge;
        }
        for &index in &config.geese {
            if index >= last_index {
                return Err(InvalidConfiguration::GooseOutOfBounds { index, last_index });
            }
            spaces[index] = SpaceType::Goose;
        }
        spaces[last_index] = SpaceType::Finish;

        Ok(Self {
            spaces,
            bridge_jump: config.bridge_jump,
        })
    }

    /// The classic board: 64 spaces, a bridge on 6 and geese on 5, 9, 14, 18, 23 and 27.
    pub fn standard() -> Self {
        Self::new(&BoardConfig::default()).expect("the standard layout is valid")
    }

    /// The type of the space at `position`.
    ///
    /// Panics if `position` is past the last space.
    pub fn get(&self, position: usize) -> SpaceType {
        assert!(
            position <= self.last_index(),
            "position {} is off the board (last index {})",
            position,
            self.last_index()
        );
        self.spaces[position]
    }

    pub fn last_index(&self) -> usize {
        self.spaces.len() - 1
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn bridge_jump(&self) -> usize {
        self.bridge_jump
    }

    /// Whether a player at `position` stays there, i.e. the position is on
    /// the board and has no special rule.
    pub fn is_normal_position(&self, position: usize) -> bool {
        position <= self.last_index() && self.spaces[position] == SpaceType::Normal
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, SpaceType)> + '_ {
        self.spaces.iter().copied().enumerate()
    }
}

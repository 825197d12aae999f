use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::RosterError;

/// A registered player. Two players with the same name are the same player.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
}

impl Player {
    /// Surrounding whitespace is not part of the name.
    pub fn new(name: &str) -> Result<Self, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        Ok(Self {
            name: String::from(name),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The players registered for this session, independent of any single game.
///
/// ```
/// use goose::{Roster, RosterError};
/// let mut roster = Roster::new();
/// roster.add("Pippo").unwrap();
/// roster.add("Pluto").unwrap();
/// assert!(matches!(roster.add("Pippo"), Err(RosterError::DuplicatePlayer { .. })));
/// assert_eq!(roster.names(), "Pippo, Pluto");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: BTreeMap<String, Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new player. The roster is unchanged if this fails.
    pub fn add(&mut self, name: &str) -> Result<&Player, RosterError> {
        let player = Player::new(name)?;
        match self.players.entry(player.name.clone()) {
            btree_map::Entry::Occupied(_) => Err(RosterError::DuplicatePlayer {
                name: player.name,
            }),
            btree_map::Entry::Vacant(entry) => Ok(entry.insert(player)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// In name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, Player> {
        self.players.values()
    }

    /// All names, in name order, separated by `", "`.
    pub fn names(&self) -> String {
        self.players
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

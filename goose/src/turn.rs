use serde::{Deserialize, Serialize};

use crate::{DieValue, SpaceType};

/// One step of a move, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MoveEvent {
    Rolled {
        player: String,
        first: DieValue,
        second: DieValue,
    },
    /// The straight-line move before any special space is resolved.
    ///
    /// `to` is capped at the last space; an overshoot shows up as a
    /// following [`MoveEvent::Bounced`].
    Moved {
        player: String,
        from: usize,
        to: usize,
        space: SpaceType,
    },
    Bounced {
        player: String,
        to: usize,
    },
    /// Landed on a goose and moved the dice sum again. `to` is capped like in [`MoveEvent::Moved`].
    Goosed {
        player: String,
        to: usize,
        space: SpaceType,
    },
    Bridged {
        player: String,
        to: usize,
    },
    Won {
        player: String,
    },
    /// The mover landed on `displaced`, who was sent back to the mover's starting space.
    Pranked {
        on: usize,
        displaced: String,
        returns_to: usize,
    },
}

/// Position 0 is the start, which is shown by name.
fn position_name(position: usize) -> String {
    if position > 0 {
        position.to_string()
    } else {
        String::from("Start")
    }
}

impl std::fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveEvent::Rolled {
                player,
                first,
                second,
            } => write!(f, "{} rolls {}, {}.", player, first, second),
            MoveEvent::Moved {
                player,
                from,
                space: SpaceType::Bridge,
                ..
            } => write!(f, "{} moves from {} to The Bridge", player, position_name(*from)),
            MoveEvent::Moved {
                player, from, to, ..
            } => write!(f, "{} moves from {} to {}", player, position_name(*from), to),
            MoveEvent::Bounced { player, to } => {
                write!(f, "{} bounces! {} returns to {}", player, player, to)
            }
            MoveEvent::Goosed {
                player,
                space: SpaceType::Bridge,
                ..
            } => write!(f, "The Goose. {} moves again and goes to The Bridge", player),
            MoveEvent::Goosed { player, to, .. } => {
                write!(f, "The Goose. {} moves again and goes to {}", player, to)
            }
            MoveEvent::Bridged { player, to } => write!(f, "{} jumps to {}", player, to),
            MoveEvent::Won { player } => write!(f, "{} Wins!", player),
            MoveEvent::Pranked {
                on,
                displaced,
                returns_to,
            } => write!(
                f,
                "On {} there is {}, who returns to {}",
                on,
                displaced,
                position_name(*returns_to)
            ),
        }
    }
}

/// Everything that happened during a single move.
///
/// Displays as the narrative of the move:
///
/// ```
/// use goose::{DieValue, Game, Roster};
/// use rand::SeedableRng;
///
/// let mut roster = Roster::new();
/// roster.add("Pippo").unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let mut game = Game::standard(&roster, &mut rng).unwrap();
/// let outcome = game.move_player("Pippo", DieValue::new(3).unwrap(), DieValue::new(3).unwrap());
/// assert_eq!(
///     outcome.to_string(),
///     "Pippo rolls 3, 3. Pippo moves from Start to The Bridge. Pippo jumps to 12"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveReport {
    pub events: Vec<MoveEvent>,
}

impl MoveReport {
    pub fn is_win(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, MoveEvent::Won { .. }))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveEvent> {
        self.events.iter()
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut previous: Option<&MoveEvent> = None;
        for event in &self.events {
            let separator = match (previous, event) {
                (None, _) => "",
                (_, MoveEvent::Goosed { .. }) => ", ",
                (Some(MoveEvent::Rolled { .. }), _) => " ",
                _ => ". ",
            };
            write!(f, "{}{}", separator, event)?;
            previous = Some(event);
        }
        Ok(())
    }
}

/// Summarizes the result of asking a [`Game`](crate::Game) to move a player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(MoveReport),
    /// No player with this name takes part in the game. Nothing was changed.
    UnknownPlayer { name: String },
    /// The game already has a winner. Nothing was changed.
    AlreadyWon { winner: String },
}

impl MoveOutcome {
    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            MoveOutcome::Moved(report) => Some(report),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved(report) => write!(f, "{}", report),
            MoveOutcome::UnknownPlayer { name } => write!(f, "Unknown player {}", name),
            MoveOutcome::AlreadyWon { winner } => {
                write!(f, "The game is over, {} already won", winner)
            }
        }
    }
}

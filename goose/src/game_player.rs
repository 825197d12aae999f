use std::collections::BTreeSet;

use crate::{Board, DieValue, MoveEvent, MoveReport, Player, SpaceType};

/// The state for a single player during one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GamePlayer {
    player: Player,
    /// 0 is the start.
    position: usize,
}

/// Everyone in a game except the player who is moving.
pub(crate) struct Opponents<'a> {
    before: &'a mut [GamePlayer],
    after: &'a mut [GamePlayer],
}

impl<'a> Opponents<'a> {
    /// Splits `players` into the mover at `mover_idx` and everyone else.
    ///
    /// Panics if `mover_idx` is out of bounds.
    pub(crate) fn split(players: &'a mut [GamePlayer], mover_idx: usize) -> (&'a mut GamePlayer, Self) {
        let (before, rest) = players.split_at_mut(mover_idx);
        let (mover, after) = rest
            .split_first_mut()
            .expect("mover index within the players");
        (mover, Self { before, after })
    }

    fn on_space(&mut self, position: usize) -> Option<&mut GamePlayer> {
        self.before
            .iter_mut()
            .chain(self.after.iter_mut())
            .find(|other| other.position == position)
    }
}

impl GamePlayer {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            position: 0,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn name(&self) -> &str {
        self.player.name()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Puts the player somewhere without resolving the space.
    pub(crate) fn force_move(&mut self, position: usize) {
        self.position = position;
    }

    /// Moves the player by the sum of both dice and resolves every special
    /// space along the way.
    ///
    /// Goose, bridge and bounce can chain into each other. The chain ends on
    /// a normal space or on the finish, in which case the report contains a
    /// [`MoveEvent::Won`]. If the chain comes back to a special space it
    /// already resolved during this move, the player stays there.
    ///
    /// Finally, if the player ends up on a space held by an opponent, that
    /// opponent is sent back to where this player started.
    ///
    /// Must not be called once the game has a winner.
    pub(crate) fn move_by(
        &mut self,
        board: &Board,
        first: DieValue,
        second: DieValue,
        opponents: &mut Opponents<'_>,
    ) -> MoveReport {
        let name = String::from(self.name());
        let from = self.position;
        let steps = usize::from(first) + usize::from(second);
        let last_index = board.last_index();

        let mut events = vec![MoveEvent::Rolled {
            player: name.clone(),
            first,
            second,
        }];

        let mut target = from + steps;
        let shown = target.min(last_index);
        events.push(MoveEvent::Moved {
            player: name.clone(),
            from,
            to: shown,
            space: board.get(shown),
        });

        let mut won = false;
        let mut resolved = BTreeSet::new();
        while !board.is_normal_position(target) && !won {
            if target > last_index {
                target = last_index - (target - last_index).min(last_index);
                events.push(MoveEvent::Bounced {
                    player: name.clone(),
                    to: target,
                });
                continue;
            }
            if !resolved.insert(target) {
                break;
            }
            match board.get(target) {
                SpaceType::Goose => {
                    target += steps;
                    let shown = target.min(last_index);
                    events.push(MoveEvent::Goosed {
                        player: name.clone(),
                        to: shown,
                        space: board.get(shown),
                    });
                }
                SpaceType::Bridge => {
                    target += board.bridge_jump();
                    events.push(MoveEvent::Bridged {
                        player: name.clone(),
                        to: target,
                    });
                }
                SpaceType::Finish => {
                    won = true;
                    events.push(MoveEvent::Won {
                        player: name.clone(),
                    });
                }
                SpaceType::Normal => break,
            }
        }

        if target != from {
            if let Some(other) = opponents.on_space(target) {
                other.force_move(from);
                events.push(MoveEvent::Pranked {
                    on: target,
                    displaced: String::from(other.name()),
                    returns_to: from,
                });
            }
        }

        self.position = target;
        MoveReport { events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardConfig;

    fn die(value: u8) -> DieValue {
        DieValue::new(value).unwrap()
    }

    fn players(names_and_positions: &[(&str, usize)]) -> Vec<GamePlayer> {
        names_and_positions
            .iter()
            .map(|&(name, position)| {
                let mut gp = GamePlayer::new(Player::new(name).unwrap());
                gp.force_move(position);
                gp
            })
            .collect()
    }

    fn move_first(
        players: &mut [GamePlayer],
        board: &Board,
        first: u8,
        second: u8,
    ) -> MoveReport {
        let (mover, mut opponents) = Opponents::split(players, 0);
        mover.move_by(board, die(first), die(second), &mut opponents)
    }

    #[test]
    fn opponents_exclude_the_mover() {
        let mut all = players(&[("A", 4), ("B", 4), ("C", 9)]);
        let (mover, mut opponents) = Opponents::split(&mut all, 1);
        assert_eq!(mover.name(), "B");
        assert_eq!(opponents.on_space(4).map(|gp| gp.name().to_owned()), Some(String::from("A")));
        assert_eq!(opponents.on_space(9).map(|gp| gp.name().to_owned()), Some(String::from("C")));
        assert!(opponents.on_space(1).is_none());
    }

    #[test]
    fn goose_then_bridge() {
        let board = Board::new(&BoardConfig {
            spaces: 30,
            bridges: vec![8],
            geese: vec![4],
            bridge_jump: 6,
        })
        .unwrap();
        let mut all = players(&[("Pippo", 0)]);
        let report = move_first(&mut all, &board, 2, 2);
        assert_eq!(all[0].position(), 14);
        assert_eq!(
            report.to_string(),
            "Pippo rolls 2, 2. Pippo moves from Start to 4, The Goose. Pippo moves again and goes to The Bridge. Pippo jumps to 14"
        );
    }

    #[test]
    fn cycles_on_custom_boards_terminate() {
        // Goose on 7 with a last index of 9: 7 + 4 = 11, bounces back to 7.
        let board = Board::new(&BoardConfig {
            spaces: 10,
            bridges: vec![],
            geese: vec![7],
            bridge_jump: 6,
        })
        .unwrap();
        let mut all = players(&[("Pippo", 3)]);
        let report = move_first(&mut all, &board, 2, 2);
        assert_eq!(all[0].position(), 7);
        assert!(!report.is_win());
        assert!(report
            .iter()
            .any(|event| matches!(event, MoveEvent::Goosed { to: 9, .. })));
    }

    #[test]
    fn zero_length_bridge_terminates() {
        let board = Board::new(&BoardConfig {
            spaces: 20,
            bridges: vec![4],
            geese: vec![],
            bridge_jump: 0,
        })
        .unwrap();
        let mut all = players(&[("Pippo", 0)]);
        move_first(&mut all, &board, 2, 2);
        assert_eq!(all[0].position(), 4);
    }

    #[test]
    fn huge_overshoot_saturates_at_start() {
        let board = Board::new(&BoardConfig {
            spaces: 3,
            bridges: vec![],
            geese: vec![],
            bridge_jump: 6,
        })
        .unwrap();
        let mut all = players(&[("Pippo", 0)]);
        let report = move_first(&mut all, &board, 6, 6);
        assert_eq!(all[0].position(), 0);
        assert!(report
            .iter()
            .any(|event| matches!(event, MoveEvent::Bounced { to: 0, .. })));
    }
}

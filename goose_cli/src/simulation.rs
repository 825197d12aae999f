use std::collections::BTreeMap;

use goose::{Board, BoardConfig, Game, MoveOutcome, Roster};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::recording::Recorder;

/// Games that take longer than this are assumed to be stuck.
pub const MAX_MOVES_PER_GAME: usize = 100_000;

#[derive(Debug, Default)]
pub struct SimulationScore {
    /// Number of games won, for every player in the roster.
    pub wins: BTreeMap<String, usize>,
    pub total_moves: usize,
}

impl SimulationScore {
    pub fn num_games(&self) -> usize {
        self.wins.values().sum()
    }
}

/// Plays `num_games` games with thrown dice. Players take turns in roster order.
pub fn simulate(
    roster: &Roster,
    board_config: &BoardConfig,
    num_games: usize,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<SimulationScore> {
    let board = Board::new(board_config)?;
    let mut score = SimulationScore {
        wins: roster.iter().map(|p| (String::from(p.name()), 0)).collect(),
        total_moves: 0,
    };

    for game_idx in 0..num_games {
        let mut game = Game::new(roster, board.clone(), rng)?;
        let mut num_moves = 0;
        for player in roster.iter().cycle() {
            if game.has_winner() {
                break;
            }
            if num_moves == MAX_MOVES_PER_GAME {
                anyhow::bail!(
                    "Game {} did not finish after {} moves",
                    game_idx,
                    MAX_MOVES_PER_GAME
                );
            }
            let outcome = game.move_throwing_dice(player.name());
            trace!(game_idx, outcome = %outcome);
            if let (MoveOutcome::Moved(report), Some(recorder)) = (&outcome, &mut *recorder) {
                recorder.store_move(report);
            }
            num_moves += 1;
        }

        let winner = game
            .winner()
            .map(|gp| String::from(gp.name()))
            .expect("the loop only ends with a winner");
        debug!(winner, game_idx, num_moves);
        *score.wins.entry(winner).or_default() += 1;
        score.total_moves += num_moves;

        if let Some(recorder) = recorder.as_mut() {
            recorder.write_game_recording(&game)?;
        }
    }

    Ok(score)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn roster(names: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for name in names {
            roster.add(name).unwrap();
        }
        roster
    }

    #[test]
    fn every_game_has_one_winner() {
        let mut rng = StdRng::seed_from_u64(11);
        let score = simulate(
            &roster(&["Pippo", "Pluto", "Paperino"]),
            &BoardConfig::default(),
            25,
            &mut rng,
            &mut None,
        )
        .unwrap();
        assert_eq!(score.num_games(), 25);
        assert_eq!(score.wins.len(), 3);
        assert!(score.total_moves >= 25);
    }

    #[test]
    fn same_seed_same_results() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(99);
            simulate(
                &roster(&["Pippo", "Pluto"]),
                &BoardConfig::default(),
                10,
                &mut rng,
                &mut None,
            )
            .unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.total_moves, b.total_moves);
    }

    #[test]
    fn no_players_no_simulation() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = simulate(&Roster::new(), &BoardConfig::default(), 3, &mut rng, &mut None);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_board_is_reported() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = BoardConfig {
            geese: vec![100],
            ..BoardConfig::default()
        };
        let err = simulate(&roster(&["Pippo"]), &config, 1, &mut rng, &mut None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "A goose was placed on space 100, but geese must come before the finish space 63"
        );
    }
}

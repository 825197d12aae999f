use crate::{Game, SpaceType};

const SPACES_PER_ROW: usize = 16;

/// Draws the track row by row, followed by every player's position.
///
/// Occupied spaces are drawn as `●`, other spaces by their type:
/// `·` normal, `B` bridge, `G` goose, `F` finish.
pub fn visualize_track(game: &Game) -> String {
    let board = game.board();
    let occupied = |position: usize| {
        game.players()
            .iter()
            .any(|gp| gp.position() == position && position > 0)
    };

    let mut result = String::from("    ╭");
    for _ in 0..SPACES_PER_ROW {
        result += "─";
    }
    result += "╮";

    for (position, space) in board.iter() {
        if position % SPACES_PER_ROW == 0 {
            result += &format!("\n{:>3} │", position);
        }
        let symbol = if occupied(position) {
            '●'
        } else {
            match space {
                SpaceType::Normal => '·',
                SpaceType::Bridge => 'B',
                SpaceType::Goose => 'G',
                SpaceType::Finish => 'F',
            }
        };
        result.push(symbol);
        if position % SPACES_PER_ROW == SPACES_PER_ROW - 1 || position == board.last_index() {
            for _ in position % SPACES_PER_ROW + 1..SPACES_PER_ROW {
                result.push(' ');
            }
            result += "│";
        }
    }

    result += "\n    ╰";
    for _ in 0..SPACES_PER_ROW {
        result += "─";
    }
    result += "╯";

    for gp in game.players() {
        let position = if gp.position() > 0 {
            gp.position().to_string()
        } else {
            String::from("Start")
        };
        result += &format!("\n{}: {}", gp.name(), position);
    }
    result
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{Board, BoardConfig, DieValue, Roster};

    #[test]
    fn small_board() {
        let mut roster = Roster::new();
        roster.add("Pippo").unwrap();
        roster.add("Pluto").unwrap();
        let board = Board::new(&BoardConfig {
            spaces: 20,
            bridges: vec![6],
            geese: vec![5, 9, 14],
            bridge_jump: 6,
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new(&roster, board, &mut rng).unwrap();
        game.move_player("Pippo", DieValue::new(1).unwrap(), DieValue::new(2).unwrap());

        let expected = "    ╭────────────────╮\n  \
                          0 │···●·GB··G····G·│\n \
                         16 │···F            │\n    \
                            ╰────────────────╯\n\
                         Pippo: 3\n\
                         Pluto: Start";
        assert_eq!(visualize_track(&game), expected);
    }
}

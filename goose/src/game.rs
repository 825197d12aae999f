use rand::rngs::StdRng;

use crate::game_player::Opponents;
use crate::{Board, Dice, DieValue, GamePlayer, MoveOutcome, NoPlayers, Roster};

/// A single game: the board, one [`GamePlayer`] per registered player, and the winner once there is one.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// Sorted by name, and names are unique.
    players: Vec<GamePlayer>,
    /// Index into `players`. Set at most once.
    winner: Option<usize>,
    dice: [Dice; 2],
}

impl Game {
    /// Starts a game for everyone in `roster`, with both dice seeded from `rng`.
    pub fn new(roster: &Roster, board: Board, rng: &mut StdRng) -> Result<Self, NoPlayers> {
        let dice = [Dice::forked_from(rng), Dice::forked_from(rng)];
        Self::with_dice(roster, board, dice)
    }

    /// Starts a game on the classic board.
    pub fn standard(roster: &Roster, rng: &mut StdRng) -> Result<Self, NoPlayers> {
        Self::new(roster, Board::standard(), rng)
    }

    pub fn with_dice(roster: &Roster, board: Board, dice: [Dice; 2]) -> Result<Self, NoPlayers> {
        if roster.is_empty() {
            return Err(NoPlayers);
        }
        // The roster iterates in name order, which keeps `players` sorted.
        let players = roster.iter().cloned().map(GamePlayer::new).collect();
        Ok(Self {
            board,
            players,
            winner: None,
            dice,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[GamePlayer] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&GamePlayer> {
        self.index_of(name).map(|idx| &self.players[idx])
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.players
            .binary_search_by(|gp| gp.name().cmp(name))
            .ok()
    }

    /// Moves the named player with the given dice.
    ///
    /// Unknown players and moves after the game has been won are not
    /// errors, they are reported in the returned [`MoveOutcome`] and leave
    /// the game untouched.
    pub fn move_player(&mut self, name: &str, first: DieValue, second: DieValue) -> MoveOutcome {
        let Some(mover_idx) = self.index_of(name) else {
            return MoveOutcome::UnknownPlayer {
                name: String::from(name),
            };
        };
        if let Some(winner) = self.winner() {
            return MoveOutcome::AlreadyWon {
                winner: String::from(winner.name()),
            };
        }

        let (mover, mut opponents) = Opponents::split(&mut self.players, mover_idx);
        let report = mover.move_by(&self.board, first, second, &mut opponents);
        if report.is_win() {
            self.set_winner(mover_idx);
        }
        MoveOutcome::Moved(report)
    }

    /// Rolls both dice and moves the named player with the result.
    pub fn move_throwing_dice(&mut self, name: &str) -> MoveOutcome {
        let first = self.dice[0].roll();
        let second = self.dice[1].roll();
        self.move_player(name, first, second)
    }

    /// The first player other than `excluding` standing on `position`.
    pub fn find_player_on_space(&self, position: usize, excluding: &str) -> Option<&GamePlayer> {
        self.players
            .iter()
            .find(|gp| gp.name() != excluding && gp.position() == position)
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<&GamePlayer> {
        self.winner.map(|idx| &self.players[idx])
    }

    fn set_winner(&mut self, idx: usize) {
        assert!(self.winner.is_none(), "a game can only be won once");
        self.winner = Some(idx);
    }
}

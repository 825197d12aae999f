pub use board::*;
pub use dice::*;
pub use errors::*;
pub use game::*;
pub use game_player::GamePlayer;
pub use player::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod dice;
mod errors;
mod game;
mod game_player;
mod player;
mod turn;
mod visualization;

mod command;
mod config;
mod error;
mod recording;
mod session;
mod simulation;
pub use command::*;
pub use config::*;
pub use error::*;
pub use recording::*;
pub use session::*;
pub use simulation::*;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub board: goose::BoardConfig,
    pub recorder: Option<recording::Recorder>,
}

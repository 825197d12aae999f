use std::path::PathBuf;

use clap::Parser;
use goose::{BoardConfig, Roster};
use goose_cli::{load_board_config, simulate, App, Config, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Players to register right away
    players: Vec<String>,

    /// RNG seed for the dice
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON board layout, e.g. {"spaces": 64, "bridges": [6], "geese": [5, 9]}
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Record the moves of every game as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// Instead of the interactive menu, let the registered players play this many games
    #[arg(short, long)]
    simulate: Option<usize>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let board = match &args.board {
        Some(path) => load_board_config(path)?,
        None => BoardConfig::default(),
    };

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };
    if let Some(recorder) = &recorder {
        info!(directory = %recorder.directory().display(), "Recording games");
    }

    let mut roster = Roster::new();
    for name in &args.players {
        roster.add(name)?;
    }

    if let Some(num_games) = args.simulate {
        let score = simulate(&roster, &board, num_games, &mut rng, &mut recorder)?;
        println!("End result after {} games:", score.num_games());
        for (name, wins) in &score.wins {
            println!("- {} wins by {}", wins, name);
        }
        if score.num_games() > 0 {
            println!(
                "{:.1} moves per game",
                score.total_moves as f32 / score.num_games() as f32
            );
        }
        return Ok(());
    }

    let mut app = App::new(
        roster,
        Config {
            rng,
            board,
            recorder,
        },
    );
    app.run(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Game text goes to stdout, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

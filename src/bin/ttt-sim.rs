use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use ttt_sim::{MinTurnsMode, Simulation, SimulationConfig};

/// Play random tic-tac-toe games and print outcome statistics.
#[derive(Parser)]
#[command(name = "ttt-sim", about = "Random-play tic-tac-toe statistics")]
struct Cli {
    /// Board edge length (the board has size×size cells)
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Number of games to play
    #[arg(long, default_value_t = 10_000)]
    trials: u64,

    /// RNG seed; drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// How the minimum turns-to-win statistic is aggregated
    #[arg(long, value_enum, default_value_t = MinTurns::Faithful)]
    min_turns: MinTurns,

    /// Run trials in parallel
    #[arg(long)]
    parallel: bool,

    /// Print statistics as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MinTurns {
    /// Starts at 0 and never rises
    Faithful,
    /// True minimum over won games
    Corrected,
}

impl From<MinTurns> for MinTurnsMode {
    fn from(value: MinTurns) -> Self {
        match value {
            MinTurns::Faithful => MinTurnsMode::Faithful,
            MinTurns::Corrected => MinTurnsMode::Corrected,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SimulationConfig::new()
        .with_board_size(cli.size)
        .with_trials(cli.trials)
        .with_min_turns_mode(cli.min_turns.into())
        .with_parallel(cli.parallel);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut simulation = Simulation::new(config).context("setting up simulation")?;
    tracing::info!(seed = simulation.seed(), "starting");

    let stats = simulation
        .run()
        .with_context(|| format!("running {} trials on a {}x{} board", cli.trials, cli.size, cli.size))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats).context("serializing statistics")?);
    } else {
        println!("{stats}");
    }

    Ok(())
}

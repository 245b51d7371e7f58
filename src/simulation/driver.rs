//! Batch driver: plays many games and aggregates [`Statistics`].
//!
//! The sequential path reuses one board and one pair of agents, resetting
//! them between games. The parallel path gives every rayon worker its own
//! table and seeds each trial independently, then merges the per-worker
//! statistics.

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use super::Statistics;
use crate::board::Board;
use crate::core::{BoardError, GameRng, RandomSource, SimulationConfig, SimulationError, SideMap};
use crate::play::{Agent, GameOutcome, GameRunner};

/// One board with its two agents.
#[derive(Clone, Debug)]
struct Table {
    board: Board,
    agents: SideMap<Agent>,
    runner: GameRunner,
}

impl Table {
    fn new(board: Board) -> Self {
        Self {
            board,
            agents: SideMap::new(Agent::new),
            runner: GameRunner::new(),
        }
    }

    /// Play one game, then reset board and agents for the next.
    fn play<R: RandomSource>(&mut self, rng: &mut R) -> Result<GameOutcome, BoardError> {
        let winner = self.runner.play(&mut self.board, &mut self.agents, rng)?;
        let outcome = GameOutcome::from_agents(winner, &self.agents);

        for (_, agent) in self.agents.iter_mut() {
            agent.reset();
        }
        self.board.reset();

        Ok(outcome)
    }
}

/// A configured batch of random games.
pub struct Simulation {
    config: SimulationConfig,
    table: Table,
    rng: GameRng,
}

impl Simulation {
    /// Validate `config` and set up the board, agents and RNG.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            config,
            table: Table::new(board),
            rng,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed in use; equals the configured one or the one drawn from entropy.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Play a single game with the simulation's RNG.
    pub fn play_one(&mut self) -> Result<GameOutcome, SimulationError> {
        Ok(self.table.play(&mut self.rng)?)
    }

    /// Run all configured trials.
    ///
    /// Any board error aborts the run; it indicates a move-selection bug.
    #[instrument(
        skip(self),
        fields(
            size = self.config.board_size,
            trials = self.config.trials,
            seed = self.rng.seed(),
            parallel = self.config.parallel
        )
    )]
    pub fn run(&mut self) -> Result<Statistics, SimulationError> {
        if self.config.trials == 0 {
            warn!("no trials configured");
        }

        let stats = if self.config.parallel {
            self.run_parallel()?
        } else {
            self.run_sequential()?
        };

        debug_assert!(stats.is_consistent());
        info!(
            games = stats.games,
            wins = stats.wins,
            draws = stats.no_winners,
            max_turns_to_win = stats.max_turns_to_win,
            "simulation finished"
        );
        Ok(stats)
    }

    fn run_sequential(&mut self) -> Result<Statistics, SimulationError> {
        let mode = self.config.min_turns_mode;
        let mut stats = Statistics::new();

        for trial in 0..self.config.trials {
            let outcome = self.table.play(&mut self.rng)?;
            debug!(trial, winner = ?outcome.winner, turns = outcome.total_turns(), "game finished");
            stats.record(&outcome, mode);
        }

        Ok(stats)
    }

    fn run_parallel(&self) -> Result<Statistics, SimulationError> {
        let mode = self.config.min_turns_mode;
        let template = self.table.board.clone();
        let base = &self.rng;

        let stats = (0..self.config.trials)
            .into_par_iter()
            .try_fold(
                || (Table::new(template.clone()), Statistics::new()),
                |(mut table, mut stats), trial| {
                    let mut rng = base.for_trial(trial);
                    let outcome = table.play(&mut rng)?;
                    debug!(trial, winner = ?outcome.winner, turns = outcome.total_turns(), "game finished");
                    stats.record(&outcome, mode);
                    Ok::<_, BoardError>((table, stats))
                },
            )
            .map(|partial| partial.map(|(_, stats)| stats))
            .try_reduce(Statistics::new, |mut acc, stats| {
                acc.merge(&stats, mode);
                Ok(acc)
            })?;

        Ok(stats)
    }
}

/// Build a [`Simulation`] from `config` and run it.
pub fn simulate(config: SimulationConfig) -> Result<Statistics, SimulationError> {
    Simulation::new(config)?.run()
}

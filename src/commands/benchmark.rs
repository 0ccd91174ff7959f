//! Benchmark command
//!
//! Plays many self-play games and aggregates how many turns they take.

use crate::core::{Code, ConfigError, GameConfig, PlayConfig, SolverError};
use crate::game::{Game, GameOutcome, SecretKeeper, play_out};
use crate::solver::Strategy;
use crate::space::{self, random_code};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    /// Secrets that ended the game unsolved
    pub failures: Vec<Code>,
    pub total_turns: usize,
    /// Averages and extremes cover solved games only
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` random secrets for the game
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn random_secrets<R: Rng + ?Sized>(
    config: &GameConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Code>, ConfigError> {
    (0..count).map(|_| random_code(config, rng)).collect()
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run a benchmark over the given secrets
///
/// `make_strategy` is called once per game. The candidate space is generated
/// once and shared by every game.
///
/// # Errors
/// Returns `SolverError::InvalidConfiguration` if the configuration is
/// rejected.
pub fn run_benchmark<S, F>(
    config: &PlayConfig,
    secrets: &[Code],
    mut make_strategy: F,
    show_progress: bool,
) -> Result<BenchmarkResult, SolverError>
where
    S: Strategy,
    F: FnMut() -> S,
{
    config.validate()?;
    let space = space::generate(&config.game)?;

    let start = Instant::now();
    let pb = progress_bar(secrets.len(), show_progress);

    let mut solved = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for secret in secrets {
        let game = Game::with_space(config, space.clone(), make_strategy());
        let summary = play_out(game, &mut SecretKeeper::new(secret.clone()));

        match summary.outcome {
            GameOutcome::Won { turn, .. } => {
                solved += 1;
                total_turns += turn;
                min_turns = min_turns.min(turn);
                max_turns = max_turns.max(turn);
                *distribution.entry(turn).or_insert(0) += 1;
            }
            GameOutcome::Exhausted { reason, .. } => {
                info!("Failed on {secret}: {reason}");
                failures.push(secret.clone());
            }
        }

        pb.set_message(format!("{solved} solved"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        solved,
        failures,
        total_turns,
        average_turns: if solved == 0 {
            0.0
        } else {
            total_turns as f64 / solved as f64
        },
        min_turns: if solved == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

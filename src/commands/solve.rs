//! Self-play solving command
//!
//! Plays one game against a known secret and returns the solution path.

use crate::core::{Code, GameConfig, PlayConfig, SolverError};
use crate::game::{Game, GameOutcome, SecretKeeper, TurnReport, VerdictSource};
use crate::solver::Strategy;
use crate::solver::minimax::{GuessMetrics, calculate_metrics};
use crate::space::random_code;
use rand::Rng;

/// Result of solving a secret
pub struct SolveResult {
    pub secret: Code,
    pub outcome: GameOutcome,
    pub steps: Vec<GuessStep>,
    pub strategy: &'static str,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_won()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub report: TurnReport,
    /// Partition metrics of the guess against the candidates it was played on
    pub metrics: Option<GuessMetrics>,
}

/// Parse the secret if one was given, otherwise draw a random one
///
/// # Errors
/// Returns `SolverError::InvalidCode` if `secret` is not legal in the game and
/// `SolverError::InvalidConfiguration` if no code can be drawn.
pub fn resolve_secret<R: Rng + ?Sized>(
    config: &GameConfig,
    secret: Option<&str>,
    rng: &mut R,
) -> Result<Code, SolverError> {
    match secret {
        Some(text) => Ok(config.parse_code(text)?),
        None => Ok(random_code(config, rng)?),
    }
}

/// Solve a specific secret with the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid or its space exceeds the limit
/// - The secret is not a legal code for the configuration
pub fn solve_code<S: Strategy>(
    config: &PlayConfig,
    secret: &Code,
    strategy: S,
) -> Result<SolveResult, SolverError> {
    config.game.check_code(secret)?;

    let mut game = Game::new(config, strategy)?;
    let mut keeper = SecretKeeper::new(secret.clone());
    let mut steps = Vec::new();

    while let Some(guess) = game.propose() {
        let candidates = game.state().space().codes();
        let metrics = (candidates.len() > 1).then(|| calculate_metrics(&guess, candidates));

        let verdict = keeper.verdict_for(&guess);
        let report = game.apply_verdict(guess, verdict)?;
        steps.push(GuessStep { report, metrics });
    }

    let outcome = game.state().outcome().ok_or(SolverError::PoolExhausted)?;

    Ok(SolveResult {
        secret: keeper.into_secret(),
        outcome,
        steps,
        strategy: game.strategy().name(),
    })
}

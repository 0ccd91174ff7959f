//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Strategies see the
//! surviving candidates and the history, never the secret.

use crate::core::Code;
use crate::game::History;
use crate::space::CandidateSpace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A strategy for choosing the next guess
pub trait Strategy {
    /// Select the next guess given the surviving candidates
    ///
    /// Returns `None` only when there is nothing left to guess.
    fn select_guess(&mut self, space: &CandidateSpace, history: &History) -> Option<Code>;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// First candidate in canonical order (default)
    First(FirstCandidateStrategy),
    /// Uniform random candidate
    Random(RandomStrategy),
    /// Minimize worst-case remaining candidates
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&mut self, space: &CandidateSpace, history: &History) -> Option<Code> {
        match self {
            Self::First(s) => s.select_guess(space, history),
            Self::Random(s) => s.select_guess(space, history),
            Self::Minimax(s) => s.select_guess(space, history),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::First(s) => s.name(),
            Self::Random(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 3] = ["first", "random", "minimax"];

    /// Create strategy from name string
    ///
    /// Supported names: "first", "random", "minimax". Defaults to first
    /// candidate if the name is unrecognized. `seed` makes the random
    /// strategy reproducible.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "random" => Self::Random(seed.map_or_else(RandomStrategy::new, RandomStrategy::seeded)),
            "minimax" => Self::Minimax(MinimaxStrategy::default()),
            _ => Self::First(FirstCandidateStrategy),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::First(FirstCandidateStrategy)
    }
}

/// Always guess the first surviving candidate
///
/// Every guess is consistent with all feedback so far, so any guess can win.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess(&mut self, space: &CandidateSpace, _history: &History) -> Option<Code> {
        space.first().cloned()
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

/// Guess a uniformly random surviving candidate
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Random strategy seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible random strategy
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(&mut self, space: &CandidateSpace, _history: &History) -> Option<Code> {
        space.codes().choose(&mut self.rng).cloned()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Guess the candidate that minimizes the worst-case remaining candidates
///
/// Scoring is quadratic in the space size, so above `candidate_limit`
/// candidates the strategy falls back to the first candidate.
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    pub candidate_limit: usize,
}

impl MinimaxStrategy {
    /// Create a new minimax strategy
    ///
    /// # Parameters
    /// - `candidate_limit`: Use minimax only when candidates <= this value (default: 1500)
    #[must_use]
    pub const fn new(candidate_limit: usize) -> Self {
        Self { candidate_limit }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(1500)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess(&mut self, space: &CandidateSpace, _history: &History) -> Option<Code> {
        if space.len() > self.candidate_limit || space.len() <= 2 {
            return space.first().cloned();
        }

        super::minimax::select_best_guess(space.codes(), space.codes())
            .map(|(best, _)| best.clone())
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::space::generate;

    fn small_space() -> CandidateSpace {
        generate(&GameConfig::new(4, 3, false)).unwrap()
    }

    #[test]
    fn first_strategy_takes_canonical_first() {
        let space = small_space();
        let guess = FirstCandidateStrategy.select_guess(&space, &History::new());
        assert_eq!(guess.unwrap().to_string(), "ABC");
    }

    #[test]
    fn strategies_return_none_on_empty_space() {
        let empty = CandidateSpace::default();
        let history = History::new();

        for name in StrategyType::NAMES {
            let mut strategy = StrategyType::from_name(name, Some(1));
            assert!(strategy.select_guess(&empty, &history).is_none(), "{name}");
        }
    }

    #[test]
    fn random_strategy_picks_candidates() {
        let space = small_space();
        let mut strategy = RandomStrategy::seeded(99);

        for _ in 0..20 {
            let guess = strategy.select_guess(&space, &History::new()).unwrap();
            assert!(space.contains(&guess));
        }
    }

    #[test]
    fn random_strategy_is_reproducible_with_seed() {
        let space = small_space();
        let history = History::new();
        let mut a = RandomStrategy::seeded(5);
        let mut b = RandomStrategy::seeded(5);

        for _ in 0..10 {
            assert_eq!(
                a.select_guess(&space, &history),
                b.select_guess(&space, &history)
            );
        }
    }

    #[test]
    fn minimax_strategy_picks_a_candidate() {
        let space = small_space();
        let guess = MinimaxStrategy::default()
            .select_guess(&space, &History::new())
            .unwrap();
        assert!(space.contains(&guess));
    }

    #[test]
    fn minimax_falls_back_above_limit() {
        let space = small_space();
        let guess = MinimaxStrategy::new(3)
            .select_guess(&space, &History::new())
            .unwrap();
        assert_eq!(&guess, space.first().unwrap());
    }

    #[test]
    fn from_name_defaults_to_first() {
        assert_eq!(StrategyType::from_name("bogus", None).name(), "first");
        assert_eq!(StrategyType::from_name("random", Some(3)).name(), "random");
        assert_eq!(StrategyType::from_name("minimax", None).name(), "minimax");
    }
}

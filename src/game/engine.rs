//! Turn state machine
//!
//! [`Game`] owns the state and the guess strategy. A turn is split in two so
//! that verdicts can come from anywhere: [`Game::propose`] asks the strategy
//! for a guess, and [`Game::apply_verdict`] records the verdict and narrows the
//! space. [`run_game`] drives both halves against a [`VerdictSource`], which is
//! the only place the secret lives.

use super::state::{ExhaustionReason, GameOutcome, GameState, GuessRecord, TurnPhase};
use crate::core::{Code, PlayConfig, SolverError, Verdict};
use crate::solver::Strategy;
use crate::space::{self, CandidateSpace};
use log::{debug, info, trace, warn};

/// Something that can score guesses against a secret
pub trait VerdictSource {
    fn verdict_for(&mut self, guess: &Code) -> Verdict;
}

/// Verdict source that holds the secret for self-play
#[derive(Debug, Clone)]
pub struct SecretKeeper {
    secret: Code,
}

impl SecretKeeper {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret }
    }

    /// Reveal the secret once the game is over
    #[must_use]
    pub fn into_secret(self) -> Code {
        self.secret
    }
}

impl VerdictSource for SecretKeeper {
    fn verdict_for(&mut self, guess: &Code) -> Verdict {
        Verdict::score(guess, &self.secret)
    }
}

/// What happened on one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub record: GuessRecord,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Phase after the turn
    pub phase: TurnPhase,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game<S: Strategy> {
    strategy: S,
    state: GameState,
    max_turns: usize,
}

impl<S: Strategy> Game<S> {
    /// Start a game, generating the full candidate space
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfiguration` if the configuration is
    /// invalid or its code space exceeds the configured limit.
    pub fn new(config: &PlayConfig, strategy: S) -> Result<Self, SolverError> {
        config.validate()?;
        let space = space::generate(&config.game)?;
        Ok(Self::with_space(config, space, strategy))
    }

    /// Start a game from an already generated space
    ///
    /// Lets callers playing many games share one generated space.
    #[must_use]
    pub fn with_space(config: &PlayConfig, space: CandidateSpace, strategy: S) -> Self {
        let mut state = GameState::new(config.game, space);
        if config.max_turns == 0 {
            state.phase = TurnPhase::Exhausted(ExhaustionReason::TurnLimitReached);
        }
        Self {
            strategy,
            state,
            max_turns: config.max_turns,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Replace the state wholesale, e.g. to undo back to a snapshot
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
    }

    /// Ask the strategy for the next guess
    ///
    /// Returns `None` once the game is over. A strategy that cannot produce a
    /// guess ends the game as exhausted.
    pub fn propose(&mut self) -> Option<Code> {
        if self.state.phase != TurnPhase::AwaitingGuess {
            return None;
        }

        let guess = self
            .strategy
            .select_guess(&self.state.space, &self.state.history);

        match &guess {
            Some(code) => trace!(
                "{} proposes {code} from {} candidates",
                self.strategy.name(),
                self.state.space.len()
            ),
            None => {
                warn!("{} produced no guess", self.strategy.name());
                self.state.phase = TurnPhase::Exhausted(ExhaustionReason::PoolExhausted);
            }
        }

        guess
    }

    /// Record the verdict for `guess` and advance the state machine
    ///
    /// The guess does not have to come from [`Game::propose`]; any legal code
    /// may be played.
    ///
    /// # Errors
    /// Returns `SolverError::GameOver` if the game already ended,
    /// `SolverError::InvalidCode` if the guess is not legal in this game, and
    /// `SolverError::InconsistentVerdict` if the verdict cannot occur for the
    /// code length. The state is unchanged on error.
    pub fn apply_verdict(&mut self, guess: Code, verdict: Verdict) -> Result<TurnReport, SolverError> {
        if self.state.phase != TurnPhase::AwaitingGuess {
            return Err(SolverError::GameOver);
        }

        let config = self.state.config;
        config.check_code(&guess)?;
        let verdict = Verdict::checked(verdict.black(), verdict.white(), config.length)?;

        let candidates_before = self.state.space.len();
        self.state.turn += 1;
        self.state.phase = TurnPhase::Scored;
        let record = self.state.history.record(guess, verdict).clone();
        debug!("Turn {}: {} scored {}", record.turn, record.guess, verdict);

        if verdict.is_win(config.length) {
            self.state.phase = TurnPhase::Won;
            info!("Solved in {} turns: {}", record.turn, record.guess);
            return Ok(self.report(record, candidates_before));
        }

        match space::narrow(&self.state.space, &record.guess, verdict) {
            Ok(narrowed) => {
                self.state.space = narrowed;
                self.state.phase = TurnPhase::Narrowed;
            }
            Err(_) => {
                self.state.space = CandidateSpace::default();
                self.state.phase = TurnPhase::Exhausted(ExhaustionReason::PoolExhausted);
                warn!("Candidate space exhausted on turn {}", record.turn);
                return Ok(self.report(record, candidates_before));
            }
        }

        if self.state.turn >= self.max_turns {
            self.state.phase = TurnPhase::Exhausted(ExhaustionReason::TurnLimitReached);
            info!("Turn limit of {} reached", self.max_turns);
        } else {
            self.state.phase = TurnPhase::AwaitingGuess;
        }

        Ok(self.report(record, candidates_before))
    }

    fn report(&self, record: GuessRecord, candidates_before: usize) -> TurnReport {
        TurnReport {
            record,
            candidates_before,
            candidates_after: self.state.space.len(),
            phase: self.state.phase,
        }
    }
}

/// A finished game
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub turns: Vec<TurnReport>,
}

/// Play a full game against `source`
///
/// Terminates within `config.max_turns` turns.
///
/// # Errors
/// Returns `SolverError::InvalidConfiguration` before any turn if the
/// configuration is rejected.
pub fn run_game<S, V>(config: &PlayConfig, strategy: S, source: &mut V) -> Result<GameSummary, SolverError>
where
    S: Strategy,
    V: VerdictSource,
{
    let game = Game::new(config, strategy)?;
    Ok(play_out(game, source))
}

/// Drive an already constructed game to its end
pub fn play_out<S, V>(mut game: Game<S>, source: &mut V) -> GameSummary
where
    S: Strategy,
    V: VerdictSource,
{
    let mut turns = Vec::new();

    while let Some(guess) = game.propose() {
        let verdict = source.verdict_for(&guess);
        match game.apply_verdict(guess, verdict) {
            Ok(report) => turns.push(report),
            Err(e) => {
                // A proposed guess scored by the source is always legal
                warn!("Rejected turn: {e}");
                game.state.phase = TurnPhase::Exhausted(ExhaustionReason::PoolExhausted);
                break;
            }
        }
    }

    let outcome = game.state.outcome().unwrap_or(GameOutcome::Exhausted {
        turns: game.state.turn,
        reason: ExhaustionReason::PoolExhausted,
    });

    GameSummary { outcome, turns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::solver::{FirstCandidateStrategy, RandomStrategy};

    fn play_config(colours: usize, length: usize, repeats: bool, max_turns: usize) -> PlayConfig {
        let mut config = PlayConfig::new(GameConfig::new(colours, length, repeats));
        config.max_turns = max_turns;
        config
    }

    fn code(text: &str) -> Code {
        Code::new(text).unwrap()
    }

    /// Verdict source that returns whatever it is told, ignoring the guess
    struct Scripted(Vec<Verdict>);

    impl VerdictSource for Scripted {
        fn verdict_for(&mut self, _guess: &Code) -> Verdict {
            self.0.remove(0)
        }
    }

    #[test]
    fn wins_on_first_turn_when_secret_is_first_candidate() {
        let config = play_config(6, 4, true, 10);
        let mut keeper = SecretKeeper::new(code("AAAA"));

        let summary = run_game(&config, FirstCandidateStrategy, &mut keeper).unwrap();

        assert_eq!(
            summary.outcome,
            GameOutcome::Won {
                turn: 1,
                secret: code("AAAA")
            }
        );
        assert_eq!(summary.turns[0].record.verdict, Verdict::winning(4));
    }

    #[test]
    fn solves_every_secret_of_small_game() {
        let config = play_config(4, 3, false, 10);
        let space = space::generate(&config.game).unwrap();

        for secret in &space {
            let game = Game::with_space(&config, space.clone(), FirstCandidateStrategy);
            let summary = play_out(game, &mut SecretKeeper::new(secret.clone()));
            match summary.outcome {
                GameOutcome::Won { secret: found, .. } => assert_eq!(&found, secret),
                other => panic!("{secret}: {other:?}"),
            }
        }
    }

    #[test]
    fn secret_survives_every_turn() {
        let config = play_config(6, 4, true, 12);
        let secret = code("FEDA");
        let mut game = Game::new(&config, RandomStrategy::seeded(11)).unwrap();
        let mut keeper = SecretKeeper::new(secret.clone());

        while let Some(guess) = game.propose() {
            let verdict = keeper.verdict_for(&guess);
            let report = game.apply_verdict(guess, verdict).unwrap();
            assert!(report.candidates_after <= report.candidates_before);
            if report.phase != TurnPhase::Won {
                assert!(game.state().space().contains(&secret));
            }
        }
        assert!(game.state().outcome().unwrap().is_won());
    }

    #[test]
    fn reported_phases_are_never_transient() {
        let config = play_config(4, 3, true, 10);
        let mut game = Game::new(&config, FirstCandidateStrategy).unwrap();
        let mut keeper = SecretKeeper::new(code("DCB"));

        while let Some(guess) = game.propose() {
            let verdict = keeper.verdict_for(&guess);
            let report = game.apply_verdict(guess, verdict).unwrap();

            assert!(!matches!(report.phase, TurnPhase::Scored | TurnPhase::Narrowed));
            assert_eq!(report.phase, game.state().phase());
        }
        assert_eq!(game.state().phase(), TurnPhase::Won);
    }

    #[test]
    fn turn_limit_ends_game() {
        let config = play_config(6, 4, true, 2);
        let mut keeper = SecretKeeper::new(code("FFFF"));

        let summary = run_game(&config, FirstCandidateStrategy, &mut keeper).unwrap();

        assert_eq!(
            summary.outcome,
            GameOutcome::Exhausted {
                turns: 2,
                reason: ExhaustionReason::TurnLimitReached
            }
        );
        assert_eq!(summary.turns.len(), 2);
    }

    #[test]
    fn zero_turn_limit_plays_nothing() {
        let config = play_config(6, 4, true, 0);
        let mut keeper = SecretKeeper::new(code("ABCD"));

        let summary = run_game(&config, FirstCandidateStrategy, &mut keeper).unwrap();

        assert!(summary.turns.is_empty());
        assert_eq!(
            summary.outcome,
            GameOutcome::Exhausted {
                turns: 0,
                reason: ExhaustionReason::TurnLimitReached
            }
        );
    }

    #[test]
    fn inconsistent_verdicts_exhaust_pool() {
        let config = play_config(4, 4, false, 10);
        // ABCD then claim no shared colours: impossible when every code uses all four
        let mut source = Scripted(vec![Verdict::new(0, 0)]);

        let summary = run_game(&config, FirstCandidateStrategy, &mut source).unwrap();

        assert_eq!(
            summary.outcome,
            GameOutcome::Exhausted {
                turns: 1,
                reason: ExhaustionReason::PoolExhausted
            }
        );
        assert_eq!(summary.turns[0].candidates_after, 0);
    }

    #[test]
    fn invalid_configuration_plays_no_turn() {
        let config = play_config(3, 4, false, 10);
        let mut keeper = SecretKeeper::new(code("ABCA"));

        let result = run_game(&config, FirstCandidateStrategy, &mut keeper);
        assert!(matches!(result, Err(SolverError::InvalidConfiguration(_))));
    }

    #[test]
    fn apply_verdict_rejects_bad_input_without_changing_state() {
        let config = play_config(6, 4, false, 10);
        let mut game = Game::new(&config, FirstCandidateStrategy).unwrap();
        let before = game.state().clone();

        assert!(matches!(
            game.apply_verdict(code("ABC"), Verdict::new(0, 0)),
            Err(SolverError::InvalidCode(_))
        ));
        assert!(matches!(
            game.apply_verdict(code("ABCD"), Verdict::new(3, 1)),
            Err(SolverError::InconsistentVerdict(_))
        ));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn apply_verdict_after_win_is_game_over() {
        let config = play_config(6, 4, false, 10);
        let mut game = Game::new(&config, FirstCandidateStrategy).unwrap();

        let guess = game.propose().unwrap();
        game.apply_verdict(guess.clone(), Verdict::winning(4)).unwrap();

        assert_eq!(game.propose(), None);
        assert_eq!(
            game.apply_verdict(guess, Verdict::winning(4)),
            Err(SolverError::GameOver)
        );
    }

    #[test]
    fn restore_rewinds_to_snapshot() {
        let config = play_config(6, 4, false, 10);
        let mut game = Game::new(&config, FirstCandidateStrategy).unwrap();
        let snapshot = game.state().clone();

        let guess = game.propose().unwrap();
        game.apply_verdict(guess, Verdict::new(0, 0)).unwrap();
        assert_eq!(game.state().turn(), 1);

        game.restore(snapshot.clone());
        assert_eq!(game.state(), &snapshot);
        assert_eq!(game.state().turn(), 0);
    }

    #[test]
    fn manual_guess_need_not_be_the_suggestion() {
        let config = play_config(6, 4, true, 10);
        let mut game = Game::new(&config, FirstCandidateStrategy).unwrap();
        let secret = code("ABCD");

        let guess = code("EEFF");
        let verdict = Verdict::score(&guess, &secret);
        let report = game.apply_verdict(guess, verdict).unwrap();

        assert_eq!(report.candidates_before, 1296);
        assert_eq!(report.candidates_after, 256);
        assert!(game.state().space().contains(&secret));
    }
}

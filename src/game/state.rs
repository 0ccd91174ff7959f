//! Game state: turn counter, candidate space, and the guess history

use crate::core::{Code, GameConfig, Verdict};
use crate::space::CandidateSpace;
use std::fmt;

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    /// 1-based turn the guess was played on
    pub turn: usize,
    pub guess: Code,
    pub verdict: Verdict,
}

/// Append-only record of every scored guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<GuessRecord>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record for the next turn and return it
    pub(crate) fn record(&mut self, guess: Code, verdict: Verdict) -> &GuessRecord {
        let turn = self.records.len() + 1;
        self.records.push(GuessRecord {
            turn,
            guess,
            verdict,
        });
        &self.records[turn - 1]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GuessRecord> {
        self.records.iter()
    }

    /// Check whether a code has already been guessed
    #[must_use]
    pub fn contains_guess(&self, code: &Code) -> bool {
        self.records.iter().any(|r| &r.guess == code)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Why a game ended without a win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExhaustionReason {
    /// The turn limit was reached; a normal losing outcome
    TurnLimitReached,
    /// No candidate is consistent with the verdicts received
    PoolExhausted,
}

impl fmt::Display for ExhaustionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnLimitReached => write!(f, "turn limit reached"),
            Self::PoolExhausted => write!(f, "no consistent candidates remain"),
        }
    }
}

/// Position in the turn state machine
///
/// `AwaitingGuess → Scored → Narrowed → (AwaitingGuess | Won | Exhausted)`
///
/// `Scored` and `Narrowed` are transient: they only hold while
/// [`Game::apply_verdict`](super::Game::apply_verdict) runs, so callers only
/// ever observe `AwaitingGuess` or a terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingGuess,
    /// Verdict recorded, space not yet narrowed
    Scored,
    /// Space narrowed, turn limit not yet checked
    Narrowed,
    Won,
    Exhausted(ExhaustionReason),
}

impl TurnPhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted(_))
    }
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won { turn: usize, secret: Code },
    Exhausted { turns: usize, reason: ExhaustionReason },
}

impl GameOutcome {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }

    /// Number of turns played
    #[must_use]
    pub const fn turns(&self) -> usize {
        match self {
            Self::Won { turn, .. } => *turn,
            Self::Exhausted { turns, .. } => *turns,
        }
    }
}

/// Everything the solving side knows about a game in progress
///
/// The secret is not part of the state; verdicts arrive from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) turn: usize,
    pub(crate) space: CandidateSpace,
    pub(crate) history: History,
    pub(crate) phase: TurnPhase,
}

impl GameState {
    /// Fresh state: turn 0, empty history, full space
    #[must_use]
    pub const fn new(config: GameConfig, space: CandidateSpace) -> Self {
        Self {
            config,
            turn: 0,
            space,
            history: History::new(),
            phase: TurnPhase::AwaitingGuess,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of turns completed
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn space(&self) -> &CandidateSpace {
        &self.space
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The outcome, once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            TurnPhase::Won => self.history.last().map(|r| GameOutcome::Won {
                turn: r.turn,
                secret: r.guess.clone(),
            }),
            TurnPhase::Exhausted(reason) => Some(GameOutcome::Exhausted {
                turns: self.turn,
                reason,
            }),
            TurnPhase::AwaitingGuess | TurnPhase::Scored | TurnPhase::Narrowed => None,
        }
    }
}

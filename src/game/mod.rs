//! Game loop
//!
//! Turn bookkeeping, the turn state machine, and self-play against a
//! known secret.

mod engine;
mod state;

pub use engine::{Game, GameSummary, SecretKeeper, TurnReport, VerdictSource, play_out, run_game};
pub use state::{ExhaustionReason, GameOutcome, GameState, GuessRecord, History, TurnPhase};

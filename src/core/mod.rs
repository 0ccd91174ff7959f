//! Core domain types for Mastermind
//!
//! Codes, verdicts, configuration, and the engine's error types. Everything
//! here is pure and has no dependencies outside the standard library.

mod code;
mod config;
mod error;
mod verdict;

pub use code::{ALPHABET, Code, CodeError, MAX_COLOURS, Symbol};
pub use config::{DEFAULT_MAX_TURNS, DEFAULT_SPACE_LIMIT, GameConfig, PlayConfig};
pub use error::{ConfigError, SolverError};
pub use verdict::{Verdict, VerdictError};

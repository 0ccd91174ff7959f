//! Mastermind Solver
//!
//! A Mastermind codebreaker that keeps every code still consistent with the
//! feedback so far and always guesses from that set.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, GameConfig, PlayConfig};
//! use mastermind_solver::game::{GameOutcome, SecretKeeper, run_game};
//! use mastermind_solver::solver::FirstCandidateStrategy;
//!
//! let config = PlayConfig::new(GameConfig::new(6, 4, true));
//! let mut keeper = SecretKeeper::new(Code::new("CAFE").unwrap());
//!
//! let summary = run_game(&config, FirstCandidateStrategy, &mut keeper).unwrap();
//! assert!(matches!(summary.outcome, GameOutcome::Won { .. }));
//! ```

// Core domain types
pub mod core;

// Code space generation and consistency filtering
pub mod space;

// Guess selection strategies
pub mod solver;

// Turn state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;

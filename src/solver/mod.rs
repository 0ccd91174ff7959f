//! Mastermind guess selection
//!
//! Strategies choose the next guess from the surviving candidate space.

pub mod minimax;
pub mod strategy;

pub use strategy::{
    FirstCandidateStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType,
};

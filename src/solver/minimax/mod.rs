//! Minimax guess selection
//!
//! Worst-case minimization over verdict partitions, plus the partition
//! metrics shown alongside suggestions.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_max_remaining, calculate_metrics};
pub use selector::select_best_guess;

//! Minimax-based guess selection
//!
//! Picks the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select the guess with the lowest worst-case remaining candidates
///
/// Ties go to the earliest guess in `guess_pool`, so the result is
/// deterministic for a given pool order. Returns `None` if the pool is empty.
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Code], candidates: &[Code]) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .map(|guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|&(_, max)| max)
}

//! Consistency narrowing
//!
//! After a guess is scored, the only codes that can still be the secret are
//! the ones that would have produced the same verdict for that guess. The
//! filter keeps exactly those and drops the guess itself.
//!
//! Before the full score, a candidate is checked against a cheap necessary
//! condition: every distinct symbol the guess and candidate share contributes
//! at least one peg, so the shared-symbol count can never exceed
//! `black + white`. Rejecting on that bound never discards a consistent code.

use super::CandidateSpace;
use crate::core::{Code, SolverError, Verdict};
use log::{debug, trace, warn};
use rayon::prelude::*;

/// Spaces at least this large are filtered on the rayon pool
const PARALLEL_THRESHOLD: usize = 20_000;

/// Cheap necessary condition for consistency
#[inline]
fn may_be_consistent(guess: &Code, observed: Verdict, candidate: &Code) -> bool {
    (guess.mask() & candidate.mask()).count_ones() as usize <= observed.total()
}

/// Check if `candidate` could be the secret given `guess` scored `observed`
///
/// The guess itself is never consistent: it was not a win, so it is not the
/// secret.
#[inline]
#[must_use]
pub fn is_consistent(guess: &Code, observed: Verdict, candidate: &Code) -> bool {
    candidate != guess
        && may_be_consistent(guess, observed, candidate)
        && Verdict::score(guess, candidate) == observed
}

/// Narrow `space` to the codes consistent with `guess` scoring `observed`
///
/// Returns a new space in the same canonical order.
///
/// # Errors
/// Returns `SolverError::PoolExhausted` if no candidate survives. Narrowing
/// with the winning verdict always exhausts the space, since the guess is
/// removed; callers stop at a win before narrowing.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameConfig, Verdict};
/// use mastermind_solver::space::{generate, narrow};
///
/// let space = generate(&GameConfig::new(6, 4, true)).unwrap();
/// let guess = Code::new("EEFF").unwrap();
/// let narrowed = narrow(&space, &guess, Verdict::new(0, 0)).unwrap();
///
/// assert_eq!(narrowed.len(), 4 * 4 * 4 * 4);
/// assert!(narrowed.iter().all(|c| !c.to_string().contains(['E', 'F'])));
/// ```
pub fn narrow(
    space: &CandidateSpace,
    guess: &Code,
    observed: Verdict,
) -> Result<CandidateSpace, SolverError> {
    let survivors: Vec<Code> = if space.len() >= PARALLEL_THRESHOLD {
        trace!("Filtering {} candidates in parallel", space.len());
        space
            .codes()
            .par_iter()
            .filter(|candidate| is_consistent(guess, observed, candidate))
            .cloned()
            .collect()
    } else {
        space
            .iter()
            .filter(|candidate| is_consistent(guess, observed, candidate))
            .cloned()
            .collect()
    };

    debug!(
        "Narrowed {} -> {} candidates with {guess} scoring {observed}",
        space.len(),
        survivors.len()
    );

    if survivors.is_empty() {
        warn!("No candidates consistent with {guess} scoring {observed}");
        return Err(SolverError::PoolExhausted);
    }

    Ok(CandidateSpace::from_sorted(survivors))
}

/// Narrow `space` by every (guess, verdict) pair in turn
///
/// # Errors
/// Returns `SolverError::PoolExhausted` as soon as a step empties the space.
pub fn narrow_all<'a, I>(space: &CandidateSpace, pairs: I) -> Result<CandidateSpace, SolverError>
where
    I: IntoIterator<Item = (&'a Code, Verdict)>,
{
    pairs
        .into_iter()
        .try_fold(space.clone(), |current, (guess, verdict)| {
            narrow(&current, guess, verdict)
        })
}

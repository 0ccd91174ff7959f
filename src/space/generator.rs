//! Code space generation
//!
//! Enumerates every legal code for a configuration in lexicographic order,
//! either lazily through [`CodeIter`] or all at once through [`generate`], and
//! samples single codes uniformly without enumerating anything.

use super::CandidateSpace;
use crate::core::{Code, ConfigError, GameConfig};
use log::debug;
use rand::Rng;
use std::iter::FusedIterator;

/// Lazy iterator over every legal code of a configuration
///
/// Codes come out in lexicographic order: an odometer over the alphabet when
/// repeats are allowed, the next k-permutation otherwise. Cloning the
/// iterator restarts from the clone's position.
#[derive(Debug, Clone)]
pub struct CodeIter {
    colours: u8,
    repeats: bool,
    current: Option<Vec<u8>>,
}

impl CodeIter {
    /// Start iterating the codes of `config`
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let first = if config.repeats {
            vec![0; config.length]
        } else {
            (0..config.length as u8).collect()
        };

        Ok(Self {
            colours: config.colours as u8,
            repeats: config.repeats,
            current: Some(first),
        })
    }
}

impl Iterator for CodeIter {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        let current = self.current.take()?;
        let code = Code::from_indices(&current);

        self.current = if self.repeats {
            advance_with_repeats(current, self.colours)
        } else {
            advance_distinct(current, self.colours)
        };

        Some(code)
    }
}

impl FusedIterator for CodeIter {}

/// Odometer step: bump the last digit, carrying leftwards
fn advance_with_repeats(mut digits: Vec<u8>, colours: u8) -> Option<Vec<u8>> {
    for i in (0..digits.len()).rev() {
        if digits[i] + 1 < colours {
            digits[i] += 1;
            return Some(digits);
        }
        digits[i] = 0;
    }
    None
}

/// Lexicographic successor among sequences of distinct digits
///
/// Finds the rightmost position that can take a larger unused digit, sets it,
/// then refills everything to its right with the smallest unused digits.
fn advance_distinct(mut digits: Vec<u8>, colours: u8) -> Option<Vec<u8>> {
    for i in (0..digits.len()).rev() {
        let used = digits[..i].iter().fold(0u32, |m, &d| m | (1 << d));

        let Some(next) = (digits[i] + 1..colours).find(|&d| used & (1 << d) == 0) else {
            continue;
        };

        digits[i] = next;
        let mut used = used | (1 << next);
        for slot in &mut digits[i + 1..] {
            // colours >= length, so an unused digit always exists
            let smallest = (0..colours).find(|&d| used & (1 << d) == 0)?;
            *slot = smallest;
            used |= 1 << smallest;
        }
        return Some(digits);
    }
    None
}

/// Build the full candidate space for a configuration
///
/// The result is in lexicographic order and identical for identical inputs.
///
/// # Errors
/// Returns `ConfigError` if the configuration is invalid.
///
/// # Examples
/// ```
/// use mastermind_solver::core::GameConfig;
/// use mastermind_solver::space::generate;
///
/// let space = generate(&GameConfig::new(4, 4, false)).unwrap();
/// assert_eq!(space.len(), 24);
/// assert_eq!(space.first().unwrap().to_string(), "ABCD");
/// ```
pub fn generate(config: &GameConfig) -> Result<CandidateSpace, ConfigError> {
    let iter = CodeIter::new(config)?;

    let mut codes = Vec::new();
    if let Some(size) = config.space_size().and_then(|s| usize::try_from(s).ok()) {
        codes.reserve_exact(size);
    }
    codes.extend(iter);

    debug!(
        "Generated {} codes ({} colours, length {}, repeats {})",
        codes.len(),
        config.colours,
        config.length,
        config.repeats
    );

    Ok(CandidateSpace::from_sorted(codes))
}

/// Draw one legal code uniformly at random
///
/// With repeats every position is drawn independently; without repeats the
/// code is a uniformly random ordered selection of distinct colours.
///
/// # Errors
/// Returns `ConfigError` if the configuration is invalid.
pub fn random_code<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Code, ConfigError> {
    config.validate()?;

    let indices: Vec<u8> = if config.repeats {
        (0..config.length)
            .map(|_| rng.random_range(0..config.colours) as u8)
            .collect()
    } else {
        rand::seq::index::sample(rng, config.colours, config.length)
            .into_iter()
            .map(|i| i as u8)
            .collect()
    };

    Ok(Code::from_indices(&indices))
}

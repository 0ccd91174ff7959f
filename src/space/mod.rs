//! Candidate space construction and narrowing
//!
//! The generator builds the initial universe of codes once per game; the
//! filter replaces it with a smaller space after every scored guess.

mod candidates;
pub mod filter;
pub mod generator;

pub use candidates::CandidateSpace;
pub use filter::{is_consistent, narrow, narrow_all};
pub use generator::{CodeIter, generate, random_code};

//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod space;

pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, resolve_secret, solve_code};
pub use space::{SpaceReport, space_report};

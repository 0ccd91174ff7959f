//! Error types shared by the solving engine

use super::code::CodeError;
use super::verdict::VerdictError;
use std::fmt;

/// The colours/length/repeats combination cannot produce a usable code space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NoColours,
    NoLength,
    TooManyColours { colours: usize, max: usize },
    LengthExceedsColours { length: usize, colours: usize },
    /// `size` is `None` when the space does not even fit in a `u64`
    SpaceTooLarge { size: Option<u64>, limit: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColours => write!(f, "At least one colour is required"),
            Self::NoLength => write!(f, "Code length must be at least 1"),
            Self::TooManyColours { colours, max } => {
                write!(f, "At most {max} colours are supported, got {colours}")
            }
            Self::LengthExceedsColours { length, colours } => write!(
                f,
                "Without repeats the code length ({length}) cannot exceed the colours ({colours})"
            ),
            Self::SpaceTooLarge {
                size: Some(size),
                limit,
            } => write!(f, "Code space of {size} codes exceeds the limit of {limit}"),
            Self::SpaceTooLarge { size: None, limit } => {
                write!(f, "Code space is astronomically larger than the limit of {limit}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors surfaced by the game engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Configuration rejected before any turn was played
    InvalidConfiguration(ConfigError),
    /// The candidate space became empty: a verdict was inconsistent with the
    /// earlier ones, or the filter discarded the secret
    PoolExhausted,
    /// A guess that is not legal in the game configuration
    InvalidCode(CodeError),
    /// A verdict no pair of codes of this length can produce
    InconsistentVerdict(VerdictError),
    /// The game already reached a terminal state
    GameOver,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "Invalid configuration: {e}"),
            Self::PoolExhausted => write!(
                f,
                "No candidates remain: the feedback received is inconsistent"
            ),
            Self::InvalidCode(e) => write!(f, "Invalid guess: {e}"),
            Self::InconsistentVerdict(e) => write!(f, "{e}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            Self::InvalidCode(e) => Some(e),
            Self::InconsistentVerdict(e) => Some(e),
            Self::PoolExhausted | Self::GameOver => None,
        }
    }
}

impl From<ConfigError> for SolverError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}

impl From<CodeError> for SolverError {
    fn from(e: CodeError) -> Self {
        Self::InvalidCode(e)
    }
}

impl From<VerdictError> for SolverError {
    fn from(e: VerdictError) -> Self {
        Self::InconsistentVerdict(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::LengthExceedsColours {
                length: 5,
                colours: 4
            }
            .to_string(),
            "Without repeats the code length (5) cannot exceed the colours (4)"
        );
        assert_eq!(
            ConfigError::SpaceTooLarge {
                size: Some(10),
                limit: 5
            }
            .to_string(),
            "Code space of 10 codes exceeds the limit of 5"
        );
    }

    #[test]
    fn solver_error_wraps_sources() {
        use std::error::Error;

        let err = SolverError::from(ConfigError::NoColours);
        assert_eq!(err, SolverError::InvalidConfiguration(ConfigError::NoColours));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Invalid configuration"));
        assert!(SolverError::PoolExhausted.source().is_none());
    }
}

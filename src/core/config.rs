//! Game configuration and validation

use super::code::{Code, CodeError, MAX_COLOURS, Symbol};
use super::error::ConfigError;

/// Default number of turns before a game is declared lost
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Default upper bound on the number of codes materialized for a game
pub const DEFAULT_SPACE_LIMIT: u64 = 5_000_000;

/// Shape of the code space: alphabet size, code length, repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub colours: usize,
    pub length: usize,
    pub repeats: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(colours: usize, length: usize, repeats: bool) -> Self {
        Self {
            colours,
            length,
            repeats,
        }
    }

    /// Check that the configuration describes a non-empty code space
    ///
    /// # Errors
    /// Returns `ConfigError` if there are no colours, the length is zero,
    /// the alphabet exceeds 26 symbols, or (without repeats) the length
    /// exceeds the number of colours.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.colours == 0 {
            return Err(ConfigError::NoColours);
        }
        if self.length == 0 {
            return Err(ConfigError::NoLength);
        }
        if self.colours > MAX_COLOURS {
            return Err(ConfigError::TooManyColours {
                colours: self.colours,
                max: MAX_COLOURS,
            });
        }
        if !self.repeats && self.length > self.colours {
            return Err(ConfigError::LengthExceedsColours {
                length: self.length,
                colours: self.colours,
            });
        }
        Ok(())
    }

    /// Number of legal codes, or `None` if it does not fit in a `u64`
    ///
    /// - repeats: `colours ^ length`
    /// - no repeats: `colours! / (colours - length)!`
    ///
    /// Returns `Some(0)` for configurations that admit no codes.
    #[must_use]
    pub fn space_size(&self) -> Option<u64> {
        if self.validate().is_err() {
            return Some(0);
        }

        let colours = self.colours as u64;
        if self.repeats {
            let exponent = u32::try_from(self.length).ok()?;
            colours.checked_pow(exponent)
        } else {
            (0..self.length as u64).try_fold(1u64, |acc, i| acc.checked_mul(colours - i))
        }
    }

    /// Parse a code and check it is legal in this configuration
    ///
    /// # Errors
    /// Returns `CodeError` if the text is not a code, has the wrong length,
    /// uses a symbol beyond the configured colours, or repeats a symbol when
    /// repeats are not allowed.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4, false);
    /// assert!(config.parse_code("FACE").is_ok());
    /// assert!(config.parse_code("FADE").is_ok());
    /// assert!(config.parse_code("FEED").is_err()); // repeated E
    /// assert!(config.parse_code("GAFE").is_err()); // G is the 7th colour
    /// ```
    pub fn parse_code(&self, text: &str) -> Result<Code, CodeError> {
        let code: Code = text.parse()?;
        self.check_code(&code)?;
        Ok(code)
    }

    /// Check that an existing code is legal in this configuration
    ///
    /// # Errors
    /// See [`GameConfig::parse_code`].
    pub fn check_code(&self, code: &Code) -> Result<(), CodeError> {
        if code.len() != self.length {
            return Err(CodeError::WrongLength {
                expected: self.length,
                got: code.len(),
            });
        }

        if let Some(symbol) = code.symbols().iter().find(|s| s.index() >= self.colours) {
            return Err(CodeError::SymbolOutOfRange {
                symbol: symbol.letter(),
                colours: self.colours,
            });
        }

        if !self.repeats && code.has_repeats() {
            let counts = code.symbol_counts();
            let repeated = code
                .symbols()
                .iter()
                .copied()
                .find(|s| counts[s.index()] > 1)
                .map_or('?', Symbol::letter);
            return Err(CodeError::RepeatedSymbol(repeated));
        }

        Ok(())
    }
}

impl Default for GameConfig {
    /// Classic Mastermind: six colours, four positions, no repeats
    fn default() -> Self {
        Self::new(6, 4, false)
    }
}

/// Configuration for playing a full game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub game: GameConfig,
    pub max_turns: usize,
    /// Largest code space a game may materialize
    pub space_limit: u64,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(game: GameConfig) -> Self {
        Self {
            game,
            max_turns: DEFAULT_MAX_TURNS,
            space_limit: DEFAULT_SPACE_LIMIT,
        }
    }

    /// Validate the game shape and check the space is tractable
    ///
    /// Returns the size of the code space on success.
    ///
    /// # Errors
    /// Returns `ConfigError` if the game configuration is invalid or its code
    /// space exceeds `space_limit`.
    pub fn validate(&self) -> Result<u64, ConfigError> {
        self.game.validate()?;

        match self.game.space_size() {
            Some(size) if size <= self.space_limit => Ok(size),
            size => Err(ConfigError::SpaceTooLarge {
                size,
                limit: self.space_limit,
            }),
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_classic_game() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::new(26, 26, false).validate().is_ok());
        assert!(GameConfig::new(1, 8, true).validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_shapes() {
        assert_eq!(
            GameConfig::new(0, 4, true).validate(),
            Err(ConfigError::NoColours)
        );
        assert_eq!(
            GameConfig::new(6, 0, true).validate(),
            Err(ConfigError::NoLength)
        );
        assert_eq!(
            GameConfig::new(27, 4, true).validate(),
            Err(ConfigError::TooManyColours {
                colours: 27,
                max: 26
            })
        );
        assert_eq!(
            GameConfig::new(4, 5, false).validate(),
            Err(ConfigError::LengthExceedsColours {
                length: 5,
                colours: 4
            })
        );
        // Same shape is fine once repeats are allowed
        assert!(GameConfig::new(4, 5, true).validate().is_ok());
    }

    #[test]
    fn space_size_formulas() {
        assert_eq!(GameConfig::new(6, 4, true).space_size(), Some(1296));
        assert_eq!(GameConfig::new(8, 5, false).space_size(), Some(6720));
        assert_eq!(GameConfig::new(4, 4, false).space_size(), Some(24));
        assert_eq!(GameConfig::new(26, 1, false).space_size(), Some(26));
        assert_eq!(GameConfig::new(4, 5, false).space_size(), Some(0));
    }

    #[test]
    fn space_size_overflow_is_none() {
        assert_eq!(GameConfig::new(26, 20, true).space_size(), None);
        assert!(GameConfig::new(26, 13, false).space_size().is_some());
    }

    #[test]
    fn play_config_rejects_intractable_space() {
        let mut config = PlayConfig::new(GameConfig::new(10, 8, true));
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpaceTooLarge {
                size: Some(100_000_000),
                limit: DEFAULT_SPACE_LIMIT
            })
        );

        config.space_limit = 100_000_000;
        assert_eq!(config.validate(), Ok(100_000_000));
    }

    #[test]
    fn parse_code_checks_configuration() {
        let config = GameConfig::new(6, 4, false);

        assert_eq!(config.parse_code("abcd").unwrap().to_string(), "ABCD");
        assert_eq!(
            config.parse_code("ABC"),
            Err(CodeError::WrongLength {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            config.parse_code("ABCZ"),
            Err(CodeError::SymbolOutOfRange {
                symbol: 'Z',
                colours: 6
            })
        );
        assert_eq!(
            config.parse_code("ABCA"),
            Err(CodeError::RepeatedSymbol('A'))
        );

        let with_repeats = GameConfig::new(6, 4, true);
        assert!(with_repeats.parse_code("ABCA").is_ok());
    }
}

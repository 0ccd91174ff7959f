//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of colour symbols drawn from the alphabet
//! `A..=Z`. The alphabet size of a game selects a prefix of that alphabet.

use std::fmt;
use std::str::FromStr;

/// Display letters for symbols, in alphabet order
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest supported alphabet size
pub const MAX_COLOURS: usize = ALPHABET.len();

/// A single colour symbol
///
/// Stored as an index into [`ALPHABET`], so symbols order the same way their
/// letters do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from its alphabet index (0 = `A`)
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < MAX_COLOURS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Parse a symbol from its letter (case-insensitive)
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        ALPHABET
            .iter()
            .position(|&b| char::from(b) == upper)
            .map(|i| Self(i as u8))
    }

    /// Alphabet index of this symbol
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Display letter of this symbol
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        ALPHABET[self.0 as usize] as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
    InvalidSymbol(char),
    WrongLength { expected: usize, got: usize },
    SymbolOutOfRange { symbol: char, colours: usize },
    RepeatedSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one symbol"),
            Self::InvalidSymbol(c) => write!(f, "'{c}' is not a colour symbol (use A-Z)"),
            Self::WrongLength { expected, got } => {
                write!(f, "Code must be exactly {expected} symbols, got {got}")
            }
            Self::SymbolOutOfRange { symbol, colours } => {
                let last = ALPHABET[colours.saturating_sub(1)] as char;
                write!(f, "Symbol '{symbol}' is outside the colours A-{last}")
            }
            Self::RepeatedSymbol(c) => {
                write!(f, "Symbol '{c}' repeats but repeats are not allowed")
            }
        }
    }
}

impl std::error::Error for CodeError {}

/// An immutable Mastermind code
///
/// Alongside the symbols, a code keeps a bitmask of the distinct symbols it
/// contains (bit `i` set when symbol `i` occurs). Codes compare
/// lexicographically by symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    symbols: Box<[Symbol]>,
    mask: u32,
}

impl Code {
    /// Create a code from a string of letters
    ///
    /// Letters are case-insensitive; whitespace is not allowed.
    ///
    /// # Errors
    /// Returns `CodeError` if the string is empty or contains a character
    /// outside `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::new("abcd").unwrap();
    /// assert_eq!(code.to_string(), "ABCD");
    /// assert!(Code::new("AB1D").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        if text.is_empty() {
            return Err(CodeError::Empty);
        }

        let symbols = text
            .chars()
            .map(|c| Symbol::from_letter(c).ok_or(CodeError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_symbols(symbols))
    }

    /// Create a code from symbols
    #[must_use]
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        let mask = symbols.iter().fold(0u32, |m, s| m | (1 << s.index()));
        Self {
            symbols: symbols.into_boxed_slice(),
            mask,
        }
    }

    /// Create a code from raw alphabet indices
    ///
    /// Callers guarantee every index is below [`MAX_COLOURS`].
    pub(crate) fn from_indices(indices: &[u8]) -> Self {
        debug_assert!(indices.iter().all(|&i| (i as usize) < MAX_COLOURS));
        Self::from_symbols(indices.iter().map(|&i| Symbol(i)).collect())
    }

    /// Number of positions in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for codes built through the public constructors
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols of the code, in position order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Bitmask of the distinct symbols in the code
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Number of distinct symbols in the code
    #[inline]
    #[must_use]
    pub const fn distinct_symbols(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Check whether any symbol occurs more than once
    #[inline]
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.distinct_symbols() < self.len()
    }

    /// Check if the code contains a specific symbol
    #[inline]
    #[must_use]
    pub const fn contains(&self, symbol: Symbol) -> bool {
        self.mask & (1 << symbol.0) != 0
    }

    /// Occurrence count of every symbol, indexed by alphabet position
    #[must_use]
    pub fn symbol_counts(&self) -> [u32; MAX_COLOURS] {
        let mut counts = [0; MAX_COLOURS];
        for symbol in &self.symbols {
            counts[symbol.index()] += 1;
        }
        counts
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("ABCD").unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.to_string(), "ABCD");
        assert_eq!(code.symbols()[2], Symbol::from_letter('C').unwrap());
    }

    #[test]
    fn code_creation_lowercase_normalized() {
        assert_eq!(Code::new("abcd").unwrap(), Code::new("ABCD").unwrap());
        assert_eq!("  aBcD ".parse::<Code>().unwrap().to_string(), "ABCD");
    }

    #[test]
    fn code_creation_invalid() {
        assert_eq!(Code::new(""), Err(CodeError::Empty));
        assert_eq!(Code::new("AB3D"), Err(CodeError::InvalidSymbol('3')));
        assert_eq!(Code::new("AB D"), Err(CodeError::InvalidSymbol(' ')));
        assert_eq!(Code::new("ABÉD"), Err(CodeError::InvalidSymbol('É')));
    }

    #[test]
    fn symbol_round_trip_letters() {
        for (i, &letter) in ALPHABET.iter().enumerate() {
            let symbol = Symbol::new(i as u8).unwrap();
            assert_eq!(symbol.letter(), char::from(letter));
            assert_eq!(Symbol::from_letter(char::from(letter)), Some(symbol));
        }
        assert!(Symbol::new(26).is_none());
    }

    #[test]
    fn mask_tracks_distinct_symbols() {
        let code = Code::new("AABZ").unwrap();
        assert_eq!(code.mask(), 0b11 | (1 << 25));
        assert_eq!(code.distinct_symbols(), 3);
        assert!(code.has_repeats());
        assert!(code.contains(Symbol::from_letter('Z').unwrap()));
        assert!(!code.contains(Symbol::from_letter('C').unwrap()));
    }

    #[test]
    fn symbol_counts_with_duplicates() {
        let counts = Code::new("ABBA").unwrap().symbol_counts();
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 2);
        assert_eq!(counts.iter().sum::<u32>(), 4);
    }

    #[test]
    fn codes_order_lexicographically() {
        let mut codes = vec![
            Code::new("BA").unwrap(),
            Code::new("AB").unwrap(),
            Code::new("AA").unwrap(),
        ];
        codes.sort();
        let texts: Vec<String> = codes.iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["AA", "AB", "BA"]);
    }

    #[test]
    fn error_messages_are_readable() {
        let err = CodeError::SymbolOutOfRange {
            symbol: 'G',
            colours: 6,
        };
        assert_eq!(err.to_string(), "Symbol 'G' is outside the colours A-F");
    }
}

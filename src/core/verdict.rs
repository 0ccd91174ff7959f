//! Black/white peg verdicts
//!
//! A verdict scores a guess against a reference code:
//! - black = symbols matching in both colour and position
//! - white = symbols matching in colour only, after black pegs are accounted for
//!
//! White pegs use multiset intersection: for every symbol, the two codes share
//! `min(count in guess, count in reference)` occurrences. Subtracting the black
//! pegs from the total shared count leaves the white pegs.

use super::code::{Code, MAX_COLOURS};
use std::fmt;

/// Feedback for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verdict {
    black: usize,
    white: usize,
}

/// Error type for verdicts that cannot be parsed or cannot occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerdictError {
    Malformed(String),
    Inconsistent {
        black: usize,
        white: usize,
        length: usize,
    },
}

impl fmt::Display for VerdictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(
                f,
                "Invalid verdict '{input}': use 'black white' (e.g. '2 1') or pegs (e.g. 'BBW-')"
            ),
            Self::Inconsistent {
                black,
                white,
                length,
            } => write!(
                f,
                "No pair of {length}-symbol codes can score {black} black and {white} white"
            ),
        }
    }
}

impl std::error::Error for VerdictError {}

impl Verdict {
    /// Create a verdict without validating it against a code length
    #[inline]
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// Create a verdict that a pair of `length`-symbol codes could produce
    ///
    /// # Errors
    /// Returns `VerdictError::Inconsistent` if `black + white > length`, or for
    /// `length - 1` black with one white (the one mismatched position cannot
    /// hold a colour the other code still has unmatched).
    pub fn checked(black: usize, white: usize, length: usize) -> Result<Self, VerdictError> {
        let impossible = black.checked_add(white).is_none_or(|total| total > length)
            || (length > 0 && black == length - 1 && white == 1);
        if impossible {
            Err(VerdictError::Inconsistent {
                black,
                white,
                length,
            })
        } else {
            Ok(Self { black, white })
        }
    }

    /// The verdict of a code scored against itself
    #[inline]
    #[must_use]
    pub const fn winning(length: usize) -> Self {
        Self {
            black: length,
            white: 0,
        }
    }

    /// Exact-position matches
    #[inline]
    #[must_use]
    pub const fn black(self) -> usize {
        self.black
    }

    /// Right-colour, wrong-position matches
    #[inline]
    #[must_use]
    pub const fn white(self) -> usize {
        self.white
    }

    /// Total shared symbols (black + white)
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.black.saturating_add(self.white)
    }

    /// Check if this verdict wins a game with codes of `length` symbols
    #[inline]
    #[must_use]
    pub const fn is_win(self, length: usize) -> bool {
        self.black == length
    }

    /// Score `guess` against `reference`
    ///
    /// Both codes must have the same length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Verdict};
    ///
    /// let secret = Code::new("ABCD").unwrap();
    /// let guess = Code::new("ABDC").unwrap();
    /// assert_eq!(Verdict::score(&guess, &secret), Verdict::new(2, 2));
    /// ```
    #[must_use]
    pub fn score(guess: &Code, reference: &Code) -> Self {
        debug_assert_eq!(
            guess.len(),
            reference.len(),
            "codes must have equal length"
        );

        let mut black = 0;
        let mut guess_counts = [0u32; MAX_COLOURS];
        let mut reference_counts = [0u32; MAX_COLOURS];

        for (&g, &r) in guess.symbols().iter().zip(reference.symbols()) {
            if g == r {
                black += 1;
            }
            guess_counts[g.index()] += 1;
            reference_counts[r.index()] += 1;
        }

        // Multiset intersection of the two codes
        let shared: usize = guess_counts
            .iter()
            .zip(&reference_counts)
            .map(|(&g, &r)| g.min(r) as usize)
            .sum();

        Self {
            black,
            white: shared - black,
        }
    }

    /// Parse a verdict for codes of `length` symbols
    ///
    /// Accepts:
    /// - two counts separated by whitespace, `,` or `/` (`"2 1"`, `"2,1"`)
    /// - a peg string: `B`/`●` for black, `W`/`○` for white, `-`/`_`/`.`/`·`
    ///   for an empty hole (`"BBW-"`)
    ///
    /// # Errors
    /// Returns `VerdictError::Malformed` for unrecognised input and
    /// `VerdictError::Inconsistent` for verdicts no pair of codes can produce.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Verdict;
    ///
    /// assert_eq!(Verdict::parse("2 1", 4).unwrap(), Verdict::new(2, 1));
    /// assert_eq!(Verdict::parse("bbw-", 4).unwrap(), Verdict::new(2, 1));
    /// assert!(Verdict::parse("3 2", 4).is_err());
    /// ```
    pub fn parse(input: &str, length: usize) -> Result<Self, VerdictError> {
        let trimmed = input.trim();
        let malformed = || VerdictError::Malformed(trimmed.to_string());

        if trimmed.is_empty() {
            return Err(malformed());
        }

        if trimmed.chars().any(|c| c.is_ascii_digit()) {
            let counts: Vec<&str> = trimmed
                .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
                .filter(|part| !part.is_empty())
                .collect();
            let [black, white] = counts.as_slice() else {
                return Err(malformed());
            };
            let black = black.parse().map_err(|_| malformed())?;
            let white = white.parse().map_err(|_| malformed())?;
            return Self::checked(black, white, length);
        }

        let (mut black, mut white, mut holes) = (0, 0, 0);
        for c in trimmed.chars() {
            match c {
                'B' | 'b' | '●' => black += 1,
                'W' | 'w' | '○' => white += 1,
                '-' | '_' | '.' | '·' => holes += 1,
                _ => return Err(malformed()),
            }
        }
        if black + white + holes > length {
            return Err(malformed());
        }

        Self::checked(black, white, length)
    }

    /// Render the verdict as pegs: `●` per black, `○` per white, `·` for the
    /// remaining holes of a `length`-symbol code
    #[must_use]
    pub fn to_pegs(self, length: usize) -> String {
        let holes = length.saturating_sub(self.total());
        let mut pegs = String::with_capacity(length * 3);
        pegs.extend(std::iter::repeat_n('●', self.black));
        pegs.extend(std::iter::repeat_n('○', self.white));
        pegs.extend(std::iter::repeat_n('·', holes));
        pegs
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}W", self.black, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::new(text).unwrap()
    }

    #[test]
    fn score_transposed_pair() {
        let verdict = Verdict::score(&code("ABDC"), &code("ABCD"));
        assert_eq!(verdict, Verdict::new(2, 2));
    }

    #[test]
    fn score_exact_match() {
        let verdict = Verdict::score(&code("AAAA"), &code("AAAA"));
        assert_eq!(verdict, Verdict::winning(4));
        assert!(verdict.is_win(4));
    }

    #[test]
    fn score_no_overlap() {
        let verdict = Verdict::score(&code("EEFF"), &code("ABCD"));
        assert_eq!(verdict, Verdict::new(0, 0));
        assert_eq!(verdict.total(), 0);
    }

    #[test]
    fn score_duplicates_counted_once_per_pair() {
        // Guess has three A's, reference two; only two can pair up.
        // Position 0 is black, the other shared A is white.
        let verdict = Verdict::score(&code("AAAB"), &code("ACCA"));
        assert_eq!(verdict, Verdict::new(1, 1));

        // Black pegs consume their symbol before whites are counted
        let verdict = Verdict::score(&code("AABB"), &code("ABBB"));
        assert_eq!(verdict, Verdict::new(3, 0));
    }

    #[test]
    fn score_is_order_independent_for_this_rule() {
        let pairs = [("AABC", "CABA"), ("ABCD", "DCBA"), ("AAAA", "ABCD")];
        for (a, b) in pairs {
            assert_eq!(
                Verdict::score(&code(a), &code(b)),
                Verdict::score(&code(b), &code(a))
            );
        }
    }

    #[test]
    fn score_bounds_hold() {
        let codes = ["AAAA", "ABCD", "DCBA", "AABB", "FFEA", "BAAA"];
        for a in codes {
            for b in codes {
                let v = Verdict::score(&code(a), &code(b));
                assert!(v.total() <= 4, "{a} vs {b} gave {v}");
                assert!(Verdict::checked(v.black(), v.white(), 4).is_ok());
            }
        }
    }

    #[test]
    fn checked_rejects_impossible_verdicts() {
        assert!(Verdict::checked(3, 2, 4).is_err());
        assert!(Verdict::checked(3, 1, 4).is_err());
        assert!(Verdict::checked(0, 4, 4).is_ok());
        assert!(Verdict::checked(4, 0, 4).is_ok());
    }

    #[test]
    fn parse_counts() {
        assert_eq!(Verdict::parse("2 1", 4).unwrap(), Verdict::new(2, 1));
        assert_eq!(Verdict::parse("2,1", 4).unwrap(), Verdict::new(2, 1));
        assert_eq!(Verdict::parse(" 0 / 4 ", 4).unwrap(), Verdict::new(0, 4));
    }

    #[test]
    fn parse_pegs() {
        assert_eq!(Verdict::parse("BBW-", 4).unwrap(), Verdict::new(2, 1));
        assert_eq!(Verdict::parse("●○○", 4).unwrap(), Verdict::new(1, 2));
        assert_eq!(Verdict::parse("----", 4).unwrap(), Verdict::new(0, 0));
        assert_eq!(Verdict::parse("bbbb", 4).unwrap(), Verdict::winning(4));
    }

    #[test]
    fn parse_invalid() {
        assert!(matches!(
            Verdict::parse("", 4),
            Err(VerdictError::Malformed(_))
        ));
        assert!(matches!(
            Verdict::parse("2", 4),
            Err(VerdictError::Malformed(_))
        ));
        assert!(matches!(
            Verdict::parse("BBXW", 4),
            Err(VerdictError::Malformed(_))
        ));
        assert!(matches!(
            Verdict::parse("BBWW-", 4),
            Err(VerdictError::Malformed(_))
        ));
        assert!(matches!(
            Verdict::parse("4 1", 4),
            Err(VerdictError::Inconsistent { .. })
        ));
    }

    #[test]
    fn parse_rejects_counts_that_overflow() {
        let huge = format!("{} 1", usize::MAX);
        assert!(matches!(
            Verdict::parse(&huge, 4),
            Err(VerdictError::Inconsistent { .. })
        ));
        assert!(Verdict::checked(usize::MAX, usize::MAX, 4).is_err());
    }

    #[test]
    fn pegs_rendering() {
        assert_eq!(Verdict::new(2, 1).to_pegs(4), "●●○·");
        assert_eq!(Verdict::winning(3).to_pegs(3), "●●●");
        assert_eq!(Verdict::new(0, 0).to_pegs(2), "··");
    }

    #[test]
    fn display_format() {
        assert_eq!(Verdict::new(2, 2).to_string(), "2B 2W");
    }
}

//! The set of codes still consistent with the feedback received

use crate::core::Code;

/// Candidate codes in lexicographic order
///
/// A space is never edited in place: narrowing produces a new space, so an
/// old one can be kept as a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSpace {
    codes: Vec<Code>,
}

impl CandidateSpace {
    /// Build a space from arbitrary codes, sorting and removing duplicates
    #[must_use]
    pub fn from_codes(mut codes: Vec<Code>) -> Self {
        codes.sort_unstable();
        codes.dedup();
        Self { codes }
    }

    /// Build a space from codes already in strictly ascending order
    pub(crate) fn from_sorted(codes: Vec<Code>) -> Self {
        debug_assert!(codes.windows(2).all(|w| w[0] < w[1]));
        Self { codes }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First code in canonical order
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }
}

impl<'a> IntoIterator for &'a CandidateSpace {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

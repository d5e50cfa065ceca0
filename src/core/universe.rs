//! The candidate universe
//!
//! Every valid secret: 4 distinct digits, 10 · 9 · 8 · 7 = 5040 codes.

use super::{ALPHABET_SIZE, Code};

/// The fixed, immutable set of all valid codes
///
/// Enumerated lexicographically, position by position, so the first code is
/// `0123` and the last is `9876`. Sessions copy this into their own candidate
/// set; the universe itself never shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    codes: Vec<Code>,
}

impl Universe {
    /// Number of valid codes
    pub const SIZE: usize = 5040;

    /// Enumerate all valid codes
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Universe;
    ///
    /// let universe = Universe::generate();
    /// assert_eq!(universe.len(), 5040);
    /// assert_eq!(universe.codes()[0].to_string(), "0123");
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        let mut codes = Vec::with_capacity(Self::SIZE);

        for d1 in 0..ALPHABET_SIZE {
            for d2 in (0..ALPHABET_SIZE).filter(|&d| d != d1) {
                for d3 in (0..ALPHABET_SIZE).filter(|&d| d != d1 && d != d2) {
                    for d4 in (0..ALPHABET_SIZE).filter(|&d| d != d1 && d != d2 && d != d3) {
                        codes.push(Code::from_distinct([d1, d2, d3, d4]));
                    }
                }
            }
        }

        debug_assert_eq!(codes.len(), Self::SIZE);
        Self { codes }
    }

    /// All codes in enumeration order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
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

    /// Check if a code is in the universe
    ///
    /// Always true for a constructed `Code`; the enumeration is sorted, so this
    /// is a binary search.
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::generate()
    }
}

//! Bulls and Cows code representation
//!
//! A Code is 4 pairwise-distinct decimal digits. Alongside the digits it keeps
//! a 10-bit membership mask so the comparator can test "digit present anywhere"
//! with a single AND.

use std::fmt;

/// Number of positions in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct symbols a position can take (digits 0-9)
pub const ALPHABET_SIZE: u8 = 10;

/// A 4-digit code with no repeated digit
///
/// Immutable once constructed. Every value of this type satisfies the
/// invariant: length 4, digits in 0..=9, all digits distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: [u8; CODE_LENGTH],
    mask: u16,
}

/// Error type for guesses that fail the code format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    NonDigit(char),
    RepeatedDigit(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly 4 digits, got {len} characters")
            }
            Self::NonDigit(ch) => write!(f, "Guess must contain only digits, found '{ch}'"),
            Self::RepeatedDigit(ch) => write!(f, "Digits must be unique, '{ch}' appears twice"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from text
    ///
    /// The text is taken as-is: callers reading from a terminal trim the line
    /// first.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The text is not exactly 4 characters
    /// - Any character is not an ASCII digit
    /// - A digit appears more than once
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Code;
    ///
    /// let code = Code::parse("0387").unwrap();
    /// assert_eq!(code.to_string(), "0387");
    ///
    /// assert!(Code::parse("123").is_err());
    /// assert!(Code::parse("1123").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            *slot = match ch.to_digit(10) {
                Some(d) => d as u8,
                None => return Err(CodeError::NonDigit(ch)),
            };
        }

        Self::from_digits(digits)
    }

    /// Build a code from raw digit values
    ///
    /// # Errors
    /// Returns `CodeError::NonDigit` for a value above 9 and
    /// `CodeError::RepeatedDigit` if any digit repeats.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut mask = 0u16;
        for &d in &digits {
            if d >= ALPHABET_SIZE {
                return Err(CodeError::NonDigit(
                    char::from_digit(u32::from(d), 36).unwrap_or('?'),
                ));
            }
            let bit = 1u16 << d;
            if mask & bit != 0 {
                return Err(CodeError::RepeatedDigit(char::from(b'0' + d)));
            }
            mask |= bit;
        }

        Ok(Self { digits, mask })
    }

    /// Construct without validation
    ///
    /// Only the universe generator uses this, and it never produces repeats.
    pub(crate) const fn from_distinct(digits: [u8; CODE_LENGTH]) -> Self {
        let mut mask = 0u16;
        let mut i = 0;
        while i < CODE_LENGTH {
            mask |= 1 << digits[i];
            i += 1;
        }
        Self { digits, mask }
    }

    /// Get the digits as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.digits
    }

    /// Get the digit at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check if the code contains a digit anywhere
    #[inline]
    #[must_use]
    pub const fn has_digit(&self, digit: u8) -> bool {
        digit < ALPHABET_SIZE && self.mask & (1 << digit) != 0
    }

    /// Bitmask of the digits present, bit `d` set for digit `d`
    #[inline]
    #[must_use]
    pub(crate) const fn mask(self) -> u16 {
        self.mask
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

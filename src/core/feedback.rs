//! Bulls and cows feedback calculation
//!
//! Feedback is the pair (bulls, cows) a guess earns against a target:
//! - bulls: digits matching in both value and position
//! - cows: digits present in the target but at a different position

use super::{CODE_LENGTH, Code};
use std::fmt;

/// Feedback for a guess against a target code
///
/// Invariant: `bulls + cows <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    bulls: u8,
    cows: u8,
}

impl Feedback {
    /// Four bulls (the guess is the target)
    pub const WIN: Self = Self { bulls: 4, cows: 0 };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `bulls + cows > 4`
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        debug_assert!(
            bulls as usize + cows as usize <= CODE_LENGTH,
            "bulls + cows must not exceed 4"
        );
        Self { bulls, cows }
    }

    /// Digits matching in value and position
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Digits present in the target at a different position
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Check if this is the winning feedback (4 bulls)
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.bulls as usize == CODE_LENGTH
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Precondition
    /// Both codes have pairwise-distinct digits, which `Code` guarantees. The
    /// cow count is "guess digits present in the target" minus bulls, and that
    /// only holds when no digit can repeat. A variant allowing repeated digits
    /// would need a multiset intersection here instead of a membership test.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, Feedback};
    ///
    /// let guess = Code::parse("1234").unwrap();
    /// let target = Code::parse("1243").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert_eq!((feedback.bulls(), feedback.cows()), (2, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, target: &Code) -> Self {
        let bulls = guess
            .digits()
            .iter()
            .zip(target.digits())
            .filter(|(g, t)| g == t)
            .count() as u8;

        // Digits shared anywhere, regardless of position
        let shared = (guess.mask() & target.mask()).count_ones() as u8;

        Self {
            bulls,
            cows: shared - bulls,
        }
    }

    /// Compact index in 0..25, `bulls * 5 + cows`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.bulls as usize * (CODE_LENGTH + 1) + self.cows as usize
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B{}C", self.bulls, self.cows)
    }
}

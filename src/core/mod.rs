//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;
mod universe;

pub use code::{ALPHABET_SIZE, CODE_LENGTH, Code, CodeError};
pub use feedback::Feedback;
pub use universe::Universe;

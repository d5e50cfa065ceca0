//! Bulls and Cows
//!
//! A 4-digit Bulls and Cows game where every guess is scored in bits: how
//! much uncertainty it was expected to remove and how much it actually did.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Code, Feedback};
//!
//! let guess = Code::parse("1234").unwrap();
//! let secret = Code::parse("1243").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! assert_eq!((feedback.bulls(), feedback.cows()), (2, 2));
//! ```

// Core domain types
pub mod core;

// Information measures, pruning and the game session
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Candidate-set reasoning engine
//!
//! Pruning, entropy, suggestions, and the game session that drives them.

pub mod entropy;
pub mod pruner;
mod session;

pub use entropy::Suggester;
pub use session::{GuessRecord, Session, SessionConfig, SessionError, SessionState, TurnResult};

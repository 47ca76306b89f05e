//! Game interface for turn-based engines.
//!
//! Games implement `Game` to define:
//! - Turn order
//! - Legal actions for each state
//! - Successor states
//! - Terminal conditions and payoffs
//!
//! Agents and the simulation driver call into `Game` but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{ActionList, Game, Payoffs};

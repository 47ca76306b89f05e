//! Agents that pick actions for a turn holder.
//!
//! - `Agent`: the decision interface used by the simulation driver
//! - `MonsterAgent`: random walk with inertia, the stock monster controller
//! - `UniformAgent`: uniform choice among legal actions

pub mod monster;
pub mod uniform;

pub use monster::MonsterAgent;
pub use uniform::UniformAgent;

use crate::rules::Game;

/// Chooses an action for the agent whose turn it is.
///
/// `&mut self` lets agents keep state between decisions.
pub trait Agent<G: Game> {
    fn act(&mut self, game: &G, state: &G::State) -> G::Action;
}

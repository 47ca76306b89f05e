//! Generic turn-based game interface.
//!
//! A `Game` describes a strict alternating-move state machine:
//! - Whose turn it is in a state
//! - What actions that agent may take
//! - The successor state for a chosen action
//! - Whether the game has ended, with payoffs for every agent
//!
//! Search drivers and simulators are written against this trait and never
//! interpret game-specific concepts directly.

use smallvec::SmallVec;
use std::ops::Index;

/// Legal actions for one turn holder.
///
/// Inline capacity covers grid games without heap allocation.
pub type ActionList<A> = SmallVec<[A; 4]>;

/// Per-agent utilities of a finished game, ordered by agent index.
#[derive(Clone, Debug, PartialEq)]
pub struct Payoffs(Vec<f64>);

impl Payoffs {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Payoff of a single agent.
    #[must_use]
    pub fn get(&self, agent: usize) -> Option<f64> {
        self.0.get(agent).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for Payoffs {
    type Output = f64;

    fn index(&self, agent: usize) -> &Self::Output {
        &self.0[agent]
    }
}

impl From<Payoffs> for Vec<f64> {
    fn from(payoffs: Payoffs) -> Self {
        payoffs.0
    }
}

/// Turn-based multi-agent game.
///
/// ## Implementation Notes
///
/// - `successor` must be pure: it returns a new state and never mutates its input
/// - `successor` is only defined for actions returned by `legal_actions`
/// - `is_terminal` returns `None` while the game continues
pub trait Game {
    /// Game state snapshot.
    type State: Clone;

    /// A single agent's move.
    type Action: Copy + Eq + std::fmt::Debug;

    /// The state the game starts from.
    fn initial_state(&self) -> Self::State;

    /// Number of agents, including the one that moves first.
    fn agent_count(&self) -> usize;

    /// Index of the agent whose turn it is.
    fn turn(&self, state: &Self::State) -> usize;

    /// Legal actions for the current turn holder.
    ///
    /// Returns empty if the turn holder cannot act.
    fn legal_actions(&self, state: &Self::State) -> ActionList<Self::Action>;

    /// State reached by the current turn holder taking `action`.
    fn successor(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Payoffs if the game is over.
    fn is_terminal(&self, state: &Self::State) -> Option<Payoffs>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoffs_access() {
        let payoffs = Payoffs::new(vec![5.0, -5.0, -5.0]);

        assert_eq!(payoffs.len(), 3);
        assert!(!payoffs.is_empty());
        assert_eq!(payoffs[0], 5.0);
        assert_eq!(payoffs.get(2), Some(-5.0));
        assert_eq!(payoffs.get(3), None);
        assert_eq!(payoffs.iter().sum::<f64>(), -5.0);

        let values: Vec<f64> = payoffs.into();
        assert_eq!(values, vec![5.0, -5.0, -5.0]);
    }
}

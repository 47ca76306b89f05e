//! Uniform random agent.

use crate::core::{Direction, DungeonState, GameRng, RandomSource};
use crate::games::dungeon::DungeonGame;
use crate::rules::Game;

use super::Agent;

/// Picks uniformly among the legal actions.
///
/// Stands still (`Direction::None`) when nothing is legal.
#[derive(Clone, Debug)]
pub struct UniformAgent<R = GameRng> {
    rng: R,
}

impl UniformAgent<GameRng> {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }
}

impl<R: RandomSource> UniformAgent<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> Agent<DungeonGame> for UniformAgent<R> {
    fn act(&mut self, game: &DungeonGame, state: &DungeonState) -> Direction {
        let actions = game.legal_actions(state);
        if actions.is_empty() {
            return Direction::None;
        }
        actions[self.rng.gen_index(actions.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_agent_picks_legal_actions() {
        let game = DungeonGame::from_text("#.#\n.@.\n#E#").unwrap();
        let state = game.initial_state();
        let legal = game.legal_actions(&state);

        let mut agent = UniformAgent::new(3);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let dir = agent.act(&game, &state);
            assert!(legal.contains(&dir));
            if !seen.contains(&dir) {
                seen.push(dir);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_uniform_agent_without_moves() {
        let game = DungeonGame::from_text("@#E").unwrap();
        let state = game.initial_state();
        assert!(game.legal_actions(&state).is_empty());

        let mut agent = UniformAgent::new(3);
        assert_eq!(agent.act(&game, &state), Direction::None);
    }
}

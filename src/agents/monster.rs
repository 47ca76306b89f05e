//! Monster controller: a random walk with inertia.
//!
//! A monster keeps walking in its committed direction. Each step it
//! re-draws a direction when:
//! - it has no committed direction,
//! - the committed direction is no longer legal, or
//! - a uniform draw exceeds `2^(-steps / scale)`, where `scale` is the
//!   smaller level dimension.
//!
//! The longer it has walked straight, the more likely it turns.

use tracing::trace;

use crate::core::{Direction, DungeonState, GameRng, RandomSource};
use crate::games::dungeon::DungeonGame;
use crate::rules::{ActionList, Game};

use super::Agent;

/// Stateful controller for a single monster.
///
/// Each instance owns its random stream and must not be shared between
/// monsters or games.
#[derive(Clone, Debug)]
pub struct MonsterAgent<R = GameRng> {
    rng: R,
    direction: Direction,
    steps: u32,
}

impl MonsterAgent<GameRng> {
    /// Create a controller with a seeded ChaCha8 stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a controller seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }
}

impl<R: RandomSource> MonsterAgent<R> {
    /// Create a controller drawing from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            direction: Direction::None,
            steps: 0,
        }
    }

    /// The committed direction (`None` before the first decision).
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Decisions since the direction was last re-drawn.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Pick a direction among `actions`, with inertia length `scale`.
    ///
    /// Returns `Direction::None` (stand still) when no movement is legal.
    pub fn choose_action(&mut self, actions: &[Direction], scale: usize) -> Direction {
        debug_assert!(scale > 0, "inertia scale must be positive");

        let movement: ActionList<Direction> = actions
            .iter()
            .copied()
            .filter(|&dir| dir != Direction::None)
            .collect();

        // Short-circuit order matters: the float is only drawn when the
        // committed direction is still available.
        let resample = self.direction == Direction::None
            || !movement.contains(&self.direction)
            || self.rng.gen_float() > keep_probability(self.steps, scale);

        if resample {
            self.steps = 0;
            self.direction = if movement.is_empty() {
                Direction::None
            } else {
                movement[self.rng.gen_index(movement.len())]
            };
            trace!(
                direction = %self.direction,
                options = movement.len(),
                "monster changed direction"
            );
        }

        self.steps += 1;
        self.direction
    }
}

/// Probability of keeping the committed direction after `steps` steps.
fn keep_probability(steps: u32, scale: usize) -> f64 {
    2f64.powf(-f64::from(steps) / scale as f64)
}

impl<R: RandomSource> Agent<DungeonGame> for MonsterAgent<R> {
    fn act(&mut self, game: &DungeonGame, state: &DungeonState) -> Direction {
        let actions = game.legal_actions(state);
        self.choose_action(&actions, state.layout().min_dimension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays scripted draws; panics if an unscripted draw is requested.
    #[derive(Default)]
    struct ScriptedRng {
        indices: VecDeque<usize>,
        floats: VecDeque<f64>,
    }

    impl ScriptedRng {
        fn new(indices: &[usize], floats: &[f64]) -> Self {
            Self {
                indices: indices.iter().copied().collect(),
                floats: floats.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRng {
        fn gen_index(&mut self, len: usize) -> usize {
            let i = self.indices.pop_front().expect("unexpected index draw");
            assert!(i < len);
            i
        }

        fn gen_float(&mut self) -> f64 {
            self.floats.pop_front().expect("unexpected float draw")
        }
    }

    const ALL: [Direction; 4] = Direction::MOVES;

    #[test]
    fn test_first_decision_resamples_without_float() {
        let mut agent = MonsterAgent::with_rng(ScriptedRng::new(&[2], &[]));

        assert_eq!(agent.direction(), Direction::None);
        assert_eq!(agent.choose_action(&ALL, 5), Direction::Left);
        assert_eq!(agent.steps(), 1);
    }

    #[test]
    fn test_unavailable_direction_forces_resample() {
        // Committed to RIGHT, offered {UP, LEFT}: no float may be drawn.
        let mut agent = MonsterAgent::with_rng(ScriptedRng::new(&[3, 1], &[]));
        assert_eq!(agent.choose_action(&ALL, 5), Direction::Right);

        let offered = [Direction::Up, Direction::Left];
        assert_eq!(agent.choose_action(&offered, 5), Direction::Left);
        assert_eq!(agent.steps(), 1);
    }

    #[test]
    fn test_inertia_keeps_direction() {
        // After 1 step with scale 1, keep probability is 0.5.
        let mut agent = MonsterAgent::with_rng(ScriptedRng::new(&[0], &[0.5, 0.2]));
        assert_eq!(agent.choose_action(&ALL, 1), Direction::Up);

        assert_eq!(agent.choose_action(&ALL, 1), Direction::Up);
        assert_eq!(agent.steps(), 2);

        // Keep probability is now 0.25.
        assert_eq!(agent.choose_action(&ALL, 1), Direction::Up);
        assert_eq!(agent.steps(), 3);
    }

    #[test]
    fn test_inertia_decays_into_resample() {
        let mut agent = MonsterAgent::with_rng(ScriptedRng::new(&[0, 3], &[0.9]));
        assert_eq!(agent.choose_action(&ALL, 1), Direction::Up);

        // 0.9 > 0.5: re-draw.
        assert_eq!(agent.choose_action(&ALL, 1), Direction::Right);
        assert_eq!(agent.steps(), 1);
    }

    #[test]
    fn test_no_movement_stands_still() {
        let mut agent = MonsterAgent::with_rng(ScriptedRng::new(&[0], &[]));
        assert_eq!(agent.choose_action(&ALL, 3), Direction::Up);

        assert_eq!(agent.choose_action(&[], 3), Direction::None);
        assert_eq!(agent.steps(), 1);

        // Still no committed direction: next call re-draws again.
        assert_eq!(agent.choose_action(&[], 3), Direction::None);
        assert_eq!(agent.steps(), 1);
    }

    #[test]
    fn test_none_is_never_chosen_from_actions() {
        let mut agent = MonsterAgent::with_rng(ScriptedRng::new(&[0], &[]));
        assert_eq!(agent.choose_action(&[Direction::None, Direction::Down], 2), Direction::Down);
    }

    #[test]
    fn test_keep_probability() {
        assert_eq!(keep_probability(0, 4), 1.0);
        assert!((keep_probability(4, 4) - 0.5).abs() < 1e-12);
        assert!((keep_probability(8, 4) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_act_uses_game_actions() {
        let game = DungeonGame::from_text("#####\n#@.M#\n###E#\n#####").unwrap();
        let mut state = game.initial_state();
        state.turn = 1;

        // Monster at (3, 1): only LEFT and DOWN are open.
        let mut agent = MonsterAgent::new(7);
        for _ in 0..20 {
            let dir = agent.act(&game, &state);
            assert!(matches!(dir, Direction::Left | Direction::Down));
        }
    }

    #[test]
    fn test_seeded_agents_are_deterministic() {
        let mut a = MonsterAgent::new(99);
        let mut b = MonsterAgent::new(99);

        for _ in 0..50 {
            assert_eq!(a.choose_action(&ALL, 3), b.choose_action(&ALL, 3));
        }
    }
}

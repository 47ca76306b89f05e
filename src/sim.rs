//! Game loop driver.
//!
//! Repeatedly asks the game whose turn it is, asks that agent for an action,
//! and applies it, until the game ends or a step limit is hit.
//!
//! ```
//! use dungeon_crawler::agents::UniformAgent;
//! use dungeon_crawler::games::dungeon::DungeonGame;
//! use dungeon_crawler::sim::{self, SimConfig};
//!
//! let game = DungeonGame::from_text("@.K.E\n..M..").unwrap();
//! let config = SimConfig::default().with_max_steps(200);
//! let mut agents = sim::dungeon_lineup(&game, Box::new(UniformAgent::new(1)), config.seed);
//!
//! let episode = sim::play(&game, &mut agents, &config);
//! assert!(episode.steps <= 200);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::{Agent, MonsterAgent};
use crate::core::GameRng;
use crate::games::dungeon::DungeonGame;
use crate::rules::{Game, Payoffs};

/// Driver settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Maximum number of actions before the episode is cut off.
    pub max_steps: usize,

    /// Base seed for agent random streams.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            seed: 42,
        }
    }
}

impl SimConfig {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Result of one played game.
#[derive(Clone, Debug)]
pub struct Episode<S, A> {
    /// State when play stopped.
    pub final_state: S,

    /// Payoffs, or `None` if the step limit was reached first.
    pub payoffs: Option<Payoffs>,

    /// Number of actions applied.
    pub steps: usize,

    /// `(agent, action)` in the order they were applied.
    pub actions: Vec<(usize, A)>,
}

impl<S, A> Episode<S, A> {
    /// Whether the game reached a terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.payoffs.is_some()
    }
}

/// Play `game` from its initial state with one agent per game agent.
///
/// # Panics
///
/// Panics if `agents.len()` differs from `game.agent_count()`.
pub fn play<G: Game>(
    game: &G,
    agents: &mut [Box<dyn Agent<G>>],
    config: &SimConfig,
) -> Episode<G::State, G::Action> {
    assert_eq!(
        agents.len(),
        game.agent_count(),
        "Need exactly one agent per game agent"
    );

    let mut state = game.initial_state();
    let mut actions = Vec::new();

    loop {
        if let Some(payoffs) = game.is_terminal(&state) {
            debug!(steps = actions.len(), payoffs = ?payoffs.as_slice(), "episode finished");
            return Episode {
                final_state: state,
                payoffs: Some(payoffs),
                steps: actions.len(),
                actions,
            };
        }

        if actions.len() >= config.max_steps {
            debug!(max_steps = config.max_steps, "episode cut off at step limit");
            return Episode {
                final_state: state,
                payoffs: None,
                steps: actions.len(),
                actions,
            };
        }

        let turn = game.turn(&state);
        let action = agents[turn].act(game, &state);
        actions.push((turn, action));
        state = game.successor(&state, action);
    }
}

/// One `MonsterAgent` per monster, each with its own stream forked from `seed`.
pub fn monster_agents(game: &DungeonGame, seed: u64) -> Vec<MonsterAgent> {
    let mut root = GameRng::new(seed);
    (0..game.monster_count())
        .map(|_| MonsterAgent::with_rng(root.fork()))
        .collect()
}

/// Full agent list for a dungeon: `player` followed by stock monster agents.
pub fn dungeon_lineup(
    game: &DungeonGame,
    player: Box<dyn Agent<DungeonGame>>,
    seed: u64,
) -> Vec<Box<dyn Agent<DungeonGame>>> {
    let mut agents = vec![player];
    agents.extend(
        monster_agents(game, seed)
            .into_iter()
            .map(|agent| Box::new(agent) as Box<dyn Agent<DungeonGame>>),
    );
    agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, DungeonState};

    /// Replays a fixed list of moves.
    struct Scripted(Vec<Direction>);

    impl Agent<DungeonGame> for Scripted {
        fn act(&mut self, _game: &DungeonGame, _state: &DungeonState) -> Direction {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.max_steps, 1000);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_config_serialization() {
        let config = SimConfig::default().with_max_steps(10).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_scripted_win() {
        let game = DungeonGame::from_text("@K.E").unwrap();
        let mut agents: Vec<Box<dyn Agent<DungeonGame>>> =
            vec![Box::new(Scripted(vec![Direction::Right; 3]))];

        let episode = play(&game, &mut agents, &SimConfig::default());

        assert!(episode.is_finished());
        assert_eq!(episode.steps, 3);
        assert_eq!(episode.actions, vec![(0, Direction::Right); 3]);
        let expected = 1e8 - 0.3;
        assert!((episode.payoffs.unwrap()[0] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_step_limit() {
        let game = DungeonGame::from_text("@..E").unwrap();
        let moves = [Direction::Right, Direction::Left].repeat(10);
        let mut agents: Vec<Box<dyn Agent<DungeonGame>>> = vec![Box::new(Scripted(moves))];

        let episode = play(&game, &mut agents, &SimConfig::default().with_max_steps(5));

        assert!(!episode.is_finished());
        assert_eq!(episode.steps, 5);
        assert_eq!(episode.final_state.time, 5);
    }

    #[test]
    fn test_monster_agents_one_per_monster() {
        let game = DungeonGame::from_text("@.M\nM.E").unwrap();
        assert_eq!(monster_agents(&game, 1).len(), 2);

        let lineup = dungeon_lineup(&game, Box::new(Scripted(vec![])), 1);
        assert_eq!(lineup.len(), game.agent_count());
    }

    #[test]
    #[should_panic(expected = "one agent per game agent")]
    fn test_agent_count_mismatch() {
        let game = DungeonGame::from_text("@.M\n..E").unwrap();
        let mut agents: Vec<Box<dyn Agent<DungeonGame>>> = vec![Box::new(Scripted(vec![]))];
        play(&game, &mut agents, &SimConfig::default());
    }
}

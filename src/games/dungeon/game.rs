//! Dungeon transition engine.

use std::cell::Cell;
use std::iter;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{Direction, DungeonConfig, DungeonState, Layout};
use crate::rules::{ActionList, Game, Payoffs};

/// Whether a state is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Player holds a key and stands on the exit.
    Won,
    /// Player is dead (and has not won).
    Lost,
}

/// The dungeon game: a layout, its initial state and scoring rules.
#[derive(Clone, Debug)]
pub struct DungeonGame {
    config: DungeonConfig,
    layout: Arc<Layout>,
    initial_state: DungeonState,
    terminal_checks: Cell<u64>,
}

impl DungeonGame {
    /// Create a game starting from `initial_state`, with default scoring.
    #[must_use]
    pub fn new(initial_state: DungeonState) -> Self {
        Self {
            config: DungeonConfig::default(),
            layout: Arc::clone(initial_state.shared_layout()),
            initial_state,
            terminal_checks: Cell::new(0),
        }
    }

    /// Replace the scoring configuration.
    #[must_use]
    pub fn with_config(mut self, config: DungeonConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of monsters in this level.
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.initial_state.monster_count()
    }

    /// In-game score of `state` under this game's configuration.
    #[must_use]
    pub fn score(&self, state: &DungeonState) -> f64 {
        state.score(&self.config)
    }

    /// Win/loss status, without payoffs and without counting a terminal check.
    #[must_use]
    pub fn status(&self, state: &DungeonState) -> GameStatus {
        let player = &state.player;
        if player.inventory.keys != 0 && player.position == state.layout().exit() {
            GameStatus::Won
        } else if !player.alive {
            GameStatus::Lost
        } else {
            GameStatus::Ongoing
        }
    }

    /// Number of `is_terminal` calls since creation or the last reset.
    #[must_use]
    pub fn terminal_checks(&self) -> u64 {
        self.terminal_checks.get()
    }

    pub fn reset_terminal_checks(&self) {
        self.terminal_checks.set(0);
    }

    fn move_player(state: &mut DungeonState, action: Direction) {
        let to = state.player.position + action;
        state.player.position = to;

        let inventory = &mut state.player.inventory;
        if state.coins.remove(&to).is_some() {
            inventory.coins += 1;
        }
        if state.daggers.remove(&to).is_some() {
            inventory.daggers += 1;
        }
        if state.keys.remove(&to).is_some() {
            inventory.keys += 1;
        }

        let defenders = state.alive_monsters_at(to);
        if defenders == 0 {
            return;
        }

        let inventory = &mut state.player.inventory;
        if (inventory.daggers as usize) < defenders {
            debug!(at = %to, defenders, daggers = inventory.daggers, "player died attacking");
            inventory.daggers = 0;
            state.player.alive = false;
        } else {
            inventory.daggers -= defenders as u32;
            for monster in state.monsters.iter_mut().filter(|m| m.alive && m.position == to) {
                monster.alive = false;
            }
            debug!(at = %to, killed = defenders, "player killed monsters");
        }
    }

    fn move_monster(state: &mut DungeonState, index: usize, action: Direction) {
        let to = state.monsters[index].position + action;
        state.monsters[index].position = to;

        if to != state.player.position {
            return;
        }

        // A monster walking into the player costs exactly one dagger.
        if state.player.inventory.daggers != 0 {
            state.player.inventory.daggers -= 1;
            state.monsters[index].alive = false;
            debug!(monster = index, at = %to, "monster killed by player");
        } else {
            state.player.alive = false;
            debug!(monster = index, at = %to, "monster killed player");
        }
    }
}

impl Game for DungeonGame {
    type State = DungeonState;
    type Action = Direction;

    fn initial_state(&self) -> DungeonState {
        self.initial_state.clone()
    }

    fn agent_count(&self) -> usize {
        1 + self.initial_state.monster_count()
    }

    fn turn(&self, state: &DungeonState) -> usize {
        state.turn
    }

    fn legal_actions(&self, state: &DungeonState) -> ActionList<Direction> {
        let layout = state.layout();

        if state.turn == 0 {
            // Only walls block the player.
            let from = state.player.position;
            return Direction::MOVES
                .into_iter()
                .filter(|&dir| layout.is_walkable(from + dir))
                .collect();
        }

        let monster = state.monsters[state.turn - 1];
        if !monster.alive {
            return ActionList::new();
        }

        // Walls and other living monsters block a monster.
        Direction::MOVES
            .into_iter()
            .filter(|&dir| {
                let to = monster.position + dir;
                layout.is_walkable(to) && state.alive_monsters_at(to) == 0
            })
            .collect()
    }

    fn successor(&self, state: &DungeonState, action: Direction) -> DungeonState {
        debug_assert!(
            {
                let legal = self.legal_actions(state);
                legal.contains(&action) || (legal.is_empty() && action == Direction::None)
            },
            "action {action} is not legal for turn {}",
            state.turn
        );

        let mut next = state.clone();
        if next.turn == 0 {
            Self::move_player(&mut next, action);
        } else {
            let index = next.turn - 1;
            Self::move_monster(&mut next, index, action);
        }

        next.turn = next.next_turn();
        if next.turn == 0 {
            next.time += 1;
        }

        debug_assert!(
            next.check_invariants().is_ok(),
            "{action} by agent {} broke a state invariant: {:?}",
            state.turn,
            next.check_invariants().err()
        );

        trace!(mover = state.turn, %action, next_turn = next.turn, time = next.time, "transition");
        next
    }

    fn is_terminal(&self, state: &DungeonState) -> Option<Payoffs> {
        self.terminal_checks.set(self.terminal_checks.get() + 1);

        let monsters = state.monster_count();
        let large = self.config.terminal_value;
        let values: Vec<f64> = match self.status(state) {
            GameStatus::Won => {
                let value = large + self.score(state);
                iter::once(value).chain(iter::repeat(-value).take(monsters)).collect()
            }
            GameStatus::Lost => iter::once(-large)
                .chain(iter::repeat(large).take(monsters))
                .collect(),
            GameStatus::Ongoing => return None,
        };
        Some(Payoffs::new(values))
    }
}

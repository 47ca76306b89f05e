//! Per-turn world state.
//!
//! ## DungeonState
//!
//! Snapshot of everything that changes during a game:
//! - Round clock and whose turn it is
//! - Player position, liveness and inventory
//! - Monster arena (fixed slots, dead monsters keep their index)
//! - Coins, daggers and keys still on the floor
//!
//! Uses `im` persistent data structures so that copying a state is O(1).
//! The `Layout` is shared through an `Arc` and never duplicated.
//!
//! ## Turn numbering
//!
//! `turn == 0` is the player's turn, `turn == i` is monster `i - 1`'s turn.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::config::DungeonConfig;
use super::geometry::Point;
use super::layout::Layout;

/// Items carried by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    pub daggers: u32,
    pub coins: u32,
    pub keys: u32,
}

/// The player agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub position: Point,
    pub alive: bool,
    pub inventory: Inventory,
}

impl Player {
    /// A living player with an empty inventory.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            alive: true,
            inventory: Inventory::default(),
        }
    }
}

/// A monster slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monster {
    pub position: Point,
    pub alive: bool,
}

impl Monster {
    /// A living monster.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            alive: true,
        }
    }
}

/// A broken state invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{what} at {at} is not on a walkable cell")]
    NotWalkable { what: &'static str, at: Point },

    #[error("more than one item lies at {at}")]
    OverlappingItems { at: Point },

    #[error("player is standing on an uncollected item at {at}")]
    PlayerOnItem { at: Point },

    #[error("turn {turn} is out of range for {monsters} monsters")]
    TurnOutOfRange { turn: usize, monsters: usize },

    #[error("turn {turn} belongs to a dead monster")]
    DeadTurnHolder { turn: usize },
}

/// Complete mutable game state.
#[derive(Clone, Debug, PartialEq)]
pub struct DungeonState {
    /// Completed rounds.
    pub time: u32,

    /// Current turn holder (0 = player, i = monster i-1).
    pub turn: usize,

    layout: Arc<Layout>,

    pub player: Player,

    /// Coins on the floor.
    pub coins: ImHashSet<Point>,

    /// Daggers on the floor.
    pub daggers: ImHashSet<Point>,

    /// Keys on the floor.
    pub keys: ImHashSet<Point>,

    /// Monster arena, indexed by monster number.
    pub monsters: Vector<Monster>,
}

impl DungeonState {
    /// Create the initial state of a level: time 0, player to move.
    #[must_use]
    pub fn new(
        layout: Arc<Layout>,
        player: Player,
        coins: ImHashSet<Point>,
        daggers: ImHashSet<Point>,
        keys: ImHashSet<Point>,
        monsters: Vector<Monster>,
    ) -> Self {
        Self {
            time: 0,
            turn: 0,
            layout,
            player,
            coins,
            daggers,
            keys,
            monsters,
        }
    }

    /// The level layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The shared layout handle.
    #[must_use]
    pub fn shared_layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// Number of monster slots (alive or dead).
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    /// Number of dead monsters.
    #[must_use]
    pub fn dead_monster_count(&self) -> usize {
        self.monsters.iter().filter(|m| !m.alive).count()
    }

    /// Positions of all living monsters.
    pub fn alive_monster_positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.monsters.iter().filter(|m| m.alive).map(|m| m.position)
    }

    /// Number of living monsters at `point`.
    #[must_use]
    pub fn alive_monsters_at(&self, point: Point) -> usize {
        self.alive_monster_positions().filter(|&p| p == point).count()
    }

    /// Turn holder after the current one.
    ///
    /// Scans monster slots from index `turn` upward for the first living
    /// monster; returns 0 (the player) if there is none.
    #[must_use]
    pub fn next_turn(&self) -> usize {
        self.monsters
            .iter()
            .skip(self.turn)
            .position(|m| m.alive)
            .map_or(0, |offset| self.turn + offset + 1)
    }

    /// In-game score: coins, kills and elapsed time, weighted by `config`.
    #[must_use]
    pub fn score(&self, config: &DungeonConfig) -> f64 {
        f64::from(self.player.inventory.coins) * config.coin_value
            + self.dead_monster_count() as f64 * config.kill_value
            - f64::from(self.time) * config.time_penalty
    }

    /// Check the structural invariants every reachable state satisfies.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let layout = self.layout();

        if !layout.is_walkable(self.player.position) {
            return Err(InvariantViolation::NotWalkable {
                what: "player",
                at: self.player.position,
            });
        }

        if let Some(at) = self.alive_monster_positions().find(|&p| !layout.is_walkable(p)) {
            return Err(InvariantViolation::NotWalkable { what: "monster", at });
        }

        let floor_items = [("coin", &self.coins), ("dagger", &self.daggers), ("key", &self.keys)];
        for (what, items) in floor_items {
            if let Some(&at) = items.iter().find(|&&p| !layout.is_walkable(p)) {
                return Err(InvariantViolation::NotWalkable { what, at });
            }
        }

        let overlap = self
            .coins
            .iter()
            .find(|&&p| self.daggers.contains(&p) || self.keys.contains(&p))
            .or_else(|| self.daggers.iter().find(|&&p| self.keys.contains(&p)));
        if let Some(&at) = overlap {
            return Err(InvariantViolation::OverlappingItems { at });
        }

        let at = self.player.position;
        if self.coins.contains(&at) || self.daggers.contains(&at) || self.keys.contains(&at) {
            return Err(InvariantViolation::PlayerOnItem { at });
        }

        if self.turn > self.monsters.len() {
            return Err(InvariantViolation::TurnOutOfRange {
                turn: self.turn,
                monsters: self.monsters.len(),
            });
        }
        if self.turn > 0 && !self.monsters[self.turn - 1].alive {
            return Err(InvariantViolation::DeadTurnHolder { turn: self.turn });
        }

        Ok(())
    }
}

//! # dungeon-crawler
//!
//! A turn-based, multi-agent grid dungeon engine for game-tree search.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `successor` returns a new state and never mutates
//!    its input. Search drivers can branch freely.
//!
//! 2. **Cheap Copies**: Per-state collections are `im` persistent structures
//!    and the level layout is shared behind an `Arc`, so copying a state is O(1).
//!
//! 3. **Stable Agent Indices**: Agent 0 is the player, agent `i` is monster
//!    `i - 1`. Dead monsters keep their slot and are skipped in turn order.
//!
//! ## Modules
//!
//! - `core`: Geometry, tiles, layout, state, RNG, configuration
//! - `rules`: The generic `Game` interface and payoffs
//! - `games`: The dungeon transition engine, level parsing and rendering
//! - `agents`: Monster controller and a uniform random agent
//! - `sim`: Driver loop that plays a game with a set of agents

pub mod core;
pub mod rules;
pub mod games;
pub mod agents;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Direction, Point, Tile,
    Layout, DungeonState, Player, Monster, Inventory, InvariantViolation,
    GameRng, GameRngState, RandomSource,
    DungeonConfig,
};

pub use crate::rules::{ActionList, Game, Payoffs};

pub use crate::games::dungeon::{DungeonGame, GameStatus, LevelError};

pub use crate::agents::{Agent, MonsterAgent, UniformAgent};

pub use crate::sim::{Episode, SimConfig};

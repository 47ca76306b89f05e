//! Core engine types: geometry, tiles, layout, state, RNG, configuration.
//!
//! This module contains the data model every other module builds on. Nothing
//! here knows the transition rules; those live in `games::dungeon`.

pub mod geometry;
pub mod tile;
pub mod layout;
pub mod state;
pub mod rng;
pub mod config;

pub use geometry::{Direction, Point};
pub use tile::Tile;
pub use layout::Layout;
pub use state::{DungeonState, InvariantViolation, Inventory, Monster, Player};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::DungeonConfig;

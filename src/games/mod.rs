//! Game implementations.

pub mod dungeon;

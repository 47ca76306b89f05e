//! Grid dungeon crawler.
//!
//! One player and zero or more monsters alternate single-step moves:
//! - The player collects coins, daggers and keys by walking over them
//! - Walking into monsters costs one dagger per monster, or the player's life
//! - A monster walking into the player dies if the player holds a dagger,
//!   otherwise the player dies
//! - The player wins by reaching the exit while holding a key
//!
//! Levels are read from a text grid (`.` empty, `#` wall, `$` coin, `E` exit,
//! `@` player, `M` monster, `~` dagger, `K` key) and states render back to the
//! same legend.

mod game;
mod level;
mod render;

pub use game::{DungeonGame, GameStatus};
pub use level::LevelError;

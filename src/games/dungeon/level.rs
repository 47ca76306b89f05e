//! Reading levels from their textual grid form.
//!
//! Each line is one row; leading/trailing whitespace and blank lines are
//! ignored. Rows shorter than the widest row are padded with walls. Monsters
//! are numbered in reading order (top to bottom, left to right).

use im::{HashSet as ImHashSet, Vector};
use rustc_hash::FxHashSet;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::{DungeonState, Layout, Monster, Player, Point, Tile};

use super::game::DungeonGame;

/// Reasons a level cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level contains no rows")]
    Empty,

    #[error("level has no player start ('@')")]
    MissingPlayer,

    #[error("level has no exit ('E')")]
    MissingExit,

    #[error("level has more than one player start: {first} and {second}")]
    MultiplePlayers { first: Point, second: Point },

    #[error("level has more than one exit: {first} and {second}")]
    MultipleExits { first: Point, second: Point },

    #[error("unknown tile {ch:?} at {at}")]
    UnknownTile { ch: char, at: Point },

    #[error("failed to read level file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DungeonGame {
    /// Build a game from a textual grid of tiles.
    pub fn from_text(text: &str) -> Result<Self, LevelError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LevelError::Empty);
        }

        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let height = rows.len();

        let mut walkable = FxHashSet::default();
        let mut coins = ImHashSet::new();
        let mut daggers = ImHashSet::new();
        let mut keys = ImHashSet::new();
        let mut monsters = Vector::new();
        let mut player: Option<Point> = None;
        let mut exit: Option<Point> = None;

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let at = Point::new(x as i32, y as i32);
                let tile = Tile::from_char(ch).ok_or(LevelError::UnknownTile { ch, at })?;
                if tile == Tile::Wall {
                    continue;
                }
                walkable.insert(at);

                match tile {
                    Tile::Player => {
                        if let Some(first) = player.replace(at) {
                            return Err(LevelError::MultiplePlayers { first, second: at });
                        }
                    }
                    Tile::Exit => {
                        if let Some(first) = exit.replace(at) {
                            return Err(LevelError::MultipleExits { first, second: at });
                        }
                    }
                    Tile::Coin => {
                        coins.insert(at);
                    }
                    Tile::Dagger => {
                        daggers.insert(at);
                    }
                    Tile::Key => {
                        keys.insert(at);
                    }
                    Tile::Monster => monsters.push_back(Monster::new(at)),
                    Tile::Empty | Tile::Wall => {}
                }
            }
        }

        let player = player.ok_or(LevelError::MissingPlayer)?;
        let exit = exit.ok_or(LevelError::MissingExit)?;

        let layout = Arc::new(Layout::new(width, height, walkable, exit));
        let state = DungeonState::new(layout, Player::new(player), coins, daggers, keys, monsters);
        debug_assert!(state.check_invariants().is_ok());

        Ok(DungeonGame::new(state))
    }

    /// Build a game from a level file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_text(&text)
    }
}

impl FromStr for DungeonGame {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

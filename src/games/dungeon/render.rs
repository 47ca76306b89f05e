//! Text rendering of dungeon states.

use rustc_hash::FxHashSet;
use std::fmt::{self, Write};

use crate::core::{DungeonState, Point, Tile};

impl DungeonState {
    /// The tile shown at `point`.
    ///
    /// Precedence: wall, player, living monster, exit, key, coin, dagger.
    #[must_use]
    pub fn visible_tile(&self, point: Point) -> Tile {
        let monsters: FxHashSet<Point> = self.alive_monster_positions().collect();
        self.tile_with(point, &monsters)
    }

    fn tile_with(&self, point: Point, monsters: &FxHashSet<Point>) -> Tile {
        let layout = self.layout();
        if !layout.is_walkable(point) {
            Tile::Wall
        } else if point == self.player.position {
            Tile::Player
        } else if monsters.contains(&point) {
            Tile::Monster
        } else if point == layout.exit() {
            Tile::Exit
        } else if self.keys.contains(&point) {
            Tile::Key
        } else if self.coins.contains(&point) {
            Tile::Coin
        } else if self.daggers.contains(&point) {
            Tile::Dagger
        } else {
            Tile::Empty
        }
    }
}

impl fmt::Display for DungeonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inventory = &self.player.inventory;
        write!(
            f,
            "Inventory: {} Key(s), {} Dagger(s), {} Coin(s)",
            inventory.keys, inventory.daggers, inventory.coins
        )?;

        let monsters: FxHashSet<Point> = self.alive_monster_positions().collect();
        let layout = self.layout();
        for y in 0..layout.height() as i32 {
            f.write_char('\n')?;
            for x in 0..layout.width() as i32 {
                f.write_char(self.tile_with(Point::new(x, y), &monsters).as_char())?;
            }
        }
        Ok(())
    }
}

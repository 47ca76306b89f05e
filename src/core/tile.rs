//! Tile legend for textual levels.

use serde::{Deserialize, Serialize};

/// A single character of a textual dungeon map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Wall,
    Coin,
    Exit,
    Player,
    Monster,
    Dagger,
    Key,
}

impl Tile {
    /// Every tile, in legend order.
    pub const ALL: [Tile; 8] = [
        Tile::Empty,
        Tile::Wall,
        Tile::Coin,
        Tile::Exit,
        Tile::Player,
        Tile::Monster,
        Tile::Dagger,
        Tile::Key,
    ];

    /// Map character for this tile.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Coin => '$',
            Tile::Exit => 'E',
            Tile::Player => '@',
            Tile::Monster => 'M',
            Tile::Dagger => '~',
            Tile::Key => 'K',
        }
    }

    /// Parse a map character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Wall),
            '$' => Some(Tile::Coin),
            'E' => Some(Tile::Exit),
            '@' => Some(Tile::Player),
            'M' => Some(Tile::Monster),
            '~' => Some(Tile::Dagger),
            'K' => Some(Tile::Key),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_mapping_is_bijective() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_char(tile.as_char()), Some(tile));
        }
    }

    #[test]
    fn test_unknown_char() {
        assert_eq!(Tile::from_char('x'), None);
        assert_eq!(Tile::from_char(' '), None);
    }
}

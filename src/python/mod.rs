//! Python bindings for the dungeon engine.
//!
//! Exposes the game to Python search drivers. Directions cross the boundary
//! as the strings `"UP"`, `"DOWN"`, `"LEFT"`, `"RIGHT"` and `"NONE"`.
//!
//! ```python
//! import dungeon_crawler as dc
//!
//! game = dc.DungeonGame.from_text("@.K.E")
//! state = game.initial_state()
//! while not game.is_terminal(state)[0]:
//!     state = game.get_successor(state, game.get_actions(state)[-1])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// dungeon_crawler: a turn-based grid dungeon engine.
#[pymodule]
fn dungeon_crawler(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDungeonState>()?;
    m.add_class::<PyDungeonGame>()?;
    m.add_class::<PyMonsterAgent>()?;

    Ok(())
}

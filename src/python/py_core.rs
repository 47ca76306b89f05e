//! State and agent bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::agents::{Agent, MonsterAgent};
use crate::core::{Direction, DungeonState};

use super::py_games::PyDungeonGame;

/// Parse a direction name coming from Python.
pub(crate) fn parse_direction(name: &str) -> PyResult<Direction> {
    Direction::from_name(name)
        .ok_or_else(|| PyValueError::new_err(format!("unknown direction {name:?}")))
}

/// Opaque handle to a dungeon state.
#[pyclass(name = "DungeonState")]
#[derive(Clone)]
pub struct PyDungeonState(pub DungeonState);

#[pymethods]
impl PyDungeonState {
    /// Current turn holder (0 = player, i = monster i-1).
    #[getter]
    fn turn(&self) -> usize {
        self.0.turn
    }

    /// Completed rounds.
    #[getter]
    fn time(&self) -> u32 {
        self.0.time
    }

    /// Player position as `(x, y)`.
    #[getter]
    fn player_position(&self) -> (i32, i32) {
        (self.0.player.position.x, self.0.player.position.y)
    }

    #[getter]
    fn player_alive(&self) -> bool {
        self.0.player.alive
    }

    /// Player inventory as `(keys, daggers, coins)`.
    #[getter]
    fn inventory(&self) -> (u32, u32, u32) {
        let inv = self.0.player.inventory;
        (inv.keys, inv.daggers, inv.coins)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("DungeonState(turn={}, time={})", self.0.turn, self.0.time)
    }
}

/// Python wrapper for the stock monster controller.
#[pyclass(name = "MonsterAgent")]
pub struct PyMonsterAgent(MonsterAgent);

#[pymethods]
impl PyMonsterAgent {
    /// Create a monster controller; seeded from OS entropy when `seed` is None.
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        Self(seed.map_or_else(MonsterAgent::from_entropy, MonsterAgent::new))
    }

    /// Choose a direction for the monster whose turn it is.
    fn act(&mut self, game: &PyDungeonGame, state: &PyDungeonState) -> &'static str {
        self.0.act(&game.0, &state.0).name()
    }

    /// Committed direction.
    #[getter]
    fn direction(&self) -> &'static str {
        self.0.direction().name()
    }
}

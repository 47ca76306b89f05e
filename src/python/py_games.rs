//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Direction;
use crate::games::dungeon::DungeonGame;
use crate::rules::Game;

use super::py_core::{parse_direction, PyDungeonState};

/// Python wrapper for DungeonGame.
#[pyclass(name = "DungeonGame")]
pub struct PyDungeonGame(pub DungeonGame);

#[pymethods]
impl PyDungeonGame {
    /// Build a game from a textual level.
    #[staticmethod]
    fn from_text(text: &str) -> PyResult<Self> {
        DungeonGame::from_text(text)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Build a game from a level file.
    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        DungeonGame::from_file(path)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn initial_state(&self) -> PyDungeonState {
        PyDungeonState(self.0.initial_state())
    }

    /// Number of agents: the player plus one per monster.
    #[getter]
    fn agent_count(&self) -> usize {
        self.0.agent_count()
    }

    fn get_turn(&self, state: &PyDungeonState) -> usize {
        self.0.turn(&state.0)
    }

    /// Legal directions for the turn holder.
    fn get_actions(&self, state: &PyDungeonState) -> Vec<&'static str> {
        self.0
            .legal_actions(&state.0)
            .into_iter()
            .map(|dir| dir.name())
            .collect()
    }

    fn get_successor(&self, state: &PyDungeonState, action: &str) -> PyResult<PyDungeonState> {
        let action = parse_direction(action)?;
        let legal = self.0.legal_actions(&state.0);
        if !(legal.contains(&action) || (legal.is_empty() && action == Direction::None)) {
            return Err(PyValueError::new_err(format!(
                "{action} is not legal for turn {}",
                state.0.turn
            )));
        }
        Ok(PyDungeonState(self.0.successor(&state.0, action)))
    }

    /// `(terminal, payoffs)`; payoffs are None while the game continues.
    fn is_terminal(&self, state: &PyDungeonState) -> (bool, Option<Vec<f64>>) {
        match self.0.is_terminal(&state.0) {
            Some(payoffs) => (true, Some(payoffs.into_vec())),
            None => (false, None),
        }
    }

    fn score(&self, state: &PyDungeonState) -> f64 {
        self.0.score(&state.0)
    }

    /// Number of `is_terminal` calls so far.
    #[getter]
    fn terminal_checks(&self) -> u64 {
        self.0.terminal_checks()
    }

    fn render(&self, state: &PyDungeonState) -> String {
        state.0.to_string()
    }

    fn __repr__(&self) -> String {
        let layout = self.0.layout();
        format!(
            "DungeonGame({}x{}, monsters={})",
            layout.width(),
            layout.height(),
            self.0.monster_count()
        )
    }
}

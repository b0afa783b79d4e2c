//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::py_board::{PyBoard, PyLocation};
use crate::core::GameConfig;
use crate::game::FreeCellGame;

/// Python wrapper for FreeCellGame.
#[pyclass(name = "Game")]
pub struct PyFreeCellGame(FreeCellGame);

#[pymethods]
impl PyFreeCellGame {
    #[new]
    #[pyo3(signature = (seed=None, auto_play=true))]
    fn new(seed: Option<u64>, auto_play: bool) -> Self {
        let config = GameConfig {
            seed,
            auto_play,
        };
        Self(FreeCellGame::new(config))
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed()
    }

    /// Snapshot of the current board.
    #[getter]
    fn board(&self) -> PyBoard {
        PyBoard(self.0.board().clone())
    }

    fn is_won(&self) -> bool {
        self.0.is_won()
    }

    /// Play a move; returns the number of cards the player moved.
    fn play(&mut self, src: PyLocation, dst: PyLocation) -> PyResult<usize> {
        self.0
            .play(src.0, dst.0)
            .map(|outcome| outcome.moved)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn restart(&mut self) {
        self.0.restart();
    }

    fn new_deal(&mut self) {
        self.0.new_deal();
    }
}

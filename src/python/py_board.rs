//! Board and location bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Board;
use crate::core::{Location, LocationKind};
use crate::rules;

/// Python wrapper for Location. Always in range.
#[pyclass(name = "Location")]
#[derive(Clone, Copy, Debug)]
pub struct PyLocation(pub Location);

#[pymethods]
impl PyLocation {
    /// Create a location from a kind name ("cell", "foundation", "stack")
    /// and an index.
    #[new]
    fn new(kind: &str, index: u8) -> PyResult<Self> {
        let kind = match kind {
            "cell" => LocationKind::Cell,
            "foundation" => LocationKind::Foundation,
            "stack" => LocationKind::Stack,
            other => return Err(PyValueError::new_err(format!("unknown location kind {other:?}"))),
        };
        Location::checked(kind, index)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn kind(&self) -> String {
        self.0.kind().to_string()
    }

    #[getter]
    fn index(&self) -> usize {
        self.0.index()
    }

    fn __repr__(&self) -> String {
        format!("Location({:?}, {})", self.0.kind().to_string(), self.0.index())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Python wrapper for an immutable Board snapshot.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Deal a new board, reproducibly when `seed` is given.
    #[staticmethod]
    #[pyo3(signature = (seed=None))]
    fn deal(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(Board::deal_seeded(seed)),
            None => Self(Board::deal_random()),
        }
    }

    /// Cards at a location as text ("TH"), top first.
    fn pile(&self, location: PyLocation) -> Vec<String> {
        self.0.pile(location.0).iter().map(ToString::to_string).collect()
    }

    fn can_move(&self, src: PyLocation, dst: PyLocation) -> bool {
        rules::can_move(&self.0, src.0, dst.0)
    }

    fn num_movable(&self, src: PyLocation, dst: PyLocation) -> usize {
        rules::num_movable(&self.0, src.0, dst.0)
    }

    /// Unchecked move of `n` cards; returns a new board.
    fn move_cards(&self, src: PyLocation, dst: PyLocation, n: usize) -> PyResult<Self> {
        let available = self.0.len(src.0);
        if n > available {
            return Err(PyValueError::new_err(format!(
                "cannot move {n} card(s) from {}: only {available} present",
                src.0
            )));
        }
        Ok(Self(rules::move_cards(&self.0, src.0, dst.0, n)))
    }

    fn auto_move(&self) -> Self {
        Self(rules::auto_move(&self.0))
    }

    fn is_won(&self) -> bool {
        rules::is_won(&self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

//! Python bindings for the FreeCell engine.
//!
//! Exposes the pure board API and the session object to a Python
//! presentation layer.
//!
//! # Quick Start
//!
//! ```python
//! import freecell_engine as fc
//!
//! game = fc.Game(seed=42)
//! src, dst = fc.Location("stack", 0), fc.Location("cell", 0)
//! if game.board.num_movable(src, dst):
//!     game.play(src, dst)
//! print(game.board)
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_game;

pub use py_board::*;
pub use py_game::*;

/// freecell_engine: FreeCell rules engine.
#[pymodule]
fn freecell_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLocation>()?;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyFreeCellGame>()?;

    Ok(())
}

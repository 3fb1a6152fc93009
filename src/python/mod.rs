//! Python bindings for the Toguz Korgool engine.
//!
//! # Quick Start
//!
//! ```python
//! import toguz_korgool as tk
//!
//! board = tk.Board(seed=42)
//! while board.legal_moves():
//!     board.challenge_move()
//! print(board.score("A"), board.score("B"))
//! ```

use pyo3::prelude::*;

mod py_board;

pub use py_board::*;

/// toguz_korgool: rules engine for the Toguz Korgool board game.
#[pymodule]
fn toguz_korgool(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PySowReport>()?;
    Ok(())
}

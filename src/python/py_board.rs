//! Board bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::{Board, BoardEvent, SowOutcome, SowReport};
use crate::core::{BoardConfig, BoardError, GameRng, Side};
use crate::persist::{BoardSnapshot, SavedGame};

fn to_py_err(err: BoardError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_side(side: &str) -> PyResult<Side> {
    match side {
        "A" | "a" => Ok(Side::A),
        "B" | "b" => Ok(Side::B),
        other => Err(PyValueError::new_err(format!("unknown side {other:?}, expected \"A\" or \"B\""))),
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::A => "A",
        Side::B => "B",
    }
}

/// Python view of a completed sow.
#[pyclass(name = "SowReport")]
#[derive(Clone, Debug)]
pub struct PySowReport(pub SowReport);

#[pymethods]
impl PySowReport {
    /// Side that moved ("A" or "B").
    #[getter]
    fn side(&self) -> &'static str {
        side_name(self.0.side)
    }

    #[getter]
    fn from_pit(&self) -> usize {
        self.0.from.get()
    }

    #[getter]
    fn landing(&self) -> usize {
        self.0.landing.get()
    }

    /// Pieces added to the mover's kazan.
    #[getter]
    fn scored(&self) -> u32 {
        self.0.scored()
    }

    /// Index of the reserve pit created by this move, if any.
    #[getter]
    fn reserve_created(&self) -> Option<usize> {
        self.0.reserve_created().map(|p| p.get())
    }

    /// Whether the move captured an even landing pit.
    #[getter]
    fn captured(&self) -> bool {
        self.0
            .events
            .iter()
            .any(|e| matches!(e, BoardEvent::Captured { .. }))
    }

    fn __repr__(&self) -> String {
        format!(
            "SowReport(side={}, from={}, landing={}, scored={})",
            side_name(self.0.side),
            self.0.from,
            self.0.landing,
            self.0.scored()
        )
    }
}

/// Python wrapper for Board.
///
/// Owns a seeded RNG used by `random_move` and `challenge_move`.
#[pyclass(name = "Board")]
pub struct PyBoard {
    board: Board,
    rng: GameRng,
}

#[pymethods]
impl PyBoard {
    /// Create a new board.
    ///
    /// # Arguments
    /// - pieces_per_pit: Starting pieces in every pit (9 traditionally)
    /// - first: Side that moves first, "A" or "B"
    /// - seed: RNG seed for the move policies, drawn from the OS if omitted
    #[new]
    #[pyo3(signature = (pieces_per_pit = 9, first = "A", seed = None))]
    fn new(pieces_per_pit: u32, first: &str, seed: Option<u64>) -> PyResult<Self> {
        let config = BoardConfig::new()
            .with_pieces_per_pit(pieces_per_pit)
            .with_first_to_play(parse_side(first)?);
        let board = Board::with_config(&config).map_err(to_py_err)?;
        Ok(Self {
            board,
            rng: seed.map_or_else(GameRng::from_entropy, GameRng::new),
        })
    }

    /// Seed of the policy RNG; pass it back to replay the same choices.
    #[getter]
    fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Sow the given pit. Returns None if the move was not playable.
    fn sow(&mut self, pit: usize) -> PyResult<Option<PySowReport>> {
        match self.board.sow(pit).map_err(to_py_err)? {
            SowOutcome::Sown(report) => Ok(Some(PySowReport(report))),
            SowOutcome::Ignored(_) => Ok(None),
        }
    }

    /// Legal pits for the given side (defaults to the side to play).
    #[pyo3(signature = (side = None))]
    fn legal_moves(&self, side: Option<&str>) -> PyResult<Vec<usize>> {
        let side = match side {
            Some(s) => parse_side(s)?,
            None => self.board.next_to_play(),
        };
        Ok(self.board.legal_moves(side).iter().map(|p| p.get()).collect())
    }

    fn random_move(&mut self) -> PyResult<PySowReport> {
        self.board
            .random_move(&mut self.rng)
            .map(PySowReport)
            .map_err(to_py_err)
    }

    fn challenge_move(&mut self) -> PyResult<PySowReport> {
        self.board
            .challenge_move(&mut self.rng)
            .map(PySowReport)
            .map_err(to_py_err)
    }

    /// Reserve pit on the given side's row, or None.
    fn reserve_pit(&self, side: &str) -> PyResult<Option<usize>> {
        Ok(self.board.reserve_pit(parse_side(side)?).map(|p| p.get()))
    }

    fn pit_count(&self, pit: usize) -> PyResult<u32> {
        self.board.pit_count(pit).map_err(to_py_err)
    }

    fn score(&self, side: &str) -> PyResult<u32> {
        Ok(self.board.score(parse_side(side)?))
    }

    #[getter]
    fn next_to_play(&self) -> &'static str {
        side_name(self.board.next_to_play())
    }

    /// Encode the position (not the RNG) as bytes.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.board.snapshot().to_bytes().map_err(to_py_err)
    }

    /// Restore a position produced by `to_bytes`.
    #[staticmethod]
    #[pyo3(signature = (data, seed = 42))]
    fn from_bytes(data: Vec<u8>, seed: u64) -> PyResult<Self> {
        let snapshot = BoardSnapshot::from_bytes(&data).map_err(to_py_err)?;
        let board = Board::from_snapshot(&snapshot).map_err(to_py_err)?;
        Ok(Self {
            board,
            rng: GameRng::new(seed),
        })
    }

    /// Write the position as a JSON save-game document.
    fn to_json(&self) -> PyResult<String> {
        SavedGame::from_board(&self.board).to_json().map_err(to_py_err)
    }

    /// Load a JSON save-game document; A moves first.
    #[staticmethod]
    #[pyo3(signature = (json, seed = None))]
    fn from_json(json: &str, seed: Option<u64>) -> PyResult<Self> {
        let board = SavedGame::from_json(json)
            .and_then(|game| game.into_board())
            .map_err(to_py_err)?;
        Ok(Self {
            board,
            rng: seed.map_or_else(GameRng::from_entropy, GameRng::new),
        })
    }

    /// Copy the board; the copy gets a forked RNG stream.
    fn copy(&mut self) -> Self {
        Self {
            board: self.board.clone(),
            rng: self.rng.fork(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(A={}, B={}, next={})",
            self.board.score(Side::A),
            self.board.score(Side::B),
            side_name(self.board.next_to_play())
        )
    }

    fn __str__(&self) -> String {
        self.board.to_string()
    }
}

//! Errors used by the utilities around the diagram renderer.
//!
//! Rendering itself never fails: malformed placement fields degrade into a
//! best-effort diagram. `DiagramErrors` covers the surrounding surfaces that
//! can genuinely go wrong, such as square lookups on a parsed grid, random
//! position settings, and reading FEN records from files or standard input.

use std::io;

use thiserror::Error;

/// Unified error type for the crate.
///
/// Lookup and settings variants carry the offending input so callers can
/// report it back to the user verbatim.
#[derive(Debug, Error)]
pub enum DiagramErrors {
    /// A square string was not of the form `<file a-h><rank 1-8>`.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// The square is valid chess notation but the parsed grid is ragged and
    /// has no cell there.
    #[error("square {square} is outside the parsed placement grid")]
    SquareOutsideGrid { square: String },

    /// Piece density for random placements must lie in `0.0..=1.0`.
    #[error("piece density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),

    /// A FEN source produced no records.
    #[error("no FEN records found in {0}")]
    NoPositions(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

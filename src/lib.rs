//! Crate root module declarations for the FEN diagram renderer.
//!
//! Exposes the placement-field tokenizer, the streaming and grid-first board
//! renderers, and the utilities around them (square conversions, random
//! placements, FEN record sources) under stable module paths for the CLI,
//! benches, and external callers.

pub mod diagram {
    pub mod board_renderer;
    pub mod diagram_layout;
    pub mod placement_grid;
    pub mod rank_tokenizer;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_source;
    pub mod random_placement;
}

pub mod errors;

pub use diagram::board_renderer::{print_fen_diagram, render_fen_diagram, write_fen_diagram, RenderSummary};
pub use diagram::placement_grid::PlacementGrid;
pub use diagram::rank_tokenizer::{classify_placement_char, tokenize_placement, PlacementEvent};
pub use errors::DiagramErrors;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A board with no pieces on it.
pub const EMPTY_BOARD_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

//! Streaming FEN-to-diagram renderer.
//!
//! Drives a single scan over the placement field and writes the diagram as
//! events arrive; no board is built in memory. Rank labels come only from
//! counting `/` separators, so ragged or over-long fields still render,
//! just with fewer, more, narrower, or wider rows.

use std::fmt::{self, Write};
use std::io;

use crate::diagram::diagram_layout::*;
use crate::diagram::rank_tokenizer::{tokenize_placement, PlacementEvent};

/// What a render call actually emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Cell count of each data row, top row first.
    pub cells_per_row: Vec<usize>,
    pub pieces: usize,
    pub ignored_chars: usize,
}

impl RenderSummary {
    pub fn data_rows(&self) -> usize {
        self.cells_per_row.len()
    }

    /// Exactly eight rows of exactly eight cells.
    pub fn is_regular_board(&self) -> bool {
        self.cells_per_row.len() == BOARD_FILES
            && self.cells_per_row.iter().all(|&cells| cells == BOARD_FILES)
    }

    pub fn report(&self) -> String {
        format!(
            "rows={} cells_per_row={:?} pieces={} ignored={} regular={}",
            self.data_rows(),
            self.cells_per_row,
            self.pieces,
            self.ignored_chars,
            self.is_regular_board()
        )
    }
}

/// Per-scan state; lives on the stack of one render call.
struct ScanState {
    current_rank_label: i32,
    cells_in_current_row: usize,
    row_open: bool,
}

impl ScanState {
    fn new() -> Self {
        Self {
            current_rank_label: TOP_RANK_LABEL,
            cells_in_current_row: 0,
            row_open: false,
        }
    }

    fn open_row<W: Write>(&mut self, out: &mut W) -> fmt::Result {
        if !self.row_open {
            write_row_start(out, self.current_rank_label)?;
            self.row_open = true;
            self.cells_in_current_row = 0;
        }
        Ok(())
    }

    fn close_row<W: Write>(&mut self, out: &mut W, summary: &mut RenderSummary) -> fmt::Result {
        write_row_end(out)?;
        summary.cells_per_row.push(self.cells_in_current_row);
        self.row_open = false;
        Ok(())
    }
}

/// Render `fen` into any `fmt::Write` sink.
///
/// Only errors raised by the sink itself are returned.
pub fn write_fen_diagram<W: Write>(fen: &str, out: &mut W) -> Result<RenderSummary, fmt::Error> {
    let mut summary = RenderSummary::default();
    let mut state = ScanState::new();
    let mut tokens = tokenize_placement(fen);

    write_preamble(out)?;

    for event in tokens.by_ref() {
        match event {
            PlacementEvent::Piece(symbol) => {
                state.open_row(out)?;
                write_piece_cell(out, symbol)?;
                state.cells_in_current_row += 1;
                summary.pieces += 1;
            }
            PlacementEvent::EmptyRun(count) => {
                state.open_row(out)?;
                write_empty_cells(out, count)?;
                state.cells_in_current_row += count as usize;
            }
            PlacementEvent::RankBreak => {
                state.open_row(out)?;
                state.close_row(out, &mut summary)?;
                write_border(out)?;
                state.current_rank_label -= 1;
                state.open_row(out)?;
            }
            PlacementEvent::End => {
                // An empty placement field never opens a row.
                if state.row_open {
                    state.close_row(out, &mut summary)?;
                    write_border(out)?;
                }
                break;
            }
        }
    }

    summary.ignored_chars = tokens.ignored_count();

    if !summary.is_regular_board() && summary.data_rows() > 0 {
        log::debug!("irregular placement field rendered: {}", summary.report());
    }

    Ok(summary)
}

/// Render `fen` to a freshly allocated string.
pub fn render_fen_diagram(fen: &str) -> String {
    let mut out = String::new();
    write_fen_diagram(fen, &mut out).expect("writing to a String cannot fail");
    out
}

/// Render `fen` and write the whole diagram to an I/O stream in one call.
pub fn print_fen_diagram<W: io::Write>(fen: &str, out: &mut W) -> io::Result<RenderSummary> {
    let mut diagram = String::new();
    let summary = write_fen_diagram(fen, &mut diagram).map_err(io::Error::other)?;
    out.write_all(diagram.as_bytes())?;
    Ok(summary)
}

//! Grid-first view of a placement field.
//!
//! Materializes the board as ranks of cells before rendering, for callers
//! that want to query squares or re-encode the field. Built from the same
//! event stream as the streaming renderer, so ragged input stays ragged
//! here too and `render` matches `render_fen_diagram` byte for byte.

use std::fmt::{self, Write};

use crate::diagram::diagram_layout::*;
use crate::diagram::rank_tokenizer::{tokenize_placement, PlacementEvent};
use crate::errors::DiagramErrors;
use crate::utils::algebraic::algebraic_to_file_rank;

/// One cell: `None` for empty, otherwise the piece symbol.
pub type Cell = Option<char>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementGrid {
    /// Ranks in FEN order; index 0 is labelled 8.
    ranks: Vec<Vec<Cell>>,
}

impl PlacementGrid {
    pub fn from_fen(fen: &str) -> Self {
        let mut ranks: Vec<Vec<Cell>> = Vec::new();
        let mut current: Option<Vec<Cell>> = None;

        for event in tokenize_placement(fen) {
            match event {
                PlacementEvent::Piece(symbol) => {
                    current.get_or_insert_with(Vec::new).push(Some(symbol));
                }
                PlacementEvent::EmptyRun(count) => {
                    let row = current.get_or_insert_with(Vec::new);
                    row.resize(row.len() + count as usize, None);
                }
                PlacementEvent::RankBreak => {
                    ranks.push(current.take().unwrap_or_default());
                    current = Some(Vec::new());
                }
                PlacementEvent::End => break,
            }
        }

        if let Some(row) = current {
            ranks.push(row);
        }

        Self { ranks }
    }

    pub fn ranks(&self) -> &[Vec<Cell>] {
        &self.ranks
    }

    pub fn rank_count(&self) -> usize {
        self.ranks.len()
    }

    /// Exactly eight ranks of exactly eight cells.
    pub fn is_regular_board(&self) -> bool {
        self.ranks.len() == BOARD_FILES && self.ranks.iter().all(|rank| rank.len() == BOARD_FILES)
    }

    /// Look up a square such as `"e4"`.
    ///
    /// Ranks are located by their label, so on a short field the lower
    /// squares are reported as outside the grid rather than shifted.
    pub fn piece_at(&self, square: &str) -> Result<Cell, DiagramErrors> {
        let (file_index, rank_index) = algebraic_to_file_rank(square)?;
        let row_index = BOARD_FILES - 1 - rank_index;

        self.ranks
            .get(row_index)
            .and_then(|rank| rank.get(file_index))
            .copied()
            .ok_or_else(|| DiagramErrors::SquareOutsideGrid {
                square: square.to_owned(),
            })
    }

    /// Re-encode the grid as a normalized placement field.
    ///
    /// Adjacent empty runs are merged and runs longer than nine are split,
    /// so rendering the result gives the same diagram as the original input.
    pub fn to_placement_field(&self) -> String {
        if let [only] = self.ranks.as_slice() {
            if only.is_empty() {
                return "0".to_owned();
            }
        }

        let encoded: Vec<String> = self.ranks.iter().map(|rank| encode_rank(rank)).collect();
        encoded.join("/")
    }

    pub fn write_diagram<W: Write>(&self, out: &mut W) -> fmt::Result {
        write_preamble(out)?;

        for (rank_label, rank) in (i32::MIN..=TOP_RANK_LABEL).rev().zip(&self.ranks) {
            write_row_start(out, rank_label)?;
            for cell in rank {
                match cell {
                    Some(symbol) => write_piece_cell(out, *symbol)?,
                    None => write_empty_cells(out, 1)?,
                }
            }
            write_row_end(out)?;
            write_border(out)?;
        }

        Ok(())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_diagram(&mut out)
            .expect("writing to a String cannot fail");
        out
    }
}

fn encode_rank(rank: &[Cell]) -> String {
    let mut out = String::new();
    let mut empty_count = 0u8;

    for cell in rank {
        match cell {
            Some(symbol) => {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(*symbol);
            }
            None => {
                if empty_count == 9 {
                    out.push('9');
                    empty_count = 0;
                }
                empty_count += 1;
            }
        }
    }

    if empty_count > 0 {
        out.push(char::from(b'0' + empty_count));
    }

    out
}

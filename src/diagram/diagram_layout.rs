//! Fixed-width layout pieces of the board diagram.
//!
//! Every line of a regular 8x8 diagram is 37 columns wide: a 3-column left
//! border column holding the rank label, eight 4-column cells, and a closing
//! ` |`. Both renderers assemble their output from these helpers so the two
//! stay byte-identical.

use std::fmt::{self, Write};

/// Files on the board, and the width of the header.
pub const BOARD_FILES: usize = 8;

/// Rank label of the first data row.
pub const TOP_RANK_LABEL: i32 = 8;

/// One 4-column segment of a border line.
pub const BORDER_SEGMENT: &str = "+---";

/// Cell contents for an empty square.
pub const EMPTY_CELL: &str = " |  ";

/// `+---` for the label column and each file, then the closing `+`.
pub fn write_border<W: Write>(out: &mut W) -> fmt::Result {
    for _ in 0..=BOARD_FILES {
        out.write_str(BORDER_SEGMENT)?;
    }
    out.write_str("+\n")
}

/// `|   | a | b | c | d | e | f | g | h |`
pub fn write_file_header<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str("|  ")?;
    for file in (b'a'..).take(BOARD_FILES) {
        write!(out, " | {}", char::from(file))?;
    }
    out.write_str(" |\n")
}

/// Top border, file header, and the separator under it.
pub fn write_preamble<W: Write>(out: &mut W) -> fmt::Result {
    write_border(out)?;
    write_file_header(out)?;
    write_border(out)
}

#[inline]
pub fn write_row_start<W: Write>(out: &mut W, rank_label: i32) -> fmt::Result {
    write!(out, "| {rank_label}")
}

#[inline]
pub fn write_piece_cell<W: Write>(out: &mut W, symbol: char) -> fmt::Result {
    write!(out, " | {symbol}")
}

#[inline]
pub fn write_empty_cells<W: Write>(out: &mut W, count: u32) -> fmt::Result {
    for _ in 0..count {
        out.write_str(EMPTY_CELL)?;
    }
    Ok(())
}

#[inline]
pub fn write_row_end<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str(" |\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_and_header_share_width() {
        let mut border = String::new();
        write_border(&mut border).expect("string write");
        let mut header = String::new();
        write_file_header(&mut header).expect("string write");

        assert_eq!(border, "+---+---+---+---+---+---+---+---+---+\n");
        assert_eq!(header, "|   | a | b | c | d | e | f | g | h |\n");
        assert_eq!(border.len(), header.len());
    }

    #[test]
    fn row_pieces_line_up_with_border() {
        let mut row = String::new();
        write_row_start(&mut row, 8).expect("string write");
        write_piece_cell(&mut row, 'K').expect("string write");
        write_empty_cells(&mut row, 7).expect("string write");
        write_row_end(&mut row).expect("string write");

        assert_eq!(row, "| 8 | K |   |   |   |   |   |   |   |\n");
        assert_eq!(row.len(), 38);
    }

    #[test]
    fn zero_empty_cells_writes_nothing() {
        let mut row = String::new();
        write_empty_cells(&mut row, 0).expect("string write");
        assert!(row.is_empty());
    }
}

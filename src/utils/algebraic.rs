//! Conversions between algebraic square names and grid coordinates.
//!
//! Grid coordinates are `(file_index, rank_index)` with `a1 == (0, 0)` and
//! `h8 == (7, 7)`.

use crate::errors::DiagramErrors;

/// Convert algebraic notation (for example: "e4") to `(file_index, rank_index)`.
#[inline]
pub fn algebraic_to_file_rank(square: &str) -> Result<(usize, usize), DiagramErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(DiagramErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(DiagramErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    Ok(((file - b'a') as usize, (rank - b'1') as usize))
}

/// Convert `(file_index, rank_index)` back to algebraic notation.
#[inline]
pub fn file_rank_to_algebraic(file_index: usize, rank_index: usize) -> Result<String, DiagramErrors> {
    if file_index > 7 || rank_index > 7 {
        return Err(DiagramErrors::InvalidAlgebraicSquare(format!(
            "({file_index}, {rank_index})"
        )));
    }

    let file_char = char::from(b'a' + file_index as u8);
    let rank_char = char::from(b'1' + rank_index as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_file_rank, file_rank_to_algebraic};

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_file_rank("a1").expect("a1 should parse"), (0, 0));
        assert_eq!(algebraic_to_file_rank("h8").expect("h8 should parse"), (7, 7));
        assert_eq!(algebraic_to_file_rank("E4").expect("E4 should parse"), (4, 3));
        assert_eq!(file_rank_to_algebraic(4, 3).expect("e4 should convert"), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "e44", "i1", "a9", "a0", "4e"] {
            assert!(algebraic_to_file_rank(bad).is_err(), "square {bad:?}");
        }
        assert!(file_rank_to_algebraic(8, 0).is_err());
    }
}

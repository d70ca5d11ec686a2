//! Line-oriented FEN record reader.
//!
//! Stands in for the game-state provider when positions come from a file or
//! a pipe: one record per line, blank lines and `#` comments skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::DiagramErrors;

/// Read every FEN record from `reader`.
///
/// Only the line ending is removed; a leading space stays, so such a record
/// renders with an empty placement field just as it would when passed in
/// directly.
pub fn read_fen_records<R: BufRead>(reader: R) -> Result<Vec<String>, DiagramErrors> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        records.push(line);
    }

    log::debug!("read {} FEN records", records.len());
    Ok(records)
}

/// Read FEN records from a file, failing when it holds none.
pub fn read_fen_file(path: &Path) -> Result<Vec<String>, DiagramErrors> {
    let file = File::open(path)?;
    let records = read_fen_records(BufReader::new(file))?;

    if records.is_empty() {
        return Err(DiagramErrors::NoPositions(path.display().to_string()));
    }

    Ok(records)
}

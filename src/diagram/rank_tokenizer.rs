//! Character classifier for the FEN piece-placement field.
//!
//! Turns the placement field into a stream of `PlacementEvent`s. The stream
//! stops at the first space, so a complete FEN record (side to move,
//! castling, en-passant, clocks) can be handed in without trimming.

use std::iter::FusedIterator;
use std::str::Chars;

/// One classified unit of the piece-placement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEvent {
    /// An occupied square. The symbol is opaque and shown verbatim.
    Piece(char),
    /// The next `n` files of the current rank are empty.
    EmptyRun(u32),
    /// The current rank is complete; a new one begins.
    RankBreak,
    /// First space or end of input. Nothing after this is examined.
    End,
}

/// Classify a single placement character.
///
/// Returns `None` for characters that carry no meaning in the placement
/// field; callers skip those silently. Digits map to their face value, so
/// `'0'` is an empty run of zero files and `'9'` a run of nine.
#[inline]
pub fn classify_placement_char(ch: char) -> Option<PlacementEvent> {
    match ch {
        ' ' => Some(PlacementEvent::End),
        '/' => Some(PlacementEvent::RankBreak),
        c if c.is_ascii_digit() => c.to_digit(10).map(PlacementEvent::EmptyRun),
        c if c.is_ascii_alphabetic() => Some(PlacementEvent::Piece(c)),
        _ => None,
    }
}

/// Iterator over the events of a placement field.
///
/// Yields exactly one `End`, then nothing.
#[derive(Debug, Clone)]
pub struct PlacementTokens<'a> {
    chars: Chars<'a>,
    ignored: usize,
    finished: bool,
}

impl PlacementTokens<'_> {
    /// Number of characters skipped so far because they had no meaning.
    pub fn ignored_count(&self) -> usize {
        self.ignored
    }
}

impl Iterator for PlacementTokens<'_> {
    type Item = PlacementEvent;

    fn next(&mut self) -> Option<PlacementEvent> {
        if self.finished {
            return None;
        }

        loop {
            let event = match self.chars.next() {
                Some(ch) => match classify_placement_char(ch) {
                    Some(event) => event,
                    None => {
                        log::trace!("ignoring placement character {ch:?}");
                        self.ignored += 1;
                        continue;
                    }
                },
                None => PlacementEvent::End,
            };

            if event == PlacementEvent::End {
                self.finished = true;
            }
            return Some(event);
        }
    }
}

impl FusedIterator for PlacementTokens<'_> {}

/// Tokenize the placement field of `fen`.
pub fn tokenize_placement(fen: &str) -> PlacementTokens<'_> {
    PlacementTokens {
        chars: fen.chars(),
        ignored: 0,
        finished: false,
    }
}

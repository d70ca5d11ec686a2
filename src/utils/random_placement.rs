//! Random piece-placement generator.
//!
//! Produces well-formed placement fields (8 ranks of 8 files, digits merged
//! into maximal empty runs) for demos, property tests, and benchmarks. The
//! positions are not chess-legal; symbols are drawn uniformly from the twelve
//! standard piece letters.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::diagram::diagram_layout::BOARD_FILES;
use crate::errors::DiagramErrors;

const PIECE_SYMBOLS: [char; 12] = ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];

/// Trailing fields appended by `random_fen_record`.
const RECORD_SUFFIX: &str = " w - - 0 1";

/// Generate a placement field where each square is occupied with probability
/// `density`.
pub fn random_placement_field<R: Rng + ?Sized>(rng: &mut R, density: f64) -> Result<String, DiagramErrors> {
    if !(0.0..=1.0).contains(&density) {
        return Err(DiagramErrors::InvalidDensity(density));
    }

    let mut out = String::new();

    for rank in 0..BOARD_FILES {
        let mut empty_count = 0u8;

        for _ in 0..BOARD_FILES {
            if rng.random_bool(density) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                let symbol = PIECE_SYMBOLS.choose(rng).copied().unwrap_or('P');
                out.push(symbol);
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank + 1 < BOARD_FILES {
            out.push('/');
        }
    }

    Ok(out)
}

/// Generate a full FEN record: a random placement field plus fixed trailing
/// fields.
pub fn random_fen_record<R: Rng + ?Sized>(rng: &mut R, density: f64) -> Result<String, DiagramErrors> {
    let mut record = random_placement_field(rng, density)?;
    record.push_str(RECORD_SUFFIX);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{random_fen_record, random_placement_field};

    fn file_count(rank: &str) -> u32 {
        rank.chars()
            .map(|ch| ch.to_digit(10).unwrap_or(1))
            .sum()
    }

    #[test]
    fn random_fields_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let field = random_placement_field(&mut rng, 0.5).expect("valid density");
            let ranks: Vec<&str> = field.split('/').collect();
            assert_eq!(ranks.len(), 8, "field {field}");
            for rank in ranks {
                assert_eq!(file_count(rank), 8, "field {field}");
                assert!(!rank.contains("11"), "empty runs should be merged in {field}");
            }
        }
    }

    #[test]
    fn density_extremes_produce_empty_and_full_boards() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            random_placement_field(&mut rng, 0.0).expect("valid density"),
            "8/8/8/8/8/8/8/8"
        );
        let full = random_placement_field(&mut rng, 1.0).expect("valid density");
        assert!(!full.chars().any(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn same_seed_same_record() {
        let a = random_fen_record(&mut StdRng::seed_from_u64(9), 0.3).expect("valid density");
        let b = random_fen_record(&mut StdRng::seed_from_u64(9), 0.3).expect("valid density");
        assert_eq!(a, b);
        assert!(a.ends_with(" w - - 0 1"));
    }

    #[test]
    fn out_of_range_density_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_placement_field(&mut rng, 1.5).is_err());
        assert!(random_placement_field(&mut rng, -0.1).is_err());
        assert!(random_placement_field(&mut rng, f64::NAN).is_err());
    }
}

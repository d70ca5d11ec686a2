//! Command-line front end: prints board diagrams for FEN records.
//!
//! Usage:
//! `fen_diagram rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`
//! `fen_diagram --file positions.fen --summary`
//! `cat positions.fen | fen_diagram --stdin`
//! `fen_diagram --random 3 --seed 42`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use fen_diagram::errors::DiagramErrors;
use fen_diagram::utils::fen_source::{read_fen_file, read_fen_records};
use fen_diagram::utils::random_placement::random_fen_record;
use fen_diagram::{print_fen_diagram, STARTING_POSITION_FEN};

/// Environment variable supplying the default `--seed`.
const SEED_ENV: &str = "FEN_DIAGRAM_SEED";

#[derive(Parser, Debug)]
#[command(name = "fen_diagram")]
#[command(about = "Print fixed-width board diagrams for FEN positions")]
struct Args {
    /// FEN record; unquoted words are joined with single spaces
    fen: Vec<String>,

    /// Read FEN records from a file, one per line
    #[arg(short, long, conflicts_with_all = ["fen", "stdin", "random"])]
    file: Option<PathBuf>,

    /// Read FEN records from standard input, one per line
    #[arg(long, conflicts_with_all = ["fen", "random"])]
    stdin: bool,

    /// Print this many random positions
    #[arg(short, long, conflicts_with = "fen")]
    random: Option<usize>,

    /// Seed for --random (defaults to $FEN_DIAGRAM_SEED, else 0)
    #[arg(long)]
    seed: Option<u64>,

    /// Piece density for --random, between 0 and 1
    #[arg(long, default_value_t = 0.35)]
    density: f64,

    /// Print the render summary after each diagram
    #[arg(long)]
    summary: bool,

    /// Enable info logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(args: &Args) {
    let log_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level))
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .write_style(env_logger::WriteStyle::Never)
        .init();
}

/// `--seed` wins; otherwise the environment value, falling back to 0 when it
/// is missing or not a number.
fn resolve_seed(flag: Option<u64>, env_value: Option<String>) -> u64 {
    if let Some(seed) = flag {
        return seed;
    }

    match env_value {
        Some(value) => value.trim().parse::<u64>().unwrap_or_else(|_| {
            log::warn!("ignoring non-numeric {SEED_ENV}={value}");
            0
        }),
        None => 0,
    }
}

fn collect_records<R: BufRead>(args: &Args, stdin: R) -> Result<Vec<String>, DiagramErrors> {
    if let Some(path) = &args.file {
        log::info!("reading positions from {}", path.display());
        return read_fen_file(path);
    }

    if args.stdin {
        let records = read_fen_records(stdin)?;
        if records.is_empty() {
            return Err(DiagramErrors::NoPositions("standard input".to_owned()));
        }
        return Ok(records);
    }

    if let Some(count) = args.random {
        let seed = resolve_seed(args.seed, std::env::var(SEED_ENV).ok());
        log::info!("generating {count} random positions with seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        return (0..count)
            .map(|_| random_fen_record(&mut rng, args.density))
            .collect();
    }

    if args.fen.is_empty() {
        return Ok(vec![STARTING_POSITION_FEN.to_owned()]);
    }

    Ok(vec![args.fen.join(" ")])
}

fn main() -> Result<(), DiagramErrors> {
    let args = Args::parse();
    init_logging(&args);

    let records = collect_records(&args, io::stdin().lock())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (idx, fen) in records.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        if records.len() > 1 || args.random.is_some() {
            writeln!(out, "{fen}")?;
        }

        let summary = print_fen_diagram(fen, &mut out)?;
        if args.summary {
            writeln!(out, "{}", summary.report())?;
        }
    }

    out.flush()?;
    Ok(())
}

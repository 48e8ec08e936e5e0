use clap::error::ErrorKind;
use clap::Parser;

use crate::error::LifeError;
use crate::rules::Pattern;

pub const USAGE: &str = "Usage: sparse_life rpentomino 50";

/// Print successive generations of Conway's Game of Life as text grids.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sparse_life", version)]
pub struct Args {
    /// Starting pattern: rpentomino, glider or square.
    pub pattern: Pattern,

    /// Number of generations to compute after the starting one.
    #[arg(value_parser = parse_iterations, allow_negative_numbers = true)]
    pub iterations: usize,
}

pub fn parse_iterations(s: &str) -> Result<usize, LifeError> {
    s.parse()
        .map_err(|_| LifeError::InvalidIterations(s.to_string()))
}

/// Parsed arguments, or `None` after the usage line has been printed.
///
/// `--help` and `--version` are left to clap, which prints and exits.
pub fn read_args<I, T>(argv: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Some(args),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::warn!("Rejected arguments: {:?}", err.kind());
            println!("{}", USAGE);
            None
        }
    }
}

// Declare modules directly in the binary crate root
pub mod state;
pub mod error;
pub mod rules;
pub mod compute;
pub mod render;
pub mod input;

use std::io::{self, Write};

use anyhow::Context;

use crate::compute::iterate;
use crate::render::render;
use crate::rules::Pattern;

/// Writes every generation from the seed through `iterations`, each grid
/// followed by a blank line.
pub fn run(pattern: Pattern, iterations: usize, out: &mut impl Write) -> io::Result<()> {
    log::info!("Running {} for {} iterations", pattern, iterations);
    let generations = iterate(pattern.generation(), iterations);
    for generation in &generations {
        writeln!(out, "{}", render(generation))?;
    }
    log::info!(
        "Finished with {} live cells",
        generations.last().map_or(0, |g| g.len())
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(args) = input::read_args(std::env::args_os()) else {
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run(args.pattern, args.iterations, &mut out).context("failed to write generations")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

use crate::rules::will_be_alive;
use crate::state::Generation;

/// Cells outside the live region that may be born in one step.
pub const BORDER: i64 = 1;

/// Apply Game of Life rules to `generation` for one step.
///
/// Only the bounding box grown by [`BORDER`] is visited, so the cost follows
/// the area of the live region rather than any fixed grid size.
pub fn advance(generation: &Generation) -> Generation {
    let area = generation.bounding_box().expand(BORDER);
    area.cells()
        .filter(|&cell| will_be_alive(cell, generation))
        .collect()
}

/// Generations `0..=steps`, starting with `initial` unchanged.
pub fn iterate(initial: Generation, steps: usize) -> Vec<Generation> {
    let mut generations = Vec::with_capacity(steps + 1);
    generations.push(initial);
    for step in 1..=steps {
        let next = advance(&generations[step - 1]);
        log::debug!("Generation {}: {} live cells", step, next.len());
        generations.push(next);
    }
    generations
}

//! Rules module for Conway's Game of Life simulation
//!
//! This module contains the neighborhood and survival rule for the classic
//! B3/S23 game, plus the named starting patterns.
//!
//! Game of Life standard rules:
//! 1. Any live cell with fewer than two live neighbors dies (underpopulation)
//! 2. Any live cell with two or three live neighbors lives (survival)
//! 3. Any live cell with more than three live neighbors dies (overpopulation)
//! 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)

pub mod patterns;

pub use patterns::Pattern;

use crate::state::{Coord, Generation};

/// Number of live neighbors for a dead cell to become alive
pub const BIRTH_COUNT: usize = 3;
/// Number of live neighbors that lets a live cell survive, besides `BIRTH_COUNT`
pub const SURVIVAL_COUNT: usize = 2;

/// The 8 cells of the Moore neighborhood, top row first, left to right.
pub fn neighbors_of(coord: Coord) -> [Coord; 8] {
    let Coord { x, y } = coord;
    [
        Coord::new(x - 1, y + 1),
        Coord::new(x, y + 1),
        Coord::new(x + 1, y + 1),
        Coord::new(x - 1, y),
        Coord::new(x + 1, y),
        Coord::new(x - 1, y - 1),
        Coord::new(x, y - 1),
        Coord::new(x + 1, y - 1),
    ]
}

/// The neighbors of `coord` that are alive in `generation`.
pub fn living_neighbors(coord: Coord, generation: &Generation) -> Vec<Coord> {
    neighbors_of(coord)
        .into_iter()
        .filter(|&n| generation.is_alive(n))
        .collect()
}

/// Whether `coord` is alive in the generation after `generation`.
pub fn will_be_alive(coord: Coord, generation: &Generation) -> bool {
    match living_neighbors(coord, generation).len() {
        BIRTH_COUNT => true,
        SURVIVAL_COUNT => generation.is_alive(coord),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_neighbors_of_origin() {
        let expected: HashSet<Coord> = [
            (-1, 1),
            (0, 1),
            (1, 1),
            (-1, 0),
            (1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
        ]
        .into_iter()
        .map(|(x, y)| Coord::new(x, y))
        .collect();
        let actual: HashSet<Coord> = neighbors_of(Coord::ORIGIN).into_iter().collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_living_neighbors() {
        let generation = generation![(0, 1), (1, 1), (5, 5), (0, 0)];
        let mut found = living_neighbors(Coord::ORIGIN, &generation);
        found.sort();
        assert_eq!(vec![Coord::new(0, 1), Coord::new(1, 1)], found);
        assert!(living_neighbors(Coord::new(10, 10), &generation).is_empty());
    }

    /// A live center cell at the origin with `n` live neighbors.
    fn live_center_with(n: usize) -> Generation {
        let mut generation = generation![(0, 0)];
        generation.extend(neighbors_of(Coord::ORIGIN).into_iter().take(n));
        generation
    }

    /// A dead center cell at the origin with `n` live neighbors.
    fn dead_center_with(n: usize) -> Generation {
        neighbors_of(Coord::ORIGIN).into_iter().take(n).collect()
    }

    #[test]
    fn test_survival() {
        assert!(will_be_alive(Coord::ORIGIN, &live_center_with(2)));
        assert!(will_be_alive(Coord::ORIGIN, &live_center_with(3)));
    }

    #[test]
    fn test_death() {
        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert!(!will_be_alive(Coord::ORIGIN, &live_center_with(n)), "n = {}", n);
        }
    }

    #[test]
    fn test_birth() {
        assert!(will_be_alive(Coord::ORIGIN, &dead_center_with(3)));
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert!(!will_be_alive(Coord::ORIGIN, &dead_center_with(n)), "n = {}", n);
        }
    }

    proptest! {
        /// Neighbors are distinct, adjacent and never the cell itself.
        #[test]
        fn test_neighbors_are_adjacent(x in -1000i64..1000, y in -1000i64..1000) {
            let center = Coord::new(x, y);
            let neighbors = neighbors_of(center);
            let distinct: HashSet<Coord> = neighbors.into_iter().collect();
            prop_assert_eq!(8, distinct.len());
            for n in neighbors {
                prop_assert!(n != center);
                prop_assert!((n.x - x).abs() <= 1 && (n.y - y).abs() <= 1);
            }
        }
    }
}

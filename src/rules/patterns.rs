use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;
use crate::state::Generation;

/// Predefined patterns for seeding the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A methuselah that takes over a thousand generations to settle
    RPentomino,
    /// A diagonal spaceship next to a block
    Glider,
    /// A 2x2 still life
    Square,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::RPentomino, Pattern::Glider, Pattern::Square];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Pattern::RPentomino => "rpentomino",
            Pattern::Glider => "glider",
            Pattern::Square => "square",
        }
    }

    /// Live cells of the pattern in absolute coordinates
    pub fn cells(self) -> &'static [(i64, i64)] {
        match self {
            Pattern::RPentomino => &[(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)],
            Pattern::Glider => &[
                // Block
                (-2, -2), (-1, -2),
                (-2, -1), (-1, -1),

                // Glider
                (1, 1), (2, 1), (3, 1),
                (3, 2),
                (2, 3),
            ],
            Pattern::Square => &[(1, 1), (2, 1), (1, 2), (2, 2)],
        }
    }

    pub fn generation(self) -> Generation {
        Generation::seed(self.cells().iter().copied())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| LifeError::UnknownPattern(s.to_string()))
    }
}

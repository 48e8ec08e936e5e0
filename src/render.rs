use itertools::Itertools;

use crate::state::{is_alive, Coord, Generation};

pub const FILLED: char = '\u{25A3}'; // ▣
pub const EMPTY: char = '\u{25A2}'; // ▢
pub const CELL_SEPARATOR: &str = " ";

pub fn render_cell(coord: Coord, generation: &Generation) -> char {
    if is_alive(coord, generation) {
        FILLED
    } else {
        EMPTY
    }
}

/// Draws the bounding box of `generation` as text, top row first.
///
/// Cells in a row are separated by a space and every row ends with a newline.
/// An empty generation draws as the single empty cell at the origin.
pub fn render(generation: &Generation) -> String {
    let bbox = generation.bounding_box();
    let mut out = String::with_capacity((bbox.width() * bbox.height() * 4) as usize);
    for y in bbox.rows() {
        let row = bbox
            .columns()
            .map(|x| render_cell(Coord::new(x, y), generation))
            .join(CELL_SEPARATOR);
        out.push_str(&row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation;
    use crate::rules::Pattern;

    #[test]
    fn test_render_empty() {
        assert_eq!("▢\n", render(&Generation::new()));
    }

    #[test]
    fn test_render_square() {
        assert_eq!("▣ ▣\n▣ ▣\n", render(&Pattern::Square.generation()));
    }

    #[test]
    fn test_render_orientation() {
        // Higher y renders first, lower x renders leftmost.
        let generation = generation![(0, 1), (1, 0)];
        assert_eq!("▣ ▢\n▢ ▣\n", render(&generation));
    }

    #[test]
    fn test_render_rpentomino() {
        let expected = "\
▢ ▣ ▣
▣ ▣ ▢
▢ ▣ ▢
";
        assert_eq!(expected, render(&Pattern::RPentomino.generation()));
    }

    #[test]
    fn test_render_cell() {
        let generation = generation![(4, -2)];
        assert_eq!(FILLED, render_cell(Coord::new(4, -2), &generation));
        assert_eq!(EMPTY, render_cell(Coord::new(-2, 4), &generation));
    }
}

//! Plain text board rendering
//!
//! One character per combined coordinate: `o` for markers, `-` and `|`
//! for borders, `+` for open vertices, a galaxy letter for assigned cells
//! and `.` for unassigned ones. Meant for display collaborators and for
//! eyeballing partial solves.

use crate::grid::{Coord, ElementKind, GalaxyId, Grid};

const LABELS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn label(galaxy: GalaxyId) -> char {
    LABELS[galaxy.0 as usize % LABELS.len()] as char
}

pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let coord = Coord::new(row, col);
            let ch = if grid.marker_at(coord).is_some() {
                'o'
            } else {
                match coord.kind() {
                    ElementKind::Vertex => '+',
                    ElementKind::Cell => match grid.parent_of(coord) {
                        Some(galaxy) => label(galaxy),
                        None => '.',
                    },
                    ElementKind::Edge => {
                        if grid.is_border(coord) {
                            if coord.row % 2 == 0 {
                                '-'
                            } else {
                                '|'
                            }
                        } else {
                            ' '
                        }
                    }
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::seed_markers;

    #[test]
    fn test_render_fresh_board() {
        let grid = Grid::new(3, 5, vec![Coord::new(1, 1)]).unwrap();
        let text = render(&grid);
        assert_eq!(text, "+-+-+\n|o .|\n+-+-+\n");
    }

    #[test]
    fn test_render_shows_assignments_and_borders() {
        let mut grid = Grid::new(3, 5, vec![Coord::new(1, 1), Coord::new(1, 3)]).unwrap();
        seed_markers(&mut grid).unwrap();
        grid.mark_border(Coord::new(1, 2)).unwrap();
        let text = render(&grid);
        assert_eq!(text, "+-+-+\n|o|o|\n+-+-+\n");
    }
}

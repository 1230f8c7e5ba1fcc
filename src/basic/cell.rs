use super::{BoardDim, Dir};

/// A grid coordinate occupied by part of the snake,
/// row 0 is the top of the board
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Display)]
#[display(fmt = "({}, {})", row, col)]
pub struct Cell {
    pub row: isize,
    pub col: isize,
}

impl Cell {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let (dr, dc) = dir.delta();
        let dist = dist as isize;
        Self {
            row: self.row + dr * dist,
            col: self.col + dc * dist,
        }
    }

    /// Bring a point that fell off one edge back in from the opposite edge
    #[must_use]
    pub fn wrap_around(self, board_dim: BoardDim) -> Self {
        Self {
            row: self.row.rem_euclid(board_dim.rows),
            col: self.col.rem_euclid(board_dim.cols),
        }
    }

    // no wrapping
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

#[test]
fn test_translate() {
    use Dir::*;
    let origin = Cell::new(5, 5);
    [
        (U, 1, (4, 5)),
        (D, 1, (6, 5)),
        (L, 1, (5, 4)),
        (R, 1, (5, 6)),
        (U, 3, (2, 5)),
        (L, 0, (5, 5)),
    ]
    .iter()
    .for_each(|&(dir, dist, (row, col))| {
        assert_eq!(origin.translate(dir, dist), Cell::new(row, col), "{:?} x{}", dir, dist);
    });
}

#[test]
fn test_wrap_around() {
    let board = BoardDim::new(4, 6);
    assert_eq!(Cell::new(-1, 2).wrap_around(board), Cell::new(3, 2));
    assert_eq!(Cell::new(4, 2).wrap_around(board), Cell::new(0, 2));
    assert_eq!(Cell::new(1, -1).wrap_around(board), Cell::new(1, 5));
    assert_eq!(Cell::new(1, 6).wrap_around(board), Cell::new(1, 0));
    assert_eq!(Cell::new(2, 3).wrap_around(board), Cell::new(2, 3));
}

#[test]
fn test_adjacency() {
    let c = Cell::new(2, 2);
    for dir in Dir::iter() {
        assert!(c.is_adjacent(c.translate(dir, 1)));
        assert!(!c.is_adjacent(c.translate(dir, 2)));
    }
    assert!(!c.is_adjacent(c));
    assert!(!c.is_adjacent(Cell::new(3, 3)));
}

#[test]
fn test_display() {
    assert_eq!(Cell::new(4, -1).to_string(), "(4, -1)");
}

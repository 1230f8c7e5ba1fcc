use super::Cell;

/// Size of the playing grid in cells
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct BoardDim {
    pub rows: isize,
    pub cols: isize,
}

impl BoardDim {
    pub fn new(rows: isize, cols: isize) -> Self {
        Self { rows, cols }
    }

    pub fn contains(self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    pub fn center(self) -> Cell {
        Cell::new(self.rows / 2, self.cols / 2)
    }

    pub fn area(self) -> usize {
        (self.rows.max(0) * self.cols.max(0)) as usize
    }
}

#[test]
fn test_contains() {
    let board = BoardDim::new(3, 5);
    assert!(board.contains(Cell::new(0, 0)));
    assert!(board.contains(Cell::new(2, 4)));
    assert!(!board.contains(Cell::new(3, 0)));
    assert!(!board.contains(Cell::new(0, 5)));
    assert!(!board.contains(Cell::new(-1, 2)));
    assert_eq!(board.center(), Cell::new(1, 2));
    assert_eq!(board.area(), 15);
}

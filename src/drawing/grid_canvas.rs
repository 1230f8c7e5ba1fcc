use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use log::warn;

use super::SnakeDrawer;
use crate::basic::{BoardDim, Cell, Dir};

pub const EMPTY: char = '.';
pub const BODY: char = 'o';

/// Character grid the snake can be drawn onto, one char per cell
#[derive(Clone, Debug)]
pub struct GridCanvas {
    board_dim: BoardDim,
    cells: Vec<char>,
}

impl GridCanvas {
    pub fn new(board_dim: BoardDim) -> Self {
        Self {
            board_dim,
            cells: vec![EMPTY; board_dim.area()],
        }
    }

    pub fn board_dim(&self) -> BoardDim {
        self.board_dim
    }

    pub fn head_glyph(dir: Dir) -> char {
        match dir {
            Dir::U => '^',
            Dir::D => 'v',
            Dir::L => '<',
            Dir::R => '>',
        }
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        self.index(cell).map(|idx| self.cells[idx])
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if self.board_dim.contains(cell) {
            Some((cell.row * self.board_dim.cols + cell.col) as usize)
        } else {
            None
        }
    }

    fn put(&mut self, cell: Cell, c: char) {
        match self.index(cell) {
            Some(idx) => self.cells[idx] = c,
            None => warn!("tried to draw {:?} at {} outside of {:?}", c, cell, self.board_dim),
        }
    }

    /// Number of cells that are not empty
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }
}

impl SnakeDrawer for GridCanvas {
    fn clear_cell(&mut self, cell: Cell, _size: f32) {
        self.put(cell, EMPTY);
    }

    fn draw_snake_head(&mut self, head: Cell, dir: Dir, neighbor: Option<Cell>, _size: f32) {
        if let Some(neighbor) = neighbor {
            self.put(neighbor, BODY);
        }
        self.put(head, Self::head_glyph(dir));
    }
}

impl Display for GridCanvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cols = self.board_dim.cols.max(1) as usize;
        let rows = self
            .cells
            .chunks(cols)
            .map(|row| row.iter().collect::<String>())
            .join("\n");
        writeln!(f, "{}", rows)
    }
}

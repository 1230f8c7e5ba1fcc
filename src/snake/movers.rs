use std::fmt::{self, Debug, Formatter};

use static_assertions::assert_impl_all;

use crate::basic::{BoardDim, Cell, Dir};
use crate::error::WallCollision;

/// Moves the head one step in place, fails if that would leave the board
pub type Mover = Box<dyn FnMut(&mut Cell) -> Result<(), WallCollision> + Send>;

/// One mover per direction
pub struct Movers {
    up: Mover,
    down: Mover,
    left: Mover,
    right: Mover,
}

assert_impl_all!(Movers: Send);

impl Movers {
    pub fn new(up: Mover, down: Mover, left: Mover, right: Mover) -> Self {
        Self { up, down, left, right }
    }

    pub fn from_fn(mut make: impl FnMut(Dir) -> Mover) -> Self {
        Self {
            up: make(Dir::U),
            down: make(Dir::D),
            left: make(Dir::L),
            right: make(Dir::R),
        }
    }

    pub fn get_mut(&mut self, dir: Dir) -> &mut Mover {
        match dir {
            Dir::U => &mut self.up,
            Dir::D => &mut self.down,
            Dir::L => &mut self.left,
            Dir::R => &mut self.right,
        }
    }

    pub fn step(&mut self, dir: Dir, head: &mut Cell) -> Result<(), WallCollision> {
        (self.get_mut(dir))(head)
    }

    /// Board surrounded by walls, the head is left untouched on a collision
    pub fn walled(board_dim: BoardDim) -> Self {
        Self::from_fn(|dir| -> Mover {
            Box::new(move |head: &mut Cell| {
                let next = head.translate(dir, 1);
                if board_dim.contains(next) {
                    *head = next;
                    Ok(())
                } else {
                    Err(WallCollision { pos: *head, dir })
                }
            })
        })
    }

    /// Leaving the board on one side enters it from the other, never fails
    pub fn wrapping(board_dim: BoardDim) -> Self {
        Self::from_fn(|dir| -> Mover {
            Box::new(move |head: &mut Cell| {
                *head = head.translate(dir, 1).wrap_around(board_dim);
                Ok(())
            })
        })
    }
}

impl Debug for Movers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Movers { .. }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_moves_inside_the_board() {
        let board = BoardDim::new(10, 10);
        let mut movers = Movers::walled(board);
        let mut head = Cell::new(5, 5);
        for (dir, expected) in [
            (Dir::U, Cell::new(4, 5)),
            (Dir::L, Cell::new(4, 4)),
            (Dir::D, Cell::new(5, 4)),
            (Dir::R, Cell::new(5, 5)),
        ] {
            movers.step(dir, &mut head).unwrap();
            assert_eq!(head, expected, "{:?}", dir);
        }
    }

    #[test]
    fn walled_reports_collision_without_moving() {
        let board = BoardDim::new(3, 3);
        let mut movers = Movers::walled(board);
        for (start, dir) in [
            (Cell::new(0, 1), Dir::U),
            (Cell::new(2, 1), Dir::D),
            (Cell::new(1, 0), Dir::L),
            (Cell::new(1, 2), Dir::R),
        ] {
            let mut head = start;
            let err = movers.step(dir, &mut head).unwrap_err();
            assert_eq!(err, WallCollision { pos: start, dir });
            assert_eq!(head, start);
        }
    }

    #[test]
    fn wrapping_never_fails() {
        let board = BoardDim::new(3, 4);
        let mut movers = Movers::wrapping(board);
        let mut head = Cell::new(0, 3);
        movers.step(Dir::U, &mut head).unwrap();
        assert_eq!(head, Cell::new(2, 3));
        movers.step(Dir::R, &mut head).unwrap();
        assert_eq!(head, Cell::new(2, 0));
        movers.step(Dir::D, &mut head).unwrap();
        assert_eq!(head, Cell::new(0, 0));
        movers.step(Dir::L, &mut head).unwrap();
        assert_eq!(head, Cell::new(0, 3));
    }

    #[test]
    fn dispatches_on_direction() {
        let mut movers = Movers::from_fn(|dir| -> Mover {
            Box::new(move |head: &mut Cell| {
                head.row = dir as isize;
                Ok(())
            })
        });
        for dir in Dir::iter() {
            let mut head = Cell::new(-1, 0);
            movers.step(dir, &mut head).unwrap();
            assert_eq!(head.row, dir as isize);
        }
    }
}

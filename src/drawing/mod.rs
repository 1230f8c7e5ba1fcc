pub use grid_canvas::GridCanvas;
pub use draw_log::{DrawEvent, DrawLog};

use crate::basic::{Cell, Dir};

mod grid_canvas;
mod draw_log;

/// Receives fire-and-forget notifications about cells the snake
/// vacates and the new position of its head
pub trait SnakeDrawer {
    fn clear_cell(&mut self, cell: Cell, size: f32);

    /// `neighbor` is the segment right behind the head,
    /// `None` when the snake is a single cell long
    fn draw_snake_head(&mut self, head: Cell, dir: Dir, neighbor: Option<Cell>, size: f32);
}

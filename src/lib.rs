#[macro_use]
extern crate derive_more;

pub use basic::{AtomicDir, BoardDim, Cell, Dir};
pub use drawing::{DrawEvent, DrawLog, GridCanvas, SnakeDrawer};
pub use error::{BuilderError, WallCollision};
pub use snake::{Builder, Mover, Movers, SnakeBody};

pub mod basic;
pub mod drawing;
pub mod error;
pub mod snake;

pub use atomic_dir::AtomicDir;
pub use board::BoardDim;
pub use cell::Cell;
pub use dir::Dir;

mod atomic_dir;
mod board;
mod cell;
mod dir;

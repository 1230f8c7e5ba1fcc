use std::sync::Arc;

use log::{debug, trace};

pub use builder::Builder;
pub use movers::{Mover, Movers};

use crate::basic::{AtomicDir, Cell, Dir};
use crate::drawing::SnakeDrawer;
use crate::error::WallCollision;

mod builder;
mod movers;

/// The cells occupied by the snake, the head is at index 0
/// and the tail at the last index
pub struct SnakeBody<D> {
    segments: Vec<Cell>,

    /// Direction the snake is currently going, shared with
    /// whatever handles input
    dir: Arc<AtomicDir>,

    /// How many of the upcoming ticks must keep the tail in place
    grow: usize,

    /// Passed through to the drawer untouched
    cell_size: f32,

    /// Set after construction because movers usually need
    /// the board which isn't known yet when the snake is built
    movers: Option<Movers>,
    drawer: D,
}

impl<D: SnakeDrawer> SnakeBody<D> {
    /// Append a segment and draw it as a head facing the current direction
    pub fn seed(&mut self, cell: Cell) {
        debug!("seeding snake segment at {}", cell);
        self.segments.push(cell);
        self.drawer
            .draw_snake_head(cell, self.dir.load(), None, self.cell_size);
    }

    /// Grow by one cell, spread over the next ticks at a rate of one cell per tick
    pub fn request_growth(&mut self) {
        self.grow += 1;
        debug!("growth requested, {} pending", self.grow);
    }

    /// Advance the snake one cell in the current direction
    ///
    /// On a wall collision the rest of the body has already been
    /// shifted, the error should end the game
    pub fn tick(&mut self) -> Result<(), WallCollision> {
        assert!(!self.segments.is_empty(), "called tick() on an empty snake");

        // a single read so the mover and the drawer agree
        let dir = self.dir.load();
        let last_idx = self.segments.len() - 1;
        let tail = self.segments[last_idx];

        if self.grow == 0 {
            self.drawer.clear_cell(tail, self.cell_size);
        } else {
            // the copy sits past last_idx so the shift below leaves it alone
            self.segments.push(tail);
            self.grow -= 1;
        }

        self.segments.copy_within(0..last_idx, 1);

        let movers = self
            .movers
            .as_mut()
            .expect("called tick() before set_movers()");
        if let Err(e) = movers.step(dir, &mut self.segments[0]) {
            debug!("tick failed: {}", e);
            return Err(e);
        }

        let head = self.segments[0];
        let neighbor = self.segments.get(1).copied();
        trace!("head moved {:?} to {}, len {}", dir, head, self.segments.len());
        self.drawer
            .draw_snake_head(head, dir, neighbor, self.cell_size);
        Ok(())
    }

    /// Erase every segment and empty the snake
    pub fn clear(&mut self) {
        debug!("clearing snake of length {}", self.segments.len());
        for &cell in &self.segments {
            self.drawer.clear_cell(cell, self.cell_size);
        }
        self.segments.clear();
    }
}

impl<D> SnakeBody<D> {
    pub fn head(&self) -> &Cell {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Cell {
        &self.segments[self.segments.len() - 1]
    }

    pub fn body(&self) -> &[Cell] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn pending_growth(&self) -> usize {
        self.grow
    }

    pub fn dir(&self) -> Dir {
        self.dir.load()
    }

    pub fn set_dir(&self, dir: Dir) {
        self.dir.store(dir)
    }

    /// Handle for setting the direction from another thread
    pub fn dir_handle(&self) -> Arc<AtomicDir> {
        Arc::clone(&self.dir)
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn set_movers(&mut self, movers: Movers) {
        self.movers = Some(movers);
    }

    pub fn has_movers(&self) -> bool {
        self.movers.is_some()
    }

    pub fn drawer(&self) -> &D {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut D {
        &mut self.drawer
    }
}

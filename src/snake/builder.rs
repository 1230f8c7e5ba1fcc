use std::sync::Arc;

use super::*;
use crate::error::BuilderError;

pub const DEFAULT_CELL_SIZE: f32 = 10.;

pub struct Builder<D> {
    pub dir: Option<Dir>,
    pub cell_size: Option<f32>,
    pub drawer: Option<D>,
    pub movers: Option<Movers>,
}

impl<D> Default for Builder<D> {
    fn default() -> Self {
        Self {
            dir: None,
            cell_size: None,
            drawer: None,
            movers: None,
        }
    }
}

impl<D> Builder<D> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn cell_size(mut self, value: f32) -> Self {
        self.cell_size = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn drawer(mut self, value: D) -> Self {
        self.drawer = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn movers(mut self, value: Movers) -> Self {
        self.movers = Some(value);
        self
    }

    pub fn build(self) -> Result<SnakeBody<D>, BuilderError> {
        let drawer = self.drawer.ok_or(BuilderError("missing drawer"))?;
        let cell_size = self.cell_size.unwrap_or(DEFAULT_CELL_SIZE);
        if !(cell_size > 0.) {
            return Err(BuilderError("cell size must be positive"));
        }

        Ok(SnakeBody {
            segments: vec![],
            dir: Arc::new(AtomicDir::new(self.dir.unwrap_or(Dir::U))),
            grow: 0,
            cell_size,
            movers: self.movers,
            drawer,
        })
    }
}

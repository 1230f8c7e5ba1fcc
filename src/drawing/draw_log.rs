use super::SnakeDrawer;
use crate::basic::{Cell, Dir};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawEvent {
    Clear {
        cell: Cell,
        size: f32,
    },
    Head {
        head: Cell,
        dir: Dir,
        neighbor: Option<Cell>,
        size: f32,
    },
}

/// Drawer that only remembers what it was asked to draw
#[derive(Default, Clone, Debug)]
pub struct DrawLog {
    pub events: Vec<DrawEvent>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clears(&self) -> impl Iterator<Item = Cell> + '_ {
        self.events.iter().filter_map(|event| match event {
            DrawEvent::Clear { cell, .. } => Some(*cell),
            _ => None,
        })
    }

    pub fn heads(&self) -> impl Iterator<Item = (Cell, Dir, Option<Cell>)> + '_ {
        self.events.iter().filter_map(|event| match event {
            DrawEvent::Head { head, dir, neighbor, .. } => Some((*head, *dir, *neighbor)),
            _ => None,
        })
    }

    pub fn last(&self) -> Option<&DrawEvent> {
        self.events.last()
    }

    /// Forget everything recorded so far
    pub fn take(&mut self) -> Vec<DrawEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SnakeDrawer for DrawLog {
    fn clear_cell(&mut self, cell: Cell, size: f32) {
        self.events.push(DrawEvent::Clear { cell, size });
    }

    fn draw_snake_head(&mut self, head: Cell, dir: Dir, neighbor: Option<Cell>, size: f32) {
        self.events.push(DrawEvent::Head { head, dir, neighbor, size });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut log = DrawLog::new();
        log.clear_cell(Cell::new(1, 1), 10.);
        log.draw_snake_head(Cell::new(0, 0), Dir::L, Some(Cell::new(0, 1)), 10.);

        assert_eq!(log.clears().collect::<Vec<_>>(), vec![Cell::new(1, 1)]);
        assert_eq!(
            log.heads().collect::<Vec<_>>(),
            vec![(Cell::new(0, 0), Dir::L, Some(Cell::new(0, 1)))]
        );
        assert!(matches!(log.last(), Some(DrawEvent::Head { .. })));

        assert_eq!(log.take().len(), 2);
        assert!(log.events.is_empty());
    }
}

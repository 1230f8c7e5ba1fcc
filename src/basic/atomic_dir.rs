use std::sync::atomic::{AtomicU8, Ordering};

use static_assertions::{assert_eq_size, assert_impl_all};

use super::Dir;

assert_eq_size!(Dir, u8);
assert_impl_all!(AtomicDir: Send, Sync);

/// Direction slot that can be written by an input handler
/// while the tick loop reads it, last write wins
#[derive(Debug)]
pub struct AtomicDir(AtomicU8);

impl AtomicDir {
    pub fn new(dir: Dir) -> Self {
        Self(AtomicU8::new(dir as u8))
    }

    pub fn load(&self) -> Dir {
        Dir::from(self.0.load(Ordering::Acquire))
    }

    pub fn store(&self, dir: Dir) {
        self.0.store(dir as u8, Ordering::Release)
    }
}

impl Default for AtomicDir {
    fn default() -> Self {
        Self::new(Dir::U)
    }
}

#[test]
fn test_last_write_wins() {
    let slot = AtomicDir::default();
    assert_eq!(slot.load(), Dir::U);
    slot.store(Dir::L);
    slot.store(Dir::D);
    assert_eq!(slot.load(), Dir::D);
}

#[test]
fn test_shared_between_threads() {
    use std::sync::Arc;
    use std::thread;

    let slot = Arc::new(AtomicDir::new(Dir::U));
    let writers: Vec<_> = Dir::iter()
        .map(|dir| {
            let slot = Arc::clone(&slot);
            thread::spawn(move || {
                for _ in 0..1000 {
                    slot.store(dir);
                }
            })
        })
        .collect();

    // every observed value is one of the four directions, never garbage
    for _ in 0..1000 {
        let seen = slot.load();
        assert!(Dir::iter().any(|dir| dir == seen));
    }

    for writer in writers {
        writer.join().unwrap();
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use grid_snake::{AtomicDir, Dir};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Stands in for a player, turns the snake at random from its own thread
pub struct RandomInput {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RandomInput {
    pub fn spawn(dir: Arc<AtomicDir>, interval: Duration, seed: Option<u64>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            while !thread_stop.load(Ordering::Relaxed) {
                thread::sleep(interval);
                let current = dir.load();
                let new_dir = Dir::random(&mut rng);
                // the game loop vetoes reversals, these are just wasted turns
                if new_dir != current && new_dir != -current {
                    debug!("input: turning {:?} -> {:?}", current, new_dir);
                    dir.store(new_dir);
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("input thread panicked");
            }
        }
    }
}

use std::time::Duration;

use grid_snake::BoardDim;
use simplelog::LevelFilter;

pub struct Prefs {
    pub board_dim: BoardDim,
    pub cell_size: f32,
    pub wrapping: bool,

    pub initial_len: usize,
    pub tick_interval: Duration,
    /// Request growth every this many ticks, 0 disables growth
    pub growth_period: u64,
    pub input_interval: Duration,
    /// 0 means no limit
    pub max_ticks: u64,

    pub print_frames: bool,
    pub log_level: LevelFilter,
    pub seed: Option<u64>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_dim: BoardDim::new(16, 24),
            cell_size: 10.,
            wrapping: false,

            initial_len: 3,
            tick_interval: Duration::from_millis(120),
            growth_period: 5,
            input_interval: Duration::from_millis(400),
            max_ticks: 500,

            print_frames: true,
            log_level: LevelFilter::Info,
            seed: None,
        }
    }
}

// builder
impl Prefs {
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

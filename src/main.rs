use std::sync::Arc;
use std::thread;

use derive_more::Display;
use grid_snake::error::{Error, ErrorConversion, Result};
use grid_snake::{AtomicDir, BoardDim, Builder, Cell, Dir, GridCanvas, Movers, SnakeBody};
use log::{error, info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::prefs::Prefs;
use crate::random_input::RandomInput;

mod prefs;
mod random_input;

#[derive(Copy, Clone, Debug, Display)]
enum Ending {
    #[display(fmt = "tick limit reached after {} ticks", _0)]
    TickLimit(u64),
    #[display(fmt = "snake bit itself after {} ticks", _0)]
    BitItself(u64),
}

fn main() {
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse().ok());
    let prefs = Prefs::default().seed(seed);
    if let Err(e) = run(prefs) {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(prefs: Prefs) -> Result {
    TermLogger::init(
        prefs.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let board_dim = prefs.board_dim;
    let mut snake = Builder::new()
        .dir(Dir::U)
        .cell_size(prefs.cell_size)
        .drawer(GridCanvas::new(board_dim))
        .build()
        .map_err(|e| Error::from(e).with_trace_step("building snake"))?;

    // the movers need the board, so they are only attached now
    snake.set_movers(if prefs.wrapping {
        Movers::wrapping(board_dim)
    } else {
        Movers::walled(board_dim)
    });

    for cell in initial_body(board_dim, prefs.initial_len) {
        snake.seed(cell);
    }
    info!("snake of length {} starts at {}", snake.len(), snake.head());

    // input goes through its own slot so the loop can veto reversals
    let wanted = Arc::new(AtomicDir::new(snake.dir()));
    let input = RandomInput::spawn(Arc::clone(&wanted), prefs.input_interval, prefs.seed);
    let outcome = game_loop(&mut snake, &wanted, &prefs).with_trace_step("game loop");
    input.stop();

    match outcome {
        Ok(ending) => info!("{}, final length {}", ending, snake.len()),
        Err(e) if e.is_game_over() => info!("game over, final length {}\n{}", snake.len(), e),
        Err(e) => return Err(e),
    }

    snake.clear();
    Ok(())
}

/// Body stretching down from the center, cut short rather than wrapped
/// when the board doesn't have room for it
fn initial_body(board_dim: BoardDim, len: usize) -> Vec<Cell> {
    let start = board_dim.center();
    let room = (board_dim.rows - start.row).max(1) as usize;
    if len > room {
        warn!("initial length {} doesn't fit below {}, using {}", len, start, room);
    }
    (0..len.clamp(1, room)).map(|i| start.translate(Dir::D, i)).collect()
}

/// A turn straight back into the neck keeps the previous direction
fn steer(last_moved: Option<Dir>, wanted: Dir, len: usize) -> Dir {
    match last_moved {
        Some(last) if len > 1 && wanted == -last => last,
        _ => wanted,
    }
}

fn game_loop(snake: &mut SnakeBody<GridCanvas>, wanted: &AtomicDir, prefs: &Prefs) -> Result<Ending> {
    let mut ticks = 0;
    let mut last_moved = None;
    loop {
        if prefs.max_ticks != 0 && ticks >= prefs.max_ticks {
            return Ok(Ending::TickLimit(ticks));
        }
        thread::sleep(prefs.tick_interval);

        if prefs.growth_period != 0 && ticks % prefs.growth_period == prefs.growth_period - 1 {
            snake.request_growth();
        }

        let dir = steer(last_moved, wanted.load(), snake.len());
        snake.set_dir(dir);
        snake
            .tick()
            .map_err(|e| Error::from(e).with_trace_step(format!("tick {}", ticks)))?;
        ticks += 1;
        last_moved = Some(dir);

        if prefs.print_frames {
            println!("{}", snake.drawer());
        }

        // self collision is up to the game, the snake only moves
        let head = *snake.head();
        if snake.body()[1..].contains(&head) {
            return Ok(Ending::BitItself(ticks));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_ignored() {
        assert_eq!(steer(Some(Dir::U), Dir::D, 3), Dir::U);
        assert_eq!(steer(Some(Dir::R), Dir::L, 2), Dir::R);
        assert_eq!(steer(Some(Dir::U), Dir::R, 3), Dir::R);
        // nothing to bite yet
        assert_eq!(steer(Some(Dir::U), Dir::D, 1), Dir::D);
        assert_eq!(steer(None, Dir::D, 3), Dir::D);
    }

    #[test]
    fn two_turns_between_ticks_do_not_reverse() {
        let wanted = AtomicDir::new(Dir::U);
        // U -> R -> D lands opposite to the last move
        wanted.store(Dir::R);
        wanted.store(Dir::D);
        assert_eq!(steer(Some(Dir::U), wanted.load(), 4), Dir::U);
    }

    #[test]
    fn initial_body_is_contiguous_and_on_the_board() {
        let board_dim = BoardDim::new(6, 5);
        let body = initial_body(board_dim, 10);
        assert_eq!(body.len(), 3);
        assert_eq!(body[0], board_dim.center());
        assert!(body.iter().all(|&cell| board_dim.contains(cell)));
        assert!(body.windows(2).all(|pair| pair[0].is_adjacent(pair[1])));
    }

    #[test]
    fn initial_body_is_never_empty() {
        let board_dim = BoardDim::new(6, 5);
        assert_eq!(initial_body(board_dim, 0), vec![board_dim.center()]);
        assert_eq!(initial_body(board_dim, 2).len(), 2);
    }
}

use std::fmt::{self, Debug, Display, Formatter};
use std::result;

use log::SetLoggerError;

use crate::basic::{Cell, Dir};

/// Raised by a mover when the head would leave the board,
/// this ends the game
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "snake crashed into the wall at {} going {:?}", pos, dir)]
pub struct WallCollision {
    /// Head position before the failed step
    pub pos: Cell,
    pub dir: Dir,
}

#[derive(Debug, Display, Error)]
#[display(fmt = "snake builder error: {}", _0)]
#[must_use]
pub struct BuilderError(#[error(not(source))] pub &'static str);

#[derive(Debug)]
pub enum ErrorType {
    WallCollision(WallCollision),
    SnakeBuilderError(BuilderError),
    LoggerError(SetLoggerError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<WallCollision> for Error {
    fn from(e: WallCollision) -> Self {
        Self(ErrorType::WallCollision(e), vec![])
    }
}

impl From<BuilderError> for Error {
    fn from(e: BuilderError) -> Self {
        Self(ErrorType::SnakeBuilderError(e), vec![])
    }
}

impl From<SetLoggerError> for Error {
    fn from(e: SetLoggerError) -> Self {
        Self(ErrorType::LoggerError(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.0, ErrorType::WallCollision(_))
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

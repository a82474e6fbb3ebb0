use crate::cmd;
use core::fmt::{self, Display};
use std::io;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// a command could not be parsed, with its line number
    Parse(usize, cmd::Error),
    /// a command could not be executed, with its line number
    Stack(usize, tstack::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => e.fmt(f),
            Self::Parse(line, e) => write!(f, "line {}: {}", line, e),
            Self::Stack(line, e) => write!(f, "line {}: {}", line, e),
        }
    }
}

impl std::error::Error for Error {}

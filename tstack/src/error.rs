//! Common error type.

use core::fmt::{self, Display};

/// Argument slot that was found absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg {
    /// the stack handle
    Stack,
    /// the item to be pushed
    Item,
    /// the output buffer
    Out,
}

/// Common error type.
///
/// No operation that fails has modified its stacks or output buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent.
    InvalidArgument(Arg),
    /// The operation requires at least one element on the stack.
    Empty,
    /// An output buffer cannot hold all elements of the stack.
    Capacity { needed: usize, available: usize },
}

impl Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Stack => "stack",
            Self::Item => "item",
            Self::Out => "output buffer",
        };
        s.fmt(f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(arg) => write!(f, "absent {}", arg),
            Self::Empty => write!(f, "stack is empty"),
            Self::Capacity { needed, available } => write!(
                f,
                "output buffer holds {} items, but stack has {}",
                available, needed
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

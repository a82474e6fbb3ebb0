//! Stack operations on arguments that may be absent.
//!
//! These functions serve callers that obtain stack handles, items, or
//! output buffers from sources where any of them might be missing.
//! Every function first checks that all its required arguments are present,
//! failing with [`Error::InvalidArgument`] otherwise,
//! and only then performs the corresponding [`Stack`] operation.
//! A failing call never modifies anything.
//!
//! ~~~
//! # use tstack::{nullable, Arg, Error, Stack};
//! let mut stack = Stack::new();
//! nullable::push(Some(&mut stack), Some(1))?;
//! assert_eq!(nullable::push(Some(&mut stack), None), Err(Error::InvalidArgument(Arg::Item)));
//! assert_eq!(nullable::push(None, Some(2)), Err(Error::InvalidArgument(Arg::Stack)));
//! assert_eq!(nullable::depth(Some(&stack)), Ok(1));
//! # Ok::<_, Error>(())
//! ~~~

use crate::error::{Arg, Error};
use crate::stack::Stack;

fn present<A>(arg: Option<A>, kind: Arg) -> Result<A, Error> {
    arg.ok_or_else(|| {
        debug!("Absent {}", kind);
        Error::InvalidArgument(kind)
    })
}

/// Push an item onto a stack.
///
/// To create a new stack, pass an empty one.
pub fn push<T>(stack: Option<&mut Stack<T>>, item: Option<T>) -> Result<(), Error> {
    let stack = present(stack, Arg::Stack)?;
    let item = present(item, Arg::Item)?;
    stack.push(item);
    Ok(())
}

/// Pop an item from a stack.
pub fn pop<T>(stack: Option<&mut Stack<T>>) -> Result<T, Error> {
    present(stack, Arg::Stack)?.pop()
}

/// Return the item on top of a stack.
pub fn top<T>(stack: Option<&Stack<T>>) -> Result<&T, Error> {
    present(stack, Arg::Stack)?.top()
}

/// Count the items of a stack.
pub fn depth<T>(stack: Option<&Stack<T>>) -> Result<usize, Error> {
    Ok(present(stack, Arg::Stack)?.depth())
}

/// Write the items of a stack into a buffer, top of the stack first.
///
/// The buffer should be allocated with at least [`depth`] elements.
pub fn dump<T: Clone>(stack: Option<&Stack<T>>, out: Option<&mut [T]>) -> Result<usize, Error> {
    let stack = present(stack, Arg::Stack)?;
    let out = present(out, Arg::Out)?;
    stack.dump_into(out)
}

/// Put the items of `stack1` below the items of `stack2`.
///
/// The merged stack is held by `stack2`, and `stack1` is left empty.
/// An absent `stack1` is treated like an empty stack.
pub fn concat<T>(
    stack1: Option<&mut Stack<T>>,
    stack2: Option<&mut Stack<T>>,
) -> Result<(), Error> {
    let stack2 = present(stack2, Arg::Stack)?;
    if let Some(stack1) = stack1 {
        stack2.concat(stack1)
    }
    Ok(())
}

/// Copy a stack into fresh nodes holding the same items.
pub fn copy<T: Clone>(src: Option<&Stack<T>>) -> Result<Stack<T>, Error> {
    Ok(present(src, Arg::Stack)?.copy())
}

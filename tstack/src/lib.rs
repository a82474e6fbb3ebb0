#![no_std]
#![forbid(unsafe_code)]

//! A tiny singly-linked stack of item references.
//!
//! A [`Stack`] is a last-in-first-out chain of individually allocated nodes.
//! Every node holds one item and owns the node below it.
//! The stack owns its nodes, but not its items:
//! items are opaque values, usually references to data
//! whose lifetime is managed by the caller.
//! The stack never inspects, compares, or frees what they refer to.
//!
//! Besides pushing, popping, and peeking, stacks can be
//! measured ([`Stack::depth`]),
//! enumerated ([`Stack::dump`], [`Stack::dump_into`]),
//! spliced onto each other ([`Stack::concat`]), and
//! copied ([`Stack::copy`]).
//! All operations that can fail return a [`Result`] with an [`Error`],
//! and a failing operation never changes any stack.
//!
//! The following example keeps the items in an arena and
//! stacks references to them.
//!
//! ~~~
//! # use tstack::{Error, Stack};
//! # use colosseum::unsync::Arena;
//! let arena: Arena<String> = Arena::new();
//!
//! let mut s1: Stack<&str> = Stack::new();
//! let mut s2: Stack<&str> = Stack::new();
//! for item in ["x", "y"] {
//!     s1.push(arena.alloc(item.to_string()));
//! }
//! for item in ["p", "q"] {
//!     s2.push(arena.alloc(item.to_string()));
//! }
//!
//! // keep the original stack 1 around
//! let s1_copy = s1.copy();
//!
//! // put stack 1 below stack 2; stack 2 holds the result
//! tstack::concat(&mut s1, &mut s2);
//! assert_eq!(s2.dump(), ["q", "p", "y", "x"]);
//! assert!(s1.is_empty());
//! assert_eq!(s1_copy.dump(), ["y", "x"]);
//!
//! let mut buf = vec![""; s2.depth()];
//! s2.dump_into(&mut buf)?;
//! assert_eq!(buf, ["q", "p", "y", "x"]);
//! # Ok::<_, Error>(())
//! ~~~
//!
//! For callers whose stack handles or items may be absent,
//! the [`nullable`] module offers the same operations with
//! explicit checks for absent arguments.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
#[macro_use]
extern crate log;

pub mod error;
mod node;
pub mod nullable;
mod stack;

pub use error::{Arg, Error};
pub use stack::{concat, Stack};

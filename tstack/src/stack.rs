//! A singly-linked stack of item references.

use crate::error::Error;
use crate::node::{CursorMut, Link, Node};
use alloc::{boxed::Box, vec::Vec};
use core::fmt::{self, Debug};
use core::iter::FromIterator;

/// A singly-linked stack of item references.
///
/// A `Stack` is a handle to the top node of a chain of nodes,
/// where every node holds one item and owns the node below it.
/// The stack owns its nodes, but it never looks into its items:
/// for the stack, an item is just a value to be stored and returned.
/// This makes it suitable for references to data owned by somebody else,
/// such as references into an arena.
///
/// ~~~
/// # use tstack::{Error, Stack};
/// let mut stack = Stack::new();
/// stack.push("a");
/// stack.push("b");
/// assert_eq!(stack.depth(), 2);
/// assert_eq!(stack.top(), Ok(&"b"));
/// assert_eq!(stack.dump(), ["b", "a"]);
///
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.pop(), Ok("a"));
/// assert_eq!(stack.pop(), Err(Error::Empty));
/// ~~~
pub struct Stack<T> {
    top: Link<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { top: None }
    }

    /// Return true if the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Add an item to the top of the stack.
    pub fn push(&mut self, item: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Node { item, below }))
    }

    /// Remove and return the item on top of the stack.
    ///
    /// Fails on an empty stack, leaving it unchanged.
    pub fn pop(&mut self) -> Result<T, Error> {
        let node = self.top.take().ok_or(Error::Empty)?;
        let Node { item, below } = *node;
        self.top = below;
        Ok(item)
    }

    /// Return the item on top of the stack.
    pub fn top(&self) -> Result<&T, Error> {
        self.top.as_ref().map(|node| &node.item).ok_or(Error::Empty)
    }

    /// Return the number of items on the stack.
    ///
    /// This walks the whole chain, because the stack does not keep count.
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// Return all items of the stack, starting from the top.
    pub fn dump(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Write all items of the stack into a buffer, starting from the top,
    /// and return the number of written items.
    ///
    /// If the buffer is smaller than the stack, nothing is written.
    ///
    /// ~~~
    /// # use tstack::{Error, Stack};
    /// let stack: Stack<_> = [1, 2, 3].into_iter().collect();
    ///
    /// let mut buf = [0; 4];
    /// assert_eq!(stack.dump_into(&mut buf), Ok(3));
    /// assert_eq!(buf, [3, 2, 1, 0]);
    ///
    /// let mut buf = [0; 2];
    /// let err = Error::Capacity { needed: 3, available: 2 };
    /// assert_eq!(stack.dump_into(&mut buf), Err(err));
    /// assert_eq!(buf, [0, 0]);
    /// ~~~
    pub fn dump_into(&self, out: &mut [T]) -> Result<usize, Error>
    where
        T: Clone,
    {
        let needed = self.depth();
        if out.len() < needed {
            debug!("Dump of {} items into buffer of {}", needed, out.len());
            return Err(Error::Capacity {
                needed,
                available: out.len(),
            });
        }
        out.iter_mut()
            .zip(self.iter())
            .for_each(|(o, item)| *o = item.clone());
        Ok(needed)
    }

    /// Put the items of `lower` below the items of `self`.
    ///
    /// Afterwards, `self` holds the whole chain, with its previous top on top,
    /// and `lower` is empty.
    /// No node is allocated or freed: the bottom node of `self`
    /// is simply linked to the top node of `lower`.
    ///
    /// ~~~
    /// # use tstack::Stack;
    /// let mut lower: Stack<_> = ["x", "y"].into_iter().collect();
    /// let mut upper: Stack<_> = ["p", "q"].into_iter().collect();
    ///
    /// upper.concat(&mut lower);
    /// assert_eq!(upper.dump(), ["q", "p", "y", "x"]);
    /// assert!(lower.is_empty());
    /// ~~~
    pub fn concat(&mut self, lower: &mut Self) {
        trace!("Concatenate stacks");
        CursorMut::new(&mut self.top).append(lower.top.take())
    }

    /// Return a stack with fresh nodes holding the same items.
    ///
    /// The two stacks do not share any structure,
    /// so changing one of them never affects the other.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        trace!("Copy stack");
        let mut copy = Self::new();
        let mut cursor = CursorMut::new(&mut copy.top);
        for item in self.iter() {
            cursor = cursor.wedge(item.clone());
        }
        copy
    }

    /// Insert an item below the bottom of a non-empty stack.
    #[allow(dead_code)]
    pub(crate) fn shove(&mut self, item: T) -> Result<(), Error> {
        let cursor = CursorMut::new(&mut self.top);
        if cursor.is_end() {
            debug!("Shove onto empty stack");
            return Err(Error::Empty);
        }
        trace!("Shove item below bottom");
        cursor.seek_bottom().wedge(item);
        Ok(())
    }

    /// Iterate through the items of the stack starting from the top.
    pub(crate) fn iter(&self) -> Iter<T> {
        Iter {
            link: self.top.as_deref(),
        }
    }
}

pub(crate) struct Iter<'a, T> {
    link: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.link.map(|node| {
            self.link = node.below.as_deref();
            &node.item
        })
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    // dropping the top node directly would drop the chain recursively,
    // which overflows the call stack for deep stacks
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.below.take();
        }
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Push all items in order, so the last item ends up on top.
impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item))
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().collect()
    }
}

/// Put the items of `stack1` below the items of `stack2`.
///
/// The merged stack is held by `stack2`; `stack1` is left empty.
pub fn concat<T>(stack1: &mut Stack<T>, stack2: &mut Stack<T>) {
    stack2.concat(stack1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn lifo() {
        let items = ["a", "b", "c", "d"];
        let mut stack = Stack::new();
        for (n, item) in items.iter().enumerate() {
            assert_eq!(stack.depth(), n);
            stack.push(item);
        }
        assert_eq!(stack.depth(), items.len());

        for item in items.iter().rev() {
            assert_eq!(stack.pop(), Ok(item));
        }
        assert_eq!(stack.depth(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn dump_top_first() {
        let stack: Stack<_> = ["A", "B", "C"].into_iter().collect();
        assert_eq!(stack.dump(), ["C", "B", "A"]);
        assert_eq!(Stack::<&str>::new().dump(), Vec::<&str>::new());
    }

    #[test]
    fn empty() {
        let mut stack: Stack<u8> = Stack::new();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.top(), Err(Error::Empty));
        assert_eq!(stack.pop(), Err(Error::Empty));
        assert_eq!(stack.shove(1), Err(Error::Empty));
        assert!(stack.is_empty());
        assert_eq!(stack.dump_into(&mut []), Ok(0));
    }

    #[test]
    fn reuse_after_empty() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::Empty));

        stack.push(3);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Ok(&3));
        assert_eq!(stack.dump(), [3]);
    }

    #[test]
    fn concat_keeps_upper_top() {
        // pushing x, y onto s1 and p, q onto s2
        let mut s1: Stack<_> = ["x", "y"].into_iter().collect();
        let mut s2: Stack<_> = ["p", "q"].into_iter().collect();
        concat(&mut s1, &mut s2);
        assert_eq!(s2.dump(), ["q", "p", "y", "x"]);
        assert_eq!(s2.top(), Ok(&"q"));
        assert!(s1.is_empty());

        // the merged stack behaves like any other
        assert_eq!(s2.pop(), Ok("q"));
        s2.push("r");
        assert_eq!(s2.dump(), ["r", "p", "y", "x"]);
    }

    #[test]
    fn concat_empty() {
        let mut empty = Stack::new();
        let mut s: Stack<_> = vec![1, 2].into();

        s.concat(&mut empty);
        assert_eq!(s.dump(), [2, 1]);

        empty.concat(&mut s);
        assert_eq!(empty.dump(), [2, 1]);
        assert!(s.is_empty());

        let mut other = Stack::new();
        s.concat(&mut other);
        assert!(s.is_empty());
    }

    #[test]
    fn copy_is_independent() {
        let src: Stack<_> = [1, 2, 3].into_iter().collect();
        let mut dst = src.copy();
        assert_eq!(dst.dump(), src.dump());

        assert_eq!(dst.pop(), Ok(3));
        dst.push(4);
        dst.push(5);
        let mut other: Stack<_> = [6].into_iter().collect();
        dst.concat(&mut other);

        assert_eq!(dst.dump(), [5, 4, 2, 1, 6]);
        assert_eq!(src.dump(), [3, 2, 1]);
        assert_eq!(src.depth(), 3);

        assert_eq!(Stack::<u8>::new().copy().depth(), 0);
        assert_eq!(src.clone().dump(), src.dump());
    }

    #[test]
    fn shove_below_bottom() {
        let mut stack: Stack<_> = [2, 3].into_iter().collect();
        assert_eq!(stack.shove(1), Ok(()));
        assert_eq!(stack.dump(), [3, 2, 1]);
        assert_eq!(stack.shove(0), Ok(()));
        assert_eq!(stack.depth(), 4);
        assert_eq!(stack.top(), Ok(&3));
    }

    #[test]
    fn items_are_not_dropped_by_pop() {
        use alloc::rc::Rc;
        let item = Rc::new(());
        let mut stack = Stack::new();
        stack.push(Rc::clone(&item));
        stack.push(Rc::clone(&item));
        assert_eq!(Rc::strong_count(&item), 3);

        let popped = stack.pop();
        assert_eq!(Rc::strong_count(&item), 3);
        drop(popped);
        drop(stack);
        assert_eq!(Rc::strong_count(&item), 1);
    }

    #[test]
    fn debug_top_first() {
        let stack: Stack<_> = [1, 2].into_iter().collect();
        assert_eq!(alloc::format!("{:?}", stack), "[2, 1]");
    }

    #[test]
    fn drop_deep() {
        let stack: Stack<_> = (0..1_000_000).collect();
        assert_eq!(stack.depth(), 1_000_000);
        drop(stack);
    }
}

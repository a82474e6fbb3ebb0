//! Chains of nodes and mutable positions inside them.

use alloc::boxed::Box;

/// Owning link to the next node towards the bottom, if any.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub item: T,
    pub below: Link<T>,
}

/// A mutable position in a chain, namely a link.
///
/// A cursor can only be obtained by walking down from a stack handle.
/// Therefore, whatever is inserted at a cursor is placed between
/// two nodes that are actually adjacent,
/// and every node keeps exactly one owner.
pub(crate) struct CursorMut<'a, T> {
    link: &'a mut Link<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub fn new(link: &'a mut Link<T>) -> Self {
        Self { link }
    }

    /// Return true if there is no node at the cursor.
    pub fn is_end(&self) -> bool {
        self.link.is_none()
    }

    /// Move the cursor to the end of the chain, below the bottom node.
    pub fn seek_bottom(self) -> Self {
        let mut link = self.link;
        while let Some(node) = link {
            link = &mut node.below;
        }
        Self::new(link)
    }

    /// Insert a new node at the cursor, above the node previously there,
    /// and return the cursor right below the new node.
    pub fn wedge(self, item: T) -> Self {
        let link = self.link;
        let below = link.take();
        let node = link.insert(Box::new(Node { item, below }));
        Self::new(&mut node.below)
    }

    /// Attach a chain below the bottom node.
    pub fn append(self, chain: Link<T>) {
        *self.seek_bottom().link = chain
    }
}

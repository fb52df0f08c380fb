use std::fmt::{self, Debug, Formatter};
use std::ptr;

use super::ConsList;
use super::list::Node;
use crate::position::Position;
use crate::util::error::PastEnd;
use crate::util::result::ResultExtension;

/// A forward-only [`Position`] within a [`ConsList`]. See [`ConsList::start`] and
/// [`ConsList::end`].
///
/// There is deliberately no way to step a ConsPos backward, a node doesn't know its predecessor.
pub struct ConsPos<'a, T> {
    pub(crate) list: &'a ConsList<T>,
    pub(crate) node: Option<&'a Node<T>>,
}

impl<'a, T> Position for ConsPos<'a, T> {
    type Item = &'a T;

    /// Returns a reference to the element at this position.
    ///
    /// # Panics
    /// Panics if the position is at the end of its list.
    fn get(&self) -> Self::Item {
        self.node.map(|node| &node.value).ok_or(PastEnd).throw()
    }

    /// Moves to the next node. Stepping the end position leaves it at the end.
    fn step_forward(&mut self) {
        self.node = self.node.and_then(|node| node.next.as_deref());
    }
}

impl<'a, T> Clone for ConsPos<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for ConsPos<'a, T> {}

impl<'a, T> PartialEq for ConsPos<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list)
            && match (self.node, other.node) {
                (Some(a), Some(b)) => ptr::eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<'a, T> Eq for ConsPos<'a, T> {}

impl<'a, T> Debug for ConsPos<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsPos")
            .field("list", &ptr::from_ref(self.list))
            .field("node", &self.node.map(ptr::from_ref))
            .finish()
    }
}

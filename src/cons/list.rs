use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::ConsPos;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Option<Box<Node<T>>>,
}

/// A singly-linked list, built by prepending values to an existing list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ConsList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `cons` | `O(1)` |
/// | `from_iter` | `O(n)` |
pub struct ConsList<T> {
    pub(crate) head: Option<Box<Node<T>>>,
    pub(crate) len: usize,
}

impl<T> ConsList<T> {
    /// Creates a new, empty ConsList.
    ///
    /// # Examples
    /// ```
    /// # use enumeration::cons::ConsList;
    /// let list: ConsList<u8> = ConsList::new();
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> ConsList<T> {
        ConsList { head: None, len: 0 }
    }

    /// Consumes `tail` and returns it with `value` prepended.
    ///
    /// # Examples
    /// ```
    /// # use enumeration::cons::ConsList;
    /// let list = ConsList::cons(1, ConsList::cons(2, ConsList::new()));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn cons(value: T, mut tail: ConsList<T>) -> ConsList<T> {
        tail.push_front(value);
        tail
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element of the list, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Adds `value` to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes and returns the first element of the list, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use enumeration::cons::ConsList;
    /// let mut list = ConsList::from_iter([1, 2]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Returns a borrowing iterator over the list, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
            len: self.len,
        }
    }

    /// Returns a position at the first element of the list.
    pub fn start(&self) -> ConsPos<'_, T> {
        ConsPos {
            list: self,
            node: self.head.as_deref(),
        }
    }

    /// Returns the position one past the last element of the list.
    pub const fn end(&self) -> ConsPos<'_, T> {
        ConsPos {
            list: self,
            node: None,
        }
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        // Unlink iteratively, dropping each box recursively would overflow the stack on long lists.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    /// Collects the values into a list, keeping their order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ConsList::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T: Debug> Debug for ConsList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing iterator over a [`ConsList`]. See [`ConsList::iter`].
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

//! Owned singly-linked list with in-place reversal.
//!
//! This module provides [`LinkedList`], a mutable singly linked list where
//! each node holds an element and exclusively owns the next node.
//!
//! # Overview
//!
//! `LinkedList` is the classic textbook list: a chain of heap nodes reachable
//! from an optional head. It provides:
//!
//! - O(1) prepend (`push_front`) and removal at the front (`pop_front`)
//! - O(1) head access
//! - O(n) in-place reversal with O(1) additional space
//!
//! Unlike a persistent cons-list, this list is mutated in place: operations
//! take `&mut self` and rewire the existing nodes instead of building new
//! structure. [`reverse`](LinkedList::reverse) in particular never allocates;
//! it only redirects each node's `next` link.
//!
//! # Examples
//!
//! ```rust
//! use reorder::list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_front(9);
//! list.push_front(1);
//! list.push_front(5);
//! assert_eq!(list.front(), Some(&5));
//!
//! list.reverse();
//! assert_eq!(list.front(), Some(&9));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// Internal node structure for the linked list.
///
/// Each node contains an element and exclusively owns its successor (if any).
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// The rest of the list hanging off this node.
    next: Link<T>,
}

/// An owning link to the next node; `None` marks the end of the chain.
type Link<T> = Option<Box<Node<T>>>;

/// An owned, mutable singly linked list.
///
/// The list is identified solely by its head link; an absent head represents
/// the empty list. Nodes are heap-allocated and exclusively owned, so cycles
/// and sharing are unrepresentable by construction.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `push_front` | O(1)       |
/// | `pop_front`  | O(1)       |
/// | `front`      | O(1)       |
/// | `len`        | O(1)       |
/// | `reverse`    | O(n)       |
///
/// # Examples
///
/// ```rust
/// use reorder::list::LinkedList;
///
/// let list = LinkedList::singleton(42);
/// assert_eq!(list.front(), Some(&42));
/// ```
pub struct LinkedList<T> {
    /// Owning link to the head node (if any).
    head: Link<T>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let list = LinkedList::singleton(42);
    /// assert_eq!(list.front(), Some(&42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut list = Self::new();
        list.push_front(element);
        list
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a reference to the first element of the list.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// let empty: LinkedList<i32> = LinkedList::new();
    /// assert_eq!(empty.front(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new node becomes the head and takes ownership of the previous
    /// chain.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to prepend
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_front(&mut self, element: T) {
        self.head = Some(Box::new(Node {
            element,
            next: self.head.take(),
        }));
        self.length += 1;
    }

    /// Removes the first element of the list and returns it.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = (1..=2).collect();
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.length -= 1;
            node.element
        })
    }

    /// Reverses the list in place.
    ///
    /// Every node's `next` link is redirected to point at its former
    /// predecessor in a single forward pass; the original head becomes the
    /// tail and the original tail becomes the head. No node is created or
    /// destroyed, so the heap identity of every node (and of the element it
    /// stores) is preserved.
    ///
    /// The pass keeps two links: the already-reversed chain (`previous`,
    /// initially empty) and the not-yet-visited chain (`current`, initially
    /// the whole list). Each step detaches `current`'s successor *before*
    /// relinking `current` onto the reversed chain; detaching afterwards
    /// would lose the only link to the rest of the list.
    ///
    /// Empty and single-node lists are returned unchanged.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(1) additional space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [5, 1, 9].into_iter().collect();
    /// list.reverse();
    ///
    /// let values: Vec<i32> = list.into_iter().collect();
    /// assert_eq!(values, vec![9, 1, 5]);
    /// ```
    pub fn reverse(&mut self) {
        let mut previous: Link<T> = None;
        let mut current = self.head.take();

        while let Some(mut node) = current {
            // Detach the successor before overwriting the link.
            current = node.next.take();
            node.next = previous;
            previous = Some(node);
        }

        // `previous` now owns the last node visited: the new head.
        self.head = previous;
    }

    /// Returns an iterator over references to the elements of the list,
    /// front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reorder::list::LinkedList;
    ///
    /// let list: LinkedList<i32> = (1..=3).collect();
    /// let sum: i32 = list.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Builds a list from a Vec efficiently.
    ///
    /// Uses `Vec::pop()` to consume elements from the end, which is O(1),
    /// so the chain is built back to front in one pass.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();

        let mut head: Link<T> = None;
        while let Some(element) = elements.pop() {
            head = Some(Box::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }
}

// Dropping the head Box would recurse through the whole chain; unlink the
// nodes iteratively so long lists cannot overflow the stack.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over elements of a [`LinkedList`].
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::build_from_vec(elements)
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Computes a hash value for this list.
///
/// The hash covers the length followed by each element in order, so equal
/// lists produce equal hash values (Hash-Eq consistency) and element order
/// affects the result.
impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// A list of Send + Sync elements is itself Send + Sync: nodes are exclusively
// owned, nothing is shared.
static_assertions::assert_impl_all!(LinkedList<i32>: Send, Sync);
static_assertions::assert_impl_all!(LinkedList<String>: Send, Sync);

//! Owned, mutable singly linked lists.
//!
//! This module provides [`LinkedList`], a singly linked list in which each
//! node exclusively owns its successor, together with an in-place [`reverse`]
//! operation that redirects the links in a single pass without allocating.
//!
//! # Examples
//!
//! ```rust
//! use reorder::list::LinkedList;
//!
//! let mut list: LinkedList<i32> = [5, 1, 9].into_iter().collect();
//! list.reverse();
//!
//! let values: Vec<i32> = list.into_iter().collect();
//! assert_eq!(values, vec![9, 1, 5]);
//! ```
//!
//! [`reverse`]: LinkedList::reverse

mod linked_list;

pub use linked_list::LinkedList;
pub use linked_list::LinkedListIntoIterator;
pub use linked_list::LinkedListIterator;

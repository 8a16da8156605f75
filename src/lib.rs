//! # reorder
//!
//! A small library of classic reordering algorithms over in-memory data:
//!
//! - **Linked list reversal**: an owned singly linked list whose links are
//!   reversed in place, in one pass, without allocating new nodes.
//! - **String permutations**: the set of all distinct reorderings of a
//!   string's characters, computed recursively.
//! - **Palindrome permutations**: whether *some* reordering of a string reads
//!   the same forwards and backwards, answered in linear time without ever
//!   enumerating permutations.
//!
//! Every operation is a pure, synchronous function over the value it is
//! given; there is no shared state, no I/O, and no configuration.
//!
//! ## Feature Flags
//!
//! - `list`: The [`list`] module (`LinkedList` and in-place reversal)
//! - `strings`: The [`strings`] module (permutation generation and the
//!   palindrome-permutation check)
//! - `fxhash`: Use `rustc-hash` for the string algorithms' hash sets
//! - `ahash`: Use `ahash` for the string algorithms' hash sets
//! - `full`: Enable all algorithm modules
//!
//! ## Example
//!
//! ```rust
//! use reorder::prelude::*;
//!
//! let mut list: LinkedList<i32> = [5, 1, 9].into_iter().collect();
//! list.reverse();
//! assert_eq!(list.front(), Some(&9));
//!
//! assert_eq!(permutations("cat").len(), 6);
//! assert!(has_palindrome_permutation("ivicc"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use reorder::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "strings")]
    pub use crate::strings::*;
}

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "strings")]
pub mod strings;

//! String reordering algorithms.
//!
//! This module provides two classic algorithms over the characters of a
//! string:
//!
//! - [`permutations`]: the set of all distinct reorderings of a string,
//!   computed recursively
//! - [`has_palindrome_permutation`]: whether *some* reordering of a string is
//!   a palindrome, answered in one linear scan
//!
//! Both treat the input as a read-only sequence of Unicode scalar values
//! (`char`); neither mutates anything outside its own transient
//! accumulators.
//!
//! # Hash sets
//!
//! The accumulators are ordinary hash sets, exposed through the [`StringSet`]
//! and [`CharSet`] aliases. By default they use the standard library's
//! `RandomState` hasher; the `fxhash` and `ahash` feature flags switch them
//! to the corresponding fast non-cryptographic hashers (`fxhash` wins if both
//! are enabled).
//!
//! # Examples
//!
//! ```rust
//! use reorder::strings::{has_palindrome_permutation, permutations};
//!
//! let all = permutations("cat");
//! assert_eq!(all.len(), 6);
//! assert!(all.contains("tca"));
//!
//! assert!(has_palindrome_permutation("civic"));
//! assert!(!has_palindrome_permutation("civil"));
//! ```

mod palindrome;
mod permutation;

pub use palindrome::has_palindrome_permutation;
pub use permutation::permutations;

/// A hash set of strings, used to accumulate distinct permutations.
///
/// The hasher follows the `fxhash`/`ahash` feature flags.
#[cfg(feature = "fxhash")]
pub type StringSet = rustc_hash::FxHashSet<String>;

/// A hash set of strings, used to accumulate distinct permutations.
///
/// The hasher follows the `fxhash`/`ahash` feature flags.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type StringSet = ahash::AHashSet<String>;

/// A hash set of strings, used to accumulate distinct permutations.
///
/// The hasher follows the `fxhash`/`ahash` feature flags.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type StringSet = std::collections::HashSet<String>;

/// A hash set of characters, used to track characters seen an odd number of
/// times.
///
/// The hasher follows the `fxhash`/`ahash` feature flags.
#[cfg(feature = "fxhash")]
pub type CharSet = rustc_hash::FxHashSet<char>;

/// A hash set of characters, used to track characters seen an odd number of
/// times.
///
/// The hasher follows the `fxhash`/`ahash` feature flags.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type CharSet = ahash::AHashSet<char>;

/// A hash set of characters, used to track characters seen an odd number of
/// times.
///
/// The hasher follows the `fxhash`/`ahash` feature flags.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type CharSet = std::collections::HashSet<char>;

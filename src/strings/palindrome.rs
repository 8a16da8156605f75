//! Palindrome-permutation check via character parity.

use super::CharSet;

/// Returns `true` if some reordering of `input`'s characters is a
/// palindrome.
///
/// A reordering can be a palindrome exactly when at most one character
/// occurs an odd number of times: every other character pairs off across the
/// middle, and the odd one (if any) sits in the middle itself.
///
/// # Algorithm
///
/// One left-to-right scan, toggling each character in a set of "unpaired"
/// characters: a character already in the set has now been seen an even
/// number of times and is removed; one not in the set has been seen an odd
/// number of times and is added. After the scan the set holds exactly the
/// characters with odd total counts, so the answer is whether it has at most
/// one element. Permutations are never enumerated — the brute-force check of
/// all n! reorderings costs O(n! · n); this scan costs O(n).
///
/// # Complexity
///
/// O(n) time. O(k) additional space, where k is the number of distinct
/// characters simultaneously unpaired (bounded by the alphabet).
///
/// # Examples
///
/// ```rust
/// use reorder::strings::has_palindrome_permutation;
///
/// assert!(has_palindrome_permutation("civic"));
/// assert!(has_palindrome_permutation("ivicc")); // "civic", reordered
/// assert!(!has_palindrome_permutation("civil"));
///
/// // Zero or one unpaired characters is fine.
/// assert!(has_palindrome_permutation(""));
/// assert!(has_palindrome_permutation("a"));
/// assert!(!has_palindrome_permutation("ab"));
/// ```
#[must_use]
pub fn has_palindrome_permutation(input: &str) -> bool {
    // Characters seen an odd number of times so far.
    let mut unpaired = CharSet::default();

    for character in input.chars() {
        if !unpaired.remove(&character) {
            unpaired.insert(character);
        }
    }

    // At most one character may occupy the middle.
    unpaired.len() <= 1
}

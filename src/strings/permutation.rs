//! Recursive generation of all distinct permutations of a string.

use super::StringSet;

/// Returns the set of all distinct permutations of `input`'s characters.
///
/// Every element of the returned set is a reordering of `input` with the
/// same character multiset and the same character count. For an input of n
/// distinct characters the set has exactly n! elements; repeated characters
/// produce fewer, because the set absorbs the duplicate strings that arise
/// when equal characters swap places.
///
/// # Algorithm
///
/// Recursive last-character insertion. The permutations of the empty string
/// and of a single character are the input itself. For anything longer, take
/// the permutations of all characters except the last, then splice the last
/// character into every position of every shorter permutation — `len + 1`
/// positions each, always at `char` boundaries.
///
/// Recursion depth equals the character count of the input, which is never a
/// practical concern: the factorial size of the output is the limit long
/// before stack depth is.
///
/// # Complexity
///
/// O(n · n!) time and space, dominated by the number of permutations
/// produced. No attempt is made to do better; with repeated characters the
/// duplicates are generated and then absorbed by the set rather than skipped.
///
/// # Examples
///
/// ```rust
/// use reorder::strings::permutations;
///
/// let all = permutations("cat");
/// assert_eq!(all.len(), 6);
/// for expected in ["cat", "cta", "act", "atc", "tac", "tca"] {
///     assert!(all.contains(expected));
/// }
///
/// assert!(permutations("").contains(""));
/// assert!(permutations("a").contains("a"));
/// ```
#[must_use]
pub fn permutations(input: &str) -> StringSet {
    let characters: Vec<char> = input.chars().collect();
    permute(&characters)
}

/// Recursive worker over the character slice.
fn permute(characters: &[char]) -> StringSet {
    // Base case: zero or one character has exactly one permutation.
    if characters.len() <= 1 {
        let mut permutations = StringSet::default();
        permutations.insert(characters.iter().collect());
        return permutations;
    }

    let (prefix, last) = characters.split_at(characters.len() - 1);
    let last = last[0];

    let shorter = permute(prefix);

    // Splice the last character into every position of every shorter
    // permutation.
    let mut permutations = StringSet::default();
    for permutation in &shorter {
        let units: Vec<char> = permutation.chars().collect();
        for position in 0..=units.len() {
            let mut spliced = String::with_capacity(permutation.len() + last.len_utf8());
            spliced.extend(&units[..position]);
            spliced.push(last);
            spliced.extend(&units[position..]);
            permutations.insert(spliced);
        }
    }

    permutations
}

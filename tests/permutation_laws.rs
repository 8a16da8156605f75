#![cfg(feature = "strings")]
//! Property tests for `permutations`: cardinality, anagram preservation, and
//! determinism.

use proptest::prelude::*;
use reorder::strings::permutations;

/// n! for the tiny n used in these tests.
fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// Sorted characters, used as a canonical form for anagram comparison.
fn sorted_chars(input: &str) -> Vec<char> {
    let mut characters: Vec<char> = input.chars().collect();
    characters.sort_unstable();
    characters
}

/// Strings of up to 5 distinct characters.
fn distinct_char_string() -> impl Strategy<Value = String> {
    prop::sample::subsequence(vec!['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'], 0..=5)
        .prop_map(|characters| characters.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A string of n distinct characters has exactly n! permutations.
    #[test]
    fn prop_distinct_characters_yield_factorial_count(input in distinct_char_string()) {
        let all = permutations(&input);
        prop_assert_eq!(all.len(), factorial(input.chars().count()));
    }

    /// Every generated permutation is an anagram of the input: same length,
    /// same character multiset.
    #[test]
    fn prop_every_element_is_an_anagram(input in distinct_char_string()) {
        let expected = sorted_chars(&input);
        for permutation in &permutations(&input) {
            prop_assert_eq!(&sorted_chars(permutation), &expected);
        }
    }

    /// The input itself is always among its permutations.
    #[test]
    fn prop_contains_the_input_itself(input in distinct_char_string()) {
        prop_assert!(permutations(&input).contains(&input));
    }

    /// Pure function: the same input always produces the same set, even with
    /// repeated characters.
    #[test]
    fn prop_deterministic(
        characters in prop::collection::vec(prop::char::range('a', 'd'), 0..=5)
    ) {
        let input: String = characters.into_iter().collect();
        prop_assert_eq!(permutations(&input), permutations(&input));
    }
}

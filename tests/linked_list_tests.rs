#![cfg(feature = "list")]
//! Unit tests for `LinkedList`.
//!
//! These tests verify the basic list operations and the in-place reversal.

use reorder::list::LinkedList;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: LinkedList<i32> = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
}

#[rstest]
fn test_singleton_holds_one_element() {
    let list = LinkedList::singleton(42);
    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), Some(&42));
}

#[rstest]
fn test_push_front_adds_element_to_front() {
    let mut list = LinkedList::new();
    list.push_front(2);
    list.push_front(1);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.len(), 2);
}

#[rstest]
fn test_from_iterator_preserves_order() {
    let list: LinkedList<i32> = [5, 1, 9].into_iter().collect();
    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![5, 1, 9]);
}

// =============================================================================
// pop_front / front
// =============================================================================

#[rstest]
fn test_pop_front_removes_in_order() {
    let mut list: LinkedList<i32> = (1..=3).collect();
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[rstest]
fn test_pop_front_on_empty_list_returns_none() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(list.pop_front(), None);
}

// =============================================================================
// reverse
// =============================================================================

#[rstest]
fn test_reverse_empty_list_is_noop() {
    let mut list: LinkedList<i32> = LinkedList::new();
    list.reverse();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
}

#[rstest]
fn test_reverse_single_node_is_noop() {
    let mut list = LinkedList::singleton(7);
    list.reverse();
    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), Some(&7));
}

#[rstest]
fn test_reverse_three_nodes() {
    // [5, 1, 9] reverses to [9, 1, 5]
    let mut list: LinkedList<i32> = [5, 1, 9].into_iter().collect();
    list.reverse();

    assert_eq!(list.front(), Some(&9));
    let values: Vec<i32> = list.into_iter().collect();
    assert_eq!(values, vec![9, 1, 5]);
}

#[rstest]
#[case(vec![])]
#[case(vec![1])]
#[case(vec![1, 2])]
#[case(vec![5, 1, 9])]
#[case(vec![1, 2, 3, 4, 5, 6, 7, 8])]
fn test_reverse_matches_reversed_vec(#[case] values: Vec<i32>) {
    let mut list: LinkedList<i32> = values.iter().copied().collect();
    list.reverse();

    let mut expected = values;
    expected.reverse();

    let actual: Vec<i32> = list.into_iter().collect();
    assert_eq!(actual, expected);
}

#[rstest]
fn test_reverse_preserves_length() {
    let mut list: LinkedList<i32> = (0..100).collect();
    list.reverse();
    assert_eq!(list.len(), 100);
}

#[rstest]
fn test_reverse_twice_restores_original() {
    let original: LinkedList<i32> = (1..=10).collect();
    let mut list = original.clone();
    list.reverse();
    list.reverse();
    assert_eq!(list, original);
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_iter_is_exact_size() {
    let list: LinkedList<i32> = (1..=4).collect();
    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
}

#[rstest]
fn test_into_iter_consumes_front_to_back() {
    let list: LinkedList<i32> = (1..=3).collect();
    let values: Vec<i32> = list.into_iter().collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[rstest]
fn test_borrowed_into_iter_via_for_loop() {
    let list: LinkedList<i32> = (1..=3).collect();
    let mut sum = 0;
    for element in &list {
        sum += element;
    }
    assert_eq!(sum, 6);
}

// =============================================================================
// Standard traits
// =============================================================================

#[rstest]
fn test_equality_compares_by_value_and_order() {
    let left: LinkedList<i32> = (1..=3).collect();
    let right: LinkedList<i32> = (1..=3).collect();
    let shorter: LinkedList<i32> = (1..=2).collect();
    let reordered: LinkedList<i32> = [3, 2, 1].into_iter().collect();

    assert_eq!(left, right);
    assert_ne!(left, shorter);
    assert_ne!(left, reordered);
}

#[rstest]
fn test_clone_is_independent() {
    let original: LinkedList<i32> = (1..=3).collect();
    let mut copy = original.clone();
    copy.reverse();

    assert_eq!(original.front(), Some(&1));
    assert_eq!(copy.front(), Some(&3));
}

#[rstest]
fn test_debug_and_display_formatting() {
    let list: LinkedList<i32> = (1..=3).collect();
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(format!("{list}"), "[1, 2, 3]");
}

#[rstest]
fn test_default_is_empty() {
    let list: LinkedList<i32> = LinkedList::default();
    assert!(list.is_empty());
}

#[rstest]
fn test_hash_consistent_with_equality() {
    use std::collections::HashMap;

    let mut map: HashMap<LinkedList<i32>, &str> = HashMap::new();
    let key: LinkedList<i32> = (1..=3).collect();
    map.insert(key.clone(), "value");
    assert_eq!(map.get(&key), Some(&"value"));
}

// =============================================================================
// Drop behavior
// =============================================================================

#[rstest]
fn test_dropping_long_list_does_not_overflow_stack() {
    let list: LinkedList<i32> = (0..1_000_000).collect();
    drop(list);
}

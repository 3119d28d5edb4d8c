//! Owned singly-linked list tests.

use algokit::list::{add_digits, LinkedList};
use algokit::ListError;
use rstest::rstest;

fn to_vec<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn given_values_when_building_from_vec_then_order_preserved() {
    let list = LinkedList::from(vec![1, 2, 3]);
    assert_eq!(to_vec(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
}

#[test]
fn given_list_when_reversing_then_order_flipped() {
    let mut list = LinkedList::from(vec![1, 2, 3, 4, 5]);
    list.reverse();
    assert_eq!(to_vec(&list), vec![5, 4, 3, 2, 1]);
}

#[test]
fn given_empty_list_when_reversing_then_still_empty() {
    let mut list: LinkedList<i32> = LinkedList::new();
    list.reverse();
    assert!(list.is_empty());
}

#[rstest]
#[case(vec![1], 1)]
#[case(vec![1, 2], 2)]
#[case(vec![1, 2, 3], 2)]
#[case(vec![1, 2, 3, 4], 3)]
#[case(vec![1, 2, 3, 4, 5], 3)]
fn given_lists_when_finding_middle_then_second_middle_for_even(
    #[case] values: Vec<i32>,
    #[case] expected: i32,
) {
    let list = LinkedList::from(values);
    assert_eq!(list.middle(), Some(&expected));
}

#[test]
fn given_value_when_searching_then_first_position_returned() {
    let list = LinkedList::from(vec![10, 20, 30, 20]);
    assert_eq!(list.position(&20), Some(1));
    assert_eq!(list.position(&99), None);
    assert!(list.contains(&30));
}

#[test]
fn given_index_when_removing_then_value_extracted() {
    let mut list = LinkedList::from(vec![1, 2, 3]);
    assert_eq!(list.remove_at(1), Ok(2));
    assert_eq!(to_vec(&list), vec![1, 3]);
    assert_eq!(
        list.remove_at(5),
        Err(ListError::IndexOutOfBounds { index: 5, len: 2 })
    );
}

#[test]
fn given_sorted_lists_when_merging_then_single_sorted_list() {
    let left = LinkedList::from(vec![1, 3, 5]);
    let right = LinkedList::from(vec![2, 3, 6, 8]);
    let merged = LinkedList::merge_sorted(left, right);
    assert_eq!(to_vec(&merged), vec![1, 2, 3, 3, 5, 6, 8]);
}

#[test]
fn given_sorted_list_with_runs_when_deduping_then_runs_collapse() {
    let mut list = LinkedList::from(vec![1, 1, 2, 3, 3, 3, 4]);
    list.dedup_sorted();
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
}

#[test]
fn given_unsorted_list_when_deduping_then_first_occurrences_kept() {
    let mut list = LinkedList::from(vec![3, 1, 3, 2, 1, 4]);
    list.dedup();
    assert_eq!(to_vec(&list), vec![3, 1, 2, 4]);
}

#[rstest]
#[case(vec![1, 2, 2, 1], true)]
#[case(vec![1, 2, 3, 2, 1], true)]
#[case(vec![1, 2], false)]
#[case(vec![7], true)]
#[case(vec![], true)]
fn given_lists_when_checking_palindrome_then_expected_answer(
    #[case] values: Vec<i32>,
    #[case] expected: bool,
) {
    let mut list = LinkedList::from(values.clone());
    assert_eq!(list.is_palindrome(), expected);
    // the check must restore the list
    assert_eq!(to_vec(&list), values);
}

#[test]
fn given_list_when_reordering_odd_even_then_position_parity_groups() {
    let mut list = LinkedList::from(vec![1, 2, 3, 4, 5]);
    list.odd_even_reorder();
    assert_eq!(to_vec(&list), vec![1, 3, 5, 2, 4]);
}

#[test]
fn given_digit_lists_when_adding_then_carry_propagates() {
    // 342 + 465 = 807, stored little-endian.
    let left = LinkedList::from(vec![2u8, 4, 3]);
    let right = LinkedList::from(vec![5u8, 6, 4]);
    assert_eq!(to_vec(&add_digits(&left, &right)), vec![7, 0, 8]);
}

#[test]
fn given_unequal_digit_lists_when_adding_then_final_carry_appends_digit() {
    // 99 + 1 = 100
    let left = LinkedList::from(vec![9u8, 9]);
    let right = LinkedList::from(vec![1u8]);
    assert_eq!(to_vec(&add_digits(&left, &right)), vec![0, 0, 1]);
}

#[test]
fn given_list_when_splitting_and_appending_then_roundtrips() {
    let mut list = LinkedList::from(vec![1, 2, 3, 4]);
    let mut tail = list.split_off(2).unwrap();
    assert_eq!(to_vec(&list), vec![1, 2]);
    assert_eq!(to_vec(&tail), vec![3, 4]);
    list.append(&mut tail);
    assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
    assert!(tail.is_empty());
}

#[test]
fn given_long_list_when_dropping_then_no_stack_overflow() {
    let list: LinkedList<u32> = (0..200_000).collect();
    drop(list);
}

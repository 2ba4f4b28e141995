//! Functional helpers used as driver and adapter arguments

use std::collections::{BTreeMap, HashMap};

use cursorkit::prelude::*;

#[test]
fn test_relational_partials_as_predicates() {
    let v = [4, 8, 15, 16, 23, 42];
    assert_eq!(slice::find_if(&v, greater_than(15)).unwrap(), 3);
    assert_eq!(slice::find_if(&v, greater_equal(15)).unwrap(), 2);
    assert_eq!(slice::count_if(&v, less_equal(15)).unwrap(), 3);
    assert_eq!(slice::count_if(&v, ne_to(8)).unwrap(), 5);
    assert_eq!(slice::count_if(&v, not(less_than(16))).unwrap(), 3);
}

#[test]
fn test_binary_relationals_as_comparators() {
    assert_eq!(slice::adjacent_find(&[3, 2, 5, 4], lt).unwrap(), 1);
    assert_eq!(slice::adjacent_find(&[1, 2, 2], ge).unwrap(), 1);
    assert_eq!(slice::find_first_of(&[1, 5, 9], &[9, 5], eq).unwrap(), 1);
    assert!(slice::adjacent_find(&[1, 2, 3], gt).unwrap_err().is_not_found());
}

#[test]
fn test_arithmetic_partials_as_transforms() {
    let out = range!(1, 4).transform_infallible(add_by(10)).materialize();
    assert_eq!(out, vec![11, 12, 13, 14]);

    let out = range!(1u32, 4).transform_infallible(shl_by(1)).materialize();
    assert_eq!(out, vec![2, 4, 6, 8]);

    let out = range!(0, 6).transform_infallible(bit_and_by(1)).materialize();
    assert_eq!(out, vec![0, 1, 0, 1, 0, 1, 0]);

    assert_eq!(sub_by(3)(10), 7);
    assert_eq!(bit_or(0b01, 0b10), 0b11);
    assert_eq!(bit_xor_by(0xff)(0x0f), 0xf0);
}

#[test]
fn test_constants() {
    assert_eq!(zero::<u64>(), 0);
    let flags = [true, false, true];
    assert_eq!(slice::count_if(&flags, is_true).unwrap(), 2);
    assert_eq!(slice::count_if(&flags, is_false).unwrap(), 1);

    let lookups = [Some(1), None, Some(3)];
    assert_eq!(slice::find_if(&lookups, is_nil).unwrap(), 1);
    assert_eq!(slice::count_if(&[0, 3, 0], is_zero).unwrap(), 2);
}

#[test]
fn test_length_predicates() {
    let words = ["to", "be", "or", "not"];
    assert_eq!(slice::find_if(&words, |w| !has_length(*w, 2)).unwrap(), 3);

    let groups = vec![vec![1], vec![1, 2], vec![]];
    assert_eq!(slice::find_if(&groups, length_of(0)).unwrap(), 2);

    let by_len: HashMap<usize, &str> = HashMap::from([(1, "a"), (2, "bb")]);
    assert!(has_length(&by_len, 2));
    assert!(has_length(&BTreeMap::<(), ()>::new(), 0));
    assert!(has_length(&String::from("four"), 4));
}

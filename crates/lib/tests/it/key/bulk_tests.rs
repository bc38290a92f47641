//! Batch allocation tests: initial and n_between.

use orderkey::{Keyspace, OrderKey, generate::generate};

use crate::helpers::*;

#[test]
fn test_initial_three_follows_pivot_rule() {
    let keys = OrderKey::initial(3).unwrap();
    assert_eq!(keys, vec![key(&[64]), key(&[128]), key(&[192])]);
}

#[test]
fn test_initial_zero_is_empty() {
    assert!(OrderKey::initial(0).unwrap().is_empty());
    assert!(OrderKey::n_between(0, None, None).unwrap().is_empty());
}

#[test]
fn test_initial_fills_direct_slots_first() {
    let keys = OrderKey::initial(255).unwrap();
    assert!(keys.iter().all(|k| k.symbol_count() == 1));
    assert_eq!(keys.first(), Some(&key(&[1])));
    assert_eq!(keys.last(), Some(&key(&[255])));

    let keys = OrderKey::initial(256).unwrap();
    assert_eq!(keys.iter().filter(|k| k.symbol_count() == 2).count(), 1);
    assert_strictly_increasing(&keys);
}

#[test]
fn test_initial_large_batch() {
    let keys = OrderKey::initial(10_000).unwrap();
    assert_eq!(keys.len(), 10_000);
    assert_strictly_increasing(&keys);
    assert_within(&keys, None, None);
    assert!(keys.iter().all(|k| k.symbol_count() <= 2));
}

#[test]
fn test_n_between_shortest_key_bias() {
    let start = key(&[3, 3, 10]);
    let end = key(&[3, 3, 100]);
    let keys = OrderKey::n_between(89, Some(&start), Some(&end)).unwrap();
    assert_eq!(keys.len(), 89);
    assert_strictly_increasing(&keys);
    assert_within(&keys, Some(&start), Some(&end));
    // Common prefix of two symbols, plus one
    assert!(keys.iter().all(|k| k.symbol_count() == 3));
}

#[test]
fn test_n_between_adjacent_keys() {
    let start = key(&[5]);
    let end = key(&[6]);
    let keys = OrderKey::n_between(300, Some(&start), Some(&end)).unwrap();
    assert_eq!(keys.len(), 300);
    assert_strictly_increasing(&keys);
    assert_within(&keys, Some(&start), Some(&end));
}

#[test]
fn test_n_between_prefix_boundaries() {
    let start = key(&[5]);
    let end = key(&[5, 0, 0, 2]);
    let keys = OrderKey::n_between(40, Some(&start), Some(&end)).unwrap();
    assert_eq!(keys.len(), 40);
    assert_strictly_increasing(&keys);
    assert_within(&keys, Some(&start), Some(&end));
}

#[test]
fn test_n_between_open_below() {
    let end = key(&[0, 0, 1]);
    let keys = OrderKey::n_between(20, None, Some(&end)).unwrap();
    assert_strictly_increasing(&keys);
    assert_within(&keys, None, Some(&end));
}

#[test]
fn test_n_between_open_above_saturated() {
    let start = key(&[255, 255, 255]);
    let keys = OrderKey::n_between(20, Some(&start), None).unwrap();
    assert_strictly_increasing(&keys);
    assert_within(&keys, Some(&start), None);
}

#[test]
fn test_n_between_rejects_reversed_bounds() {
    let a = key(&[4]);
    let b = key(&[4, 1]);
    assert!(OrderKey::n_between(1, Some(&b), Some(&a)).is_err());
}

// ===== NARROW WINDOW REGRESSION =====
// Both boundaries share their first symbol and have distinct second symbols, and
// the batch is too large for the direct slots of the window.

#[test]
fn test_narrow_window_through_n_between() {
    let start = key(&[5, 10]);
    let end = key(&[5, 12]);
    let keys = OrderKey::n_between(600, Some(&start), Some(&end)).unwrap();
    assert_eq!(keys.len(), 600);
    assert_strictly_increasing(&keys);
    assert_within(&keys, Some(&start), Some(&end));
}

#[test]
fn test_narrow_window_through_generator() {
    let keyspace = Keyspace::default();
    let codes = generate(&keyspace, 600, &[5, 10], Some(&[5, 12]), &[]);
    assert_eq!(codes.len(), 600);

    let keys: Vec<OrderKey> = codes.into_iter().map(OrderKey::new).collect();
    assert_strictly_increasing(&keys);
    assert_within(&keys, Some(&key(&[5, 10])), Some(&key(&[5, 12])));
}

#[test]
fn test_narrow_window_zero_width_second_level() {
    // Second symbols are adjacent: every code has to go deeper under [5, 10]
    let codes = generate(&Keyspace::default(), 50, &[5, 10], Some(&[5, 11]), &[]);
    assert_eq!(codes.len(), 50);
    assert!(codes.iter().all(|code| code.starts_with(&[5, 10])));

    let keys: Vec<OrderKey> = codes.into_iter().map(OrderKey::new).collect();
    assert_strictly_increasing(&keys);
}

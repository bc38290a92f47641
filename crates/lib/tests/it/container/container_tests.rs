//! Behaviour of `MappingContainer` through the `Reorderable` contract.

use orderkey::container::{ContainerError, MappingContainer, Reorderable};
use orderkey::{Error, Keyspace, OrderKey};

use crate::helpers::*;

fn order<V: Copy + Eq + std::hash::Hash + std::fmt::Debug>(
    container: &MappingContainer<V>,
) -> Vec<V> {
    container.iter().copied().collect()
}

fn snapshot(container: &MappingContainer<&'static str>) -> Vec<(&'static str, OrderKey)> {
    container
        .entries()
        .into_iter()
        .map(|(element, key)| (*element, key.clone()))
        .collect()
}

/// Generic over the contract, so any implementation can be driven the same way
fn fill<C: Reorderable<&'static str>>(container: &mut C) -> Result<(), Error> {
    container.put_to_end(["e1", "e2", "e3"], true)?;
    Ok(())
}

// ===== ORDERING =====

#[test]
fn test_put_to_end_then_recompute() {
    let mut container = MappingContainer::new();
    fill(&mut container).unwrap();
    assert_eq!(order(&container), vec!["e1", "e2", "e3"]);

    container.recompute().unwrap();
    let keys: Vec<OrderKey> = container.entries().into_iter().map(|(_, k)| k.clone()).collect();
    assert_eq!(keys, OrderKey::initial(3).unwrap());
    assert_eq!(order(&container), vec!["e1", "e2", "e3"]);
}

#[test]
fn test_iter_rev_and_elements() {
    let container = MappingContainer::from_elements(["a", "b", "c"]).unwrap();

    let reversed: Vec<_> = container.iter_rev().copied().collect();
    assert_eq!(reversed, vec!["c", "b", "a"]);

    let mut unordered: Vec<_> = container.elements().copied().collect();
    unordered.sort_unstable();
    assert_eq!(unordered, vec!["a", "b", "c"]);

    assert!(container.contains(&"b"));
    assert!(!container.contains(&"z"));
    assert!(container.key_of(&"z").is_none());
}

#[test]
fn test_borrowed_elements_iterate_through_the_trait() {
    let names: Vec<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
    let mut container: MappingContainer<&str> = MappingContainer::new();
    container
        .put_to_end(names.iter().map(String::as_str), true)
        .unwrap();

    fn collect<'a, C: Reorderable<&'a str>>(container: &'a C) -> (Vec<&'a str>, Vec<&'a str>) {
        (
            container.iter().copied().collect(),
            container.iter_rev().copied().collect(),
        )
    }
    let (forward, backward) = collect(&container);
    assert_eq!(forward, vec!["x", "y", "z"]);
    assert_eq!(backward, vec!["z", "y", "x"]);
    assert_eq!(container.elements().count(), 3);
}

#[test]
fn test_moving_several_members_at_once() {
    let mut container = MappingContainer::from_elements(0..10u32).unwrap();
    container.put_between(&2, &3, [7, 8, 9, 0]).unwrap();
    assert_eq!(order(&container), vec![1, 2, 7, 8, 9, 0, 3, 4, 5, 6]);
    assert_eq!(container.len(), 10);
}

#[test]
fn test_moving_keeps_other_keys() {
    let mut container = MappingContainer::from_elements(["a", "b", "c", "d"]).unwrap();
    let before = snapshot(&container);

    container.put_between(&"a", &"b", ["d"]).unwrap();
    assert_eq!(order(&container), vec!["a", "d", "b", "c"]);

    // Only the moved element received a new key
    for (element, key) in before {
        if element != "d" {
            assert_eq!(container.key_of(&element), Some(&key));
        }
    }
}

#[test]
fn test_put_next_to_before_first() {
    let mut container = MappingContainer::from_elements([1, 2]).unwrap();
    container.put_next_to(&1, [5, 6], false).unwrap();
    assert_eq!(order(&container), vec![5, 6, 1, 2]);
}

#[test]
fn test_put_next_to_after_last() {
    let mut container = MappingContainer::from_elements([1, 2]).unwrap();
    container.put_next_to(&2, [5, 6], true).unwrap();
    assert_eq!(order(&container), vec![1, 2, 5, 6]);
}

#[test]
fn test_put_to_end_front_of_empty_container() {
    let mut container = MappingContainer::new();
    container.put_to_end([3, 4], false).unwrap();
    assert_eq!(order(&container), vec![3, 4]);
    assert_eq!(container.key_of(&3), Some(&key(&[85])));
}

#[test]
fn test_empty_requests_are_noops() {
    let mut container = MappingContainer::from_elements(["a", "b"]).unwrap();
    let before = snapshot(&container);

    container.put_to_end([], true).unwrap();
    container.put_next_to(&"a", [], true).unwrap();
    container.put_between(&"a", &"b", []).unwrap();
    container.discard(&[]);
    container.remove(&[]).unwrap();

    assert_eq!(snapshot(&container), before);
}

#[test]
fn test_many_inserts_into_one_gap_then_recompute() {
    let mut container = MappingContainer::from_elements([0u32, 1]).unwrap();
    for i in 2..200u32 {
        container.put_next_to(&0, [i], true).unwrap();
    }
    let longest = |c: &MappingContainer<u32>| {
        c.entries().iter().map(|(_, k)| k.symbol_count()).max().unwrap()
    };
    assert!(longest(&container) > 1);

    let before: Vec<u32> = order(&container);
    container.recompute().unwrap();
    assert_eq!(order(&container), before);
    assert_eq!(longest(&container), 1);
}

#[test]
fn test_sort_key_orders_external_collections() {
    let container = MappingContainer::from_elements(["x", "y", "z"]).unwrap();
    let mut outside = vec!["z", "missing", "x", "y"];
    outside.sort_by_key(container.sort_key());
    assert_eq!(outside, vec!["missing", "x", "y", "z"]);
}

// ===== REMOVAL =====

#[test]
fn test_pop_both_ends() {
    let mut container = MappingContainer::from_elements(["a", "b", "c"]).unwrap();
    assert_eq!(container.pop(false).unwrap(), "a");
    assert_eq!(container.pop(true).unwrap(), "c");
    assert_eq!(container.pop(true).unwrap(), "b");
    assert!(container.is_empty());

    let err = container.pop(true).unwrap_err();
    assert!(err.is_container_error());
    assert_eq!(err.module(), "container");
    assert!(matches!(err, Error::Container(ContainerError::Empty)));
}

#[test]
fn test_remove_is_all_or_nothing() {
    let mut container = MappingContainer::from_elements(["a", "b", "c"]).unwrap();
    let before = snapshot(&container);

    let err = container.remove(&["a", "missing"]).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(snapshot(&container), before);

    container.remove(&["a", "c"]).unwrap();
    assert_eq!(order(&container), vec!["b"]);
}

#[test]
fn test_discard_ignores_non_members() {
    let mut container = MappingContainer::from_elements(["a", "b"]).unwrap();
    container.discard(&["missing", "a"]);
    assert_eq!(order(&container), vec!["b"]);
}

#[test]
fn test_clear() {
    let mut container = MappingContainer::from_elements(["a", "b"]).unwrap();
    container.clear();
    assert!(container.is_empty());
    container.put_to_end(["c"], true).unwrap();
    assert_eq!(container.key_of(&"c"), Some(&key(&[128])));
}

// ===== ERRORS LEAVE THE CONTAINER UNCHANGED =====

#[test]
fn test_missing_references() {
    let mut container = MappingContainer::from_elements(["a", "b"]).unwrap();
    let before = snapshot(&container);

    let err = container.put_next_to(&"missing", ["c"], true).unwrap_err();
    assert!(err.is_not_found());
    let err = container.put_between(&"a", &"missing", ["c"]).unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(snapshot(&container), before);
}

#[test]
fn test_reversed_range() {
    let mut container = MappingContainer::from_elements(["a", "b"]).unwrap();
    let before = snapshot(&container);

    let err = container.put_between(&"b", &"a", ["c"]).unwrap_err();
    assert!(err.is_validation_error());
    assert!(matches!(
        err,
        Error::Container(ContainerError::InvalidRange { .. })
    ));

    let err = container.put_between(&"a", &"a", ["c"]).unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(snapshot(&container), before);
}

#[test]
fn test_duplicate_elements() {
    let mut container = MappingContainer::from_elements(["a", "b"]).unwrap();
    let before = snapshot(&container);

    let err = container.put_to_end(["c", "c"], true).unwrap_err();
    match err {
        Error::Container(container_err) => {
            assert_eq!(container_err.element(), Some("\"c\""));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // A reference cannot be moved relative to itself
    assert!(container.put_next_to(&"a", ["a"], true).is_err());
    assert!(container.put_between(&"a", &"b", ["b"]).is_err());

    assert_eq!(snapshot(&container), before);
}

#[test]
fn test_bound_keyspace_exhaustion() {
    let keyspace = Keyspace::default().with_max_size(1);
    let mut container = MappingContainer::with_keyspace(keyspace);
    container.put_to_end(1..=255u32, true).unwrap();
    assert_eq!(container.len(), 255);
    assert_eq!(container.keyspace().max_size(), Some(1));

    let before: Vec<u32> = order(&container);
    let err = container.put_to_end([1000], true).unwrap_err();
    assert!(err.is_size_exceeded());
    assert_eq!(container.len(), 255);
    assert!(!container.contains(&1000));
    assert_eq!(order(&container), before);
}

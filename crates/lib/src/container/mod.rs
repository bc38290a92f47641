//! Reorderable containers built on order keys.
//!
//! A reorderable container associates every member with an [`OrderKey`] and derives
//! its iteration order from those keys. Inserting or moving elements only allocates
//! keys for the elements involved; nobody else is renumbered.
//!
//! # Core Types
//!
//! - [`Reorderable`] - The container contract, independent of the backing strategy
//! - [`MappingContainer`] - Reference implementation over a hash map
//! - [`ContainerError`] - Lookup and request errors
//!
//! # Concurrency
//!
//! Every mutation reads neighbouring keys and then writes new ones, so it must run as
//! one critical section. Mutations take `&mut self`; to share a container between
//! threads, wrap it in a single `Mutex`.

pub mod errors;
pub mod mapping;

pub use errors::ContainerError;
pub use mapping::MappingContainer;

use crate::Result;
use crate::key::OrderKey;

/// An ordered collection of distinct elements that can be rearranged without
/// renumbering.
///
/// Ordering is always derived from the current keys, never cached. Implementations
/// may back this with any structure; nothing here assumes a particular index.
///
/// # Examples
///
/// ```
/// use orderkey::container::{MappingContainer, Reorderable};
///
/// let mut list = MappingContainer::new();
/// list.put_to_end(["b", "c"], true).unwrap();
/// list.put_to_end(["a"], false).unwrap();
/// list.put_next_to(&"a", ["a2"], true).unwrap();
///
/// let order: Vec<_> = list.iter().copied().collect();
/// assert_eq!(order, vec!["a", "a2", "b", "c"]);
///
/// assert_eq!(list.pop(true).unwrap(), "c");
/// ```
pub trait Reorderable<V> {
    /// Number of members.
    fn len(&self) -> usize;

    /// Returns true if the container has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `element` is a member.
    fn contains(&self, element: &V) -> bool;

    /// Current key of `element`, if it is a member.
    fn key_of(&self, element: &V) -> Option<&OrderKey>;

    /// Members in no particular order.
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a V> + 'a
    where
        V: 'a;

    /// Members in ascending key order.
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a V> + 'a
    where
        V: 'a;

    /// Members in descending key order.
    fn iter_rev<'a>(&'a self) -> impl Iterator<Item = &'a V> + 'a
    where
        V: 'a,
    {
        self.iter().rev()
    }

    /// Puts `elements`, in order, after every other member (`last`) or before every
    /// other member (`!last`). Elements that are already members are moved.
    fn put_to_end(&mut self, elements: impl IntoIterator<Item = V>, last: bool) -> Result<()>;

    /// Puts `elements`, in order, right after (`after`) or right before `anchor`.
    /// Elements that are already members are moved.
    fn put_next_to(
        &mut self,
        anchor: &V,
        elements: impl IntoIterator<Item = V>,
        after: bool,
    ) -> Result<()>;

    /// Puts `elements`, in order, between the members `start` and `end`. Elements that
    /// are already members are moved.
    fn put_between(
        &mut self,
        start: &V,
        end: &V,
        elements: impl IntoIterator<Item = V>,
    ) -> Result<()>;

    /// Removes and returns the last (`last`) or first member.
    fn pop(&mut self, last: bool) -> Result<V>;

    /// Removes every element of `elements`. Fails without removing anything if one
    /// of them is not a member.
    fn remove(&mut self, elements: &[V]) -> Result<()>;

    /// Removes the members among `elements`, ignoring the others.
    fn discard(&mut self, elements: &[V]);

    /// Reassigns the shortest possible keys to every member, keeping their order.
    ///
    /// Many insertions into the same gap make keys grow; call this periodically to
    /// reclaim that length.
    fn recompute(&mut self) -> Result<()>;

    /// Projection from member to its current key, for external sorting utilities.
    ///
    /// Non-members project to `None`, which sorts before every key.
    fn sort_key(&self) -> impl Fn(&V) -> Option<OrderKey> + '_ {
        move |element: &V| self.key_of(element).cloned()
    }
}

//! Hash-map backed reorderable container.
//!
//! [`MappingContainer`] stores one [`OrderKey`] per element in a `HashMap` and sorts
//! on every ordered traversal, which costs `O(n log n)` per traversal. It is the
//! baseline implementation of [`Reorderable`]; embeddings that traverse far more
//! often than they mutate are better served by an ordered index keyed by
//! [`OrderKey`].

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use super::{ContainerError, Reorderable};
use crate::Result;
use crate::key::OrderKey;
use crate::keyspace::Keyspace;

/// Reorderable container of distinct, hashable elements.
///
/// # Examples
///
/// ```
/// use orderkey::container::{MappingContainer, Reorderable};
///
/// let mut tasks = MappingContainer::from_elements(["write", "review", "ship"]).unwrap();
/// tasks.put_next_to(&"write", ["test"], true).unwrap();
///
/// let order: Vec<_> = tasks.iter().copied().collect();
/// assert_eq!(order, vec!["write", "test", "review", "ship"]);
/// ```
#[derive(Debug, Clone)]
pub struct MappingContainer<V> {
    keys: HashMap<V, OrderKey>,
    keyspace: Keyspace,
}

impl<V> MappingContainer<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Creates an empty container over the default keyspace.
    pub fn new() -> Self {
        Self::with_keyspace(Keyspace::default())
    }

    /// Creates an empty container allocating keys from `keyspace`.
    pub fn with_keyspace(keyspace: Keyspace) -> Self {
        Self {
            keys: HashMap::new(),
            keyspace,
        }
    }

    /// Creates a container holding `elements` in the given order.
    pub fn from_elements(elements: impl IntoIterator<Item = V>) -> Result<Self> {
        let mut container = Self::new();
        container.put_to_end(elements, true)?;
        Ok(container)
    }

    /// The keyspace new keys are allocated from.
    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Members paired with their keys, in ascending key order.
    pub fn entries(&self) -> Vec<(&V, &OrderKey)> {
        let mut entries: Vec<_> = self.keys.iter().collect();
        entries.sort_unstable_by(|a, b| a.1.cmp(b.1));
        entries
    }

    fn not_found(element: &V) -> ContainerError {
        ContainerError::ElementNotFound {
            element: format!("{element:?}"),
        }
    }

    fn lookup(&self, element: &V) -> Result<&OrderKey> {
        Ok(self
            .keys
            .get(element)
            .ok_or_else(|| Self::not_found(element))?)
    }

    /// Collects a request's elements, rejecting repeats and any of the `references`.
    fn collect_request(
        elements: impl IntoIterator<Item = V>,
        references: &[&V],
    ) -> Result<Vec<V>> {
        let elements: Vec<V> = elements.into_iter().collect();
        {
            let mut seen = HashSet::with_capacity(elements.len());
            for element in &elements {
                if !seen.insert(element) || references.contains(&element) {
                    return Err(ContainerError::DuplicateElement {
                        element: format!("{element:?}"),
                    }
                    .into());
                }
            }
        }
        Ok(elements)
    }

    /// Keys of the members that are not part of `moving`.
    fn staying<'a>(&'a self, moving: &'a [V]) -> impl Iterator<Item = &'a OrderKey> + 'a {
        let moving: HashSet<&V> = moving.iter().collect();
        self.keys
            .iter()
            .filter(move |(element, _)| !moving.contains(element))
            .map(|(_, key)| key)
    }

    /// Allocates keys for `elements` strictly inside `(start, end)` and stores them.
    fn place(
        &mut self,
        elements: Vec<V>,
        start: Option<OrderKey>,
        end: Option<OrderKey>,
    ) -> Result<()> {
        let keys = self
            .keyspace
            .n_between(elements.len(), start.as_ref(), end.as_ref())?;
        tracing::trace!(
            count = elements.len(),
            start = ?start,
            end = ?end,
            "Placing elements"
        );
        self.keys.extend(elements.into_iter().zip(keys));
        Ok(())
    }
}

impl<V> Default for MappingContainer<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Reorderable<V> for MappingContainer<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn contains(&self, element: &V) -> bool {
        self.keys.contains_key(element)
    }

    fn key_of(&self, element: &V) -> Option<&OrderKey> {
        self.keys.get(element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a V> + 'a
    where
        V: 'a,
    {
        self.keys.keys()
    }

    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = &'a V> + 'a
    where
        V: 'a,
    {
        self.entries().into_iter().map(|(element, _)| element)
    }

    fn put_to_end(&mut self, elements: impl IntoIterator<Item = V>, last: bool) -> Result<()> {
        let elements = Self::collect_request(elements, &[])?;
        if elements.is_empty() {
            return Ok(());
        }

        let (start, end) = if last {
            (self.staying(&elements).max().cloned(), None)
        } else {
            (None, self.staying(&elements).min().cloned())
        };
        self.place(elements, start, end)
    }

    fn put_next_to(
        &mut self,
        anchor: &V,
        elements: impl IntoIterator<Item = V>,
        after: bool,
    ) -> Result<()> {
        let anchor_key = self.lookup(anchor)?.clone();
        let elements = Self::collect_request(elements, &[anchor])?;
        if elements.is_empty() {
            return Ok(());
        }

        if after {
            let next = self
                .staying(&elements)
                .filter(|key| **key > anchor_key)
                .min()
                .cloned();
            self.place(elements, Some(anchor_key), next)
        } else {
            let previous = self
                .staying(&elements)
                .filter(|key| **key < anchor_key)
                .max()
                .cloned();
            self.place(elements, previous, Some(anchor_key))
        }
    }

    fn put_between(
        &mut self,
        start: &V,
        end: &V,
        elements: impl IntoIterator<Item = V>,
    ) -> Result<()> {
        let start_key = self.lookup(start)?.clone();
        let end_key = self.lookup(end)?.clone();
        if start_key >= end_key {
            return Err(ContainerError::InvalidRange {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            }
            .into());
        }

        let elements = Self::collect_request(elements, &[start, end])?;
        if elements.is_empty() {
            return Ok(());
        }
        self.place(elements, Some(start_key), Some(end_key))
    }

    fn pop(&mut self, last: bool) -> Result<V> {
        let extreme = if last {
            self.keys.iter().max_by(|a, b| a.1.cmp(b.1))
        } else {
            self.keys.iter().min_by(|a, b| a.1.cmp(b.1))
        };
        let element = extreme
            .map(|(element, _)| element.clone())
            .ok_or(ContainerError::Empty)?;
        self.keys.remove(&element);
        Ok(element)
    }

    fn remove(&mut self, elements: &[V]) -> Result<()> {
        if let Some(missing) = elements
            .iter()
            .find(|element| !self.keys.contains_key(*element))
        {
            return Err(Self::not_found(missing).into());
        }
        self.discard(elements);
        Ok(())
    }

    fn discard(&mut self, elements: &[V]) {
        for element in elements {
            self.keys.remove(element);
        }
    }

    fn recompute(&mut self) -> Result<()> {
        let keys = self.keyspace.initial(self.keys.len())?;
        let order: Vec<V> = self.iter().cloned().collect();
        tracing::debug!(count = order.len(), "Recomputing order keys");
        self.keys = order.into_iter().zip(keys).collect();
        Ok(())
    }
}

//! Persistent ordered collections with structural sharing.
//!
//! Thin wrappers around the `im` crate's persistent data structures. Documents
//! keep their keys in insertion order because field order is observable in the
//! store's native representation.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::Arc;

/// Persistent vector with structural sharing.
///
/// Cloning is O(1). Modifications return a new array sharing structure
/// with the original.
#[derive(Clone)]
pub struct Array<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> Array<T> {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a new array with the element appended.
    #[must_use]
    pub fn push_back(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.push_back(value);
        Self(new)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }

    /// Maps every element through a fallible function, stopping at the
    /// first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Array<U>, E>
    where
        U: Clone,
        F: FnMut(&T) -> Result<U, E>,
    {
        self.iter().map(&mut f).collect()
    }
}

impl<T: Clone> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for Array<T> {}

impl<T: Clone + Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Persistent string-keyed map that remembers insertion order.
///
/// Keys are unique. Re-inserting an existing key replaces its value but keeps
/// the key at its original position. Equality and hashing are
/// order-sensitive: `{b: 1, a: 2}` and `{a: 2, b: 1}` are different documents.
#[derive(Clone)]
pub struct Document<V>
where
    V: Clone,
{
    /// Entries in insertion order.
    entries: im::Vector<(Arc<str>, V)>,
    /// Position of each key in `entries`.
    positions: im::HashMap<Arc<str>, usize>,
}

impl<V: Clone> Document<V> {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: im::Vector::new(),
            positions: im::HashMap::new(),
        }
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets a field value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = *self.positions.get(key)?;
        self.entries.get(index).map(|(_, v)| v)
    }

    /// Returns true if the document contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns a new document with the field set.
    ///
    /// A new key is appended; an existing key keeps its position.
    #[must_use]
    pub fn insert(&self, key: impl Into<Arc<str>>, value: V) -> Self {
        let mut new = self.clone();
        new.insert_mut(key.into(), value);
        new
    }

    /// Returns a new document without the given key.
    #[must_use]
    pub fn remove(&self, key: &str) -> Self {
        let Some(&index) = self.positions.get(key) else {
            return self.clone();
        };
        let mut entries = self.entries.clone();
        entries.remove(index);
        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (Arc::clone(k), i))
            .collect();
        Self { entries, positions }
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (&**k, v))
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| &**k)
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Maps every value through a fallible function, keeping key order and
    /// stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map_values<U, E, F>(&self, mut f: F) -> Result<Document<U>, E>
    where
        U: Clone,
        F: FnMut(&V) -> Result<U, E>,
    {
        let mut out = Document::new();
        for (k, v) in &self.entries {
            out.insert_mut(Arc::clone(k), f(v)?);
        }
        Ok(out)
    }

    fn insert_mut(&mut self, key: Arc<str>, value: V) {
        if let Some(&index) = self.positions.get(&key) {
            self.entries.set(index, (key, value));
        } else {
            self.positions.insert(Arc::clone(&key), self.entries.len());
            self.entries.push_back((key, value));
        }
    }
}

impl<V: Clone> Default for Document<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + fmt::Debug> fmt::Debug for Document<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Clone + PartialEq> PartialEq for Document<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Clone + Eq> Eq for Document<V> {}

impl<V: Clone + Hash> Hash for Document<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: Into<Arc<str>>, V: Clone> FromIterator<(K, V)> for Document<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Self::new();
        for (k, v) in iter {
            doc.insert_mut(k.into(), v);
        }
        doc
    }
}

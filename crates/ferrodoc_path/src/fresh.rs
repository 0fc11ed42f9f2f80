//! Fresh names and indices that avoid an exclusion set.
//!
//! Candidates are `{prefix}0`, `{prefix}1`, ... for names and `0`, `1`, ...
//! for indices. Generation walks a counter and skips excluded candidates, so
//! results are deterministic for a given exclusion set and never repeat
//! within one call. There is no shared state between calls.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use ferrodoc_path::fresh::{fresh_names, FreshNames};
//!
//! let taken: HashSet<String> = ["__tmp0".to_string()].into_iter().collect();
//! assert_eq!(fresh_names(2, &taken), vec!["__tmp1", "__tmp2"]);
//!
//! let custom = FreshNames::with_prefix("_t").starting_at(5);
//! assert_eq!(custom.fresh_names(1, &taken), vec!["_t5"]);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Reserved prefix for synthetic field names.
pub const DEFAULT_PREFIX: &str = "__tmp";

/// Generator configuration for fresh names and indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreshNames {
    /// Prefix of every generated name.
    prefix: String,
    /// First counter value tried.
    start: u64,
}

impl FreshNames {
    /// Creates a generator with the default prefix, counting from zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Creates a generator with a custom prefix, counting from zero.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            start: 0,
        }
    }

    /// Sets the first counter value tried.
    #[must_use]
    pub fn starting_at(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    /// Returns the name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the candidate name for counter value `n`.
    #[must_use]
    pub fn candidate(&self, n: u64) -> String {
        format!("{}{n}", self.prefix)
    }

    /// Lazily yields every candidate name not in `excluded`, in counter order.
    pub fn names<'a, S, H>(&'a self, excluded: &'a HashSet<S, H>) -> FreshNameIter<'a, S, H>
    where
        S: Borrow<str> + Hash + Eq,
        H: BuildHasher,
    {
        FreshNameIter {
            names: self,
            excluded,
            next: Some(self.start),
            skipped: 0,
        }
    }

    /// Lazily yields every index not in `excluded`, in increasing order.
    pub fn indices<'a, H>(&self, excluded: &'a HashSet<u64, H>) -> impl Iterator<Item = u64> + 'a
    where
        H: BuildHasher,
    {
        (self.start..=u64::MAX).filter(move |i| !excluded.contains(i))
    }

    /// Returns the first `count` names not in `excluded`.
    #[must_use]
    pub fn fresh_names<S, H>(&self, count: usize, excluded: &HashSet<S, H>) -> Vec<String>
    where
        S: Borrow<str> + Hash + Eq,
        H: BuildHasher,
    {
        let mut iter = self.names(excluded);
        let names: Vec<String> = iter.by_ref().take(count).collect();
        tracing::trace!(
            prefix = %self.prefix,
            count,
            skipped = iter.skipped(),
            "generated fresh names"
        );
        names
    }

    /// Returns the lowest index not in `excluded`, or `None` if every index
    /// from the starting counter up is excluded.
    #[must_use]
    pub fn fresh_index<H: BuildHasher>(&self, excluded: &HashSet<u64, H>) -> Option<u64> {
        self.indices(excluded).next()
    }
}

impl Default for FreshNames {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over fresh names, see [`FreshNames::names`].
#[derive(Debug)]
pub struct FreshNameIter<'a, S, H> {
    names: &'a FreshNames,
    excluded: &'a HashSet<S, H>,
    /// `None` once the counter is exhausted.
    next: Option<u64>,
    skipped: usize,
}

impl<S, H> FreshNameIter<'_, S, H> {
    /// Returns how many excluded candidates were passed over so far.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<S, H> Iterator for FreshNameIter<'_, S, H>
where
    S: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let n = self.next?;
            self.next = n.checked_add(1);
            let name = self.names.candidate(n);
            if !self.excluded.contains(name.as_str()) {
                return Some(name);
            }
            self.skipped += 1;
        }
    }
}

/// Returns `count` distinct names with the reserved prefix, none of which is
/// in `excluded`.
#[must_use]
pub fn fresh_names<S, H>(count: usize, excluded: &HashSet<S, H>) -> Vec<String>
where
    S: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    FreshNames::new().fresh_names(count, excluded)
}

/// Returns the lowest index not in `excluded`.
#[must_use]
pub fn fresh_index<H: BuildHasher>(excluded: &HashSet<u64, H>) -> u64 {
    // A finite set cannot cover every index from zero up.
    FreshNames::new().fresh_index(excluded).unwrap_or_default()
}

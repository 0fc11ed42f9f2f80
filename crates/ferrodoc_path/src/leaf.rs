//! Atomic path segments.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single path segment: a field name or an array index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Leaf {
    /// Named document field.
    Name(Arc<str>),
    /// Zero-based array position.
    Index(u64),
}

impl Leaf {
    /// Creates a named-field leaf.
    #[must_use]
    pub fn name(name: impl Into<Arc<str>>) -> Self {
        Self::Name(name.into())
    }

    /// Creates an array-index leaf.
    #[must_use]
    pub const fn index(index: u64) -> Self {
        Self::Index(index)
    }

    /// Returns the field name, if this is a name.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(n) => Some(n),
            Self::Index(_) => None,
        }
    }

    /// Returns the index, if this is an index.
    #[must_use]
    pub const fn as_index(&self) -> Option<u64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }
}

/// Names order among names and indices among indices; a name and an index
/// are unordered.
impl PartialOrd for Leaf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Name(a), Self::Name(b)) => Some(a.cmp(b)),
            (Self::Index(a), Self::Index(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(n) => f.write_str(n),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Leaf {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<String> for Leaf {
    fn from(name: String) -> Self {
        Self::Name(name.into())
    }
}

impl From<u64> for Leaf {
    fn from(index: u64) -> Self {
        Self::Index(index)
    }
}

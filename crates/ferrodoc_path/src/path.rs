//! Field paths: non-empty sequences of leaves addressing nested fields.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::accessor::AccessorChain;
use crate::error::InvalidPathError;
use crate::leaf::Leaf;

/// A path to a nested field, such as `a.b.0`.
///
/// A path always has at least one leaf. Equality, hashing and ordering are
/// defined on the flattened leaf sequence, and a one-leaf path is
/// interchangeable with the bare [`Leaf`]: it compares equal to it and hashes
/// exactly as it does.
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Leaf>", into = "Vec<Leaf>")
)]
pub struct FieldPath {
    /// Never empty.
    leaves: Vec<Leaf>,
}

impl FieldPath {
    /// Creates a one-leaf path to a named field.
    #[must_use]
    pub fn name(name: &str) -> Self {
        Self::from(Leaf::name(name))
    }

    /// Creates a one-leaf path to an array index.
    #[must_use]
    pub fn index(index: u64) -> Self {
        Self::from(Leaf::Index(index))
    }

    /// Creates a path from a leaf sequence. Returns `None` if it is empty.
    #[must_use]
    pub fn from_leaves(leaves: impl IntoIterator<Item = Leaf>) -> Option<Self> {
        let leaves: Vec<Leaf> = leaves.into_iter().collect();
        if leaves.is_empty() {
            None
        } else {
            Some(Self { leaves })
        }
    }

    /// Parses the dotted notation, e.g. `"a.b.0"`.
    ///
    /// Segments made only of ASCII digits become indices; everything else is a
    /// field name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPathError`] for an empty string or an empty segment.
    pub fn parse_dotted(input: &str) -> Result<Self, InvalidPathError> {
        if input.is_empty() {
            return Err(InvalidPathError::Empty);
        }
        let leaves = input
            .split('.')
            .enumerate()
            .map(|(position, segment)| {
                if segment.is_empty() {
                    return Err(InvalidPathError::EmptySegment {
                        input: input.to_string(),
                        position,
                    });
                }
                let is_index = segment.bytes().all(|b| b.is_ascii_digit());
                Ok(match segment.parse::<u64>() {
                    Ok(i) if is_index => Leaf::Index(i),
                    _ => Leaf::name(segment),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { leaves })
    }

    /// Returns the leaves in order. This is the canonical decomposition that
    /// equality, hashing and ordering are defined on.
    #[must_use]
    pub fn flatten(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Returns the number of leaves (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Always false; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first leaf.
    #[must_use]
    pub fn first(&self) -> &Leaf {
        &self.leaves[0]
    }

    /// Returns the last leaf.
    #[must_use]
    pub fn last(&self) -> &Leaf {
        &self.leaves[self.leaves.len() - 1]
    }

    /// Returns true if the path has exactly one leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.leaves.len() == 1
    }

    /// Returns the only leaf of a one-leaf path.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self.leaves.as_slice() {
            [leaf] => Some(leaf),
            _ => None,
        }
    }

    /// Concatenates two paths.
    #[must_use]
    pub fn concat(&self, other: &FieldPath) -> FieldPath {
        let mut leaves = Vec::with_capacity(self.len() + other.len());
        leaves.extend_from_slice(&self.leaves);
        leaves.extend_from_slice(&other.leaves);
        Self { leaves }
    }

    /// Appends every path in `tail` after this one. An empty tail returns
    /// this path unchanged.
    #[must_use]
    pub fn append(&self, tail: &[FieldPath]) -> FieldPath {
        let mut leaves = self.leaves.clone();
        for path in tail {
            leaves.extend_from_slice(&path.leaves);
        }
        Self { leaves }
    }

    /// Returns a path extended by one leaf.
    #[must_use]
    pub fn child(&self, leaf: impl Into<Leaf>) -> FieldPath {
        let mut leaves = self.leaves.clone();
        leaves.push(leaf.into());
        Self { leaves }
    }

    /// Drops the last leaf. Returns `None` for a one-leaf path.
    #[must_use]
    pub fn parent(&self) -> Option<FieldPath> {
        match self.leaves.split_last() {
            Some((_, init)) if !init.is_empty() => Some(Self {
                leaves: init.to_vec(),
            }),
            _ => None,
        }
    }

    /// Returns true if `prefix`'s leaves are a prefix of this path's leaves.
    /// Every path starts with itself.
    #[must_use]
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.leaves.starts_with(&prefix.leaves)
    }

    /// Builds the chain of field and index accesses that reaches this path
    /// from a base expression.
    #[must_use]
    pub fn to_accessor_chain(&self) -> AccessorChain {
        AccessorChain::new(self.leaves.clone())
    }

    /// Renders the aggregation field reference form, e.g. `$a.b.0`.
    #[must_use]
    pub fn to_field_ref(&self) -> String {
        format!("${self}")
    }
}

impl PartialEq for FieldPath {
    fn eq(&self, other: &Self) -> bool {
        self.flatten() == other.flatten()
    }
}

impl Eq for FieldPath {}

impl PartialEq<Leaf> for FieldPath {
    fn eq(&self, other: &Leaf) -> bool {
        self.as_leaf() == Some(other)
    }
}

impl PartialEq<FieldPath> for Leaf {
    fn eq(&self, other: &FieldPath) -> bool {
        other == self
    }
}

// A one-leaf path must hash exactly as its leaf does.
impl Hash for FieldPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.as_leaf() {
            Some(leaf) => leaf.hash(state),
            None => self.flatten().hash(state),
        }
    }
}

/// Lexicographic over leaves. Comparing a name with an index at the first
/// differing position yields `None`.
impl PartialOrd for FieldPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.leaves.iter().zip(&other.leaves) {
            match a.partial_cmp(b)? {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
        }
        Some(self.len().cmp(&other.len()))
    }
}

impl fmt::Debug for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldPath({self})")
    }
}

/// Dotted notation, e.g. `a.b.0`.
impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leaf) in self.leaves.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{leaf}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_dotted(s)
    }
}

impl From<Leaf> for FieldPath {
    fn from(leaf: Leaf) -> Self {
        Self { leaves: vec![leaf] }
    }
}

impl TryFrom<Vec<Leaf>> for FieldPath {
    type Error = InvalidPathError;

    fn try_from(leaves: Vec<Leaf>) -> Result<Self, Self::Error> {
        if leaves.is_empty() {
            Err(InvalidPathError::Empty)
        } else {
            Ok(Self { leaves })
        }
    }
}

impl From<FieldPath> for Vec<Leaf> {
    fn from(path: FieldPath) -> Self {
        path.leaves
    }
}

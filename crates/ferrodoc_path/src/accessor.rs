//! Accessor chains: a path turned into a sequence of field/index accesses
//! over some base expression.
//!
//! The expression type belongs to whoever renders expressions; it only needs
//! to know how to wrap itself in one access.

use crate::leaf::Leaf;

/// An expression that can be extended by a single field or index access.
pub trait Accessor: Sized {
    /// Accesses a string-keyed property of `self`.
    #[must_use]
    fn access_name(self, name: &str) -> Self;

    /// Accesses an integer-keyed element of `self`.
    #[must_use]
    fn access_index(self, index: u64) -> Self;
}

/// One access per leaf, applied left to right to a base expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessorChain {
    steps: Vec<Leaf>,
}

impl AccessorChain {
    pub(crate) fn new(steps: Vec<Leaf>) -> Self {
        Self { steps }
    }

    /// Returns the number of accesses in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the chain performs no access.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Chains `next` after this chain.
    #[must_use]
    pub fn then(&self, next: &AccessorChain) -> AccessorChain {
        let mut steps = self.steps.clone();
        steps.extend_from_slice(&next.steps);
        Self { steps }
    }

    /// Applies every access to `base`, outermost last.
    pub fn apply<E: Accessor>(&self, base: E) -> E {
        self.steps.iter().fold(base, |expr, step| match step {
            Leaf::Name(name) => expr.access_name(name),
            Leaf::Index(index) => expr.access_index(*index),
        })
    }
}

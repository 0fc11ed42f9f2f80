//! Field-path algebra for addressing nested document fields.
//!
//! This crate provides:
//! - [`Leaf`] - A field name or array index
//! - [`FieldPath`] - A non-empty leaf sequence with concatenation, prefix
//!   tests, and an equality law that treats a one-leaf path as its leaf
//! - [`AccessorChain`] - A path as field/index accesses over an external
//!   expression type implementing [`Accessor`]
//! - [`fresh_names`] / [`fresh_index`] - Synthetic names and indices that
//!   avoid an exclusion set
//!
//! It knows nothing about values or documents; it only builds, compares and
//! renders paths.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accessor;
pub mod error;
pub mod fresh;
pub mod leaf;
pub mod path;

pub use accessor::{Accessor, AccessorChain};
pub use error::InvalidPathError;
pub use fresh::{FreshNames, fresh_index, fresh_names};
pub use leaf::Leaf;
pub use path::FieldPath;

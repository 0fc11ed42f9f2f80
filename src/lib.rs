//! Ferrodoc - typed document-store values and field paths
//!
//! This crate re-exports both layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: ferrodoc_path   - FieldPath algebra, fresh names, accessor chains
//! Layer 0: ferrodoc_value  - Value, BinId codec, generic and native bridges
//! ```
//!
//! The two crates do not depend on each other.

pub use ferrodoc_path as path;
pub use ferrodoc_value as value;

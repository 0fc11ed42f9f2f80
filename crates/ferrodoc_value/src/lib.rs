//! Typed document-store values and their conversions.
//!
//! This crate provides:
//! - [`Value`] - Every value that can appear in a document store
//! - [`BinId`] - The 12-byte canonical identifier and its hex codec
//! - [`Generic`] - The database-agnostic model, with [`from_generic`] / [`to_generic`]
//! - [`from_native`] / [`Value::to_native`] - Bridges to the driver's `bson` objects
//! - Persistent ordered collections ([`Document`], [`Array`])
//! - [`Error`] - The two conversion failure kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bin_id;
mod bridge;
pub mod collections;
pub mod error;
pub mod generic;
mod native;
pub mod value;

pub use bin_id::BinId;
pub use bridge::{from_generic, to_generic};
pub use collections::{Array, Document};
pub use error::{ConversionError, Error, InvalidBinIdError, Result};
pub use generic::Generic;
pub use native::from_native;
pub use value::{LogicalTimestamp, Value};

//! Error types for value conversion.
//!
//! The two failure kinds are disjoint: identifier parsing fails with
//! [`InvalidBinIdError`], conversion into the generic model fails with
//! [`ConversionError`]. [`Error`] unifies them for callers that handle both.

use thiserror::Error;

use crate::value::Value;

/// A string that is not the canonical 24-hex-digit form of a [`BinId`].
///
/// [`BinId`]: crate::BinId
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid binary identifier: {input:?} (expected 24 hexadecimal digits)")]
pub struct InvalidBinIdError {
    /// The offending input.
    pub input: String,
}

impl InvalidBinIdError {
    /// Creates an error for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A value with no representation in the generic data model.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} value has no generic representation: {value}", .value.type_name())]
pub struct ConversionError {
    /// The value that could not be translated.
    pub value: Value,
}

impl ConversionError {
    /// Creates an error for the given value.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Identifier parsing failed.
    #[error(transparent)]
    InvalidBinId(#[from] InvalidBinIdError),

    /// Conversion to the generic model failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Result type using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

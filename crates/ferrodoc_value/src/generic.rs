//! The database-agnostic data model used by the rest of the hosting system.
//!
//! Only the shape lives here; evaluation semantics belong elsewhere. Any new
//! variant must also be handled by [`from_generic`](crate::from_generic) and
//! [`to_generic`](crate::to_generic).

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::collections::{Array, Document};

/// A generic, store-independent value.
#[derive(Clone, Debug)]
pub enum Generic {
    /// Absence of a value.
    Null,
    /// Text.
    Str(Arc<str>),
    /// Boolean.
    Bool(bool),
    /// Floating point number.
    Dec(f64),
    /// Integer.
    Int(i64),
    /// Ordered object.
    Obj(Document<Generic>),
    /// Ordered array.
    Arr(Array<Generic>),
    /// Set. Stored in a stable element order.
    Set(Array<Generic>),
    /// Absolute instant.
    Timestamp(DateTime<Utc>),
    /// Calendar date without a time.
    Date(NaiveDate),
    /// Time of day without a date.
    Time(NaiveTime),
    /// Signed duration.
    Interval(TimeDelta),
    /// Binary data.
    Binary(Arc<[u8]>),
    /// Identifier in its textual form.
    Id(Arc<str>),
}

impl Generic {
    /// Convenience constructor for [`Generic::Str`].
    #[must_use]
    pub fn str(s: impl Into<Arc<str>>) -> Self {
        Self::Str(s.into())
    }

    /// Convenience constructor for [`Generic::Id`].
    #[must_use]
    pub fn id(s: impl Into<Arc<str>>) -> Self {
        Self::Id(s.into())
    }
}

// Floats compare by bits, as for `Value`.
impl PartialEq for Generic {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Str(a), Self::Str(b)) | (Self::Id(a), Self::Id(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Dec(a), Self::Dec(b)) => a.to_bits() == b.to_bits(),
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Obj(a), Self::Obj(b)) => a == b,
            (Self::Arr(a), Self::Arr(b)) | (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Interval(a), Self::Interval(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Generic {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Generic {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Generic {
    fn from(n: f64) -> Self {
        Self::Dec(n)
    }
}

impl From<&str> for Generic {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<DateTime<Utc>> for Generic {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Timestamp(t)
    }
}

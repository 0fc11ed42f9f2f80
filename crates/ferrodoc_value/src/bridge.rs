//! Conversion between [`Generic`] and [`Value`].
//!
//! The two directions are partial in different ways. Going into the store can
//! only fail on a malformed identifier; coming out of it fails for the
//! variants that have no generic counterpart. Both short-circuit: the first
//! failing field or element fails the whole conversion.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};

use crate::bin_id::BinId;
use crate::error::{ConversionError, InvalidBinIdError};
use crate::generic::Generic;
use crate::value::Value;

/// Converts a generic value into a store value.
///
/// Integers become [`Value::Int64`], sets become arrays, dates become the
/// instant at the start of that day (UTC), times of day become
/// `HH:MM:SS.mmm` text and intervals become their length in milliseconds.
///
/// # Errors
///
/// Returns [`InvalidBinIdError`] if any identifier, at any depth, is not a
/// canonical 24-hex-digit string.
pub fn from_generic(generic: &Generic) -> Result<Value, InvalidBinIdError> {
    let value = match generic {
        Generic::Null => Value::Null,
        Generic::Str(s) => Value::Text(Arc::clone(s)),
        Generic::Bool(b) => Value::Bool(*b),
        Generic::Dec(n) => Value::Dec(*n),
        Generic::Int(n) => Value::Int64(*n),
        Generic::Obj(fields) => Value::Doc(fields.try_map_values(from_generic)?),
        Generic::Arr(items) | Generic::Set(items) => Value::Arr(items.try_map(from_generic)?),
        Generic::Timestamp(t) => Value::DateTime(bson::DateTime::from_millis(t.timestamp_millis())),
        Generic::Date(d) => return from_generic(&Generic::Timestamp(start_of_day(*d))),
        Generic::Time(t) => Value::Text(format_time_of_day(*t).into()),
        Generic::Interval(d) => Value::Dec(interval_millis(*d)),
        Generic::Binary(b) => Value::Binary(Arc::clone(b)),
        Generic::Id(s) => Value::BinId(BinId::parse(s)?),
    };
    Ok(value)
}

/// Converts a store value into a generic value.
///
/// # Errors
///
/// Returns [`ConversionError`] carrying the offending value for min/max keys,
/// regular expressions, logical timestamps, scripts, and symbols, and for a
/// date-time outside the generic timestamp range. A failure anywhere inside a
/// document or array fails the whole conversion.
pub fn to_generic(value: &Value) -> Result<Generic, ConversionError> {
    match value {
        Value::Null => Ok(Generic::Null),
        Value::Text(s) => Ok(Generic::Str(Arc::clone(s))),
        Value::Bool(b) => Ok(Generic::Bool(*b)),
        Value::Dec(n) => Ok(Generic::Dec(*n)),
        Value::Int32(n) => Ok(Generic::Int(i64::from(*n))),
        Value::Int64(n) => Ok(Generic::Int(*n)),
        Value::Doc(fields) => fields.try_map_values(to_generic).map(Generic::Obj),
        Value::Arr(items) => items.try_map(to_generic).map(Generic::Arr),
        Value::DateTime(t) => DateTime::<Utc>::from_timestamp_millis(t.timestamp_millis())
            .map(Generic::Timestamp)
            .ok_or_else(|| unsupported(value)),
        Value::Binary(b) => Ok(Generic::Binary(Arc::clone(b))),
        Value::BinId(id) => Ok(Generic::Id(id.to_hex().into())),
        Value::MinKey
        | Value::MaxKey
        | Value::Regex { .. }
        | Value::LogicalTimestamp(_)
        | Value::Script(_)
        | Value::ScriptScope { .. }
        | Value::Symbol(_) => Err(unsupported(value)),
    }
}

fn unsupported(value: &Value) -> ConversionError {
    tracing::debug!(variant = value.type_name(), "value has no generic representation");
    ConversionError::new(value.clone())
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::default()).and_utc()
}

/// Renders `HH:MM:SS.mmm`, truncating below the millisecond.
fn format_time_of_day(time: NaiveTime) -> String {
    // A leap second is represented with nanoseconds >= 1e9.
    let millis = (time.nanosecond() / 1_000_000).min(999);
    format!(
        "{:02}:{:02}:{:02}.{millis:03}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

#[allow(clippy::cast_precision_loss)]
fn interval_millis(interval: TimeDelta) -> f64 {
    interval.num_seconds() as f64 * 1000.0 + f64::from(interval.subsec_nanos()) / 1_000_000.0
}

impl TryFrom<&Generic> for Value {
    type Error = InvalidBinIdError;

    fn try_from(generic: &Generic) -> Result<Self, Self::Error> {
        from_generic(generic)
    }
}

impl TryFrom<&Value> for Generic {
    type Error = ConversionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        to_generic(value)
    }
}

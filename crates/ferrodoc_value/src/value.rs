//! Core value type for everything a document store can hold.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bin_id::BinId;
use crate::collections::{Array, Document};

/// A document-store value.
///
/// Values are immutable and cheaply cloneable: strings and byte buffers are
/// reference counted, documents and arrays use persistent collections.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit floating point number.
    Dec(f64),
    /// UTF-8 text.
    Text(Arc<str>),
    /// Raw binary data.
    Binary(Arc<[u8]>),
    /// Ordered, unique-key document.
    Doc(Document<Value>),
    /// Ordered list.
    Arr(Array<Value>),
    /// 12-byte canonical identifier.
    BinId(BinId),
    /// Boolean.
    Bool(bool),
    /// Absolute instant with millisecond precision.
    DateTime(bson::DateTime),
    /// The null value.
    Null,
    /// Regular expression.
    Regex {
        /// Pattern source.
        pattern: Arc<str>,
        /// Option flags, e.g. `"im"`. Empty when none are set.
        options: Arc<str>,
    },
    /// Embedded script source with no captured scope.
    Script(Arc<str>),
    /// Embedded script source with captured variable bindings.
    ScriptScope {
        /// Script source.
        code: Arc<str>,
        /// Captured bindings.
        scope: Document<Value>,
    },
    /// Interned symbol; never equal to a `Text` with the same contents.
    Symbol(Arc<str>),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// Store-internal logical clock value.
    LogicalTimestamp(LogicalTimestamp),
    /// Sentinel that sorts below every other value.
    MinKey,
    /// Sentinel that sorts above every other value.
    MaxKey,
}

/// Store-internal logical clock: an instant truncated to seconds plus a
/// monotonic ordinal within that second.
///
/// Distinct from [`Value::DateTime`], which is a calendar instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogicalTimestamp {
    /// Seconds since the Unix epoch.
    pub seconds: u32,
    /// Ordinal within `seconds`.
    pub ordinal: u32,
}

impl LogicalTimestamp {
    /// Creates a logical timestamp.
    #[must_use]
    pub const fn new(seconds: u32, ordinal: u32) -> Self {
        Self { seconds, ordinal }
    }
}

impl Value {
    /// Builds a regular expression with no option flags.
    #[must_use]
    pub fn regex(pattern: impl Into<Arc<str>>) -> Self {
        Self::Regex {
            pattern: pattern.into(),
            options: Arc::from(""),
        }
    }

    /// Returns a human-readable name for this value's variant.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Dec(_) => "decimal",
            Self::Text(_) => "text",
            Self::Binary(_) => "binary",
            Self::Doc(_) => "document",
            Self::Arr(_) => "array",
            Self::BinId(_) => "binary id",
            Self::Bool(_) => "boolean",
            Self::DateTime(_) => "date time",
            Self::Null => "null",
            Self::Regex { .. } => "regex",
            Self::Script(_) => "script",
            Self::ScriptScope { .. } => "script with scope",
            Self::Symbol(_) => "symbol",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::LogicalTimestamp(_) => "logical timestamp",
            Self::MinKey => "min key",
            Self::MaxKey => "max key",
        }
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer of either width.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int32(n) => Some(i64::from(*n)),
            Self::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Dec(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract text. Symbols are not text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a document reference.
    #[must_use]
    pub const fn as_document(&self) -> Option<&Document<Value>> {
        match self {
            Self::Doc(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to extract an array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array<Value>> {
        match self {
            Self::Arr(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract a binary identifier.
    #[must_use]
    pub const fn as_bin_id(&self) -> Option<BinId> {
        match self {
            Self::BinId(id) => Some(*id),
            _ => None,
        }
    }
}

// Manual PartialEq so that floats compare by bits, keeping Eq and Hash consistent.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Dec(a), Self::Dec(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b))
            | (Self::Script(a), Self::Script(b))
            | (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a == b,
            (Self::Doc(a), Self::Doc(b)) => a == b,
            (Self::Arr(a), Self::Arr(b)) => a == b,
            (Self::BinId(a), Self::BinId(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (
                Self::Regex {
                    pattern: p1,
                    options: o1,
                },
                Self::Regex {
                    pattern: p2,
                    options: o2,
                },
            ) => p1 == p2 && o1 == o2,
            (
                Self::ScriptScope {
                    code: c1,
                    scope: s1,
                },
                Self::ScriptScope {
                    code: c2,
                    scope: s2,
                },
            ) => c1 == c2 && s1 == s2,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::LogicalTimestamp(a), Self::LogicalTimestamp(b)) => a == b,
            (Self::Null, Self::Null) | (Self::MinKey, Self::MinKey) | (Self::MaxKey, Self::MaxKey) => {
                true
            }
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Dec(n) => n.to_bits().hash(state),
            Self::Text(s) | Self::Script(s) | Self::Symbol(s) => s.hash(state),
            Self::Binary(b) => b.hash(state),
            Self::Doc(d) => d.hash(state),
            Self::Arr(a) => a.hash(state),
            Self::BinId(id) => id.hash(state),
            Self::Bool(b) => b.hash(state),
            Self::DateTime(t) => t.timestamp_millis().hash(state),
            Self::Regex { pattern, options } => {
                pattern.hash(state);
                options.hash(state);
            }
            Self::ScriptScope { code, scope } => {
                code.hash(state);
                scope.hash(state);
            }
            Self::Int32(n) => n.hash(state),
            Self::Int64(n) => n.hash(state),
            Self::LogicalTimestamp(ts) => ts.hash(state),
            Self::Null | Self::MinKey | Self::MaxKey => {}
        }
    }
}

fn write_document(f: &mut fmt::Formatter<'_>, doc: &Document<Value>) -> fmt::Result {
    if doc.is_empty() {
        return write!(f, "{{}}");
    }
    write!(f, "{{ ")?;
    for (i, (k, v)) in doc.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{k:?}: {v}")?;
    }
    write!(f, " }}")
}

/// Shell-style rendering, used in diagnostics.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dec(n) => write!(f, "{n:?}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Binary(b) => write!(f, "Binary({:?})", hex::encode(b)),
            Self::Doc(d) => write_document(f, d),
            Self::Arr(a) => {
                write!(f, "[")?;
                for (i, item) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::BinId(id) => write!(f, "ObjectId(\"{id}\")"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::DateTime(t) => write!(f, "Date({})", t.timestamp_millis()),
            Self::Null => write!(f, "null"),
            Self::Regex { pattern, options } => write!(f, "/{pattern}/{options}"),
            Self::Script(code) => write!(f, "Code({code:?})"),
            Self::ScriptScope { code, scope } => {
                write!(f, "Code({code:?}, ")?;
                write_document(f, scope)?;
                write!(f, ")")
            }
            Self::Symbol(s) => write!(f, "Symbol({s:?})"),
            Self::Int32(n) => write!(f, "{n}"),
            Self::Int64(n) => write!(f, "NumberLong({n})"),
            Self::LogicalTimestamp(ts) => write!(f, "Timestamp({}, {})", ts.seconds, ts.ordinal),
            Self::MinKey => write!(f, "MinKey"),
            Self::MaxKey => write!(f, "MaxKey"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int64(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Dec(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::Text(s)
    }
}

/// Raw byte arrays import as [`Value::Binary`].
impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Binary(bytes.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes.into())
    }
}

impl From<BinId> for Value {
    fn from(id: BinId) -> Self {
        Self::BinId(id)
    }
}

impl From<bson::DateTime> for Value {
    fn from(t: bson::DateTime) -> Self {
        Self::DateTime(t)
    }
}

impl From<LogicalTimestamp> for Value {
    fn from(ts: LogicalTimestamp) -> Self {
        Self::LogicalTimestamp(ts)
    }
}

impl From<Document<Value>> for Value {
    fn from(doc: Document<Value>) -> Self {
        Self::Doc(doc)
    }
}

impl From<Array<Value>> for Value {
    fn from(arr: Array<Value>) -> Self {
        Self::Arr(arr)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Arr(items.into_iter().collect())
    }
}

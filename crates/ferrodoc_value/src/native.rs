//! Rendering to and importing from the driver's native object graph.

use bson::spec::BinarySubtype;
use bson::{Bson, JavaScriptCodeWithScope};

use crate::collections::Document;
use crate::value::{LogicalTimestamp, Value};

impl Value {
    /// Renders this value as the driver's native object.
    ///
    /// Documents keep their field order. Binary data uses the generic
    /// subtype.
    #[must_use]
    pub fn to_native(&self) -> Bson {
        match self {
            Self::Dec(n) => Bson::Double(*n),
            Self::Text(s) => Bson::String(s.to_string()),
            Self::Binary(bytes) => Bson::Binary(bson::Binary {
                subtype: BinarySubtype::Generic,
                bytes: bytes.to_vec(),
            }),
            Self::Doc(doc) => Bson::Document(document_to_native(doc)),
            Self::Arr(items) => Bson::Array(items.iter().map(Value::to_native).collect()),
            Self::BinId(id) => Bson::ObjectId((*id).into()),
            Self::Bool(b) => Bson::Boolean(*b),
            Self::DateTime(t) => Bson::DateTime(*t),
            Self::Null => Bson::Null,
            Self::Regex { pattern, options } => Bson::RegularExpression(bson::Regex {
                pattern: pattern.to_string(),
                options: options.to_string(),
            }),
            Self::Script(code) => Bson::JavaScriptCode(code.to_string()),
            Self::ScriptScope { code, scope } => {
                Bson::JavaScriptCodeWithScope(JavaScriptCodeWithScope {
                    code: code.to_string(),
                    scope: document_to_native(scope),
                })
            }
            Self::Symbol(s) => Bson::Symbol(s.to_string()),
            Self::Int32(n) => Bson::Int32(*n),
            Self::Int64(n) => Bson::Int64(*n),
            Self::LogicalTimestamp(ts) => Bson::Timestamp(bson::Timestamp {
                time: ts.seconds,
                increment: ts.ordinal,
            }),
            Self::MinKey => Bson::MinKey,
            Self::MaxKey => Bson::MaxKey,
        }
    }
}

fn document_to_native(doc: &Document<Value>) -> bson::Document {
    doc.iter()
        .map(|(k, v)| (k.to_string(), v.to_native()))
        .collect()
}

/// Imports a native object graph.
///
/// Covers null, strings, booleans, both integer widths, doubles, arrays,
/// documents (field order preserved), dates, object ids, binary data of any
/// subtype, min/max keys, symbols, timestamps and regular expressions.
///
/// # Panics
///
/// Panics on native JavaScript code (with or without scope), `Decimal128`,
/// `Undefined` and `DbPointer` values. Callers must not pass them.
#[must_use]
pub fn from_native(native: &Bson) -> Value {
    match native {
        Bson::Null => Value::Null,
        Bson::String(s) => Value::Text(s.as_str().into()),
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Int32(n) => Value::Int32(*n),
        Bson::Int64(n) => Value::Int64(*n),
        Bson::Double(n) => Value::Dec(*n),
        Bson::Array(items) => Value::Arr(items.iter().map(from_native).collect()),
        Bson::Document(doc) => Value::Doc(document_from_native(doc)),
        Bson::DateTime(t) => Value::DateTime(*t),
        Bson::ObjectId(oid) => Value::BinId((*oid).into()),
        Bson::Binary(bin) => Value::Binary(bin.bytes.as_slice().into()),
        Bson::MinKey => Value::MinKey,
        Bson::MaxKey => Value::MaxKey,
        Bson::Symbol(s) => Value::Symbol(s.as_str().into()),
        Bson::Timestamp(ts) => Value::LogicalTimestamp(LogicalTimestamp::new(ts.time, ts.increment)),
        Bson::RegularExpression(re) => Value::Regex {
            pattern: re.pattern.as_str().into(),
            options: re.options.as_str().into(),
        },
        other => panic!("cannot import native {:?} value", other.element_type()),
    }
}

fn document_from_native(doc: &bson::Document) -> Document<Value> {
    doc.iter()
        .map(|(k, v)| (k.as_str(), from_native(v)))
        .collect()
}

//! Integration tests for the native-object importer and renderer

use bson::{Bson, doc};
use ferrodoc_value::{BinId, Document, Value, from_native};

#[test]
fn insertion_order_survives_native_round_trip() {
    let doc: Document<Value> = [("b", Value::Int32(1)), ("a", Value::Int32(2))]
        .into_iter()
        .collect();
    let native = Value::Doc(doc.clone()).to_native();
    let back = from_native(&native);

    let keys: Vec<&str> = back.as_document().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(back, Value::Doc(doc));
}

#[test]
fn imports_a_realistic_document() {
    let oid = bson::oid::ObjectId::parse_str("65a1b2c3d4e5f60718293a4b").unwrap();
    let native = doc! {
        "_id": oid,
        "name": "widget",
        "tags": ["a", "b"],
        "price": 9.5,
        "stock": 12_i64,
        "created": bson::DateTime::from_millis(1_700_000_000_000),
        "meta": { "active": true, "note": null },
    };
    let value = from_native(&Bson::Document(native.clone()));
    let doc = value.as_document().unwrap();

    assert_eq!(
        doc.get("_id"),
        Some(&Value::BinId(BinId::parse("65a1b2c3d4e5f60718293a4b").unwrap()))
    );
    assert_eq!(doc.get("stock"), Some(&Value::Int64(12)));
    assert_eq!(
        doc.get("tags"),
        Some(&Value::from(vec![Value::from("a"), Value::from("b")]))
    );
    assert_eq!(
        doc.keys().collect::<Vec<_>>(),
        vec!["_id", "name", "tags", "price", "stock", "created", "meta"]
    );
    assert_eq!(value.to_native(), Bson::Document(native));
}

#[test]
fn raw_bytes_import_as_binary() {
    let raw: &[u8] = &[0xca, 0xfe];
    let value = Value::from(raw);
    assert_eq!(value.type_name(), "binary");
    let Bson::Binary(bin) = value.to_native() else {
        panic!("expected binary");
    };
    assert_eq!(bin.bytes, raw);
}

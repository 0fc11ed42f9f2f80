//! Integration tests for the field-path algebra
//!
//! Construction, decomposition, the single-leaf equality law, and rendering.

use ferrodoc_path::{Accessor, FieldPath, Leaf};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

fn name(s: &str) -> FieldPath {
    FieldPath::name(s)
}

// =============================================================================
// Construction and decomposition
// =============================================================================

#[test]
fn concat_of_two_leaves_is_two_element_path() {
    let p = name("a").concat(&name("b"));
    assert_eq!(p.flatten(), &[Leaf::name("a"), Leaf::name("b")]);
    assert!(!p.is_leaf());
}

#[test]
fn parent_and_prefix() {
    let ab = name("a").concat(&name("b"));
    assert_eq!(ab.parent(), Some(name("a")));
    assert_eq!(name("a").parent(), None);
    assert!(ab.starts_with(&name("a")));
    assert!(!name("a").starts_with(&name("b")));
}

#[test]
fn append_flattens_every_tail_path() {
    let tail = [name("b").concat(&FieldPath::index(0)), name("c")];
    let p = name("a").append(&tail);
    assert_eq!(p.to_string(), "a.b.0.c");
    assert_eq!(name("a").append(&[]), name("a"));
}

// =============================================================================
// Equality law
// =============================================================================

#[test]
fn wrapped_leaf_equals_bare_leaf() {
    let bare = Leaf::name("a");
    let wrapped = FieldPath::from_leaves([Leaf::name("a")]).unwrap();
    assert_eq!(wrapped, bare);
    assert_eq!(hash_of(&wrapped), hash_of(&bare));
}

#[test]
fn paths_work_as_map_keys_regardless_of_construction() {
    let mut map = HashMap::new();
    map.insert(name("a").concat(&name("b")), 1);
    map.insert("a.b".parse::<FieldPath>().unwrap(), 2);
    map.insert(FieldPath::from(Leaf::index(3)), 3);
    map.insert(FieldPath::index(3), 4);
    assert_eq!(map.len(), 2);
    assert_eq!(map[&name("a").child("b")], 2);
    assert_eq!(map[&FieldPath::index(3)], 4);
}

#[test]
fn name_and_index_never_compare_equal() {
    assert_ne!(name("0"), FieldPath::index(0));
    assert_eq!(name("0").partial_cmp(&FieldPath::index(0)), None);
    let set: HashSet<FieldPath> = [name("0"), FieldPath::index(0)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

// =============================================================================
// Rendering
// =============================================================================

#[derive(Debug, PartialEq)]
enum Expr {
    Base,
    Field(Box<Expr>, String),
    Item(Box<Expr>, u64),
}

impl Accessor for Expr {
    fn access_name(self, name: &str) -> Self {
        Expr::Field(Box::new(self), name.to_string())
    }

    fn access_index(self, index: u64) -> Self {
        Expr::Item(Box::new(self), index)
    }
}

#[test]
fn accessor_chain_wraps_base_once_per_leaf() {
    let path: FieldPath = "items.2.sku".parse().unwrap();
    let expr = path.to_accessor_chain().apply(Expr::Base);
    assert_eq!(
        expr,
        Expr::Field(
            Box::new(Expr::Item(
                Box::new(Expr::Field(Box::new(Expr::Base), "items".to_string())),
                2
            )),
            "sku".to_string()
        )
    );
}

#[test]
fn dotted_and_field_ref_forms() {
    let path: FieldPath = "a.0".parse().unwrap();
    assert_eq!(path.to_string(), "a.0");
    assert_eq!(path.to_field_ref(), "$a.0");
}

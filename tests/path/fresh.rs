//! Integration tests for fresh-name and fresh-index generation

use ferrodoc_path::fresh::DEFAULT_PREFIX;
use ferrodoc_path::{FieldPath, FreshNames, fresh_index, fresh_names};
use std::collections::HashSet;

#[test]
fn three_distinct_names_from_empty_set() {
    let names = fresh_names(3, &HashSet::<String>::new());
    assert_eq!(names.len(), 3);
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), 3);
    assert!(names.iter().all(|n| n.starts_with(DEFAULT_PREFIX)));
}

#[test]
fn excluded_synthetic_name_is_never_returned() {
    let first = fresh_names(1, &HashSet::<String>::new()).remove(0);
    let excluded: HashSet<String> = [first.clone()].into_iter().collect();
    let names = fresh_names(2, &excluded);
    assert!(!names.contains(&first));
}

#[test]
fn deterministic_for_the_same_exclusions() {
    let excluded: HashSet<&str> = ["__tmp2", "__tmp4"].into_iter().collect();
    assert_eq!(fresh_names(4, &excluded), fresh_names(4, &excluded));
    assert_eq!(
        fresh_names(4, &excluded),
        vec!["__tmp0", "__tmp1", "__tmp3", "__tmp5"]
    );
}

#[test]
fn fresh_names_avoid_existing_document_fields() {
    // Typical use: pick a scratch field name that collides with nothing in
    // the paths already in play.
    let in_use = ["__tmp0.x", "__tmp1", "a.b"];
    let taken: HashSet<String> = in_use
        .iter()
        .map(|s| s.parse::<FieldPath>().unwrap().first().to_string())
        .collect();
    let scratch = FreshNames::new().fresh_names(1, &taken);
    assert_eq!(scratch, vec!["__tmp2"]);
}

#[test]
fn fresh_index_skips_taken_positions() {
    let taken: HashSet<u64> = (0..5).collect();
    assert_eq!(fresh_index(&taken), 5);
    assert_eq!(FreshNames::new().starting_at(2).fresh_index(&HashSet::new()), Some(2));
}

//! Property-based tests for the comparison builder.
//!
//! Verifies, over random flat schemas and snapshots:
//! - one row per non-skipped schema key, in schema order
//! - leaf status agrees with key presence in each snapshot
//! - building twice gives the same tree

use std::collections::{BTreeMap, BTreeSet};

use formdash_compare::{CompareOptions, CompareStatus, build_comparison_rows_with};
use formdash_schema::{FieldType, FormSchema, SchemaProperty};
use proptest::prelude::*;
use serde_json::{Map, Value};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,2}").unwrap()
}

fn schema_strategy() -> impl Strategy<Value = FormSchema> {
    prop::collection::btree_set(key_strategy(), 0..10).prop_map(|keys: BTreeSet<String>| {
        FormSchema::new(
            keys.iter()
                .map(|k| SchemaProperty::untitled(k, FieldType::Integer))
                .collect(),
        )
    })
}

fn snapshot_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key_strategy(), prop::option::of(0i64..3), 0..10).prop_map(
        |entries: BTreeMap<String, Option<i64>>| {
            let obj: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k, v.map_or(Value::Null, Value::from)))
                .collect();
            Value::Object(obj)
        },
    )
}

proptest! {
    #[test]
    fn one_row_per_unskipped_key(
        schema in schema_strategy(),
        prev in snapshot_strategy(),
        current in snapshot_strategy(),
        skip in key_strategy(),
    ) {
        let options = CompareOptions::without_skip_keys().skip_key(skip.clone());
        let rows = build_comparison_rows_with(Some(&prev), Some(&current), Some(&schema), &options);

        let expected: Vec<&str> = schema
            .properties
            .iter()
            .map(|p| p.key.as_str())
            .filter(|k| *k != skip)
            .collect();
        let fields: Vec<&str> = rows.iter().map(|r| r.field.as_str()).collect();
        prop_assert_eq!(fields, expected);
    }

    #[test]
    fn status_agrees_with_presence(
        schema in schema_strategy(),
        prev in snapshot_strategy(),
        current in snapshot_strategy(),
    ) {
        let rows = build_comparison_rows_with(
            Some(&prev),
            Some(&current),
            Some(&schema),
            &CompareOptions::without_skip_keys(),
        );

        for row in &rows {
            let p = prev.get(&row.field);
            let c = current.get(&row.field);
            prop_assert_eq!(row.prev_value(), p);
            prop_assert_eq!(row.current_value(), c);
            let expected = match (p, c) {
                (None, None) => CompareStatus::Untouched,
                (None, Some(_)) => CompareStatus::New,
                (Some(_), None) => CompareStatus::Removed,
                (Some(a), Some(b)) if a == b => CompareStatus::Untouched,
                (Some(_), Some(_)) => CompareStatus::Changed,
            };
            prop_assert_eq!(row.status(), expected);
        }
    }

    #[test]
    fn building_is_idempotent(
        schema in schema_strategy(),
        prev in snapshot_strategy(),
        current in snapshot_strategy(),
    ) {
        let options = CompareOptions::default();
        let a = build_comparison_rows_with(Some(&prev), Some(&current), Some(&schema), &options);
        let b = build_comparison_rows_with(Some(&prev), Some(&current), Some(&schema), &options);
        prop_assert_eq!(a, b);
    }
}

use formdash_compare::{CompareStatus, build_comparison_rows, flatten_rows};
use formdash_schema::{FieldType, FormSchema, SchemaProperty};
use pretty_assertions::assert_eq;
use serde_json::json;

fn nested_schema() -> FormSchema {
    FormSchema::new(vec![
        SchemaProperty::field("name", FieldType::String, "Name"),
        SchemaProperty::group(
            "address",
            "Address",
            vec![
                SchemaProperty::field("city", FieldType::String, "City"),
                SchemaProperty::group(
                    "geo",
                    "Geo",
                    vec![SchemaProperty::untitled("lat", FieldType::Number)],
                ),
            ],
        ),
        SchemaProperty::untitled("age", FieldType::Integer),
    ])
}

#[test]
fn parents_precede_children_with_label_paths() {
    let rows = build_comparison_rows(None, None, Some(&nested_schema()));
    let flat = flatten_rows(&rows);

    let paths: Vec<Vec<&str>> = flat
        .iter()
        .map(|r| r.tree_path.iter().map(String::as_str).collect())
        .collect();
    assert_eq!(
        paths,
        vec![
            vec!["Name"],
            vec!["Address"],
            vec!["Address", "City"],
            vec!["Address", "Geo"],
            vec!["Address", "Geo", "lat"],
            vec!["age"],
        ]
    );
}

#[test]
fn flat_rows_keep_status_and_values() {
    let prev = json!({ "address": { "city": "Oslo" } });
    let current = json!({ "address": { "city": "Bergen" } });
    let rows = build_comparison_rows(Some(&prev), Some(&current), Some(&nested_schema()));
    let flat = flatten_rows(&rows);

    let city = flat.iter().find(|r| r.field == "city").unwrap();
    assert_eq!(city.status, CompareStatus::Changed);
    assert_eq!(city.prev_value, Some(json!("Oslo")));
    assert_eq!(city.current_value, Some(json!("Bergen")));

    let address = flat.iter().find(|r| r.field == "address").unwrap();
    assert_eq!(address.status, CompareStatus::Group);
    assert_eq!(address.prev_value, None);
}

#[test]
fn empty_tree_flattens_to_nothing() {
    assert!(flatten_rows(&[]).is_empty());
}

#[test]
fn flat_row_serializes_camel_case() {
    let schema = FormSchema::new(vec![SchemaProperty::untitled("n", FieldType::Integer)]);
    let rows = build_comparison_rows(Some(&json!({ "n": 1 })), None, Some(&schema));
    let flat = flatten_rows(&rows);
    assert_eq!(
        serde_json::to_value(&flat[0]).unwrap(),
        json!({
            "field": "n",
            "label": "n",
            "status": "removedField",
            "prevValue": 1,
            "treePath": ["n"]
        })
    );
}

use formdash_schema::{FieldNode, FieldType, FormSchema, SchemaError, SchemaNode, SchemaProperty};
use pretty_assertions::assert_eq;
use serde_json::json;

fn example_form_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["age"],
        "properties": {
            "formAuthors": { "type": "string", "title": "Form Authors" },
            "name": { "type": "string", "title": "Name" },
            "fullName": { "type": "string", "title": "Full Name" },
            "age": { "type": "integer", "title": "Age" },
            "gender": {
                "type": "string",
                "title": "Gender",
                "enum": ["Male", "Female", "Undisclosed"]
            },
            "heigh": { "type": "number", "title": "Heigh" },
            "address": {
                "type": "object",
                "title": "Address Shipping",
                "properties": {
                    "street": { "type": "string", "title": "Street" },
                    "streetnumber": { "type": "string", "title": "Street Number" },
                    "postalCode": { "type": "string", "title": "Postal Code" },
                    "city": { "type": "string", "title": "City" }
                }
            }
        }
    })
}

// ── Loading ──────────────────────────────────────────────────────

#[test]
fn loads_properties_in_declaration_order() {
    let schema = FormSchema::from_value(&example_form_schema()).unwrap();
    let keys: Vec<&str> = schema.properties.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["formAuthors", "name", "fullName", "age", "gender", "heigh", "address"]
    );
}

#[test]
fn order_is_not_alphabetical() {
    let schema = FormSchema::from_value(&json!({
        "properties": { "zeta": {}, "alpha": {}, "mid": {} }
    }))
    .unwrap();
    let keys: Vec<&str> = schema.properties.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn loads_required_keys() {
    let schema = FormSchema::from_value(&example_form_schema()).unwrap();
    assert_eq!(schema.required, vec!["age".to_string()]);
    assert!(schema.is_required("age"));
    assert!(!schema.is_required("name"));
}

#[test]
fn object_with_properties_is_group() {
    let schema = FormSchema::from_value(&example_form_schema()).unwrap();
    let SchemaNode::Group(address) = schema.property("address").unwrap() else {
        panic!("address should load as a group");
    };
    assert_eq!(address.title.as_deref(), Some("Address Shipping"));
    assert_eq!(address.properties.len(), 4);
    assert!(address.property("postalCode").is_some());
}

#[test]
fn object_without_properties_is_field() {
    let node = SchemaNode::from_value(&json!({ "type": "object", "title": "Blob" }));
    assert_eq!(
        node,
        SchemaNode::Field(FieldNode {
            field_type: Some(FieldType::Object),
            title: Some("Blob".into()),
            enum_options: None,
        })
    );
}

#[test]
fn properties_without_object_type_is_field() {
    let node = SchemaNode::from_value(&json!({
        "type": "string",
        "properties": { "x": {} }
    }));
    assert!(!node.is_group());
}

#[test]
fn enum_options_are_kept() {
    let schema = FormSchema::from_value(&example_form_schema()).unwrap();
    let SchemaNode::Field(gender) = schema.property("gender").unwrap() else {
        panic!("gender should load as a field");
    };
    assert_eq!(
        gender.enum_options,
        Some(vec![json!("Male"), json!("Female"), json!("Undisclosed")])
    );
}

#[test]
fn unknown_type_name_loads_untyped() {
    let node = SchemaNode::from_value(&json!({ "type": "money" }));
    let SchemaNode::Field(field) = node else {
        panic!("expected field");
    };
    assert_eq!(field.field_type, None);
}

#[test]
fn non_object_property_loads_as_untyped_field() {
    let node = SchemaNode::from_value(&json!(true));
    assert_eq!(node, SchemaNode::Field(FieldNode::default()));
}

// ── Missing / empty properties ───────────────────────────────────

#[test]
fn missing_properties_is_none() {
    assert!(FormSchema::from_value(&json!({ "type": "object" })).is_none());
}

#[test]
fn non_object_root_is_none() {
    assert!(FormSchema::from_value(&json!(null)).is_none());
    assert!(FormSchema::from_value(&json!([1, 2])).is_none());
}

#[test]
fn empty_properties_is_some_and_empty() {
    let schema = FormSchema::from_value(&json!({ "properties": {} })).unwrap();
    assert!(schema.is_empty());
    assert_eq!(schema.len(), 0);
    assert_eq!(schema.depth(), 0);
}

#[test]
fn from_json_str_parses_text() {
    let schema = FormSchema::from_json_str(r#"{"properties":{"a":{"type":"string"}}}"#)
        .unwrap()
        .unwrap();
    assert_eq!(schema.len(), 1);
}

#[test]
fn from_json_str_rejects_malformed_json() {
    let err = FormSchema::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, SchemaError::Serialization(_)));
    assert!(format!("{err}").contains("serialization"));
}

// ── Labels and depth ─────────────────────────────────────────────

#[test]
fn label_prefers_title() {
    let p = SchemaProperty::field("fullName", FieldType::String, "Full Name");
    assert_eq!(p.label(), "Full Name");
}

#[test]
fn label_falls_back_to_key() {
    let p = SchemaProperty::untitled("age", FieldType::Integer);
    assert_eq!(p.label(), "age");
}

#[test]
fn empty_title_falls_back_to_key() {
    let node = SchemaNode::from_value(&json!({ "type": "string", "title": "" }));
    assert_eq!(node.label("nickname"), "nickname");
}

#[test]
fn depth_counts_nesting() {
    let schema = FormSchema::from_value(&example_form_schema()).unwrap();
    assert_eq!(schema.depth(), 2);

    let flat = FormSchema::new(vec![SchemaProperty::untitled("a", FieldType::String)]);
    assert_eq!(flat.depth(), 1);
}

// ── FieldType ────────────────────────────────────────────────────

#[test]
fn field_type_names_roundtrip() {
    for ft in [
        FieldType::String,
        FieldType::Integer,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Array,
        FieldType::Object,
        FieldType::Null,
    ] {
        assert_eq!(FieldType::from_name(ft.as_str()), Some(ft));
    }
}

#[test]
fn field_type_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&FieldType::Integer).unwrap(), "\"integer\"");
}

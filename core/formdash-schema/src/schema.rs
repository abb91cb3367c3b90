use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::SchemaResult;

/// Root of a form schema.
///
/// Only the `properties` map is required to load a schema; `title` and
/// `required` are carried along for consumers that display them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    pub title: Option<String>,
    pub required: Vec<String>,
    pub properties: Vec<SchemaProperty>,
}

impl FormSchema {
    /// Creates a schema from already-built properties.
    pub fn new(properties: Vec<SchemaProperty>) -> Self {
        Self {
            title: None,
            required: Vec::new(),
            properties,
        }
    }

    /// Loads a schema from a JSON value.
    ///
    /// Returns `None` when the value is not an object or has no `properties`
    /// object. A present but empty `properties` map loads as a schema with
    /// zero properties.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let properties = obj.get("properties")?.as_object()?;
        let required = obj
            .get("required")
            .and_then(Value::as_array)
            .map(|keys| {
                keys.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            title: read_title(obj),
            required,
            properties: load_properties(properties),
        })
    }

    /// Parses JSON text and loads it with [`FormSchema::from_value`].
    pub fn from_json_str(json: &str) -> SchemaResult<Option<Self>> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Looks up a top-level property by key.
    pub fn property(&self, key: &str) -> Option<&SchemaNode> {
        find_property(&self.properties, key)
    }

    /// Whether `key` is listed in the root `required` array.
    pub fn is_required(&self, key: &str) -> bool {
        self.required.iter().any(|k| k == key)
    }

    /// Number of top-level properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Maximum nesting depth; a flat schema has depth 1, an empty one 0.
    pub fn depth(&self) -> usize {
        properties_depth(&self.properties)
    }
}

/// One named entry of a `properties` map.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaProperty {
    pub key: String,
    pub node: SchemaNode,
}

impl SchemaProperty {
    pub fn new(key: &str, node: SchemaNode) -> Self {
        Self {
            key: key.into(),
            node,
        }
    }

    /// Shorthand for a titled leaf field.
    pub fn field(key: &str, field_type: FieldType, title: &str) -> Self {
        Self::new(
            key,
            SchemaNode::Field(FieldNode {
                field_type: Some(field_type),
                title: Some(title.into()),
                enum_options: None,
            }),
        )
    }

    /// Shorthand for a leaf field without a title.
    pub fn untitled(key: &str, field_type: FieldType) -> Self {
        Self::new(
            key,
            SchemaNode::Field(FieldNode {
                field_type: Some(field_type),
                title: None,
                enum_options: None,
            }),
        )
    }

    /// Shorthand for a titled group of nested properties.
    pub fn group(key: &str, title: &str, properties: Vec<SchemaProperty>) -> Self {
        Self::new(
            key,
            SchemaNode::Group(GroupNode {
                title: Some(title.into()),
                properties,
            }),
        )
    }

    /// Display label: the node's title, falling back to the key.
    pub fn label(&self) -> &str {
        self.node.label(&self.key)
    }
}

/// A schema node is either a nested group or a leaf field.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Group(GroupNode),
    Field(FieldNode),
}

impl SchemaNode {
    /// Loads a single node.
    ///
    /// A node is a group only when its `type` is `"object"` and it has a
    /// `properties` object; everything else (including non-object values)
    /// is a field.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::Field(FieldNode::default());
        };
        let title = read_title(obj);
        let type_name = obj.get("type").and_then(Value::as_str);

        match (type_name, obj.get("properties").and_then(Value::as_object)) {
            (Some("object"), Some(properties)) => Self::Group(GroupNode {
                title,
                properties: load_properties(properties),
            }),
            _ => Self::Field(FieldNode {
                field_type: type_name.and_then(FieldType::from_name),
                title,
                enum_options: obj.get("enum").and_then(Value::as_array).cloned(),
            }),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Group(g) => g.title.as_deref(),
            Self::Field(f) => f.title.as_deref(),
        }
    }

    /// Display label for this node under `key`. Empty titles fall back too.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        match self.title() {
            Some(title) if !title.is_empty() => title,
            _ => key,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}

/// A nested object with its own ordered properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupNode {
    pub title: Option<String>,
    pub properties: Vec<SchemaProperty>,
}

impl GroupNode {
    pub fn property(&self, key: &str) -> Option<&SchemaNode> {
        find_property(&self.properties, key)
    }
}

/// A scalar leaf.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldNode {
    /// `None` when the schema omits `type` or uses a name we don't know.
    pub field_type: Option<FieldType>,
    pub title: Option<String>,
    /// Allowed values from the JSON-Schema `enum` keyword.
    pub enum_options: Option<Vec<Value>>,
}

/// JSON-Schema primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl FieldType {
    /// Parses a JSON-Schema type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }
}

fn read_title(obj: &Map<String, Value>) -> Option<String> {
    obj.get("title").and_then(Value::as_str).map(str::to_owned)
}

fn load_properties(properties: &Map<String, Value>) -> Vec<SchemaProperty> {
    properties
        .iter()
        .map(|(key, node)| SchemaProperty {
            key: key.clone(),
            node: SchemaNode::from_value(node),
        })
        .collect()
}

fn find_property<'a>(properties: &'a [SchemaProperty], key: &str) -> Option<&'a SchemaNode> {
    properties.iter().find(|p| p.key == key).map(|p| &p.node)
}

fn properties_depth(properties: &[SchemaProperty]) -> usize {
    properties
        .iter()
        .map(|p| match &p.node {
            SchemaNode::Group(g) => 1 + properties_depth(&g.properties),
            SchemaNode::Field(_) => 1,
        })
        .max()
        .unwrap_or(0)
}

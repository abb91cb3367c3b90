//! Form schema model for formdash.
//!
//! Turns a JSON-Schema-like form description into an explicit tree:
//! - [`FormSchema`] — the root: ordered top-level properties plus `required`
//! - [`SchemaNode`] — either a [`GroupNode`] (nested object with its own
//!   properties) or a [`FieldNode`] (scalar leaf with an optional title)
//! - [`FieldType`] — the JSON-Schema `type` of a leaf
//!
//! Schemas are loaded once, leniently: anything that is not a recognizable
//! group becomes a field, and a root without a `properties` map loads as
//! `None`. Property order is the declaration order of the source JSON.

mod schema;

pub use schema::{FieldNode, FieldType, FormSchema, GroupNode, SchemaNode, SchemaProperty};

/// Result type alias using the crate's error type.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while loading a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

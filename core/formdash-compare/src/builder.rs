use std::collections::BTreeSet;

use formdash_schema::{FormSchema, SchemaNode, SchemaProperty};
use serde_json::Value;
use tracing::debug;

use crate::row::{ComparisonRow, RowKind, summarize};
use crate::status::{classify, strict_equal};

/// Authorship metadata key skipped by [`CompareOptions::default`].
pub const AUTHORSHIP_KEY: &str = "formAuthors";

/// Tunables for [`build_comparison_rows_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    skip_keys: BTreeSet<String>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            skip_keys: BTreeSet::from([AUTHORSHIP_KEY.to_string()]),
        }
    }
}

impl CompareOptions {
    /// Options that diff every schema property.
    pub fn without_skip_keys() -> Self {
        Self {
            skip_keys: BTreeSet::new(),
        }
    }

    /// Adds a key that never produces a row, at any nesting level.
    #[must_use]
    pub fn skip_key(mut self, key: impl Into<String>) -> Self {
        self.skip_keys.insert(key.into());
        self
    }

    pub fn skips(&self, key: &str) -> bool {
        self.skip_keys.contains(key)
    }

    pub fn skip_keys(&self) -> impl Iterator<Item = &str> {
        self.skip_keys.iter().map(String::as_str)
    }
}

/// Compares `prev` and `current` against `schema` with default options.
///
/// See [`build_comparison_rows_with`].
pub fn build_comparison_rows(
    prev: Option<&Value>,
    current: Option<&Value>,
    schema: Option<&FormSchema>,
) -> Vec<ComparisonRow> {
    build_comparison_rows_with(prev, current, schema, &CompareOptions::default())
}

/// Builds one row per non-skipped schema property, in declaration order.
///
/// A snapshot that is missing, `null` or not an object reads as having no
/// keys. A missing schema yields no rows.
pub fn build_comparison_rows_with(
    prev: Option<&Value>,
    current: Option<&Value>,
    schema: Option<&FormSchema>,
    options: &CompareOptions,
) -> Vec<ComparisonRow> {
    let Some(schema) = schema else {
        debug!("no schema, nothing to compare");
        return Vec::new();
    };

    let rows = build_level(prev, current, &schema.properties, options);
    let counts = summarize(&rows);
    debug!(
        rows = rows.len(),
        new = counts.new,
        removed = counts.removed,
        changed = counts.changed,
        "built comparison rows"
    );
    rows
}

fn build_level(
    prev: Option<&Value>,
    current: Option<&Value>,
    properties: &[SchemaProperty],
    options: &CompareOptions,
) -> Vec<ComparisonRow> {
    properties
        .iter()
        .filter(|p| !options.skips(&p.key))
        .map(|p| {
            let prev_value = lookup(prev, &p.key);
            let current_value = lookup(current, &p.key);

            let kind = match &p.node {
                SchemaNode::Group(group) => RowKind::Group {
                    children: build_level(prev_value, current_value, &group.properties, options),
                },
                SchemaNode::Field(_) => {
                    let equal = match (prev_value, current_value) {
                        (Some(a), Some(b)) => strict_equal(a, b),
                        _ => false,
                    };
                    RowKind::Leaf {
                        status: classify(prev_value.is_some(), current_value.is_some(), equal),
                        prev_value: prev_value.cloned(),
                        current_value: current_value.cloned(),
                    }
                }
            };

            ComparisonRow {
                field: p.key.clone(),
                label: p.label().to_owned(),
                kind,
            }
        })
        .collect()
}

fn lookup<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    parent.and_then(Value::as_object).and_then(|obj| obj.get(key))
}

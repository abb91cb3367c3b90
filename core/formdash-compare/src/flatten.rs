use serde::Serialize;
use serde_json::Value;

use crate::{CompareStatus, ComparisonRow};

/// A comparison row positioned in a flat list by its label path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatComparisonRow {
    pub field: String,
    pub label: String,
    pub status: CompareStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Value>,
    /// Labels from the top-level ancestor down to this row, inclusive.
    pub tree_path: Vec<String>,
}

/// Flattens a comparison tree depth-first, parents before children.
pub fn flatten_rows(rows: &[ComparisonRow]) -> Vec<FlatComparisonRow> {
    let mut out = Vec::new();
    flatten_into(rows, &mut Vec::new(), &mut out);
    out
}

fn flatten_into(rows: &[ComparisonRow], path: &mut Vec<String>, out: &mut Vec<FlatComparisonRow>) {
    for row in rows {
        path.push(row.label.clone());
        out.push(FlatComparisonRow {
            field: row.field.clone(),
            label: row.label.clone(),
            status: row.status(),
            prev_value: row.prev_value().cloned(),
            current_value: row.current_value().cloned(),
            tree_path: path.clone(),
        });
        flatten_into(row.children(), path, out);
        path.pop();
    }
}

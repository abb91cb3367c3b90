use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::CompareStatus;

/// One output row of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Property key, unique within its parent.
    pub field: String,
    /// Schema title, or the key when the schema has none.
    pub label: String,
    pub kind: RowKind,
}

/// A row is either a group header or a leaf, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    Group {
        children: Vec<ComparisonRow>,
    },
    Leaf {
        /// `None` when the key is absent; `Some(Value::Null)` for an explicit null.
        prev_value: Option<Value>,
        current_value: Option<Value>,
        status: CompareStatus,
    },
}

impl ComparisonRow {
    pub fn status(&self) -> CompareStatus {
        match &self.kind {
            RowKind::Group { .. } => CompareStatus::Group,
            RowKind::Leaf { status, .. } => *status,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, RowKind::Group { .. })
    }

    /// Nested rows; empty for leaves.
    pub fn children(&self) -> &[ComparisonRow] {
        match &self.kind {
            RowKind::Group { children } => children,
            RowKind::Leaf { .. } => &[],
        }
    }

    pub fn prev_value(&self) -> Option<&Value> {
        match &self.kind {
            RowKind::Leaf { prev_value, .. } => prev_value.as_ref(),
            RowKind::Group { .. } => None,
        }
    }

    pub fn current_value(&self) -> Option<&Value> {
        match &self.kind {
            RowKind::Leaf { current_value, .. } => current_value.as_ref(),
            RowKind::Group { .. } => None,
        }
    }

    /// Depth of the subtree rooted at this row (a leaf is 1).
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }
}

// Absent values are omitted rather than written as null, so the
// absent/null distinction survives serialization.
impl Serialize for ComparisonRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("field", &self.field)?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("status", &self.status())?;
        match &self.kind {
            RowKind::Group { children } => {
                map.serialize_entry("children", children)?;
            }
            RowKind::Leaf {
                prev_value,
                current_value,
                ..
            } => {
                if let Some(v) = prev_value {
                    map.serialize_entry("prevValue", v)?;
                }
                if let Some(v) = current_value {
                    map.serialize_entry("currentValue", v)?;
                }
            }
        }
        map.end()
    }
}

/// Leaf status tally over a whole comparison tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub groups: usize,
    pub untouched: usize,
    pub new: usize,
    pub removed: usize,
    pub changed: usize,
}

impl StatusCounts {
    /// Whether any leaf differs between the snapshots.
    pub fn has_changes(&self) -> bool {
        self.new + self.removed + self.changed > 0
    }

    fn add(&mut self, status: CompareStatus) {
        match status {
            CompareStatus::Group => self.groups += 1,
            CompareStatus::Untouched => self.untouched += 1,
            CompareStatus::New => self.new += 1,
            CompareStatus::Removed => self.removed += 1,
            CompareStatus::Changed => self.changed += 1,
        }
    }
}

/// Counts every row in the tree by status.
pub fn summarize(rows: &[ComparisonRow]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    let mut stack: Vec<&ComparisonRow> = rows.iter().collect();
    while let Some(row) = stack.pop() {
        counts.add(row.status());
        stack.extend(row.children());
    }
    counts
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How a field changed between two snapshots.
///
/// Serialized names match the grid's status column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareStatus {
    /// Nested object property; the row carries children instead of values.
    #[serde(rename = "group")]
    Group,
    /// Both absent, or both present and strictly equal.
    #[serde(rename = "untouched")]
    Untouched,
    /// Absent before, present now.
    #[serde(rename = "newField")]
    New,
    /// Present before, absent now.
    #[serde(rename = "removedField")]
    Removed,
    /// Present in both and not strictly equal.
    #[serde(rename = "changed")]
    Changed,
}

impl CompareStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Untouched => "untouched",
            Self::New => "newField",
            Self::Removed => "removedField",
            Self::Changed => "changed",
        }
    }
}

impl fmt::Display for CompareStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a leaf field from key presence and value equality.
///
/// `equal` is only consulted when both sides are present. Never returns
/// [`CompareStatus::Group`].
pub const fn classify(has_prev: bool, has_current: bool, equal: bool) -> CompareStatus {
    match (has_prev, has_current) {
        (false, false) => CompareStatus::Untouched,
        (false, true) => CompareStatus::New,
        (true, false) => CompareStatus::Removed,
        (true, true) if equal => CompareStatus::Untouched,
        (true, true) => CompareStatus::Changed,
    }
}

/// Identity-style equality between two snapshot values.
///
/// Scalars compare by value (numbers numerically, so `3` equals `3.0`).
/// Arrays and objects never compare equal: values taken from two separate
/// snapshots are distinct instances even when their contents match.
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x == y
            } else {
                x.as_f64() == y.as_f64()
            }
        }
        _ => false,
    }
}

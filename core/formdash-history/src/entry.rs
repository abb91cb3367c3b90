use formdash_schema::FormSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::EntryId;

/// How a snapshot was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveType {
    /// Saved when the form lost focus.
    Automatic,
    /// Saved by pressing the save button.
    Button,
}

/// One saved snapshot of a form's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormHistoryEntry {
    pub id: EntryId,
    pub form_id: String,
    pub user_id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub data: Value,
    pub save_type: SaveType,
}

impl FormHistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(form_id: &str, user_id: &str, data: Value, save_type: SaveType) -> Self {
        Self {
            id: EntryId::new(),
            form_id: form_id.into(),
            user_id: user_id.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            data,
            save_type,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Extract a value from `data` using a JSON pointer (e.g., "/address/city").
    pub fn get(&self, pointer: &str) -> Option<&Value> {
        self.data.pointer(pointer)
    }

    /// Extract a string value from `data` using a JSON pointer.
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.get(pointer).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Default,
}

/// A user who can edit forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    /// Whether this is the signed-in user.
    pub current: bool,
}

/// A form definition. `form_config` holds the JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub id: String,
    pub name: String,
    pub form_config: Value,
}

impl FormConfig {
    /// Loads the form's schema; `None` when it has no `properties` map.
    pub fn schema(&self) -> Option<FormSchema> {
        FormSchema::from_value(&self.form_config)
    }
}

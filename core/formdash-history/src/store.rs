use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{EntryId, FormHistoryEntry, HistoryResult, SaveType, User};

/// True when both values serialize to the same JSON text.
///
/// Object keys must appear in the same order; numbers compare by value, so
/// `1` equals `1.0`. Used to detect autosaves that change nothing.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|((kx, x), (ky, y))| kx == ky && deep_equal(x, y))
        }
        _ => a == b,
    }
}

/// Every saved snapshot, keyed by form id, in save order.
///
/// Serializes as a plain JSON object `{ formId: [entry, ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormHistory {
    forms: BTreeMap<String, Vec<FormHistoryEntry>>,
}

/// Display data for one entry in a history list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub entry_id: EntryId,
    pub timestamp: i64,
    /// `YYYY-MM-DD HH:MM:SS` in UTC; empty if the timestamp is out of range.
    pub date: String,
    pub save_type: SaveType,
    /// User name, or the raw user id when the user is unknown or unnamed.
    pub user: String,
}

impl FormHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a history from its JSON blob.
    pub fn from_json(json: &str) -> HistoryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the history to its JSON blob.
    pub fn to_json(&self) -> HistoryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Entries for a form, in save order.
    pub fn entries(&self, form_id: &str) -> &[FormHistoryEntry] {
        self.forms.get(form_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Ids of all forms with at least one entry.
    pub fn form_ids(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }

    /// Total number of entries across all forms.
    pub fn len(&self) -> usize {
        self.forms.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up an entry anywhere in the history.
    pub fn find(&self, id: EntryId) -> Option<&FormHistoryEntry> {
        self.forms.values().flatten().find(|e| e.id == id)
    }

    /// The user's most recent entry for a form. Ties go to the earlier save.
    pub fn latest_for_user(&self, form_id: &str, user_id: &str) -> Option<&FormHistoryEntry> {
        self.entries(form_id)
            .iter()
            .filter(|e| e.user_id == user_id)
            .rev()
            .max_by_key(|e| e.timestamp)
    }

    /// The user's entries for a form, newest first. Ties keep save order.
    fn newest_first(&self, form_id: &str, user_id: &str) -> Vec<&FormHistoryEntry> {
        let mut entries: Vec<&FormHistoryEntry> = self
            .entries(form_id)
            .iter()
            .filter(|e| e.user_id == user_id)
            .collect();
        entries.sort_by_key(|e| Reverse(e.timestamp));
        entries
    }

    /// Data of [`FormHistory::latest_for_user`], or `{}` when there is none.
    pub fn latest_data_for_user(&self, form_id: &str, user_id: &str) -> Value {
        self.latest_for_user(form_id, user_id)
            .map(|e| e.data.clone())
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Appends an entry unconditionally.
    pub fn record(&mut self, entry: FormHistoryEntry) -> &FormHistoryEntry {
        debug!(
            form_id = %entry.form_id,
            user_id = %entry.user_id,
            save_type = ?entry.save_type,
            "recording history entry"
        );
        let entries = self.forms.entry(entry.form_id.clone()).or_default();
        entries.push(entry);
        &entries[entries.len() - 1]
    }

    /// Records an automatic save unless `data` equals the user's latest data.
    ///
    /// A user with no entries compares against `{}`, so an empty first
    /// autosave is skipped too.
    pub fn record_autosave(
        &mut self,
        form_id: &str,
        user_id: &str,
        data: Value,
    ) -> Option<&FormHistoryEntry> {
        if deep_equal(&data, &self.latest_data_for_user(form_id, user_id)) {
            debug!(form_id, user_id, "autosave skipped, nothing changed");
            return None;
        }
        Some(self.record(FormHistoryEntry::new(form_id, user_id, data, SaveType::Automatic)))
    }

    /// Records a save requested by the user, even if nothing changed.
    pub fn record_manual_save(&mut self, form_id: &str, user_id: &str, data: Value) -> &FormHistoryEntry {
        self.record(FormHistoryEntry::new(form_id, user_id, data, SaveType::Button))
    }

    /// True when the user has an earlier snapshot to go back to.
    pub fn can_revert(&self, form_id: &str, user_id: &str) -> bool {
        self.newest_first(form_id, user_id).len() > 1
    }

    /// Re-saves the user's second-newest snapshot as a button save.
    ///
    /// Returns the new entry, or `None` when there is nothing to revert to.
    pub fn revert(&mut self, form_id: &str, user_id: &str) -> Option<&FormHistoryEntry> {
        let data = self.newest_first(form_id, user_id).get(1)?.data.clone();
        debug!(form_id, user_id, "reverting to previous snapshot");
        Some(self.record_manual_save(form_id, user_id, data))
    }

    /// Presentation rows for a form's history, in save order.
    pub fn history_rows(&self, form_id: &str, users: &[User]) -> Vec<HistoryRow> {
        self.entries(form_id)
            .iter()
            .map(|entry| HistoryRow {
                entry_id: entry.id,
                timestamp: entry.timestamp,
                date: DateTime::from_timestamp_millis(entry.timestamp)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default(),
                save_type: entry.save_type,
                user: users
                    .iter()
                    .find(|u| u.id == entry.user_id)
                    .filter(|u| !u.name.is_empty())
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| entry.user_id.clone()),
            })
            .collect()
    }
}

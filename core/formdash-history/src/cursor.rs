use formdash_compare::{CompareOptions, ComparisonRow, build_comparison_rows_with};
use formdash_schema::FormSchema;

use crate::FormHistoryEntry;

/// Position within a selection of history entries.
///
/// The entry at the cursor is "current"; the one before it is "previous".
/// Nothing is comparable until at least two entries are selected.
#[derive(Debug, Clone, Default)]
pub struct CompareCursor {
    selected: Vec<FormHistoryEntry>,
    index: usize,
}

impl CompareCursor {
    pub fn new(selected: Vec<FormHistoryEntry>) -> Self {
        Self { selected, index: 0 }
    }

    /// Replaces the selection and rewinds to the first entry.
    pub fn select(&mut self, selected: Vec<FormHistoryEntry>) {
        self.selected = selected;
        self.index = 0;
    }

    pub fn selected(&self) -> &[FormHistoryEntry] {
        &self.selected
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_compare(&self) -> bool {
        self.selected.len() >= 2
    }

    pub fn current_entry(&self) -> Option<&FormHistoryEntry> {
        if !self.can_compare() {
            return None;
        }
        self.selected.get(self.index)
    }

    pub fn previous_entry(&self) -> Option<&FormHistoryEntry> {
        if !self.can_compare() || self.index == 0 {
            return None;
        }
        self.selected.get(self.index - 1)
    }

    pub fn next_entry(&self) -> Option<&FormHistoryEntry> {
        if !self.can_compare() {
            return None;
        }
        self.selected.get(self.index + 1)
    }

    /// Moves back one entry. Returns `false` at the start.
    pub fn go_previous(&mut self) -> bool {
        if self.previous_entry().is_none() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Moves forward one entry. Returns `false` at the end.
    pub fn go_next(&mut self) -> bool {
        if self.next_entry().is_none() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Compares the previous entry's data against the current entry's.
    ///
    /// At the first entry the previous snapshot is absent, so every present
    /// field reads as new. Empty when nothing is comparable.
    pub fn comparison(&self, schema: Option<&FormSchema>, options: &CompareOptions) -> Vec<ComparisonRow> {
        let Some(current) = self.current_entry() else {
            return Vec::new();
        };
        build_comparison_rows_with(
            self.previous_entry().map(|e| &e.data),
            Some(&current.data),
            schema,
            options,
        )
    }
}

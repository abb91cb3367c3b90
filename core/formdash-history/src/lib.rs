//! Form history for formdash.
//!
//! Keeps every saved snapshot of every form, per user:
//! - [`FormHistoryEntry`] — one snapshot (who, when, how it was saved, data)
//! - [`FormHistory`] — all entries keyed by form id, persisted as a plain
//!   JSON blob; autosaves that change nothing are dropped
//! - [`CompareCursor`] — walks a selection of entries pairwise and feeds
//!   each pair to the comparison builder
//!
//! Storage of the blob (local storage, a file, a database column) is the
//! caller's concern.

mod cursor;
mod entry;
mod ids;
mod store;

pub use cursor::CompareCursor;
pub use entry::{FormConfig, FormHistoryEntry, SaveType, User, UserRole};
pub use ids::EntryId;
pub use store::{FormHistory, HistoryRow, deep_equal};

/// Result type alias using the crate's error type.
pub type HistoryResult<T> = std::result::Result<T, HistoryError>;

/// Errors that can occur in history operations.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid entry id: {0}")]
    InvalidEntryId(#[from] uuid::Error),
}

//! Schema-driven comparison of two form snapshots.
//!
//! Given a previous and a current JSON object plus a [`FormSchema`], the
//! builder produces one [`ComparisonRow`] per schema property, in schema
//! declaration order:
//! - nested object properties become group rows carrying `children`
//! - leaf properties carry both values and a [`CompareStatus`]
//!
//! Building never fails. A missing schema, missing snapshots and missing
//! keys all produce defined "absent" results. Keys listed in
//! [`CompareOptions`] (authorship metadata by default) never produce rows.
//!
//! [`flatten_rows`] turns the tree into the path-annotated list that
//! tree-data grids consume.
//!
//! [`FormSchema`]: formdash_schema::FormSchema

mod builder;
mod flatten;
mod row;
mod status;

pub use builder::{AUTHORSHIP_KEY, CompareOptions, build_comparison_rows, build_comparison_rows_with};
pub use flatten::{FlatComparisonRow, flatten_rows};
pub use row::{ComparisonRow, RowKind, StatusCounts, summarize};
pub use status::{CompareStatus, classify, strict_equal};

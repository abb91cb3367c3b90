//! Deterministic mock data for grid demos.
//!
//! [`MockDataGenerator`] produces [`GridRow`]s whose `id` is the 1-based
//! generation order and whose other fields are pure functions of that id
//! (see [`fields`]). There is no randomness source and no state kept between
//! calls, so the same row count always yields identical rows.
//!
//! ```text
//!   row_count ──► RowCount (validated) ──► GridRows iterator ──► Vec<GridRow>
//!                                              │
//!                                              └─ fields::*(id) per column
//! ```

pub mod catalog;
mod error;
pub mod fields;
mod generator;
mod row;

pub use catalog::{StatusOption, status_options};
pub use error::{MockDataError, MockDataResult, ROW_COUNT_MESSAGE};
pub use generator::{GridRows, MockDataGenerator, RowCount, generate};
pub use row::GridRow;

//! Per-column value functions. Each is a pure function of the row id.

use crate::catalog::{FIRST_NAMES, LAST_NAMES};

/// Picks `list[index % list.len()]`.
///
/// # Panics
///
/// Panics if `list` is empty.
pub fn select_value<T: Copy>(list: &[T], index: u64) -> T {
    list[(index % list.len() as u64) as usize]
}

/// First name cycles every id; last name advances once per full first-name cycle.
pub fn name(index: u64) -> String {
    let first = select_value(&FIRST_NAMES, index);
    let last = select_value(&LAST_NAMES, index / FIRST_NAMES.len() as u64);
    format!("{first} {last}")
}

pub fn email(index: u64) -> String {
    format!("user{index}@example.com")
}

/// `YYYY-MM-DD` built from three independent moduli; not calendar-aware.
pub fn start_date(index: u64) -> String {
    let year = 2020 + index % 5;
    let month = index % 12 + 1;
    let day = index % 28 + 1;
    format!("{year}-{month:02}-{day:02}")
}

pub fn salary(index: u64) -> u64 {
    50_000 + (index % 10) * 10_000
}

pub fn projects(index: u64) -> u64 {
    index % 8 + 1
}

pub fn hours_logged(index: u64) -> u64 {
    120 + index % 80
}

pub fn experience(index: u64) -> u64 {
    index % 15 + 1
}

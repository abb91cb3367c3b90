//! Fixed value lists the generator cycles through.
//!
//! Order matters: a row picks `LIST[id % LIST.len()]`.

use serde::{Deserialize, Serialize};

/// Status values. The last entry is deliberately long to exercise cell wrapping.
pub const STATUSES: [&str; 6] = [
    "Active",
    "Pending",
    "Inactive",
    "Suspended",
    "Archived",
    "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor incididunt ut labore et dolore magna aliqua",
];

pub const DEPARTMENTS: [&str; 7] = [
    "Engineering",
    "Sales",
    "Marketing",
    "Support",
    "Finance",
    "HR",
    "Operations",
];

pub const LOCATIONS: [&str; 7] = [
    "New York",
    "San Francisco",
    "London",
    "Tokyo",
    "Berlin",
    "Sydney",
    "Toronto",
];

pub const ROLES: [&str; 7] = [
    "Developer",
    "Manager",
    "Designer",
    "Analyst",
    "Engineer",
    "Consultant",
    "Specialist",
];

pub const PERFORMANCES: [&str; 5] = [
    "Excellent",
    "Good",
    "Average",
    "Needs Improvement",
    "Outstanding",
];

pub const CERTIFICATIONS: [&str; 5] = [
    "Certified",
    "Not Certified",
    "In Progress",
    "Expired",
    "Advanced",
];

pub const TEAMS: [&str; 7] = [
    "Platform", "Frontend", "Backend", "DevOps", "QA", "Security", "Data",
];

/// First names. The last entry is long and ends in a space, for wrapping.
pub const FIRST_NAMES: [&str; 11] = [
    "James",
    "Mary",
    "John",
    "Patricia",
    "Robert",
    "Jennifer",
    "Michael",
    "Linda",
    "William",
    "Elizabeth",
    "Meno Sbastiano Argenti Meno Sbastiano Argenti ",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

/// An entry of the status dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOption {
    pub id: String,
    pub label: String,
}

/// Id of the long status option.
pub const LONG_STATUS_ID: &str = "lorem";

/// Dropdown options for the status columns, one per entry of [`STATUSES`].
///
/// Short statuses are keyed by their lowercase name; the long one by
/// [`LONG_STATUS_ID`].
pub fn status_options() -> Vec<StatusOption> {
    let short = STATUSES.len() - 1;
    STATUSES
        .iter()
        .enumerate()
        .map(|(i, label)| StatusOption {
            id: if i < short {
                label.to_lowercase()
            } else {
                LONG_STATUS_ID.to_string()
            },
            label: (*label).to_string(),
        })
        .collect()
}

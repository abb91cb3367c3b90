use serde::{Deserialize, Serialize};

/// One row of demo grid data.
///
/// Field names serialize in camelCase to match the grid's column ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    /// 1-based generation order.
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Status shown by the custom dropdown column.
    pub status: String,
    /// Same status, shown by the grid's built-in rich select column.
    pub status_ag_grid: String,
    pub department: String,
    pub location: String,
    pub role: String,
    /// ISO `YYYY-MM-DD`.
    pub start_date: String,
    pub salary: u64,
    pub performance: String,
    pub projects: u64,
    /// Hours logged this month.
    pub hours_logged: u64,
    pub certification: String,
    /// Years of experience.
    pub experience: u64,
    pub team: String,
}

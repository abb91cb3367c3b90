//! Row generation.

use tracing::debug;

use crate::catalog::{CERTIFICATIONS, DEPARTMENTS, LOCATIONS, PERFORMANCES, ROLES, STATUSES, TEAMS};
use crate::error::{MockDataError, MockDataResult};
use crate::fields::{self, select_value};
use crate::GridRow;

/// A validated, positive row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowCount(u64);

impl RowCount {
    /// Returns `None` for zero.
    pub const fn new(count: u64) -> Option<Self> {
        if count == 0 { None } else { Some(Self(count)) }
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for RowCount {
    type Error = MockDataError;

    fn try_from(count: u64) -> MockDataResult<Self> {
        Self::new(count).ok_or_else(MockDataError::invalid_row_count)
    }
}

impl TryFrom<i64> for RowCount {
    type Error = MockDataError;

    fn try_from(count: i64) -> MockDataResult<Self> {
        u64::try_from(count)
            .map_err(|_| MockDataError::invalid_row_count())
            .and_then(Self::try_from)
    }
}

impl TryFrom<i32> for RowCount {
    type Error = MockDataError;

    fn try_from(count: i32) -> MockDataResult<Self> {
        Self::try_from(i64::from(count))
    }
}

impl TryFrom<u32> for RowCount {
    type Error = MockDataError;

    fn try_from(count: u32) -> MockDataResult<Self> {
        Self::try_from(u64::from(count))
    }
}

impl TryFrom<usize> for RowCount {
    type Error = MockDataError;

    fn try_from(count: usize) -> MockDataResult<Self> {
        Self::try_from(count as u64)
    }
}

impl TryFrom<f64> for RowCount {
    type Error = MockDataError;

    /// Accepts only finite, integral values of at least one.
    fn try_from(count: f64) -> MockDataResult<Self> {
        if !count.is_finite() || count.fract() != 0.0 || count < 1.0 || count > u64::MAX as f64 {
            return Err(MockDataError::invalid_row_count());
        }
        Self::try_from(count as u64)
    }
}

/// Stateless generator of deterministic [`GridRow`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataGenerator;

impl MockDataGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates exactly `row_count` rows with ids `1..=row_count`.
    ///
    /// The count is validated before any row is built; zero, negative and
    /// non-integral counts fail with [`MockDataError::InvalidArgument`].
    /// Counts too large to hold in memory fail with
    /// [`MockDataError::TooManyRows`] instead of aborting.
    pub fn generate<C>(&self, row_count: C) -> MockDataResult<Vec<GridRow>>
    where
        C: TryInto<RowCount, Error = MockDataError>,
    {
        let pending = self.rows(row_count)?;
        let mut rows = Vec::new();
        rows.try_reserve_exact(pending.len())
            .map_err(|_| MockDataError::TooManyRows { rows: pending.last_id })?;
        rows.extend(pending);
        debug!(rows = rows.len(), "generated mock grid rows");
        Ok(rows)
    }

    /// Lazily yields the rows [`MockDataGenerator::generate`] would return.
    pub fn rows<C>(&self, row_count: C) -> MockDataResult<GridRows>
    where
        C: TryInto<RowCount, Error = MockDataError>,
    {
        let count = row_count.try_into()?;
        Ok(GridRows {
            next_id: 1,
            last_id: count.get(),
        })
    }

    /// Builds the row with the given id.
    pub fn row(&self, id: u64) -> GridRow {
        let status = select_value(&STATUSES, id).to_string();
        GridRow {
            id,
            name: fields::name(id),
            email: fields::email(id),
            status_ag_grid: status.clone(),
            status,
            department: select_value(&DEPARTMENTS, id).to_string(),
            location: select_value(&LOCATIONS, id).to_string(),
            role: select_value(&ROLES, id).to_string(),
            start_date: fields::start_date(id),
            salary: fields::salary(id),
            performance: select_value(&PERFORMANCES, id).to_string(),
            projects: fields::projects(id),
            hours_logged: fields::hours_logged(id),
            certification: select_value(&CERTIFICATIONS, id).to_string(),
            experience: fields::experience(id),
            team: select_value(&TEAMS, id).to_string(),
        }
    }
}

/// Generates rows with the default generator.
pub fn generate<C>(row_count: C) -> MockDataResult<Vec<GridRow>>
where
    C: TryInto<RowCount, Error = MockDataError>,
{
    MockDataGenerator.generate(row_count)
}

/// Iterator over generated rows, in id order.
#[derive(Debug, Clone)]
pub struct GridRows {
    next_id: u64,
    last_id: u64,
}

impl Iterator for GridRows {
    type Item = GridRow;

    fn next(&mut self) -> Option<GridRow> {
        if self.next_id > self.last_id {
            return None;
        }
        let row = MockDataGenerator.row(self.next_id);
        self.next_id += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next_id > self.last_id {
            0
        } else {
            (self.last_id - self.next_id).saturating_add(1)
        };
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridRows {}

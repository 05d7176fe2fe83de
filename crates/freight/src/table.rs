//! Job item table: the ordered rows of one job.

use serde::{Deserialize, Serialize};

use freightdesk_core::{DomainError, DomainResult, Entity, JobId, JobItemId};

use crate::item::{JobItem, RowEdit};
use crate::decimal::format_fixed;

/// Sums over a job's rows. Missing weights and volumes count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JobTotals {
    pub total_quantity: f64,
    pub total_weight: f64,
    pub total_volume: f64,
}

impl JobTotals {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a JobItem>) -> Self {
        rows.into_iter().fold(JobTotals::default(), |acc, row| JobTotals {
            total_quantity: acc.total_quantity + row.quantity(),
            total_weight: acc.total_weight + row.weight().unwrap_or(0.0),
            total_volume: acc.total_volume + row.volume().unwrap_or(0.0),
        })
    }

    /// Total weight (kg) at two decimals.
    pub fn display_weight(&self) -> String {
        format_fixed(self.total_weight, 2)
    }

    /// Total CBM at two decimals.
    pub fn display_volume(&self) -> String {
        format_fixed(self.total_volume, 2)
    }
}

/// Rows of a job. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobItemTable {
    job_id: JobId,
    rows: Vec<JobItem>,
}

impl Entity for JobItemTable {
    type Id = JobId;

    fn id(&self) -> &Self::Id {
        &self.job_id
    }
}

impl JobItemTable {
    /// Table with a single blank row.
    pub fn new(job_id: JobId) -> Self {
        Self {
            job_id,
            rows: vec![JobItem::new(JobItemId::new())],
        }
    }

    pub fn from_rows(job_id: JobId, rows: Vec<JobItem>) -> DomainResult<Self> {
        if rows.is_empty() {
            return Err(DomainError::validation("a job needs at least one item"));
        }
        Ok(Self { job_id, rows })
    }

    pub fn job_id(&self) -> JobId {
        self.job_id
    }

    pub fn rows(&self) -> &[JobItem] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the table holds no rows. Constructors never allow that.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a blank row and return its id.
    pub fn add_row(&mut self) -> JobItemId {
        let id = JobItemId::new();
        self.rows.push(JobItem::new(id));
        tracing::debug!(job_id = %self.job_id, item_id = %id, "job item added");
        id
    }

    /// Apply a field edit to the row at `index` and return the updated row.
    pub fn edit_row(&mut self, index: usize, edit: &RowEdit) -> DomainResult<&JobItem> {
        let job_id = self.job_id;
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| DomainError::not_found(format!("job item at index {index}")))?;

        *row = row.apply_edit(edit);
        tracing::debug!(
            %job_id,
            index,
            volume = row.volume(),
            "job item edited"
        );
        Ok(row)
    }

    /// Remove the row at `index`. The last remaining row cannot be removed.
    pub fn remove_row(&mut self, index: usize) -> DomainResult<JobItem> {
        if index >= self.rows.len() {
            return Err(DomainError::not_found(format!("job item at index {index}")));
        }
        if self.rows.len() == 1 {
            return Err(DomainError::invariant("a job needs at least one item"));
        }
        let removed = self.rows.remove(index);
        tracing::debug!(job_id = %self.job_id, index, "job item removed");
        Ok(removed)
    }

    pub fn totals(&self) -> JobTotals {
        JobTotals::from_rows(&self.rows)
    }
}

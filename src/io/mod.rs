//! Record sources feeding the dashboard.
//!
//! Loading is the only fallible boundary before anything is drawn; every
//! source reports failure as [`DashboardError::Load`](crate::error::DashboardError::Load).

#[cfg(feature = "csv-source")]
mod csv_source;

#[cfg(feature = "csv-source")]
pub use csv_source::CsvRecordSource;

use crate::core::RawRecord;
use crate::error::DashboardResult;

/// Produces raw survey rows keyed by column header.
pub trait RecordSource {
    fn load(&mut self) -> DashboardResult<Vec<RawRecord>>;
}

/// Rows held in memory, mostly for hosts that parse input themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRecordSource {
    rows: Vec<RawRecord>,
}

impl MemoryRecordSource {
    #[must_use]
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[RawRecord] {
        &self.rows
    }
}

impl RecordSource for MemoryRecordSource {
    fn load(&mut self) -> DashboardResult<Vec<RawRecord>> {
        Ok(self.rows.clone())
    }
}

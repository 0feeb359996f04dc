use indexmap::IndexSet;
use tracing::debug;

use super::record::{Dimension, RawRecord, SurveyRecord};

/// Records whose tempo is at or above this value are treated as entry errors.
pub const BPM_EXCLUSION_THRESHOLD: f64 = 1000.0;

/// Filtered, typed dataset shared read-only by every chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<SurveyRecord>,
    excluded_count: usize,
}

impl RecordStore {
    /// Types raw rows and drops implausible tempo outliers.
    pub fn from_raw(rows: &[RawRecord]) -> Self {
        Self::from_records(rows.iter().map(SurveyRecord::from_raw).collect())
    }

    /// Applies the tempo filter to already-typed records.
    ///
    /// A record with a numeric BPM `>= BPM_EXCLUSION_THRESHOLD` is dropped. A
    /// record without a numeric BPM is kept; aggregates that need BPM apply
    /// their own exclusion. Non-numeric text such as `"n/a"` counts as absent,
    /// so it is kept like a blank cell rather than dropped as an outlier.
    #[must_use]
    pub fn from_records(records: Vec<SurveyRecord>) -> Self {
        let original_count = records.len();
        let records: Vec<SurveyRecord> = records
            .into_iter()
            .filter(|record| {
                record
                    .bpm()
                    .is_none_or(|bpm| bpm < BPM_EXCLUSION_THRESHOLD)
            })
            .collect();
        let excluded_count = original_count - records.len();
        debug!(
            original_count,
            kept_count = records.len(),
            excluded_count,
            "built record store"
        );
        Self {
            records,
            excluded_count,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows removed by the tempo filter.
    #[must_use]
    pub fn excluded_count(&self) -> usize {
        self.excluded_count
    }

    /// Distinct non-empty favorite genres in first-seen order.
    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        let genres: IndexSet<&str> = self
            .records
            .iter()
            .filter_map(SurveyRecord::favorite_genre)
            .collect();
        genres.into_iter().map(str::to_owned).collect()
    }

    /// Largest numeric value of `dimension` across the whole store.
    #[must_use]
    pub fn dimension_max(&self, dimension: Dimension) -> Option<f64> {
        self.records
            .iter()
            .filter_map(|record| record.dimension(dimension))
            .fold(None, |max, value| match max {
                Some(current) if current >= value => Some(current),
                _ => Some(value),
            })
    }
}
